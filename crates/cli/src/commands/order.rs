//! Order commands: place, list, show.
//!
//! # Usage
//!
//! ```bash
//! qn order place 64f1c2a9b3d4e5f601234567 -q 2 -a "12 Lý Thường Kiệt, Hà Nội"
//! qn order list
//! qn order show 64f1c2a9b3d4e5f601234568
//! ```

use quanngon_api::Api;
use quanngon_api::orders::{OrderDraft, OrderDraftError};
use quanngon_core::{MenuItemId, OrderId};
use quanngon_shell::{Severity, SessionShell};

use super::{CommandError, localized};

const LOAD_FALLBACK: &str = "Không thể tải dữ liệu. Vui lòng thử lại!";
const PLACE_FALLBACK: &str = "Không thể đặt món. Vui lòng thử lại!";

/// Order one dish for delivery, confirmed on submission.
#[allow(clippy::print_stdout)]
pub async fn place(
    shell: &SessionShell,
    menu_id: &str,
    quantity: u32,
    address: &str,
) -> Result<(), CommandError> {
    let Some(profile) = shell.resume().await else {
        return Err(CommandError::Message(
            "Vui lòng đăng nhập để đặt món!".to_string(),
        ));
    };
    if address.trim().is_empty() {
        return Err(CommandError::Message(
            "Vui lòng nhập địa chỉ giao hàng!".to_string(),
        ));
    }

    let api = shell.api();
    let item = api
        .menu()
        .get(&MenuItemId::from(menu_id))
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    let mut draft = OrderDraft::new();
    if let Err(e) = draft.add(&item, quantity) {
        return Err(match e {
            OrderDraftError::Unavailable(_) => {
                CommandError::Message(format!("{} đã hết hàng!", item.name))
            }
            other => other.into(),
        });
    }
    let body = draft.build(profile.id, Some(address.trim().to_string()))?;

    let order = api
        .orders()
        .create(&body)
        .await
        .map_err(|e| localized(&e, PLACE_FALLBACK))?;

    println!(
        "{} Đặt món thành công! Đơn hàng của bạn đang được xử lý.",
        Severity::Success.symbol()
    );
    println!("Mã đơn:     {}", order.id);
    println!("Tổng cộng:  {}", order.total);
    println!("Trạng thái: {}", order.status.label_vi());
    Ok(())
}

/// Print the caller's orders, newest last (backend order).
#[allow(clippy::print_stdout)]
pub async fn list(api: &Api) -> Result<(), CommandError> {
    let orders = api
        .orders()
        .list()
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    if orders.is_empty() {
        println!("Chưa có đơn hàng nào.");
        return Ok(());
    }

    println!(
        "{:<26} {:<17} {:>12}  {:<12} MÓN",
        "ID", "NGÀY ĐẶT", "TỔNG", "TRẠNG THÁI"
    );
    for order in &orders {
        let lines: Vec<String> = order
            .items
            .iter()
            .map(|line| format!("{} x{}", line.menu.name, line.quantity))
            .collect();
        println!(
            "{:<26} {:<17} {:>12}  {:<12} {}",
            order.id,
            order.created_at.format("%d/%m/%Y %H:%M"),
            order.total,
            order.status.label_vi(),
            lines.join(", ")
        );
    }
    Ok(())
}

/// Print one order in full.
#[allow(clippy::print_stdout)]
pub async fn show(api: &Api, id: &str) -> Result<(), CommandError> {
    let order = api
        .orders()
        .get(&OrderId::from(id))
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!("Mã đơn:     {}", order.id);
    println!("Khách hàng: {} <{}>", order.user.name, order.user.email);
    println!("Ngày đặt:   {}", order.created_at.format("%d/%m/%Y %H:%M"));
    println!("Trạng thái: {}", order.status.label_vi());
    if let Some(address) = &order.delivery_address {
        println!("Giao đến:   {address}");
    }
    println!("Món:");
    for line in &order.items {
        println!(
            "  {} x{}  ({})",
            line.menu.name, line.quantity, line.menu.price
        );
    }
    println!("Tổng cộng:  {}", order.total);
    Ok(())
}
