//! Admin console commands. Every call here needs an `adm` account; a
//! customer token gets the backend's 403 message verbatim.
//!
//! # Usage
//!
//! ```bash
//! qn admin stats
//! qn admin recent users -n 5
//! qn admin recent orders
//! qn admin recent menus
//! ```

use quanngon_api::Api;
use quanngon_core::Role;

use super::{CommandError, localized};

const LOAD_FALLBACK: &str = "Không thể tải dữ liệu. Vui lòng thử lại!";

fn role_vi(role: Role) -> &'static str {
    if role.is_admin() {
        "quản trị viên"
    } else {
        "khách hàng"
    }
}

/// Print the four collection counts the dashboard cards show.
#[allow(clippy::print_stdout)]
pub async fn stats(api: &Api) -> Result<(), CommandError> {
    let stats = api
        .dashboard()
        .stats()
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!("Tổng số người dùng: {}", stats.total_users);
    println!("Tổng số món ăn:     {}", stats.total_menus);
    println!("Tổng số danh mục:   {}", stats.total_categories);
    println!("Tổng số đơn hàng:   {}", stats.total_orders);
    Ok(())
}

/// Print the newest accounts, most recent first.
#[allow(clippy::print_stdout)]
pub async fn recent_users(api: &Api, limit: usize) -> Result<(), CommandError> {
    let users = api
        .dashboard()
        .recent_users(limit)
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!("{:<17} {:<20} {:<28} VAI TRÒ", "NGÀY TẠO", "TÊN", "EMAIL");
    for user in &users {
        println!(
            "{:<17} {:<20} {:<28} {}",
            user.created_at.format("%d/%m/%Y %H:%M"),
            user.name,
            user.email,
            role_vi(user.role)
        );
    }
    Ok(())
}

/// Print the newest orders, most recent first.
#[allow(clippy::print_stdout)]
pub async fn recent_orders(api: &Api, limit: usize) -> Result<(), CommandError> {
    let orders = api
        .dashboard()
        .recent_orders(limit)
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!(
        "{:<17} {:<20} {:>12}  TRẠNG THÁI",
        "NGÀY ĐẶT", "KHÁCH HÀNG", "TỔNG"
    );
    for order in &orders {
        println!(
            "{:<17} {:<20} {:>12}  {}",
            order.created_at.format("%d/%m/%Y %H:%M"),
            order.user.name,
            order.total,
            order.status.label_vi()
        );
    }
    Ok(())
}

/// Print the newest dishes, most recent first.
#[allow(clippy::print_stdout)]
pub async fn recent_menus(api: &Api, limit: usize) -> Result<(), CommandError> {
    let items = api
        .dashboard()
        .recent_menus(limit)
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!("{:<17} {:>12}  MÓN ĂN", "NGÀY TẠO", "GIÁ");
    for item in &items {
        let marker = if item.available { "" } else { " (Hết hàng)" };
        println!(
            "{:<17} {:>12}  {}{marker}",
            item.created_at.format("%d/%m/%Y %H:%M"),
            item.price,
            item.name
        );
    }
    Ok(())
}
