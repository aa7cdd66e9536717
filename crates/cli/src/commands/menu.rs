//! Menu browsing commands.
//!
//! # Usage
//!
//! ```bash
//! qn menu list
//! qn menu list --category 64f1c2a9b3d4e5f601234567
//! qn menu show 64f1c2a9b3d4e5f601234567
//! ```

use quanngon_api::Api;
use quanngon_core::MenuItemId;

use super::{CommandError, localized};

const LOAD_FALLBACK: &str = "Không thể tải dữ liệu. Vui lòng thử lại!";

/// Print the menu, optionally narrowed to one category.
#[allow(clippy::print_stdout)]
pub async fn list(api: &Api, category: Option<&str>) -> Result<(), CommandError> {
    let mut items = api
        .menu()
        .list()
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    if let Some(category) = category {
        items.retain(|item| item.category.id.as_str() == category);
    }

    if items.is_empty() {
        println!("Không có món ăn nào.");
        return Ok(());
    }

    println!("{:<26} {:>12}  {:<16} MÓN ĂN", "ID", "GIÁ", "DANH MỤC");
    for item in &items {
        let marker = if item.available { "" } else { " (Hết hàng)" };
        println!(
            "{:<26} {:>12}  {:<16} {}{marker}",
            item.id, item.price, item.category.name, item.name
        );
    }
    Ok(())
}

/// Print one dish in full.
#[allow(clippy::print_stdout)]
pub async fn show(api: &Api, id: &str) -> Result<(), CommandError> {
    let item = api
        .menu()
        .get(&MenuItemId::from(id))
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    println!("Món:        {}", item.name);
    println!("Danh mục:   {}", item.category.name);
    println!("Giá:        {}", item.price);
    if let Some(description) = &item.description {
        println!("Mô tả:      {description}");
    }
    println!(
        "Tình trạng: {}",
        if item.available {
            "Còn hàng"
        } else {
            "Hết hàng"
        }
    );
    Ok(())
}
