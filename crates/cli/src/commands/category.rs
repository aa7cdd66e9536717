//! Category commands.
//!
//! # Usage
//!
//! ```bash
//! qn category list
//! ```

use quanngon_api::Api;

use super::{CommandError, localized};

const LOAD_FALLBACK: &str = "Không thể tải dữ liệu. Vui lòng thử lại!";

/// Print every category.
#[allow(clippy::print_stdout)]
pub async fn list(api: &Api) -> Result<(), CommandError> {
    let categories = api
        .categories()
        .list()
        .await
        .map_err(|e| localized(&e, LOAD_FALLBACK))?;

    if categories.is_empty() {
        println!("Chưa có danh mục nào.");
        return Ok(());
    }

    println!("{:<26} {:<20} MÔ TẢ", "ID", "DANH MỤC");
    for category in &categories {
        println!(
            "{:<26} {:<20} {}",
            category.id,
            category.name,
            category.description.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
