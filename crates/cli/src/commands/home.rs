//! The landing overview: featured dishes plus public counters.
//!
//! # Usage
//!
//! ```bash
//! qn home
//! ```
//!
//! Both halves degrade to empty output on backend failure instead of
//! erroring, so this command always exits 0.

use quanngon_api::Api;
use quanngon_api::home::DEFAULT_FEATURED_LIMIT;

/// Print the homepage content.
#[allow(clippy::print_stdout)]
pub async fn overview(api: &Api) {
    let home = api.home();
    let featured = home.featured_menus(DEFAULT_FEATURED_LIMIT).await;
    let stats = home.stats().await;

    println!("Quán Ngon - Đặt món yêu thích dễ dàng");
    println!();

    if featured.is_empty() {
        println!("Chưa có món ăn nổi bật.");
    } else {
        println!("Món ăn nổi bật:");
        for item in &featured {
            println!("  {:<24} {:>12}  ({})", item.name, item.price, item.category.name);
            if let Some(description) = &item.description {
                println!("    {description}");
            }
        }
    }

    println!();
    println!("Tổng số món ăn:   {}", stats.total_menus);
    println!("Tổng số danh mục: {}", stats.total_categories);
    println!("Tổng số đánh giá: {}", stats.total_reviews);
}
