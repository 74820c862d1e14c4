//! Column names recognised in the store sales export.

/// Store name. Exports from the point-of-sale tool write `shopname`; hand-made
/// sheets tend to use `shop name`.
pub const SHOP_NAME: [&str; 2] = ["shopname", "shop name"];
pub const TOTAL_SALES: &str = "Total Sales";
pub const MANAGER_EMAIL: &str = "Store manager id";
pub const PRODUCT_1: &str = "Product 1 Sales";
pub const PRODUCT_2: &str = "Product 2 Sales";
pub const PRODUCT_3: &str = "Product 3 Sales";
pub const OTHER_PRODUCT: &str = "Other Product";
pub const FEMALE_BUYERS: &str = "Female buyers";
pub const DISCOUNT_OFFERED: &str = "Discount offered";
