/// The canonical storefront categories, in display priority order.
///
/// Products whose category matches one of these (ignoring case) are grouped
/// under the canonical spelling, and the listing draws from these groups first.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Electronics",
    "Fashion",
    "Home",
    "Appliances",
    "Mobiles",
    "Beauty",
    "Toys",
    "Grocery",
];

/// The group key for products without a usable category.
pub const OTHERS: &str = "Others";

/// The default canonical categories as owned strings, e.g. for configuration defaults.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
