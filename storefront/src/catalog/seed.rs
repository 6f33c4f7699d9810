//! 内置菜单 (默认种子数据)

use shared::MenuEntry;

/// The fixed menu shipped with the storefront
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            "Biryani",
            "Flavorful rice dish with spices and meat.",
            800.0,
            "/biryani.jpg",
        ),
        MenuEntry::new(
            "Chinese Rice",
            "Savory fried rice with vegetables and egg.",
            600.0,
            "/rice.webp",
        ),
        MenuEntry::new(
            "Manchurian",
            "Tangy chicken in a flavorful sauce.",
            700.0,
            "/manchurian.webp",
        ),
        MenuEntry::new(
            "Gulab Jamun",
            "Sweet South Asian dessert.",
            400.0,
            "/gulabjamun.webp",
        ),
        MenuEntry::new(
            "Prawn Karhai",
            "Spicy seafood specialty.",
            1000.0,
            "/prawnkarhai.jpg",
        ),
    ]
}
