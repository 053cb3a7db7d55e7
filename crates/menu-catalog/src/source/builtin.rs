//! Built-in Menu
//!
//! The house menu used when no menu file is configured.

use rust_decimal_macros::dec;

use super::MenuSource;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::MenuItem;

/// Static five-dish menu
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinMenu;

impl BuiltinMenu {
    fn dishes() -> Vec<(&'static str, MenuItem)> {
        vec![
            (
                "Margherita Pizza",
                MenuItem::new(dec!(12.99), "Italian", 800, 0, ["mozzarella", "tomato", "basil"]),
            ),
            (
                "Chicken Tikka",
                MenuItem::new(dec!(15.99), "Indian", 650, 3, ["chicken", "yogurt", "spices"]),
            ),
            (
                "Sushi Roll",
                MenuItem::new(dec!(18.99), "Japanese", 450, 1, ["rice", "salmon", "nori"]),
            ),
            (
                "Pad Thai",
                MenuItem::new(dec!(13.99), "Thai", 700, 2, ["noodles", "shrimp", "peanuts"]),
            ),
            (
                "Caesar Salad",
                MenuItem::new(dec!(10.99), "American", 350, 0, ["lettuce", "parmesan", "croutons"]),
            ),
        ]
    }
}

impl MenuSource for BuiltinMenu {
    fn load(&self) -> Result<Catalog<MenuItem>> {
        Ok(Catalog::from_entries(Self::dishes())?)
    }

    fn name(&self) -> &str {
        "builtin"
    }
}
