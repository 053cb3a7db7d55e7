//! Domain Models
//!
//! Menu records served by the lookup tools. Uses `rust_decimal` for prices -
//! never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Hottest allowed spiciness level
pub const MAX_SPICY_LEVEL: u8 = 5;

/// A dish on the menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Price in USD
    pub price: Decimal,

    /// Cuisine type (e.g., "Italian", "Thai")
    pub cuisine: String,

    /// Calorie count
    pub calories: u32,

    /// Spiciness level 0-5
    pub spicy_level: u8,

    /// Main ingredients
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl MenuItem {
    pub fn new<I, S>(
        price: Decimal,
        cuisine: impl Into<String>,
        calories: u32,
        spicy_level: u8,
        ingredients: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            price,
            cuisine: cuisine.into(),
            calories,
            spicy_level,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the record is usable; `dish` names it in the error
    pub fn validate(&self, dish: &str) -> Result<()> {
        let invalid = |reason: String| MenuError::InvalidItem {
            dish: dish.to_string(),
            reason,
        };

        if self.price <= Decimal::ZERO {
            return Err(invalid(format!("price must be positive, got {}", self.price)));
        }
        if self.spicy_level > MAX_SPICY_LEVEL {
            return Err(invalid(format!(
                "spicy_level must be 0-{}, got {}",
                MAX_SPICY_LEVEL, self.spicy_level
            )));
        }
        if self.cuisine.trim().is_empty() {
            return Err(invalid("cuisine must not be empty".into()));
        }
        Ok(())
    }

    /// One-line description for tool output
    pub fn summary(&self, name: &str) -> String {
        let mut line = format!(
            "{}: ${:.2} | {} | {} kcal | spicy {}/{}",
            name, self.price, self.cuisine, self.calories, self.spicy_level, MAX_SPICY_LEVEL
        );
        if !self.ingredients.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.ingredients.join(", "));
        }
        line
    }
}
