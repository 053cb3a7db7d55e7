//! Menu Listing Tool

use std::collections::BTreeSet;
use std::sync::Arc;

use agent_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::model::MenuItem;

const TOOL_NAME: &str = "list_menu";

/// Tool for listing dishes, optionally filtered by cuisine
pub struct MenuListTool {
    menu: Arc<Catalog<MenuItem>>,
}

impl MenuListTool {
    pub fn new(menu: Arc<Catalog<MenuItem>>) -> Self {
        Self { menu }
    }

    fn cuisines(&self) -> BTreeSet<&str> {
        self.menu.iter().map(|(_, item)| item.cuisine.as_str()).collect()
    }
}

#[async_trait]
impl Tool for MenuListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: TOOL_NAME.into(),
            description: "List the dishes on the menu with their prices.".into(),
            parameters: vec![ParameterSchema::new(
                "cuisine",
                "string",
                "Only list dishes of this cuisine (e.g., 'Thai')",
            )],
            category: Some("menu".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let cuisine = call
            .str_arg("cuisine")
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let dishes: Vec<(&str, &MenuItem)> = self
            .menu
            .iter()
            .filter(|(_, item)| cuisine.is_none_or(|c| item.cuisine.eq_ignore_ascii_case(c)))
            .collect();

        if dishes.is_empty() {
            let cuisines: Vec<&str> = self.cuisines().into_iter().collect();
            let output = match cuisine {
                Some(c) => format!(
                    "No dishes found for cuisine '{}'. Available cuisines: {}",
                    c,
                    cuisines.join(", ")
                ),
                None => "The menu is empty.".to_string(),
            };
            return Ok(ToolResult::failure(TOOL_NAME, output)
                .with_data(serde_json::json!({ "dishes": [], "cuisines": cuisines })));
        }

        let mut output = String::from("Menu:\n");
        for (name, item) in &dishes {
            output.push_str(&format!("  {} - ${:.2} ({})\n", name, item.price, item.cuisine));
        }

        let names: Vec<&str> = dishes.iter().map(|(name, _)| *name).collect();
        Ok(ToolResult::success(TOOL_NAME, output.trim_end())
            .with_data(serde_json::json!({ "dishes": names })))
    }
}
