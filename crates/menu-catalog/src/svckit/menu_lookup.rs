//! Menu Lookup Tool
//!
//! Resolves a dish name with partial matching and returns its details.

use std::sync::Arc;

use agent_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::json;

use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::model::MenuItem;

const TOOL_NAME: &str = "get_menu_item";

/// Caller-facing message for a failed dish lookup
pub fn dish_failure_message(err: &ResolveError) -> String {
    match err {
        ResolveError::AmbiguousMatch { query, candidates } => format!(
            "Multiple dishes found matching '{}': {}. Please be more specific.",
            query,
            candidates.join(", ")
        ),
        ResolveError::NotFound { query, available } => format!(
            "Dish '{}' not found in menu. Available dishes: {}",
            query,
            available.join(", ")
        ),
    }
}

/// Structured form of a failed lookup, for `ToolResult::data`
pub fn dish_failure_data(err: &ResolveError) -> serde_json::Value {
    match err {
        ResolveError::AmbiguousMatch { query, candidates } => json!({
            "error": err.code(),
            "query": query,
            "candidates": candidates,
        }),
        ResolveError::NotFound { query, available } => json!({
            "error": err.code(),
            "query": query,
            "available": available,
        }),
    }
}

/// Tool for looking up a single dish
pub struct MenuLookupTool {
    menu: Arc<Catalog<MenuItem>>,
}

impl MenuLookupTool {
    pub fn new(menu: Arc<Catalog<MenuItem>>) -> Self {
        Self { menu }
    }
}

#[async_trait]
impl Tool for MenuLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: TOOL_NAME.into(),
            description: "Get menu item details for a dish name. Supports partial matching \
                          (e.g., 'pizza' will find 'Margherita Pizza')."
                .into(),
            parameters: vec![ParameterSchema::new(
                "dish_name",
                "string",
                "Full or partial dish name",
            )
            .required()],
            category: Some("menu".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let dish_name = call.require_str("dish_name")?;

        match self.menu.resolve(dish_name) {
            Ok(found) => {
                let data = json!({
                    "name": found.name,
                    "match": found.tier,
                    "item": serde_json::to_value(found.entry)?,
                });
                Ok(ToolResult::success(TOOL_NAME, found.entry.summary(found.name)).with_data(data))
            }
            Err(err) => Ok(ToolResult::failure(TOOL_NAME, dish_failure_message(&err))
                .with_data(dish_failure_data(&err))),
        }
    }
}
