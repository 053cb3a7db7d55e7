//! DateTime Tool

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

/// Returns the current UTC date and time
pub struct DateTimeTool;

impl DateTimeTool {
    fn render(now: DateTime<Utc>, format: &str) -> String {
        match format {
            "iso" => now.to_rfc3339(),
            "unix" => now.timestamp().to_string(),
            _ => now.format("%A, %B %d, %Y at %H:%M:%S UTC").to_string(),
        }
    }
}

#[async_trait]
impl Tool for DateTimeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "datetime".into(),
            description: "Get the current date and time (UTC)".into(),
            parameters: vec![ParameterSchema::new(
                "format",
                "string",
                "Output format: 'iso', 'human', or 'unix'",
            )
            .with_default(serde_json::json!("human"))
            .with_enum(vec![
                serde_json::json!("iso"),
                serde_json::json!("human"),
                serde_json::json!("unix"),
            ])],
            category: Some("time".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let format = call.str_arg("format").unwrap_or("human");
        let now = Utc::now();

        Ok(ToolResult::success("datetime", Self::render(now, format))
            .with_data(serde_json::json!({ "unix": now.timestamp() })))
    }
}
