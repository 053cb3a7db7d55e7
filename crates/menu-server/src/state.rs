//! Application State

use std::sync::Arc;

use anyhow::Context;

use agent_core::builtin::{CalculatorTool, DateTimeTool, FileReadTool, FileWriteTool};
use agent_core::ToolRegistry;
use menu_catalog::source::{BuiltinMenu, JsonFileMenu, MenuSource};
use menu_catalog::tools::{MenuListTool, MenuLookupTool};
use menu_catalog::{Catalog, MenuItem};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Tool registry with all available tools
    pub tools: Arc<ToolRegistry>,

    /// Menu catalog, read-only after startup
    pub menu: Arc<Catalog<MenuItem>>,
}

impl AppState {
    /// Load the configured menu and register every tool
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let source: Box<dyn MenuSource> = match &config.menu_path {
            Some(path) => Box::new(JsonFileMenu::new(path)),
            None => Box::new(BuiltinMenu),
        };

        let menu = source
            .load()
            .with_context(|| format!("Failed to load menu from {} source", source.name()))?;
        tracing::info!(source = source.name(), dishes = menu.len(), "Menu loaded");

        Ok(Self::with_menu(menu, config))
    }

    pub fn with_menu(menu: Catalog<MenuItem>, config: &ServerConfig) -> Self {
        let menu = Arc::new(menu);
        let mut tools = ToolRegistry::new();

        // General tools
        tools.register(CalculatorTool);
        tools.register(DateTimeTool);
        if config.enable_file_tools {
            tools.register(FileReadTool::new(&config.file_tool_root));
            tools.register(FileWriteTool::new(&config.file_tool_root));
        }

        // Menu tools
        tools.register(MenuLookupTool::new(menu.clone()));
        tools.register(MenuListTool::new(menu.clone()));

        Self {
            tools: Arc::new(tools),
            menu,
        }
    }
}
