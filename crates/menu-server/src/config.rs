//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded). Never written back.

use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,

    /// JSON menu file (`MENU_PATH`); the built-in menu when unset
    pub menu_path: Option<PathBuf>,

    /// Directory the file tools are confined to (`FILE_TOOL_ROOT`)
    pub file_tool_root: PathBuf,

    /// Register `file_read` / `file_write` (`ENABLE_FILE_TOOLS`); off unless
    /// explicitly enabled, since the tool endpoint is unauthenticated
    pub enable_file_tools: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            menu_path: None,
            file_tool_root: PathBuf::from("."),
            enable_file_tools: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            menu_path: non_empty("MENU_PATH").map(PathBuf::from),
            file_tool_root: non_empty("FILE_TOOL_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.file_tool_root),
            enable_file_tools: non_empty("ENABLE_FILE_TOOLS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enable_file_tools),
        }
    }
}

/// Only an explicit yes turns a flag on
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
