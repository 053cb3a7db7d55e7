//! # agent-core
//!
//! Provider-agnostic tool system for agents.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  caller (agent framework, HTTP server, tests)            │
//! │        │ ToolCall                         ▲ ToolResult   │
//! │        ▼                                  │              │
//! │  ┌──────────────┐  validate  ┌──────────────────────┐    │
//! │  │ ToolRegistry │──────────▶│  dyn Tool (built-in  │    │
//! │  │              │  execute   │  or domain-specific) │    │
//! │  └──────────────┘            └──────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain crates implement [`Tool`] and register into a [`ToolRegistry`];
//! the registry is the only thing a front end needs to hold.

pub mod builtin;
pub mod error;
pub mod tool;

pub use error::{AgentError, Result};
pub use tool::{ParameterSchema, Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
