//! Built-in Tools
//!
//! General-purpose tools that any agent deployment can register alongside
//! its domain tools.

mod calculator;
mod datetime;
mod file_io;

pub use calculator::{evaluate, CalculatorTool, ExprError};
pub use datetime::DateTimeTool;
pub use file_io::{sandboxed_path, FileReadTool, FileWriteTool};
