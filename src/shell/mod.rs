//! External tool execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandResult, SystemRunner, ToolCommand, ToolRunner};
pub use mock::MockRunner;
pub use platform::{is_elevated, is_executable, parse_system_path, resolve_tool_path};
