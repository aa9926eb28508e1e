//! CLI command handlers. Each command is in its own file.

mod decode;
mod encode;
mod get;

pub use decode::run_decode;
pub use encode::run_encode;
pub use get::run_get;
