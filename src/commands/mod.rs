//! CLI command implementations.

mod create;
mod delete;
mod webhook;

pub use create::create;
pub use delete::delete;
pub use webhook::{summarize, webhook};
