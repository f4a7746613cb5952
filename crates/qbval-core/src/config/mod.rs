pub mod loader;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::{ClassNameConfig, EditorConfig, InputConfig, OperatorConfig};
