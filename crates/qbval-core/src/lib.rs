pub mod config;
pub mod editor;
pub mod formatter;
pub mod outcome;
pub mod resolver;
pub mod sanitizer;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, ConfigLoader, EditorConfig};
pub use editor::{Evaluation, ValueEditor};
pub use outcome::{ChangeHandler, ControlAttrs, Edit, RadioOption, RenderOutcome, SelectorSpec};
pub use resolver::{resolve, resolve_with};
pub use sanitizer::{needs_reset, Sanitizer};

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
