mod loader;
mod types;

pub use loader::{ConfigError, MIN_WIDE_BREAKPOINT};
pub use types::{Config, LoggingConfig, UiConfig};
