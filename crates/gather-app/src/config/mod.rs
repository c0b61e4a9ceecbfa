//! Site configuration
//!
//! Supports:
//! - `site.toml` - endpoint, fallback contact, breakpoint and reveal settings
//!
//! The website embeds its `site.toml` at build time; native hosts and tests
//! load it from a directory with [`load_site_config`].

pub mod settings;
pub mod types;

pub use settings::{load_site_config, parse_site_config, read_site_config, CONFIG_FILENAME};
pub use types::*;
