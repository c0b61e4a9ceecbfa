//! Gather site behavior
//!
//! Facade over the workspace crates:
//! - [`core`]: link tables, shared header/footer markup and inquiry data
//! - [`app`]: the page controller (navigation, reveal, inquiry form)
//!
//! The browser host lives in the separate `website/` crate.

pub use gather_app as app;
pub use gather_core as core;

pub use gather_app::{Controller, Dom, Message, SiteConfig, TransportOutcome, UpdateAction};
pub use gather_core::{Error, Result};
