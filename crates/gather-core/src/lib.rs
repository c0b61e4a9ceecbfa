//! # gather-core - Core Domain Types
//!
//! Foundation crate for the Gather website behavior layer. Provides the static
//! navigation link model, header/footer markup rendering, the inquiry form
//! field model with its validators and request payload, and error handling.
//!
//! This crate has **zero internal dependencies** and no notion of a DOM; the
//! state machine that drives the page lives in `gather-app`.
//!
//! ## Public API
//!
//! ### Links (`links`)
//! - [`NavLink`], [`SERVICE_LINKS`], [`PAGE_LINKS`] - Immutable link tables
//! - [`PathPrefix`] - Ascend prefix derived from the current location
//! - [`is_active_href()`] - Active-link matching against the current path
//!
//! ### Markup (`markup`)
//! - [`header_html()`], [`footer_html()`] - Shared fragments for injection
//!
//! ### Inquiry (`inquiry`)
//! - [`InquiryField`] - Named form inputs and their validators
//! - [`InquiryValues`] - Raw values read at submit time
//! - [`InquiryPayload`] - JSON body of the outbound request
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod error;
pub mod inquiry;
pub mod links;
pub mod markup;
pub mod prelude;

pub use error::{Error, Result, ResultExt};
pub use inquiry::{is_valid_email, InquiryField, InquiryPayload, InquiryValues};
pub use links::{
    canonical_href, footer_links, is_active_href, NavLink, PathPrefix, PAGE_LINKS, SERVICE_LINKS,
};
pub use markup::{current_year, escape_html, footer_html, header_html, PARTNER_LINKS};
