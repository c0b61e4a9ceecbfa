//! Configuration types for the site behavior layer
//!
//! Defines:
//! - `SiteConfig` - Endpoint, contact and UI settings
//! - `RevealSettings` - Scroll-reveal observer options

use serde::{Deserialize, Serialize};
use url::Url;

use gather_core::prelude::*;

/// Deployed form-processing endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbwUH7jthn3EY6KDeBh8dcATLIEG0f2hxWClqBW8SwxoAge7t4xf-p1s5AzYOE0ns04/exec";
pub const DEFAULT_FALLBACK_EMAIL: &str = "info@gathercateringandevents.com";
pub const DEFAULT_DESKTOP_MIN_WIDTH: u32 = 768;

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Remote endpoint receiving inquiry POSTs
    pub endpoint_url: String,

    /// Contact email offered when the form cannot be used
    pub fallback_email: String,

    /// Viewport width (logical px) at which the desktop layout starts
    pub desktop_min_width: u32,

    /// Directories whose pages need the `../` link prefix
    pub nested_sections: Vec<String>,

    /// Submit control label while idle
    pub submit_label: String,

    /// Submit control label while a request is in flight
    pub sending_label: String,

    /// Log level for the browser console (`error`..`trace`)
    pub log_level: String,

    pub reveal: RevealSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            fallback_email: DEFAULT_FALLBACK_EMAIL.to_string(),
            desktop_min_width: DEFAULT_DESKTOP_MIN_WIDTH,
            nested_sections: vec!["services".to_string()],
            submit_label: "Send Inquiry".to_string(),
            sending_label: "Sending...".to_string(),
            log_level: "info".to_string(),
            reveal: RevealSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Whether the endpoint looks reachable: an `https` URL with a host.
    pub fn is_configured(&self) -> bool {
        match Url::parse(self.endpoint_url.trim()) {
            Ok(url) => url.scheme() == "https" && url.host_str().is_some_and(|h| !h.is_empty()),
            Err(_) => false,
        }
    }

    /// Media query matching the desktop layout
    pub fn desktop_media_query(&self) -> String {
        format!("(min-width: {}px)", self.desktop_min_width)
    }

    pub fn success_message(&self) -> String {
        "Thank you! Your inquiry has been sent and a confirmation email is on its way. \
         Our team will follow up within 24\u{2013}48 business hours."
            .to_string()
    }

    pub fn transport_error_message(&self) -> String {
        format!(
            "Something went wrong. Please try again or email us directly at {}",
            self.fallback_email
        )
    }

    pub fn not_configured_message(&self) -> String {
        format!(
            "The inquiry form is not yet configured. Please email us directly at {}",
            self.fallback_email
        )
    }

    /// Reject settings the page cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.desktop_min_width == 0 {
            return Err(Error::config_invalid("desktop_min_width must be positive"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::config_invalid(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.submit_label.trim().is_empty() {
            return Err(Error::config_invalid("submit_label must not be empty"));
        }
        Ok(())
    }
}

/// Scroll-reveal observer options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport root
    pub root_margin: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -30px 0px".to_string(),
        }
    }
}
