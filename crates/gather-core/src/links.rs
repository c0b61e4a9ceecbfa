//! Static navigation link model and location-relative path handling
//!
//! The header dropdown, header page links and footer link list are all
//! rendered from [`SERVICE_LINKS`] and [`PAGE_LINKS`]. Hrefs are stored
//! relative to the site root; pages living in a nested section directory
//! (e.g. `/services/`) need an ascend prefix to reach root-relative targets.

use serde::Serialize;

/// A single navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    /// Path relative to the site root
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Service pages, shown in the "Services" dropdown and the footer
pub const SERVICE_LINKS: &[NavLink] = &[
    NavLink::new("Full Planning", "services/full-planning.html"),
    NavLink::new("Day-Of Coordinating", "services/day-of-coordinating.html"),
    NavLink::new("Mobile Bartending", "services/mobile-bartending.html"),
    NavLink::new("Catering", "services/catering.html"),
    NavLink::new("Catering Staffing", "services/catering-staffing.html"),
];

/// Top-level static pages
pub const PAGE_LINKS: &[NavLink] = &[
    NavLink::new("About Us", "about.html"),
    NavLink::new("Testimonials", "testimonials.html"),
    NavLink::new("Policies", "policies.html"),
];

/// Root-relative paths used outside the link tables
pub const HOME_HREF: &str = "index.html";
pub const INQUIRY_HREF: &str = "inquiry.html";
pub const LOGO_SRC: &str = "images/logos/sm/Gather.png";

const ASCEND: &str = "../";

/// Prefix prepended to root-relative hrefs for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathPrefix {
    ascend: bool,
}

impl PathPrefix {
    /// Prefix for pages served from the site root
    pub const fn root() -> Self {
        Self { ascend: false }
    }

    /// Prefix for pages one directory below the site root
    pub const fn nested() -> Self {
        Self { ascend: true }
    }

    /// Derive the prefix from the current location path.
    ///
    /// A page needs the ascend prefix when it sits in a directory (after
    /// dropping a trailing `*.html` file name) AND that directory is one of
    /// `nested_sections`. Matching on the section name rather than raw depth
    /// keeps sites deployed under a sub-path (e.g. `/preview/about.html`)
    /// pointing at their own root.
    pub fn from_location<S: AsRef<str>>(pathname: &str, nested_sections: &[S]) -> Self {
        let has_directory = directory_of(pathname)
            .split('/')
            .any(|segment| !segment.is_empty());

        let in_section = nested_sections
            .iter()
            .any(|section| pathname.contains(&format!("/{}/", section.as_ref())));

        Self {
            ascend: has_directory && in_section,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.ascend
    }

    pub fn as_str(&self) -> &'static str {
        if self.ascend {
            ASCEND
        } else {
            ""
        }
    }

    /// Prepend the prefix to a root-relative path
    pub fn apply(&self, path: &str) -> String {
        format!("{}{}", self.as_str(), path)
    }
}

/// Strip a trailing `/<file>.html` segment, leaving the directory part.
fn directory_of(pathname: &str) -> &str {
    match pathname.rfind('/') {
        Some(idx) if pathname[idx + 1..].ends_with(".html") => &pathname[..idx],
        _ => pathname,
    }
}

/// Strip any number of leading `../` segments from an href
pub fn canonical_href(href: &str) -> &str {
    let mut rest = href;
    while let Some(stripped) = rest.strip_prefix(ASCEND) {
        rest = stripped;
    }
    rest
}

/// Whether a rendered nav link should be flagged active for `current_path`.
///
/// Fragment-only and empty hrefs never match. Matching is by substring, so
/// more than one link can be active at once.
pub fn is_active_href(href: &str, current_path: &str) -> bool {
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    let canonical = canonical_href(href);
    !canonical.is_empty() && current_path.contains(canonical)
}

/// Services followed by pages, in footer order
pub fn footer_links() -> impl Iterator<Item = &'static NavLink> {
    SERVICE_LINKS.iter().chain(PAGE_LINKS.iter())
}
