//! Header and footer fragment rendering
//!
//! Produces the HTML strings written into the `#site-header` and
//! `#site-footer` placeholders. The class names emitted here are the ones the
//! navigation handler dispatches on (`hamburger`, `main-nav`, `nav-dropdown`,
//! `nav-dropdown-toggle`, `nav-dropdown-menu`, `nav-list`).

use chrono::Datelike;

use crate::links::{
    footer_links, NavLink, PathPrefix, HOME_HREF, INQUIRY_HREF, LOGO_SRC, PAGE_LINKS,
    SERVICE_LINKS,
};

pub const BRAND_WORDMARK: &str = "GATHER";
pub const BRAND_TAGLINE: &str = "From Dawn to Dusk";
pub const COMPANY_NAME: &str = "Gather Catering and Events";

/// External partner listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PARTNER_LINKS: &[PartnerLink] = &[
    PartnerLink {
        label: "The Knot",
        href: "https://www.theknot.com/marketplace/gather-from-dawn-to-dusk-cincinnati-oh-2101040",
    },
    PartnerLink {
        label: "Wedding Wire",
        href: "https://www.weddingwire.com/biz/gather-from-dawn-to-dusk/4e3cac205c612625.html",
    },
];

/// Partner badge image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Badge {
    href: &'static str,
    src: &'static str,
    alt: &'static str,
    /// Tooltip on the link
    title: Option<&'static str>,
    srcset: Option<&'static str>,
    width: Option<u32>,
}

impl Badge {
    const fn knot(src: &'static str, alt: &'static str) -> Self {
        Self {
            href: KNOT_REDIRECT,
            src,
            alt,
            title: None,
            srcset: None,
            width: Some(190),
        }
    }

    fn render(&self) -> String {
        let title = self
            .title
            .map(|t| format!(r#" title="{}""#, escape_html(t)))
            .unwrap_or_default();
        let srcset = self
            .srcset
            .map(|s| format!(r#" srcset="{}""#, escape_html(s)))
            .unwrap_or_default();
        let width = self
            .width
            .map(|w| format!(r#" width="{w}""#))
            .unwrap_or_default();
        format!(
            r#"<a target="_blank" rel="noopener noreferrer" href="{}"{title}><img alt="{}" src="{}"{srcset}{width}></a>"#,
            escape_html(self.href),
            escape_html(self.alt),
            escape_html(self.src)
        )
    }
}

const KNOT_REDIRECT: &str = "https://www.theknot.com/marketplace/redirect-2101040?utm_source=vendor_website&utm_medium=banner&utm_term=87bd69e8-b22e-41de-bda9-54f66256cf42&utm_campaign=vendor_badge_assets";

const BADGES: &[Badge] = &[
    Badge::knot(
        "https://d13ns7kbjmbjip.cloudfront.net/For_Your_Website/TK-badge_AsSeen.png",
        "As Seen on The Knot",
    ),
    Badge::knot(
        "https://d13ns7kbjmbjip.cloudfront.net/For_Your_Website/TK-badge_ReviewUs.png",
        "Review us on The Knot",
    ),
    Badge::knot(
        "https://d13ns7kbjmbjip.cloudfront.net/For_Your_Website/TK-badge_ReadReviews.png",
        "Couples love us! See our reviews on The Knot.",
    ),
    Badge {
        href: "https://www.weddingwire.com",
        src: "https://www.weddingwire.com/images/sellos/partner--pp2223242.png",
        alt: "Find us on WeddingWire",
        title: Some("Find us on WeddingWire"),
        srcset: Some(
            "https://www.weddingwire.com/images/sellos/partner--pp2223242.png 1x, \
             https://www.weddingwire.com/images/sellos/partner--pp2223242.png?largeImg=true 2x",
        ),
        width: None,
    },
];

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn anchor(prefix: PathPrefix, link: &NavLink) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(&prefix.apply(link.href)),
        escape_html(link.label)
    )
}

fn list_item(prefix: PathPrefix, link: &NavLink) -> String {
    format!("<li>{}</li>", anchor(prefix, link))
}

/// Render the site header: logo, hamburger control and main navigation.
pub fn header_html(prefix: PathPrefix) -> String {
    let home = escape_html(&prefix.apply(HOME_HREF));
    let logo = escape_html(&prefix.apply(LOGO_SRC));
    let inquiry = escape_html(&prefix.apply(INQUIRY_HREF));

    let dropdown_items: String = SERVICE_LINKS
        .iter()
        .map(|link| list_item(prefix, link))
        .collect();
    let page_items: String = PAGE_LINKS
        .iter()
        .map(|link| list_item(prefix, link))
        .collect();

    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="header-inner">"#);
    html.push_str(&format!(
        r#"<a href="{home}" class="header-logo" aria-label="Gather Home"><img src="{logo}" alt="Gather Logo" width="50" height="50"><span class="brand-wordmark">{BRAND_WORDMARK}</span></a>"#
    ));
    html.push_str(
        r#"<button class="hamburger" aria-label="Toggle menu" aria-expanded="false"><span></span><span></span><span></span></button>"#,
    );
    html.push_str(r#"<nav class="main-nav" aria-label="Main navigation"><ul class="nav-list">"#);
    html.push_str(&format!(r#"<li><a href="{home}">Home</a></li>"#));
    html.push_str(r#"<li class="nav-dropdown">"#);
    html.push_str(
        r#"<button class="nav-dropdown-toggle" aria-expanded="false">Services <span class="arrow" aria-hidden="true">&#9660;</span></button>"#,
    );
    html.push_str(&format!(
        r#"<ul class="nav-dropdown-menu">{dropdown_items}</ul>"#
    ));
    html.push_str("</li>");
    html.push_str(&page_items);
    html.push_str(&format!(
        r#"<li><a href="{inquiry}" class="btn btn--primary nav-cta">Get a Quote</a></li>"#
    ));
    html.push_str("</ul></nav></div>");
    html
}

/// Render the site footer for the given contact email and copyright year.
pub fn footer_html(prefix: PathPrefix, contact_email: &str, year: i32) -> String {
    let links: String = footer_links().map(|link| anchor(prefix, link)).collect();
    let partners: String = PARTNER_LINKS
        .iter()
        .map(|p| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(p.href),
                escape_html(p.label)
            )
        })
        .collect();
    let badges: String = BADGES.iter().map(Badge::render).collect();
    let email = escape_html(contact_email);

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="footer-inner">"#);
    html.push_str(&format!(
        r#"<div class="footer-brand"><div class="brand-wordmark">{BRAND_WORDMARK}</div><div class="brand-tagline">{BRAND_TAGLINE}</div></div>"#
    ));
    html.push_str(&format!(
        r#"<nav class="footer-links" aria-label="Footer navigation">{links}</nav>"#
    ));
    html.push_str(&format!(r#"<div class="footer-external">{partners}</div>"#));
    html.push_str(&format!(
        r#"<div class="footer-badges" id="footer-badges">{badges}</div>"#
    ));
    html.push_str(&format!(
        r#"<div class="footer-contact"><a href="mailto:{email}">{email}</a></div>"#
    ));
    html.push_str(&format!(
        r#"<div class="footer-copyright">&copy; {year} {COMPANY_NAME}. All rights reserved.</div>"#
    ));
    html.push_str("</div>");
    html
}

/// Year used in the copyright line, in the visitor's local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
