//! Header/footer injection and active-link marking

use tracing::{debug, trace};

use crate::config::SiteConfig;
use crate::dom::{names, Dom};
use gather_core::{footer_html, header_html, is_active_href, PathPrefix};

/// Fill the `#site-header` / `#site-footer` placeholders that exist on the
/// page, then flag the nav links matching the current location.
pub fn inject<D: Dom>(dom: &mut D, config: &SiteConfig, year: i32) {
    let path = dom.location_path();
    let prefix = PathPrefix::from_location(&path, &config.nested_sections);
    debug!(%path, nested = prefix.is_nested(), "injecting shared markup");

    if let Some(header) = dom.element_by_id(names::SITE_HEADER_ID) {
        dom.add_class(&header, names::SITE_HEADER);
        dom.set_inner_html(&header, &header_html(prefix));
    } else {
        trace!("no #{} placeholder", names::SITE_HEADER_ID);
    }

    if let Some(footer) = dom.element_by_id(names::SITE_FOOTER_ID) {
        dom.add_class(&footer, names::SITE_FOOTER);
        dom.set_inner_html(&footer, &footer_html(prefix, &config.fallback_email, year));
    } else {
        trace!("no #{} placeholder", names::SITE_FOOTER_ID);
    }

    mark_active_links(dom);
}

/// Add `active` to every link under `.nav-list` or `.nav-dropdown-menu`
/// whose href matches the current path. All matches are marked.
pub fn mark_active_links<D: Dom>(dom: &mut D) -> usize {
    let path = dom.location_path();

    let mut links: Vec<D::Node> = Vec::new();
    for container_class in [names::NAV_LIST, names::NAV_DROPDOWN_MENU] {
        for container in dom.elements_by_class(container_class) {
            for link in dom.descendants_by_tag(&container, "a") {
                // The dropdown menu sits inside the nav list
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        }
    }

    let active: Vec<D::Node> = links
        .into_iter()
        .filter(|link| {
            dom.attribute(link, names::HREF)
                .is_some_and(|href| is_active_href(&href, &path))
        })
        .collect();

    for link in &active {
        dom.add_class(link, names::ACTIVE);
    }
    debug!(%path, count = active.len(), "active links marked");
    active.len()
}
