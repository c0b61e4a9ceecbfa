//! Scroll-reveal trigger
//!
//! `.reveal` elements get `is-visible` once, the first time they enter the
//! viewport. With reduced motion preferred they are all shown immediately and
//! nothing is observed.

use tracing::debug;

use crate::dom::{names, Dom};

use super::{UpdateAction, UpdateResult};

pub fn start<D: Dom>(dom: &mut D, reduced_motion: bool) -> UpdateResult<D::Node> {
    let targets = dom.elements_by_class(names::REVEAL);

    if reduced_motion {
        for el in &targets {
            dom.add_class(el, names::IS_VISIBLE);
        }
        debug!(count = targets.len(), "reduced motion: reveals shown immediately");
        return UpdateResult::none();
    }

    if targets.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::ObserveReveals { targets })
}

pub fn handle_intersected<D: Dom>(dom: &mut D, target: &D::Node) -> UpdateResult<D::Node> {
    dom.add_class(target, names::IS_VISIBLE);
    UpdateResult::none()
}
