//! Message types for the page controller (TEA pattern)

use crate::input_key::InputKey;
use crate::transport::TransportOutcome;

/// All events the controller reacts to.
///
/// `N` is the [`Dom`](crate::dom::Dom) node handle type; events that carry a
/// target element hold the raw event target, and handlers resolve what was
/// hit by walking its ancestry.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<N> {
    /// Document finished parsing; inject markup and start the reveal trigger
    DomReady {
        /// The visitor prefers reduced motion
        reduced_motion: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Click anywhere in the document (single delegated listener)
    Click { target: N },

    /// Key pressed anywhere in the document
    Key(InputKey),

    /// Close the mobile overlay and every dropdown (Escape)
    DismissMenus,

    /// Desktop media query changed
    BreakpointChanged {
        /// The viewport is now in the desktop range
        desktop: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Inquiry form
    // ─────────────────────────────────────────────────────────
    /// The inquiry form was submitted
    SubmitRequested,

    /// The outbound request settled
    SubmissionSettled(TransportOutcome),

    // ─────────────────────────────────────────────────────────
    // Reveal
    // ─────────────────────────────────────────────────────────
    /// A `.reveal` element entered the viewport
    RevealIntersected { target: N },
}
