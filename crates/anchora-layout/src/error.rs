//! Error types for constraint resolution and layout passes.

use anchora_core::Axis;
use thiserror::Error;

/// Errors raised while resolving constraints or running a layout pass.
///
/// Every variant is a contract violation by the code declaring the
/// constraints; the pass that raised it is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A child anchored to, or sized against, a container edge whose extent
    /// is not known yet because the container sizes to its content.
    #[error("ambiguous container extent: {axis} extent is unknown (child {})", display_child(.child))]
    AmbiguousContainerExtent {
        /// Axis whose extent is unknown
        axis: Axis,
        /// Child being resolved, if any
        child: Option<usize>,
    },

    /// A constrained element resolved to inverted edges.
    #[error("constraint violation at child {}: right must be >= left and bottom must be >= top (left={left}, top={top}, right={right}, bottom={bottom})", display_child(.child))]
    ConstraintViolation {
        /// Child being resolved, if any
        child: Option<usize>,
        /// Resolved left edge
        left: i32,
        /// Resolved top edge
        top: i32,
        /// Resolved right edge
        right: i32,
        /// Resolved bottom edge
        bottom: i32,
    },

    /// A sibling anchor named an index with no stored frame.
    #[error("unknown sibling {index}")]
    UnknownSibling {
        /// Requested sibling index
        index: usize,
    },

    /// A sibling anchor referenced a child that has not been placed yet.
    #[error("child {child} anchors to sibling {sibling}, which is not placed yet")]
    ForwardReference {
        /// Child being resolved
        child: usize,
        /// Referenced sibling
        sibling: usize,
    },

    /// Weighted sizing was asked to split by a non-positive total.
    #[error("invalid total weight {total}: must be positive")]
    InvalidWeight {
        /// Offending total weight
        total: i32,
    },

    /// Configuration could not be parsed or failed validation.
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
}

#[allow(clippy::ref_option)]
fn display_child(child: &Option<usize>) -> String {
    child.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl From<toml::de::Error> for LayoutError {
    fn from(e: toml::de::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
