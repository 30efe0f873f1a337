//! Geometry capability queried by constraints during resolution.

use anchora_core::{Insets, MeasureSpec, Rect};
use serde::{Deserialize, Serialize};

/// Read access to the container's edges and to already-placed siblings.
///
/// The container's right and bottom edges are `None` while its extent on
/// that axis is unknown, i.e. while it sizes to its content.
pub trait GeometryProvider {
    /// Container's left edge (inside padding).
    fn parent_left(&self) -> i32;

    /// Container's top edge (inside padding).
    fn parent_top(&self) -> i32;

    /// Container's right edge (inside padding), if the width is fixed.
    fn parent_right(&self) -> Option<i32>;

    /// Container's bottom edge (inside padding), if the height is fixed.
    fn parent_bottom(&self) -> Option<i32>;

    /// Frame of the sibling at `index`, if one is stored.
    ///
    /// Only frames of already-placed siblings are meaningful; a later index
    /// yields whatever the previous pass left behind.
    fn sibling(&self, index: usize) -> Option<Rect>;

    /// Sibling's left edge.
    fn sibling_left(&self, index: usize) -> Option<i32> {
        self.sibling(index).map(|r| r.left)
    }

    /// Sibling's top edge.
    fn sibling_top(&self, index: usize) -> Option<i32> {
        self.sibling(index).map(|r| r.top)
    }

    /// Sibling's right edge.
    fn sibling_right(&self, index: usize) -> Option<i32> {
        self.sibling(index).map(|r| r.right)
    }

    /// Sibling's bottom edge.
    fn sibling_bottom(&self, index: usize) -> Option<i32> {
        self.sibling(index).map(|r| r.bottom)
    }
}

/// The container's own resolvable extent for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    /// Padding subtracted from each side
    pub padding: Insets,
    /// Outer width, when fixed by the parent
    pub width: Option<i32>,
    /// Outer height, when fixed by the parent
    pub height: Option<i32>,
}

impl ContainerBounds {
    /// Bounds with known outer size and no padding.
    #[must_use]
    pub const fn exact(width: i32, height: i32) -> Self {
        Self {
            padding: Insets::ZERO,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Bounds with unknown extent on both axes.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            padding: Insets::ZERO,
            width: None,
            height: None,
        }
    }

    /// Derive the bounds from the directives the container received.
    ///
    /// Only an exact directive fixes an axis.
    #[must_use]
    pub const fn from_specs(width: MeasureSpec, height: MeasureSpec, padding: Insets) -> Self {
        Self {
            padding,
            width: if width.is_exact() {
                Some(width.size)
            } else {
                None
            },
            height: if height.is_exact() {
                Some(height.size)
            } else {
                None
            },
        }
    }

    /// Set the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }
}

impl GeometryProvider for ContainerBounds {
    fn parent_left(&self) -> i32 {
        self.padding.left
    }

    fn parent_top(&self) -> i32 {
        self.padding.top
    }

    fn parent_right(&self) -> Option<i32> {
        self.width.map(|w| w.wrapping_sub(self.padding.right))
    }

    fn parent_bottom(&self) -> Option<i32> {
        self.height.map(|h| h.wrapping_sub(self.padding.bottom))
    }

    fn sibling(&self, _index: usize) -> Option<Rect> {
        None
    }
}

/// Container bounds plus the frames stored for its children.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGeometry<'a> {
    bounds: &'a ContainerBounds,
    frames: &'a [Rect],
}

impl<'a> PlacedGeometry<'a> {
    /// Combine container bounds with a frame store indexed by child.
    #[must_use]
    pub const fn new(bounds: &'a ContainerBounds, frames: &'a [Rect]) -> Self {
        Self { bounds, frames }
    }
}

impl GeometryProvider for PlacedGeometry<'_> {
    fn parent_left(&self) -> i32 {
        self.bounds.parent_left()
    }

    fn parent_top(&self) -> i32 {
        self.bounds.parent_top()
    }

    fn parent_right(&self) -> Option<i32> {
        self.bounds.parent_right()
    }

    fn parent_bottom(&self) -> Option<i32> {
        self.bounds.parent_bottom()
    }

    fn sibling(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }
}
