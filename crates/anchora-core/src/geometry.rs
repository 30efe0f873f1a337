//! Geometric primitives: `Size`, `Rect`, `Insets`.
//!
//! All coordinates are integer pixels in the container's coordinate space.
//! Edge arithmetic wraps on overflow.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by its four edges.
///
/// Unlike a size, the edges are not required to be ordered: a rectangle under
/// construction may temporarily have `right < left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl Rect {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle with its top-left corner at `(x, y)`.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, size: Size) -> Self {
        Self::new(x, y, x.wrapping_add(size.width), y.wrapping_add(size.height))
    }

    /// Horizontal span. Negative when the edges are inverted.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Vertical span. Negative when the edges are inverted.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check that `right >= left` and `bottom >= top`.
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.right >= self.left && self.bottom >= self.top
    }

}

/// Padding on each side of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left padding
    pub left: i32,
    /// Top padding
    pub top: i32,
    /// Right padding
    pub right: i32,
    /// Bottom padding
    pub bottom: i32,
}

impl Insets {
    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on all four sides.
    #[must_use]
    pub const fn uniform(amount: i32) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}
