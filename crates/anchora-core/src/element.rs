//! The element trait driven by the layout engine.
//!
//! Elements follow a measure-then-place cycle:
//!
//! 1. **Measure**: report a natural size given one directive per axis
//! 2. **Layout**: commit to the final rectangle chosen by the engine
//!
//! # Examples
//!
//! ```
//! use anchora_core::{Measurable, MeasureSpec, Rect, Size, SizePolicy};
//!
//! struct Label {
//!     text_width: i32,
//!     frame: Rect,
//! }
//!
//! impl Measurable for Label {
//!     fn size_policy(&self) -> SizePolicy {
//!         SizePolicy::WRAP_CONTENT
//!     }
//!
//!     fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
//!         Size::new(width.constrain(self.text_width), height.constrain(16))
//!     }
//!
//!     fn layout(&mut self, frame: Rect) {
//!         self.frame = frame;
//!     }
//! }
//!
//! let mut label = Label { text_width: 42, frame: Rect::ZERO };
//! let size = label.measure(MeasureSpec::at_most(1000), MeasureSpec::at_most(1000));
//! assert_eq!(size, Size::new(42, 16));
//! ```

use crate::geometry::{Rect, Size};
use crate::measure::{MeasureSpec, SizePolicy};

/// An element that can be measured and placed by a container.
pub trait Measurable {
    /// Per-axis size policy.
    ///
    /// A content-driven axis is measured with an at-most directive and is
    /// exempt from the legality check.
    fn size_policy(&self) -> SizePolicy;

    /// Report the natural size for the given directives.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Commit to a final rectangle.
    fn layout(&mut self, frame: Rect);

    /// Invisible elements are measured but skipped by the placement pass.
    fn is_visible(&self) -> bool {
        true
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn size_policy(&self) -> SizePolicy {
        (**self).size_policy()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn layout(&mut self, frame: Rect) {
        (**self).layout(frame);
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}
