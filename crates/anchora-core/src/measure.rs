//! Measurement directives and per-axis size policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// How a measurement extent should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasureMode {
    /// The element must take exactly the given extent.
    Exact,
    /// The element may take up to the given extent.
    AtMost,
    /// No limit; the extent is meaningless.
    #[default]
    Unspecified,
}

/// A measurement directive for one axis: a mode plus an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Interpretation of `size`
    pub mode: MeasureMode,
    /// Extent in pixels
    pub size: i32,
}

impl MeasureSpec {
    /// Create a new directive.
    #[must_use]
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    /// Exactly `size` pixels.
    #[must_use]
    pub const fn exact(size: i32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    /// Up to `size` pixels.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// No constraint at all.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Check if the directive fixes the extent.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self.mode, MeasureMode::Exact)
    }

    /// Pick a final extent given the extent the content wants.
    ///
    /// Exact returns the directive's extent, at-most caps `desired` by it,
    /// unspecified returns `desired` untouched.
    #[must_use]
    pub fn resolve(&self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Clamp a measured extent so it honours this directive.
    ///
    /// Used by elements that size to their content.
    #[must_use]
    pub fn constrain(&self, desired: i32) -> i32 {
        self.resolve(desired).max(0)
    }
}

/// Size policy of an element on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// The span of the resolved constraint decides the size.
    #[default]
    Constrained,
    /// The element's content decides the size.
    WrapContent,
}

impl Dimension {
    /// Check if the content decides the size.
    #[must_use]
    pub const fn is_content_driven(self) -> bool {
        matches!(self, Self::WrapContent)
    }
}

/// Size policy of an element on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizePolicy {
    /// Horizontal policy
    pub width: Dimension,
    /// Vertical policy
    pub height: Dimension,
}

impl SizePolicy {
    /// Constrained on both axes.
    pub const CONSTRAINED: Self = Self::new(Dimension::Constrained, Dimension::Constrained);

    /// Content-driven on both axes.
    pub const WRAP_CONTENT: Self = Self::new(Dimension::WrapContent, Dimension::WrapContent);

    /// Create a policy from per-axis dimensions.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}
