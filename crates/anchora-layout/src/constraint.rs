//! Edge-anchored constraints.
//!
//! A [`ConstraintBox`] holds one element's resolved edges, its bias on each
//! axis and the set of edges that were explicitly anchored. A [`Constraint`]
//! binds a box to a [`GeometryProvider`] so its edges can be anchored to the
//! container or to already-placed siblings.
//!
//! Edges are resolved independently in call order. Anchoring the same edge
//! twice keeps the last value; nothing is reconciled afterwards. Edge
//! arithmetic wraps on overflow.
//!
//! # Examples
//!
//! ```
//! use anchora_layout::{Constraint, ContainerBounds};
//! use anchora_core::Rect;
//!
//! let bounds = ContainerBounds::exact(300, 300);
//! let mut constraint = Constraint::new(&bounds);
//! constraint
//!     .left_to_left_of_parent_with_width(10, 100)
//!     .top_to_top_of_parent_with_height(0, 50);
//! constraint.right_to_right_of_parent(-10).unwrap();
//!
//! assert_eq!(constraint.rect(), Rect::new(10, 0, 290, 50));
//! ```

use anchora_core::{Axis, Dimension, Edges, MeasureSpec, Rect, SizePolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::provider::GeometryProvider;
use crate::weight::weighted_extent;

/// Resolved edges, biases and anchor flags of one element.
///
/// This is plain data: it can be copied, retained across passes and bound
/// to a provider again with [`Constraint::from_box`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstraintBox {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
    horizontal_bias: f32,
    vertical_bias: f32,
    edges: Edges,
}

impl ConstraintBox {
    /// Create a box with the given edges, zero bias and no anchored edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            horizontal_bias: 0.0,
            vertical_bias: 0.0,
            edges: Edges::empty(),
        }
    }

    /// Create a box covering `rect`.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self::new(rect.left, rect.top, rect.right, rect.bottom)
    }

    /// The four edges as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Horizontal span; negative when inverted.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Vertical span; negative when inverted.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Share of horizontal slack placed before the element.
    #[must_use]
    pub const fn horizontal_bias(&self) -> f32 {
        self.horizontal_bias
    }

    /// Share of vertical slack placed before the element.
    #[must_use]
    pub const fn vertical_bias(&self) -> f32 {
        self.vertical_bias
    }

    /// Set the horizontal bias, clamped to `[0, 1]`.
    ///
    /// Edges are not touched; the bias only matters at placement.
    pub fn set_horizontal_bias(&mut self, bias: f32) -> &mut Self {
        self.horizontal_bias = clamp_bias(bias);
        self
    }

    /// Set the vertical bias, clamped to `[0, 1]`.
    pub fn set_vertical_bias(&mut self, bias: f32) -> &mut Self {
        self.vertical_bias = clamp_bias(bias);
        self
    }

    /// Edges that were explicitly anchored.
    #[must_use]
    pub const fn constrained_edges(&self) -> Edges {
        self.edges
    }

    /// Check if the left edge was anchored.
    #[must_use]
    pub const fn is_left_constrained(&self) -> bool {
        self.edges.contains(Edges::LEFT)
    }

    /// Check if the top edge was anchored.
    #[must_use]
    pub const fn is_top_constrained(&self) -> bool {
        self.edges.contains(Edges::TOP)
    }

    /// Check if the right edge was anchored.
    #[must_use]
    pub const fn is_right_constrained(&self) -> bool {
        self.edges.contains(Edges::RIGHT)
    }

    /// Check if the bottom edge was anchored.
    #[must_use]
    pub const fn is_bottom_constrained(&self) -> bool {
        self.edges.contains(Edges::BOTTOM)
    }

    /// Shift left and right by `offset`.
    pub fn translate_x(&mut self, offset: i32) -> &mut Self {
        self.left = self.left.wrapping_add(offset);
        self.right = self.right.wrapping_add(offset);
        self
    }

    /// Shift top and bottom by `offset`.
    pub fn translate_y(&mut self, offset: i32) -> &mut Self {
        self.top = self.top.wrapping_add(offset);
        self.bottom = self.bottom.wrapping_add(offset);
        self
    }

    /// Move the left edge to `x`, keeping the width.
    pub fn translate_left_to(&mut self, x: i32) -> &mut Self {
        self.translate_x(x.wrapping_sub(self.left))
    }

    /// Move the right edge to `x`, keeping the width.
    pub fn translate_right_to(&mut self, x: i32) -> &mut Self {
        self.translate_x(x.wrapping_sub(self.right))
    }

    /// Move the top edge to `y`, keeping the height.
    pub fn translate_top_to(&mut self, y: i32) -> &mut Self {
        self.translate_y(y.wrapping_sub(self.top))
    }

    /// Move the bottom edge to `y`, keeping the height.
    pub fn translate_bottom_to(&mut self, y: i32) -> &mut Self {
        self.translate_y(y.wrapping_sub(self.bottom))
    }

    /// Shift each edge by its own offset.
    pub fn translate(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> &mut Self {
        self.left = self.left.wrapping_add(left);
        self.top = self.top.wrapping_add(top);
        self.right = self.right.wrapping_add(right);
        self.bottom = self.bottom.wrapping_add(bottom);
        self
    }

    /// Legality check.
    ///
    /// A content-driven axis is always legal; a constrained axis needs
    /// `right >= left` (or `bottom >= top`).
    pub fn validate(&self, policy: SizePolicy, child: Option<usize>) -> Result<(), LayoutError> {
        // Content-driven axes are exempt, so collapse them before the check
        let mut checked = self.rect();
        if policy.width.is_content_driven() {
            checked.right = checked.left;
        }
        if policy.height.is_content_driven() {
            checked.bottom = checked.top;
        }

        if checked.is_ordered() {
            Ok(())
        } else {
            Err(LayoutError::ConstraintViolation {
                child,
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            })
        }
    }

    /// Measurement directive for the horizontal axis.
    ///
    /// Content-driven widths get `at_most(unbounded)`; otherwise the exact
    /// span, with inverted spans measured at zero.
    #[must_use]
    pub fn width_spec(&self, policy: Dimension, unbounded: i32) -> MeasureSpec {
        span_spec(self.left, self.right, policy, unbounded)
    }

    /// Measurement directive for the vertical axis.
    #[must_use]
    pub fn height_spec(&self, policy: Dimension, unbounded: i32) -> MeasureSpec {
        span_spec(self.top, self.bottom, policy, unbounded)
    }
}

impl fmt::Display for ConstraintBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Constraint{{left={}, top={}, right={}, bottom={}, horizontal_bias={}, vertical_bias={}}}",
            self.left, self.top, self.right, self.bottom, self.horizontal_bias, self.vertical_bias
        )
    }
}

fn clamp_bias(bias: f32) -> f32 {
    if bias.is_nan() {
        0.0
    } else {
        bias.clamp(0.0, 1.0)
    }
}

fn span_spec(lead: i32, trail: i32, policy: Dimension, unbounded: i32) -> MeasureSpec {
    match policy {
        Dimension::WrapContent => MeasureSpec::at_most(unbounded),
        Dimension::Constrained => MeasureSpec::exact(trail.wrapping_sub(lead).max(0)),
    }
}

/// A [`ConstraintBox`] bound to the geometry it is resolved against.
///
/// Container-left/top anchors cannot fail. Container-right/bottom anchors
/// fail with [`LayoutError::AmbiguousContainerExtent`] while the container's
/// extent on that axis is unknown. Sibling anchors fail when the sibling has
/// no stored frame, or, with the forward-reference check enabled, when it is
/// not placed before the child being resolved.
///
/// Sibling anchors are only meaningful for siblings with a lower index than
/// the child being resolved.
#[derive(Clone, Copy)]
pub struct Constraint<'g> {
    state: ConstraintBox,
    provider: &'g dyn GeometryProvider,
    child: Option<usize>,
    config: LayoutConfig,
}

impl fmt::Debug for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("state", &self.state)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

impl<'g> Constraint<'g> {
    /// Create a constraint covering the container with default configuration.
    #[must_use]
    pub fn new(provider: &'g dyn GeometryProvider) -> Self {
        Self::with_config(provider, LayoutConfig::default())
    }

    /// Create a constraint covering the container.
    #[must_use]
    pub fn with_config(provider: &'g dyn GeometryProvider, config: LayoutConfig) -> Self {
        let mut constraint = Self {
            state: ConstraintBox::default(),
            provider,
            child: None,
            config,
        };
        constraint.reset();
        constraint
    }

    /// Bind a retained box to a provider.
    #[must_use]
    pub const fn from_box(
        provider: &'g dyn GeometryProvider,
        state: ConstraintBox,
        config: LayoutConfig,
    ) -> Self {
        Self {
            state,
            provider,
            child: None,
            config,
        }
    }

    /// Mark the constraint as resolving the child at `index`.
    #[must_use]
    pub const fn for_child(mut self, index: usize) -> Self {
        self.child = Some(index);
        self
    }

    /// Child being resolved, if any.
    #[must_use]
    pub const fn child(&self) -> Option<usize> {
        self.child
    }

    /// Resolved state.
    #[must_use]
    pub const fn state(&self) -> &ConstraintBox {
        &self.state
    }

    /// Detach the resolved state from the provider.
    #[must_use]
    pub const fn into_box(self) -> ConstraintBox {
        self.state
    }

    /// The four edges as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.state.rect()
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.state.left
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.state.top
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.state.right
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.state.bottom
    }

    /// Edges that were explicitly anchored.
    #[must_use]
    pub const fn constrained_edges(&self) -> Edges {
        self.state.edges
    }

    /// Check if the left edge was anchored.
    #[must_use]
    pub const fn is_left_constrained(&self) -> bool {
        self.state.is_left_constrained()
    }

    /// Check if the top edge was anchored.
    #[must_use]
    pub const fn is_top_constrained(&self) -> bool {
        self.state.is_top_constrained()
    }

    /// Check if the right edge was anchored.
    #[must_use]
    pub const fn is_right_constrained(&self) -> bool {
        self.state.is_right_constrained()
    }

    /// Check if the bottom edge was anchored.
    #[must_use]
    pub const fn is_bottom_constrained(&self) -> bool {
        self.state.is_bottom_constrained()
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Reset to the container's edges with zero bias and no anchored edges.
    ///
    /// An unknown right or bottom edge collapses onto the left or top edge.
    pub fn reset(&mut self) -> &mut Self {
        let left = self.provider.parent_left();
        let top = self.provider.parent_top();
        let right = self.provider.parent_right().unwrap_or(left);
        let bottom = self.provider.parent_bottom().unwrap_or(top);
        self.state = ConstraintBox::new(left, top, right, bottom);
        self
    }

    /// Reset the edges to `rect` with zero bias. Anchor flags are kept.
    pub fn reset_to_rect(&mut self, rect: Rect) -> &mut Self {
        self.reset_to(rect.left, rect.top, rect.right, rect.bottom)
    }

    /// Reset the edges with zero bias. Anchor flags are kept.
    pub fn reset_to(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> &mut Self {
        let edges = self.state.edges;
        self.state = ConstraintBox::new(left, top, right, bottom);
        self.state.edges = edges;
        self
    }

    // =========================================================================
    // Bias
    // =========================================================================

    /// Set the horizontal bias, clamped to `[0, 1]`.
    pub fn set_horizontal_bias(&mut self, bias: f32) -> &mut Self {
        self.state.set_horizontal_bias(bias);
        self
    }

    /// Set the vertical bias, clamped to `[0, 1]`.
    pub fn set_vertical_bias(&mut self, bias: f32) -> &mut Self {
        self.state.set_vertical_bias(bias);
        self
    }

    /// Horizontal bias.
    #[must_use]
    pub const fn horizontal_bias(&self) -> f32 {
        self.state.horizontal_bias
    }

    /// Vertical bias.
    #[must_use]
    pub const fn vertical_bias(&self) -> f32 {
        self.state.vertical_bias
    }

    // =========================================================================
    // Edge writers
    // =========================================================================

    fn set_left(&mut self, value: i32, width: Option<i32>) -> &mut Self {
        self.state.edges |= Edges::LEFT;
        self.state.left = value;
        if let Some(width) = width {
            self.state.right = value.wrapping_add(width);
        }
        self
    }

    fn set_right(&mut self, value: i32, width: Option<i32>) -> &mut Self {
        self.state.edges |= Edges::RIGHT;
        self.state.right = value;
        if let Some(width) = width {
            self.state.left = value.wrapping_sub(width);
        }
        self
    }

    fn set_top(&mut self, value: i32, height: Option<i32>) -> &mut Self {
        self.state.edges |= Edges::TOP;
        self.state.top = value;
        if let Some(height) = height {
            self.state.bottom = value.wrapping_add(height);
        }
        self
    }

    fn set_bottom(&mut self, value: i32, height: Option<i32>) -> &mut Self {
        self.state.edges |= Edges::BOTTOM;
        self.state.bottom = value;
        if let Some(height) = height {
            self.state.top = value.wrapping_sub(height);
        }
        self
    }

    fn container_right(&self) -> Result<i32, LayoutError> {
        self.provider
            .parent_right()
            .ok_or(LayoutError::AmbiguousContainerExtent {
                axis: Axis::Horizontal,
                child: self.child,
            })
    }

    fn container_bottom(&self) -> Result<i32, LayoutError> {
        self.provider
            .parent_bottom()
            .ok_or(LayoutError::AmbiguousContainerExtent {
                axis: Axis::Vertical,
                child: self.child,
            })
    }

    fn sibling_frame(&self, index: usize) -> Result<Rect, LayoutError> {
        if self.config.check_forward_references {
            if let Some(child) = self.child {
                if index >= child {
                    return Err(LayoutError::ForwardReference {
                        child,
                        sibling: index,
                    });
                }
            }
        }
        self.provider
            .sibling(index)
            .ok_or(LayoutError::UnknownSibling { index })
    }

    // =========================================================================
    // Anchors to the container
    // =========================================================================

    /// Anchor the left edge to the container's left edge.
    pub fn left_to_left_of_parent(&mut self, offset: i32) -> &mut Self {
        let anchor = self.provider.parent_left();
        self.set_left(anchor.wrapping_add(offset), None)
    }

    /// Anchor the left edge to the container's left edge; right = left + width.
    pub fn left_to_left_of_parent_with_width(&mut self, offset: i32, width: i32) -> &mut Self {
        let anchor = self.provider.parent_left();
        self.set_left(anchor.wrapping_add(offset), Some(width))
    }

    /// Anchor the left edge to the container's right edge.
    pub fn left_to_right_of_parent(&mut self, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_right()?;
        Ok(self.set_left(anchor.wrapping_add(offset), None))
    }

    /// Anchor the left edge to the container's right edge; right = left + width.
    pub fn left_to_right_of_parent_with_width(
        &mut self,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_right()?;
        Ok(self.set_left(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the right edge to the container's left edge.
    pub fn right_to_left_of_parent(&mut self, offset: i32) -> &mut Self {
        let anchor = self.provider.parent_left();
        self.set_right(anchor.wrapping_add(offset), None)
    }

    /// Anchor the right edge to the container's left edge; left = right - width.
    pub fn right_to_left_of_parent_with_width(&mut self, offset: i32, width: i32) -> &mut Self {
        let anchor = self.provider.parent_left();
        self.set_right(anchor.wrapping_add(offset), Some(width))
    }

    /// Anchor the right edge to the container's right edge.
    pub fn right_to_right_of_parent(&mut self, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_right()?;
        Ok(self.set_right(anchor.wrapping_add(offset), None))
    }

    /// Anchor the right edge to the container's right edge; left = right - width.
    pub fn right_to_right_of_parent_with_width(
        &mut self,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_right()?;
        Ok(self.set_right(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the top edge to the container's top edge.
    pub fn top_to_top_of_parent(&mut self, offset: i32) -> &mut Self {
        let anchor = self.provider.parent_top();
        self.set_top(anchor.wrapping_add(offset), None)
    }

    /// Anchor the top edge to the container's top edge; bottom = top + height.
    pub fn top_to_top_of_parent_with_height(&mut self, offset: i32, height: i32) -> &mut Self {
        let anchor = self.provider.parent_top();
        self.set_top(anchor.wrapping_add(offset), Some(height))
    }

    /// Anchor the top edge to the container's bottom edge.
    pub fn top_to_bottom_of_parent(&mut self, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_bottom()?;
        Ok(self.set_top(anchor.wrapping_add(offset), None))
    }

    /// Anchor the top edge to the container's bottom edge; bottom = top + height.
    pub fn top_to_bottom_of_parent_with_height(
        &mut self,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_bottom()?;
        Ok(self.set_top(anchor.wrapping_add(offset), Some(height)))
    }

    /// Anchor the bottom edge to the container's top edge.
    pub fn bottom_to_top_of_parent(&mut self, offset: i32) -> &mut Self {
        let anchor = self.provider.parent_top();
        self.set_bottom(anchor.wrapping_add(offset), None)
    }

    /// Anchor the bottom edge to the container's top edge; top = bottom - height.
    pub fn bottom_to_top_of_parent_with_height(&mut self, offset: i32, height: i32) -> &mut Self {
        let anchor = self.provider.parent_top();
        self.set_bottom(anchor.wrapping_add(offset), Some(height))
    }

    /// Anchor the bottom edge to the container's bottom edge.
    pub fn bottom_to_bottom_of_parent(&mut self, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_bottom()?;
        Ok(self.set_bottom(anchor.wrapping_add(offset), None))
    }

    /// Anchor the bottom edge to the container's bottom edge; top = bottom - height.
    pub fn bottom_to_bottom_of_parent_with_height(
        &mut self,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.container_bottom()?;
        Ok(self.set_bottom(anchor.wrapping_add(offset), Some(height)))
    }

    // =========================================================================
    // Anchors to siblings
    // =========================================================================

    /// Anchor the left edge to a sibling's left edge.
    pub fn left_to_left_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.left;
        Ok(self.set_left(anchor.wrapping_add(offset), None))
    }

    /// Anchor the left edge to a sibling's left edge; right = left + width.
    pub fn left_to_left_of_with_width(
        &mut self,
        sibling: usize,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.left;
        Ok(self.set_left(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the left edge to a sibling's right edge.
    pub fn left_to_right_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.right;
        Ok(self.set_left(anchor.wrapping_add(offset), None))
    }

    /// Anchor the left edge to a sibling's right edge; right = left + width.
    pub fn left_to_right_of_with_width(
        &mut self,
        sibling: usize,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.right;
        Ok(self.set_left(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the right edge to a sibling's left edge.
    pub fn right_to_left_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.left;
        Ok(self.set_right(anchor.wrapping_add(offset), None))
    }

    /// Anchor the right edge to a sibling's left edge; left = right - width.
    pub fn right_to_left_of_with_width(
        &mut self,
        sibling: usize,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.left;
        Ok(self.set_right(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the right edge to a sibling's right edge.
    pub fn right_to_right_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.right;
        Ok(self.set_right(anchor.wrapping_add(offset), None))
    }

    /// Anchor the right edge to a sibling's right edge; left = right - width.
    pub fn right_to_right_of_with_width(
        &mut self,
        sibling: usize,
        offset: i32,
        width: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.right;
        Ok(self.set_right(anchor.wrapping_add(offset), Some(width)))
    }

    /// Anchor the top edge to a sibling's top edge.
    pub fn top_to_top_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.top;
        Ok(self.set_top(anchor.wrapping_add(offset), None))
    }

    /// Anchor the top edge to a sibling's top edge; bottom = top + height.
    pub fn top_to_top_of_with_height(
        &mut self,
        sibling: usize,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.top;
        Ok(self.set_top(anchor.wrapping_add(offset), Some(height)))
    }

    /// Anchor the top edge to a sibling's bottom edge.
    pub fn top_to_bottom_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.bottom;
        Ok(self.set_top(anchor.wrapping_add(offset), None))
    }

    /// Anchor the top edge to a sibling's bottom edge; bottom = top + height.
    pub fn top_to_bottom_of_with_height(
        &mut self,
        sibling: usize,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.bottom;
        Ok(self.set_top(anchor.wrapping_add(offset), Some(height)))
    }

    /// Anchor the bottom edge to a sibling's top edge.
    pub fn bottom_to_top_of(&mut self, sibling: usize, offset: i32) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.top;
        Ok(self.set_bottom(anchor.wrapping_add(offset), None))
    }

    /// Anchor the bottom edge to a sibling's top edge; top = bottom - height.
    pub fn bottom_to_top_of_with_height(
        &mut self,
        sibling: usize,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.top;
        Ok(self.set_bottom(anchor.wrapping_add(offset), Some(height)))
    }

    /// Anchor the bottom edge to a sibling's bottom edge.
    pub fn bottom_to_bottom_of(
        &mut self,
        sibling: usize,
        offset: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.bottom;
        Ok(self.set_bottom(anchor.wrapping_add(offset), None))
    }

    /// Anchor the bottom edge to a sibling's bottom edge; top = bottom - height.
    pub fn bottom_to_bottom_of_with_height(
        &mut self,
        sibling: usize,
        offset: i32,
        height: i32,
    ) -> Result<&mut Self, LayoutError> {
        let anchor = self.sibling_frame(sibling)?.bottom;
        Ok(self.set_bottom(anchor.wrapping_add(offset), Some(height)))
    }

    /// Take all four edges from a sibling's frame and mark them anchored.
    pub fn copy_from(&mut self, sibling: usize) -> Result<&mut Self, LayoutError> {
        let frame = self.sibling_frame(sibling)?;
        self.state.edges = Edges::all();
        self.state.left = frame.left;
        self.state.top = frame.top;
        self.state.right = frame.right;
        self.state.bottom = frame.bottom;
        Ok(self)
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Shift left and right by `offset`.
    pub fn translate_x(&mut self, offset: i32) -> &mut Self {
        self.state.translate_x(offset);
        self
    }

    /// Shift top and bottom by `offset`.
    pub fn translate_y(&mut self, offset: i32) -> &mut Self {
        self.state.translate_y(offset);
        self
    }

    /// Move the left edge to `x`, keeping the width.
    pub fn translate_left_to(&mut self, x: i32) -> &mut Self {
        self.state.translate_left_to(x);
        self
    }

    /// Move the right edge to `x`, keeping the width.
    pub fn translate_right_to(&mut self, x: i32) -> &mut Self {
        self.state.translate_right_to(x);
        self
    }

    /// Move the top edge to `y`, keeping the height.
    pub fn translate_top_to(&mut self, y: i32) -> &mut Self {
        self.state.translate_top_to(y);
        self
    }

    /// Move the bottom edge to `y`, keeping the height.
    pub fn translate_bottom_to(&mut self, y: i32) -> &mut Self {
        self.state.translate_bottom_to(y);
        self
    }

    /// Shift each edge by its own offset.
    pub fn translate(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> &mut Self {
        self.state.translate(left, top, right, bottom);
        self
    }

    // =========================================================================
    // Legality and measurement
    // =========================================================================

    /// Legality check against the element's size policy.
    pub fn validate(&self, policy: SizePolicy) -> Result<(), LayoutError> {
        self.state.validate(policy, self.child)
    }

    /// Horizontal measurement directive.
    #[must_use]
    pub fn width_spec(&self, policy: Dimension) -> MeasureSpec {
        self.state.width_spec(policy, self.config.unbounded_size)
    }

    /// Vertical measurement directive.
    #[must_use]
    pub fn height_spec(&self, policy: Dimension) -> MeasureSpec {
        self.state.height_spec(policy, self.config.unbounded_size)
    }

    // =========================================================================
    // Weighted sizing
    // =========================================================================

    /// Extent for `weight` parts out of `total` along `axis`, after
    /// removing `used` pixels.
    pub fn weighted_extent(
        &self,
        axis: Axis,
        total: i32,
        weight: i32,
        used: i32,
    ) -> Result<i32, LayoutError> {
        weighted_extent(self.provider, axis, total, weight, used, &self.config).map_err(|e| match e {
            LayoutError::AmbiguousContainerExtent { axis, .. } => {
                LayoutError::AmbiguousContainerExtent {
                    axis,
                    child: self.child,
                }
            }
            other => other,
        })
    }

    /// Width for `weight` parts out of `total` of the container's width.
    pub fn weighted_width(&self, total: i32, weight: i32) -> Result<i32, LayoutError> {
        self.weighted_extent(Axis::Horizontal, total, weight, 0)
    }

    /// Width for `weight` parts out of `total` of what remains after `used`.
    pub fn weighted_width_after(
        &self,
        total: i32,
        weight: i32,
        used: i32,
    ) -> Result<i32, LayoutError> {
        self.weighted_extent(Axis::Horizontal, total, weight, used)
    }

    /// Height for `weight` parts out of `total` of the container's height.
    pub fn weighted_height(&self, total: i32, weight: i32) -> Result<i32, LayoutError> {
        self.weighted_extent(Axis::Vertical, total, weight, 0)
    }

    /// Height for `weight` parts out of `total` of what remains after `used`.
    pub fn weighted_height_after(
        &self,
        total: i32,
        weight: i32,
        used: i32,
    ) -> Result<i32, LayoutError> {
        self.weighted_extent(Axis::Vertical, total, weight, used)
    }

    // =========================================================================
    // Geometry queries
    // =========================================================================

    /// Sibling's left edge.
    pub fn sibling_left(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.left)
    }

    /// Sibling's top edge.
    pub fn sibling_top(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.top)
    }

    /// Sibling's right edge.
    pub fn sibling_right(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.right)
    }

    /// Sibling's bottom edge.
    pub fn sibling_bottom(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.bottom)
    }

    /// Sibling's width.
    pub fn sibling_width(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.width())
    }

    /// Sibling's height.
    pub fn sibling_height(&self, sibling: usize) -> Result<i32, LayoutError> {
        Ok(self.sibling_frame(sibling)?.height())
    }

    /// Container's inner width, if known.
    #[must_use]
    pub fn parent_width(&self) -> Option<i32> {
        self.provider
            .parent_right()
            .map(|right| right.wrapping_sub(self.provider.parent_left()))
    }

    /// Container's inner height, if known.
    #[must_use]
    pub fn parent_height(&self) -> Option<i32> {
        self.provider
            .parent_bottom()
            .map(|bottom| bottom.wrapping_sub(self.provider.parent_top()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ContainerBounds, PlacedGeometry};
    use anchora_core::{Insets, MeasureMode};
    use proptest::prelude::*;

    const EXACT: ContainerBounds = ContainerBounds::exact(300, 300);

    #[test]
    fn test_new_covers_container() {
        let c = Constraint::new(&EXACT);
        assert_eq!(c.rect(), Rect::new(0, 0, 300, 300));
        assert_eq!(c.horizontal_bias(), 0.0);
        assert!(c.constrained_edges().is_empty());
        assert_eq!(c.child(), None);
    }

    #[test]
    fn test_new_respects_padding() {
        let bounds = ContainerBounds::exact(300, 200).with_padding(Insets::new(5, 6, 7, 8));
        let c = Constraint::new(&bounds);
        assert_eq!(c.rect(), Rect::new(5, 6, 293, 192));
    }

    #[test]
    fn test_new_with_unknown_extent_collapses() {
        let bounds = ContainerBounds::unknown().with_padding(Insets::uniform(4));
        let c = Constraint::new(&bounds);
        assert_eq!(c.rect(), Rect::new(4, 4, 4, 4));
    }

    #[test]
    fn test_left_to_left_of_parent() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent(12);
        assert_eq!(c.left(), 12);
        assert_eq!(c.right(), 300);
        assert!(c.is_left_constrained());
        assert!(!c.is_right_constrained());
    }

    #[test]
    fn test_parent_anchor_offset_wraps() {
        let bounds = EXACT.with_padding(Insets::uniform(1));
        let mut c = Constraint::new(&bounds);
        c.left_to_left_of_parent(i32::MAX);
        assert_eq!(c.left(), i32::MIN);

        c.left_to_left_of_parent_with_width(i32::MAX - 1, 10);
        assert_eq!(c.left(), i32::MAX);
        assert_eq!(c.right(), i32::MIN + 9);
        assert_eq!(c.rect().width(), 10);
    }

    #[test]
    fn test_left_with_width_sets_right() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent_with_width(0, 100);
        assert_eq!((c.left(), c.right()), (0, 100));
    }

    #[test]
    fn test_right_with_width_sets_left() {
        let mut c = Constraint::new(&EXACT);
        c.right_to_right_of_parent_with_width(-20, 100).unwrap();
        assert_eq!((c.left(), c.right()), (180, 280));
        assert!(c.is_right_constrained());
        assert!(!c.is_left_constrained());
    }

    #[test]
    fn test_left_to_right_of_parent() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_right_of_parent_with_width(-50, 40).unwrap();
        assert_eq!((c.left(), c.right()), (250, 290));
        c.left_to_right_of_parent(-10).unwrap();
        assert_eq!(c.left(), 290);
    }

    #[test]
    fn test_right_to_left_of_parent() {
        let mut c = Constraint::new(&EXACT);
        c.right_to_left_of_parent(30);
        assert_eq!(c.right(), 30);
        c.right_to_left_of_parent_with_width(50, 20);
        assert_eq!((c.left(), c.right()), (30, 50));
    }

    #[test]
    fn test_vertical_parent_anchors() {
        let mut c = Constraint::new(&EXACT);
        c.top_to_top_of_parent_with_height(10, 50);
        assert_eq!((c.top(), c.bottom()), (10, 60));

        c.bottom_to_bottom_of_parent_with_height(0, 40).unwrap();
        assert_eq!((c.top(), c.bottom()), (260, 300));

        c.top_to_bottom_of_parent(-100).unwrap();
        assert_eq!(c.top(), 200);
        c.top_to_bottom_of_parent_with_height(-30, 30).unwrap();
        assert_eq!((c.top(), c.bottom()), (270, 300));

        c.bottom_to_top_of_parent(80);
        assert_eq!(c.bottom(), 80);
        c.bottom_to_top_of_parent_with_height(80, 20);
        assert_eq!((c.top(), c.bottom()), (60, 80));

        c.top_to_top_of_parent(5);
        c.bottom_to_bottom_of_parent(-5).unwrap();
        assert_eq!((c.top(), c.bottom()), (5, 295));
        assert_eq!(c.constrained_edges(), Edges::VERTICAL);
    }

    #[test]
    fn test_last_write_wins() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent(10).left_to_left_of_parent(40);
        assert_eq!(c.left(), 40);
    }

    #[test]
    fn test_right_anchor_with_unknown_width_is_ambiguous() {
        let bounds = ContainerBounds {
            padding: Insets::ZERO,
            width: None,
            height: Some(100),
        };
        let mut c = Constraint::new(&bounds).for_child(2);
        let before = c.rect();

        let expected = LayoutError::AmbiguousContainerExtent {
            axis: Axis::Horizontal,
            child: Some(2),
        };
        assert_eq!(c.right_to_right_of_parent(0).unwrap_err(), expected);
        assert_eq!(c.right_to_right_of_parent_with_width(0, 10).unwrap_err(), expected);
        assert_eq!(c.left_to_right_of_parent(0).unwrap_err(), expected);
        assert_eq!(c.left_to_right_of_parent_with_width(0, 10).unwrap_err(), expected);
        assert_eq!(c.rect(), before);
        assert!(c.constrained_edges().is_empty());

        // The known axis still resolves
        c.bottom_to_bottom_of_parent(0).unwrap();
        assert_eq!(c.bottom(), 100);
    }

    #[test]
    fn test_bottom_anchor_with_unknown_height_is_ambiguous() {
        let bounds = ContainerBounds {
            padding: Insets::ZERO,
            width: Some(100),
            height: None,
        };
        let mut c = Constraint::new(&bounds);
        let expected = LayoutError::AmbiguousContainerExtent {
            axis: Axis::Vertical,
            child: None,
        };
        assert_eq!(c.bottom_to_bottom_of_parent(0).unwrap_err(), expected);
        assert_eq!(c.bottom_to_bottom_of_parent_with_height(0, 5).unwrap_err(), expected);
        assert_eq!(c.top_to_bottom_of_parent(0).unwrap_err(), expected);
        assert_eq!(c.top_to_bottom_of_parent_with_height(0, 5).unwrap_err(), expected);
    }

    #[test]
    fn test_sibling_anchors() {
        let frames = [Rect::new(10, 20, 110, 70), Rect::new(0, 0, 0, 0)];
        let geometry = PlacedGeometry::new(&EXACT, &frames);
        let mut c = Constraint::new(&geometry).for_child(1);

        c.left_to_right_of(0, 5).unwrap();
        assert_eq!(c.left(), 115);
        c.left_to_left_of_with_width(0, 0, 30).unwrap();
        assert_eq!((c.left(), c.right()), (10, 40));
        c.right_to_right_of(0, 0).unwrap();
        assert_eq!(c.right(), 110);
        c.right_to_left_of_with_width(0, -5, 20).unwrap();
        assert_eq!((c.left(), c.right()), (-15, 5));
        c.left_to_left_of(0, 1).unwrap();
        assert_eq!(c.left(), 11);
        c.left_to_right_of_with_width(0, 0, 10).unwrap();
        assert_eq!((c.left(), c.right()), (110, 120));
        c.right_to_left_of(0, 0).unwrap();
        assert_eq!(c.right(), 10);
        c.right_to_right_of_with_width(0, 0, 100).unwrap();
        assert_eq!((c.left(), c.right()), (10, 110));

        c.top_to_bottom_of_with_height(0, 10, 25).unwrap();
        assert_eq!((c.top(), c.bottom()), (80, 105));
        c.top_to_top_of(0, 0).unwrap();
        assert_eq!(c.top(), 20);
        c.top_to_top_of_with_height(0, 0, 5).unwrap();
        assert_eq!((c.top(), c.bottom()), (20, 25));
        c.top_to_bottom_of(0, 0).unwrap();
        assert_eq!(c.top(), 70);
        c.bottom_to_top_of(0, 0).unwrap();
        assert_eq!(c.bottom(), 20);
        c.bottom_to_top_of_with_height(0, 0, 20).unwrap();
        assert_eq!((c.top(), c.bottom()), (0, 20));
        c.bottom_to_bottom_of(0, 0).unwrap();
        assert_eq!(c.bottom(), 70);
        c.bottom_to_bottom_of_with_height(0, 0, 50).unwrap();
        assert_eq!((c.top(), c.bottom()), (20, 70));

        assert_eq!(c.constrained_edges(), Edges::all());
    }

    #[test]
    fn test_unknown_sibling() {
        let frames = [Rect::new(0, 0, 10, 10)];
        let geometry = PlacedGeometry::new(&EXACT, &frames);
        let mut c = Constraint::new(&geometry);
        assert_eq!(
            c.left_to_right_of(3, 0).unwrap_err(),
            LayoutError::UnknownSibling { index: 3 }
        );
    }

    #[test]
    fn test_forward_reference_unchecked_reads_stale_frame() {
        let frames = [Rect::ZERO, Rect::new(40, 40, 80, 80)];
        let geometry = PlacedGeometry::new(&EXACT, &frames);
        let mut c = Constraint::new(&geometry).for_child(0);
        c.left_to_left_of(1, 0).unwrap();
        assert_eq!(c.left(), 40);
    }

    #[test]
    fn test_forward_reference_checked() {
        let frames = [Rect::ZERO, Rect::new(40, 40, 80, 80)];
        let geometry = PlacedGeometry::new(&EXACT, &frames);
        let config = LayoutConfig::default().with_forward_reference_check(true);
        let mut c = Constraint::with_config(&geometry, config).for_child(1);

        assert_eq!(
            c.left_to_left_of(1, 0).unwrap_err(),
            LayoutError::ForwardReference {
                child: 1,
                sibling: 1
            }
        );
        assert!(c.left_to_left_of(0, 0).is_ok());
    }

    #[test]
    fn test_copy_from() {
        let frames = [Rect::new(10, 20, 30, 40)];
        let geometry = PlacedGeometry::new(&EXACT, &frames);
        let mut c = Constraint::new(&geometry);
        c.copy_from(0).unwrap().translate_x(25);
        assert_eq!(c.rect(), Rect::new(35, 20, 55, 40));
        assert_eq!(c.constrained_edges(), Edges::all());
    }

    #[test]
    fn test_translations() {
        let mut c = Constraint::new(&EXACT);
        c.reset_to(10, 10, 60, 40);

        c.translate_x(5);
        assert_eq!(c.rect(), Rect::new(15, 10, 65, 40));
        c.translate_y(-10);
        assert_eq!(c.rect(), Rect::new(15, 0, 65, 30));
        c.translate_left_to(100);
        assert_eq!(c.rect(), Rect::new(100, 0, 150, 30));
        c.translate_right_to(50);
        assert_eq!(c.rect(), Rect::new(0, 0, 50, 30));
        c.translate_top_to(70);
        assert_eq!(c.rect(), Rect::new(0, 70, 50, 100));
        c.translate_bottom_to(30);
        assert_eq!(c.rect(), Rect::new(0, 0, 50, 30));
        c.translate(1, 2, 3, 4);
        assert_eq!(c.rect(), Rect::new(1, 2, 53, 34));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent_with_width(10, 10).set_horizontal_bias(0.7);
        c.reset();
        assert_eq!(c.rect(), Rect::new(0, 0, 300, 300));
        assert_eq!(c.horizontal_bias(), 0.0);
        assert!(c.constrained_edges().is_empty());
    }

    #[test]
    fn test_reset_to_rect_keeps_flags_clears_bias() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent(10).set_vertical_bias(0.4);
        c.reset_to_rect(Rect::new(1, 2, 3, 4));
        assert_eq!(c.rect(), Rect::new(1, 2, 3, 4));
        assert_eq!(c.vertical_bias(), 0.0);
        assert!(c.is_left_constrained());
    }

    #[test]
    fn test_bias_clamps() {
        let mut c = Constraint::new(&EXACT);
        c.set_horizontal_bias(-0.5).set_vertical_bias(3.0);
        assert_eq!(c.horizontal_bias(), 0.0);
        assert_eq!(c.vertical_bias(), 1.0);
        c.set_horizontal_bias(f32::NAN);
        assert_eq!(c.horizontal_bias(), 0.0);
        assert_eq!(c.rect(), Rect::new(0, 0, 300, 300));
    }

    #[test]
    fn test_validate() {
        let mut c = Constraint::new(&EXACT).for_child(4);
        c.reset_to(50, 0, 20, 10);

        let err = c.validate(SizePolicy::CONSTRAINED).unwrap_err();
        assert_eq!(
            err,
            LayoutError::ConstraintViolation {
                child: Some(4),
                left: 50,
                top: 0,
                right: 20,
                bottom: 10,
            }
        );

        let wrap_width = SizePolicy::new(Dimension::WrapContent, Dimension::Constrained);
        assert!(c.validate(wrap_width).is_ok());

        c.reset_to(0, 30, 10, 10);
        assert!(c.validate(wrap_width).is_err());
        assert!(c.validate(SizePolicy::WRAP_CONTENT).is_ok());
    }

    #[test]
    fn test_measure_specs() {
        let mut c = Constraint::new(&EXACT);
        c.reset_to(10, 10, 110, 60);
        assert_eq!(c.width_spec(Dimension::Constrained), MeasureSpec::exact(100));
        assert_eq!(c.height_spec(Dimension::Constrained), MeasureSpec::exact(50));

        let wrap = c.width_spec(Dimension::WrapContent);
        assert_eq!(wrap.mode, MeasureMode::AtMost);
        assert_eq!(wrap.size, i32::MAX >> 1);

        c.reset_to(100, 60, 10, 10);
        assert_eq!(c.width_spec(Dimension::Constrained), MeasureSpec::exact(0));
        assert_eq!(c.height_spec(Dimension::Constrained), MeasureSpec::exact(0));
    }

    #[test]
    fn test_measure_spec_uses_configured_unbounded() {
        let config = LayoutConfig::default().with_unbounded_size(2048);
        let c = Constraint::with_config(&EXACT, config);
        assert_eq!(c.height_spec(Dimension::WrapContent), MeasureSpec::at_most(2048));
    }

    #[test]
    fn test_weighted_sizes() {
        let c = Constraint::new(&EXACT);
        assert_eq!(c.weighted_width(3, 1).unwrap(), 100);
        assert_eq!(c.weighted_height(3, 1).unwrap(), 101);
        assert_eq!(c.weighted_width_after(2, 1, 100).unwrap(), 100);
        assert_eq!(c.weighted_height_after(2, 1, 100).unwrap(), 101);
    }

    #[test]
    fn test_weighted_ambiguous_reports_child() {
        let bounds = ContainerBounds::unknown();
        let c = Constraint::new(&bounds).for_child(7);
        assert_eq!(
            c.weighted_width(2, 1).unwrap_err(),
            LayoutError::AmbiguousContainerExtent {
                axis: Axis::Horizontal,
                child: Some(7)
            }
        );
        assert!(matches!(
            c.weighted_height(2, 1).unwrap_err(),
            LayoutError::AmbiguousContainerExtent {
                axis: Axis::Vertical,
                ..
            }
        ));
    }

    #[test]
    fn test_geometry_queries() {
        let bounds = ContainerBounds::exact(300, 200).with_padding(Insets::uniform(10));
        let frames = [Rect::new(10, 10, 60, 40)];
        let geometry = PlacedGeometry::new(&bounds, &frames);
        let c = Constraint::new(&geometry);

        assert_eq!(c.parent_width(), Some(280));
        assert_eq!(c.parent_height(), Some(180));
        assert_eq!(c.sibling_width(0).unwrap(), 50);
        assert_eq!(c.sibling_height(0).unwrap(), 30);
        assert_eq!(c.sibling_left(0).unwrap(), 10);
        assert_eq!(c.sibling_top(0).unwrap(), 10);
        assert_eq!(c.sibling_right(0).unwrap(), 60);
        assert_eq!(c.sibling_bottom(0).unwrap(), 40);

        let unknown = ContainerBounds::unknown();
        assert_eq!(Constraint::new(&unknown).parent_width(), None);
    }

    #[test]
    fn test_into_box_and_back() {
        let mut c = Constraint::new(&EXACT);
        c.left_to_left_of_parent_with_width(5, 10).set_horizontal_bias(0.5);
        let retained = c.into_box();

        let rebound = Constraint::from_box(&EXACT, retained, LayoutConfig::default());
        assert_eq!(rebound.rect(), Rect::new(5, 0, 15, 300));
        assert_eq!(rebound.horizontal_bias(), 0.5);
        assert!(rebound.is_left_constrained());
    }

    #[test]
    fn test_display() {
        let c = Constraint::new(&EXACT);
        let text = c.to_string();
        assert!(text.contains("right=300"));
        assert!(format!("{c:?}").contains("Constraint"));
    }

    #[test]
    fn test_box_serde_roundtrip() {
        let mut state = ConstraintBox::new(1, 2, 3, 4);
        state.set_vertical_bias(0.25);
        let json = serde_json::to_string(&state).unwrap();
        let back: ConstraintBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    proptest! {
        #[test]
        fn prop_left_to_left_of_parent(offset in any::<i32>(), pad in 0i32..50) {
            let bounds = ContainerBounds::exact(300, 300).with_padding(Insets::uniform(pad));
            let mut c = Constraint::new(&bounds);
            let (top, bottom) = (c.top(), c.bottom());
            c.left_to_left_of_parent(offset);
            prop_assert_eq!(c.left(), pad.wrapping_add(offset));
            prop_assert!(c.is_left_constrained());
            prop_assert_eq!(c.top(), top);
            prop_assert_eq!(c.bottom(), bottom);
        }

        #[test]
        fn prop_right_with_extent(offset in any::<i32>(), extent in any::<i32>()) {
            let mut c = Constraint::new(&EXACT);
            c.right_to_right_of_parent_with_width(offset, extent).unwrap();
            prop_assert_eq!(c.left(), c.right().wrapping_sub(extent));
        }

        #[test]
        fn prop_bias_clamp(v in -1000.0f32..1000.0) {
            let mut c = Constraint::new(&EXACT);
            c.set_horizontal_bias(v).set_vertical_bias(v);
            prop_assert_eq!(c.horizontal_bias(), v.clamp(0.0, 1.0));
            prop_assert_eq!(c.vertical_bias(), v.clamp(0.0, 1.0));
        }

        #[test]
        fn prop_unknown_extent_always_ambiguous(offset in -1000i32..1000, extent in 0i32..1000) {
            let bounds = ContainerBounds::unknown();
            let mut c = Constraint::new(&bounds);
            prop_assert!(c.right_to_right_of_parent(offset).is_err());
            prop_assert!(c.left_to_right_of_parent_with_width(offset, extent).is_err());
            prop_assert!(c.bottom_to_bottom_of_parent(offset).is_err());
            prop_assert!(c.top_to_bottom_of_parent_with_height(offset, extent).is_err());
        }

        #[test]
        fn prop_wrap_content_always_legal(l in -1000i32..1000, t in -1000i32..1000, r in -1000i32..1000, b in -1000i32..1000) {
            let state = ConstraintBox::new(l, t, r, b);
            prop_assert!(state.validate(SizePolicy::WRAP_CONTENT, Some(0)).is_ok());
        }

        #[test]
        fn prop_inverted_constrained_fails(l in -1000i32..1000, w in 1i32..1000) {
            let state = ConstraintBox::new(l, 0, l - w, 10);
            prop_assert!(state.validate(SizePolicy::CONSTRAINED, Some(0)).is_err());
        }

        #[test]
        fn prop_translate_to_preserves_extent(l in -1000i32..1000, w in 0i32..1000, x in -1000i32..1000) {
            let mut state = ConstraintBox::new(l, 0, l + w, 10);
            state.translate_left_to(x);
            prop_assert_eq!(state.width(), w);
            state.translate_right_to(x);
            prop_assert_eq!(state.width(), w);
            prop_assert_eq!(state.right, x);
        }
    }
}
