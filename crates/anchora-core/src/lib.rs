//! Core types for the Anchora constraint layout engine.
//!
//! This crate provides the foundational types shared by the layout crate:
//! - Geometric primitives: [`Size`], [`Rect`], [`Insets`]
//! - Measurement directives: [`MeasureSpec`], [`MeasureMode`]
//! - Size policies: [`SizePolicy`], [`Dimension`]
//! - Constrained-edge flags: [`Edges`]
//! - The element contract: [`Measurable`]

mod edges;
mod element;
mod geometry;
mod measure;

pub use edges::Edges;
pub use element::Measurable;
pub use geometry::{Insets, Rect, Size};
pub use measure::{Axis, Dimension, MeasureMode, MeasureSpec, SizePolicy};
