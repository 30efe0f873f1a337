#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
//! Edge-anchored constraint layout engine for Anchora.
//!
//! Each child of a container declares where its four edges sit, relative to
//! the container's edges or to the edges of siblings placed before it. The
//! engine resolves those anchors in index order, measures every child
//! against its resolved box, places it according to its bias and finally
//! sizes the container from the children's extents.
//!
//! # Passes
//!
//! - **Measure**: [`LayoutEngine::measure`] resolves, checks, measures and
//!   places every child, then returns the container's own size.
//! - **Layout**: [`LayoutEngine::layout`] hands each visible child its frame.
//!
//! # Example
//!
//! ```
//! use anchora_core::{Measurable, MeasureSpec, Rect, Size, SizePolicy};
//! use anchora_layout::{Constraint, LayoutEngine, LayoutError, PopulationStrategy};
//!
//! struct Panel {
//!     frame: Rect,
//! }
//!
//! impl Measurable for Panel {
//!     fn size_policy(&self) -> SizePolicy {
//!         SizePolicy::CONSTRAINED
//!     }
//!     fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
//!         Size::new(width.size, height.size)
//!     }
//!     fn layout(&mut self, frame: Rect) {
//!         self.frame = frame;
//!     }
//! }
//!
//! struct Split;
//!
//! impl PopulationStrategy for Split {
//!     type Element = Panel;
//!
//!     fn child_count(&self) -> usize {
//!         2
//!     }
//!
//!     fn create_element(&mut self, _index: usize) -> Panel {
//!         Panel { frame: Rect::ZERO }
//!     }
//!
//!     fn constraint_for(
//!         &mut self,
//!         index: usize,
//!         _element: &Panel,
//!         c: &mut Constraint<'_>,
//!     ) -> Result<(), LayoutError> {
//!         let half = c.weighted_width(2, 1)?;
//!         if index == 0 {
//!             c.left_to_left_of_parent_with_width(0, half);
//!         } else {
//!             c.left_to_right_of_with_width(0, 0, half)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut engine = LayoutEngine::new(Split);
//! let size = engine.measure(MeasureSpec::exact(200), MeasureSpec::exact(80))?;
//! engine.layout();
//!
//! assert_eq!(size, Size::new(200, 80));
//! assert_eq!(engine.child(1).unwrap().frame, Rect::new(100, 0, 200, 80));
//! # Ok::<(), LayoutError>(())
//! ```

mod bias;
mod config;
mod constraint;
mod engine;
mod error;
mod provider;
mod strategy;
mod weight;

pub use bias::distribute;
pub use config::LayoutConfig;
pub use constraint::{Constraint, ConstraintBox};
pub use engine::{ExtraId, LayoutEngine};
pub use error::LayoutError;
pub use provider::{ContainerBounds, GeometryProvider, PlacedGeometry};
pub use strategy::{ElementOperator, OperatorList, PopulationStrategy};
pub use weight::weighted_extent;
