//! Layout engine: the measure pass, the placement pass and extra elements.

use anchora_core::{Insets, MeasureSpec, Measurable, Rect, Size};
use std::fmt;
use tracing::{debug, trace, warn};

use crate::bias;
use crate::config::LayoutConfig;
use crate::constraint::{Constraint, ConstraintBox};
use crate::error::LayoutError;
use crate::provider::{ContainerBounds, GeometryProvider, PlacedGeometry};
use crate::strategy::{OperatorList, PopulationStrategy};

/// Handle of an element placed outside the full pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtraId(u64);

struct Extra<E> {
    id: ExtraId,
    element: E,
    frame: Rect,
}

/// Orchestrates the two passes of a layout cycle for one container.
///
/// The host calls [`measure`](Self::measure) with the directives its own
/// parent gave it, then [`layout`](Self::layout). Frames computed by the
/// measure pass are kept in a position store indexed by child and serve as
/// the sibling geometry for later children and later passes.
///
/// The engine is also a [`GeometryProvider`] over the bounds and frames of
/// the last measure pass, so constraints for extra elements can be anchored
/// with [`obtain_constraint`](Self::obtain_constraint).
pub struct LayoutEngine<P: PopulationStrategy> {
    config: LayoutConfig,
    padding: Insets,
    bounds: ContainerBounds,
    frames: Vec<Rect>,
    children: Vec<P::Element>,
    extras: Vec<Extra<P::Element>>,
    next_extra: u64,
    strategy: P,
    layout_requested: bool,
    relayout_guard: bool,
    measured: Size,
}

impl<P: PopulationStrategy> fmt::Debug for LayoutEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("frames", &self.frames)
            .field("extras", &self.extras.len())
            .field("layout_requested", &self.layout_requested)
            .field("measured", &self.measured)
            .finish_non_exhaustive()
    }
}

impl<E: Measurable> LayoutEngine<OperatorList<E>> {
    /// Create an engine driven by one operator per child.
    #[must_use]
    pub fn with_operators(operators: OperatorList<E>) -> Self {
        Self::new(operators)
    }
}

impl<P: PopulationStrategy> LayoutEngine<P> {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(strategy: P) -> Self {
        Self::with_config(strategy, LayoutConfig::default())
    }

    /// Create an engine.
    #[must_use]
    pub fn with_config(strategy: P, config: LayoutConfig) -> Self {
        Self {
            config,
            padding: Insets::ZERO,
            bounds: ContainerBounds::unknown(),
            frames: Vec::new(),
            children: Vec::new(),
            extras: Vec::new(),
            next_extra: 0,
            strategy,
            layout_requested: true,
            relayout_guard: false,
            measured: Size::ZERO,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration and request a new cycle.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.request_layout();
    }

    /// Container padding.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Set the container padding and request a new cycle.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        self.bounds = self.bounds.with_padding(padding);
        self.request_layout();
    }

    /// Container bounds of the last measure pass.
    #[must_use]
    pub const fn bounds(&self) -> &ContainerBounds {
        &self.bounds
    }

    /// Container size resolved by the last measure pass.
    #[must_use]
    pub const fn measured_size(&self) -> Size {
        self.measured
    }

    /// Population strategy.
    #[must_use]
    pub const fn strategy(&self) -> &P {
        &self.strategy
    }

    /// Population strategy, mutably. Request a layout after changing it.
    pub fn strategy_mut(&mut self) -> &mut P {
        &mut self.strategy
    }

    /// Frames stored by the last measure pass.
    #[must_use]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Stored frame of the child at `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    /// Elements created so far.
    #[must_use]
    pub fn children(&self) -> &[P::Element] {
        &self.children
    }

    /// Element at `index`, if created.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&P::Element> {
        self.children.get(index)
    }

    /// Element at `index`, mutably.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut P::Element> {
        self.children.get_mut(index)
    }

    // =========================================================================
    // Layout requests
    // =========================================================================

    /// Ask the host for a new cycle. Ignored while an extra element is
    /// being added or removed.
    pub fn request_layout(&mut self) {
        if self.relayout_guard {
            trace!("layout request suppressed");
            return;
        }
        self.layout_requested = true;
    }

    /// Check if a cycle was requested.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Read and clear the request flag.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    // =========================================================================
    // Constraints
    // =========================================================================

    /// A constraint reset to the container's edges, bound to this engine.
    ///
    /// The borrow ends before the engine can run another pass, so the
    /// constraint cannot observe geometry from a later pass.
    #[must_use]
    pub fn obtain_constraint(&self) -> Constraint<'_> {
        Constraint::with_config(self, self.config)
    }

    /// An owned constraint box reset to the container's edges.
    ///
    /// Bind it again with [`Constraint::from_box`] to anchor it.
    #[must_use]
    pub fn new_constraint(&self) -> ConstraintBox {
        self.obtain_constraint().into_box()
    }

    // =========================================================================
    // Passes
    // =========================================================================

    /// Run the measure pass and return the container's resolved size.
    ///
    /// Children are resolved in index order. The first failing child aborts
    /// the pass; frames of children before it are already updated.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, LayoutError> {
        let count = self.strategy.child_count();
        if self.children.len() > count {
            debug!(from = self.children.len(), to = count, "dropping surplus children");
            self.children.truncate(count);
        }
        self.frames.truncate(count);
        self.bounds = ContainerBounds::from_specs(width, height, self.padding);

        let mut most_right = 0;
        let mut most_bottom = 0;

        for index in 0..count {
            if index == self.children.len() {
                let element = self.strategy.create_element(index);
                self.children.push(element);
            }

            let state = {
                let geometry = PlacedGeometry::new(&self.bounds, &self.frames);
                let mut constraint =
                    Constraint::with_config(&geometry, self.config).for_child(index);
                self.strategy
                    .constraint_for(index, &self.children[index], &mut constraint)
                    .map_err(|err| {
                        warn!(index, %err, "constraint rejected");
                        err
                    })?;
                constraint.into_box()
            };

            let child = &mut self.children[index];
            let policy = child.size_policy();
            if let Err(err) = state.validate(policy, Some(index)) {
                warn!(index, %state, "illegal constraint");
                return Err(err);
            }

            let width_spec = state.width_spec(policy.width, self.config.unbounded_size);
            let height_spec = state.height_spec(policy.height, self.config.unbounded_size);

            self.strategy.before_measure(index, child);
            let natural = child.measure(width_spec, height_spec);
            self.strategy.after_measure(index, child);

            let frame = bias::distribute(&state, natural, self.config.bias_nudge);
            trace!(index, %state, ?natural, ?frame, "child placed");

            if index < self.frames.len() {
                self.frames[index] = frame;
            } else {
                self.frames.push(frame);
            }
            most_right = most_right.max(frame.right);
            most_bottom = most_bottom.max(frame.bottom);
        }

        self.measured = Size::new(width.resolve(most_right), height.resolve(most_bottom));
        debug!(
            children = count,
            most_right,
            most_bottom,
            width = self.measured.width,
            height = self.measured.height,
            "measure pass complete"
        );
        Ok(self.measured)
    }

    /// Run the placement pass: hand every visible child its stored frame.
    pub fn layout(&mut self) {
        let count = self
            .strategy
            .child_count()
            .min(self.children.len())
            .min(self.frames.len());

        for index in 0..count {
            let child = &mut self.children[index];
            if !child.is_visible() {
                continue;
            }
            self.strategy.before_layout(index, child);
            child.layout(self.frames[index]);
            self.strategy.after_layout(index, child);
        }
        self.layout_requested = false;
    }

    // =========================================================================
    // Extra elements
    // =========================================================================

    /// Measure, place and lay out an element outside the full pass.
    ///
    /// The constraint is taken as already resolved. Layout requests raised
    /// while the element is added are suppressed.
    pub fn add_extra_element(
        &mut self,
        mut element: P::Element,
        state: ConstraintBox,
    ) -> Result<ExtraId, LayoutError> {
        self.relayout_guard = true;
        let placed = self.place_extra(&mut element, &state);
        self.request_layout();
        self.relayout_guard = false;

        let frame = placed?;
        let id = ExtraId(self.next_extra);
        self.next_extra += 1;
        debug!(id = id.0, ?frame, "extra element added");
        self.extras.push(Extra { id, element, frame });
        Ok(id)
    }

    fn place_extra(
        &self,
        element: &mut P::Element,
        state: &ConstraintBox,
    ) -> Result<Rect, LayoutError> {
        let policy = element.size_policy();
        if let Err(err) = state.validate(policy, None) {
            warn!(%state, "illegal constraint for extra element");
            return Err(err);
        }
        let natural = element.measure(
            state.width_spec(policy.width, self.config.unbounded_size),
            state.height_spec(policy.height, self.config.unbounded_size),
        );
        let frame = bias::distribute(state, natural, self.config.bias_nudge);
        element.layout(frame);
        Ok(frame)
    }

    /// Remove an extra element and hand it back.
    pub fn remove_extra_element(&mut self, id: ExtraId) -> Option<P::Element> {
        let position = self.extras.iter().position(|extra| extra.id == id)?;
        self.relayout_guard = true;
        let extra = self.extras.remove(position);
        self.request_layout();
        self.relayout_guard = false;
        debug!(id = id.0, "extra element removed");
        Some(extra.element)
    }

    /// Frame of an extra element.
    #[must_use]
    pub fn extra_frame(&self, id: ExtraId) -> Option<Rect> {
        self.extras
            .iter()
            .find(|extra| extra.id == id)
            .map(|extra| extra.frame)
    }

    /// Extra element by handle.
    #[must_use]
    pub fn extra(&self, id: ExtraId) -> Option<&P::Element> {
        self.extras
            .iter()
            .find(|extra| extra.id == id)
            .map(|extra| &extra.element)
    }

    /// Number of extra elements.
    #[must_use]
    pub fn extra_count(&self) -> usize {
        self.extras.len()
    }
}

impl<P: PopulationStrategy> GeometryProvider for LayoutEngine<P> {
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
        self.frame(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchora_core::{Axis, SizePolicy};

    #[derive(Debug, Default)]
    struct Fixed {
        natural: Size,
        policy: SizePolicy,
        visible: bool,
        frame: Option<Rect>,
        measured_with: Option<(MeasureSpec, MeasureSpec)>,
    }

    impl Fixed {
        fn new(width: i32, height: i32) -> Self {
            Self {
                natural: Size::new(width, height),
                visible: true,
                ..Self::default()
            }
        }
    }

    impl Measurable for Fixed {
        fn size_policy(&self) -> SizePolicy {
            self.policy
        }

        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            self.measured_with = Some((width, height));
            Size::new(width.constrain(self.natural.width), height.constrain(self.natural.height))
        }

        fn layout(&mut self, frame: Rect) {
            self.frame = Some(frame);
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    /// Children of fixed natural size laid out left to right.
    #[derive(Debug, Default)]
    struct Row {
        widths: Vec<i32>,
        created: usize,
    }

    impl PopulationStrategy for Row {
        type Element = Fixed;

        fn child_count(&self) -> usize {
            self.widths.len()
        }

        fn create_element(&mut self, index: usize) -> Fixed {
            self.created += 1;
            let mut element = Fixed::new(self.widths[index], 20);
            element.policy = SizePolicy::WRAP_CONTENT;
            element
        }

        fn constraint_for(
            &mut self,
            index: usize,
            _element: &Fixed,
            constraint: &mut Constraint<'_>,
        ) -> Result<(), LayoutError> {
            if index == 0 {
                constraint.left_to_left_of_parent(0);
            } else {
                constraint.left_to_right_of(index - 1, 0)?;
            }
            constraint.top_to_top_of_parent(0);
            Ok(())
        }
    }

    fn row(widths: &[i32]) -> LayoutEngine<Row> {
        LayoutEngine::new(Row {
            widths: widths.to_vec(),
            created: 0,
        })
    }

    #[test]
    fn test_engine_new() {
        let engine = row(&[]);
        assert!(engine.frames().is_empty());
        assert!(engine.needs_layout());
        assert_eq!(engine.measured_size(), Size::ZERO);
        assert_eq!(engine.extra_count(), 0);
    }

    #[test]
    fn test_measure_chains_siblings() {
        let mut engine = row(&[30, 40, 50]);
        let size = engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();

        assert_eq!(engine.frame(0), Some(Rect::new(0, 0, 30, 20)));
        assert_eq!(engine.frame(1), Some(Rect::new(30, 0, 70, 20)));
        assert_eq!(engine.frame(2), Some(Rect::new(70, 0, 120, 20)));
        assert_eq!(size, Size::new(120, 20));
    }

    #[test]
    fn test_measure_resolves_container_size() {
        let mut engine = row(&[30, 40, 50]);
        let size = engine
            .measure(MeasureSpec::at_most(100), MeasureSpec::exact(60))
            .unwrap();
        assert_eq!(size, Size::new(100, 60));
    }

    #[test]
    fn test_elements_created_once() {
        let mut engine = row(&[10, 10]);
        engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();
        engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();
        assert_eq!(engine.strategy().created, 2);
        assert_eq!(engine.children().len(), 2);
    }

    #[test]
    fn test_shrinking_child_count_drops_surplus() {
        let mut engine = row(&[10, 20, 30]);
        engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();
        engine.strategy_mut().widths.truncate(1);
        let size = engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();

        assert_eq!(engine.children().len(), 1);
        assert_eq!(engine.frames().len(), 1);
        assert_eq!(size.width, 10);
    }

    #[test]
    fn test_content_driven_child_gets_at_most() {
        let mut engine = row(&[10]);
        engine
            .measure(MeasureSpec::exact(300), MeasureSpec::exact(300))
            .unwrap();
        let (width, _) = engine.child(0).unwrap().measured_with.unwrap();
        assert_eq!(width, MeasureSpec::at_most(i32::MAX >> 1));
    }

    #[test]
    fn test_layout_hands_out_frames() {
        let mut engine = row(&[30, 40]);
        engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();
        engine.child_mut(1).unwrap().visible = false;
        engine.layout();

        assert_eq!(engine.child(0).unwrap().frame, Some(Rect::new(0, 0, 30, 20)));
        assert_eq!(engine.child(1).unwrap().frame, None);
        assert!(!engine.needs_layout());
    }

    #[test]
    fn test_layout_before_measure_is_noop() {
        let mut engine = row(&[30]);
        engine.layout();
        assert!(engine.children().is_empty());
    }

    #[test]
    fn test_padding_offsets_children() {
        let mut engine = row(&[30]);
        engine.set_padding(Insets::new(5, 7, 0, 0));
        engine
            .measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .unwrap();
        assert_eq!(engine.frame(0), Some(Rect::new(5, 7, 35, 27)));
        assert_eq!(engine.padding(), Insets::new(5, 7, 0, 0));
    }

    #[test]
    fn test_obtain_constraint_uses_last_bounds() {
        let mut engine = row(&[30]);
        engine
            .measure(MeasureSpec::exact(200), MeasureSpec::exact(100))
            .unwrap();

        let mut constraint = engine.obtain_constraint();
        assert_eq!(constraint.rect(), Rect::new(0, 0, 200, 100));
        constraint.left_to_right_of(0, 5).unwrap();
        assert_eq!(constraint.left(), 35);

        assert_eq!(engine.new_constraint(), ConstraintBox::new(0, 0, 200, 100));
    }

    #[test]
    fn test_obtain_constraint_ambiguous_before_exact_pass() {
        let engine = row(&[]);
        let mut constraint = engine.obtain_constraint();
        assert!(matches!(
            constraint.right_to_right_of_parent(0),
            Err(LayoutError::AmbiguousContainerExtent {
                axis: Axis::Horizontal,
                child: None
            })
        ));
    }

    #[test]
    fn test_extra_element_suppresses_layout_request() {
        let mut engine = row(&[30]);
        engine
            .measure(MeasureSpec::exact(200), MeasureSpec::exact(100))
            .unwrap();
        engine.layout();
        assert!(!engine.needs_layout());

        let mut constraint = engine.obtain_constraint();
        constraint
            .left_to_right_of_with_width(0, 10, 50)
            .unwrap()
            .top_to_top_of_parent_with_height(0, 20);
        let state = constraint.into_box();

        let id = engine.add_extra_element(Fixed::new(50, 20), state).unwrap();
        assert!(!engine.needs_layout());
        assert_eq!(engine.extra_frame(id), Some(Rect::new(40, 0, 90, 20)));
        assert_eq!(engine.extra(id).unwrap().frame, Some(Rect::new(40, 0, 90, 20)));
        assert_eq!(engine.extra_count(), 1);

        let removed = engine.remove_extra_element(id).unwrap();
        assert_eq!(removed.frame, Some(Rect::new(40, 0, 90, 20)));
        assert!(!engine.needs_layout());
        assert!(engine.remove_extra_element(id).is_none());
    }

    #[test]
    fn test_extra_element_illegal_constraint() {
        let mut engine = row(&[]);
        let state = ConstraintBox::new(50, 0, 10, 10);
        let err = engine.add_extra_element(Fixed::new(1, 1), state).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::ConstraintViolation { child: None, .. }
        ));
        assert_eq!(engine.extra_count(), 0);

        // The guard is lowered again after a failure
        engine.take_layout_request();
        engine.request_layout();
        assert!(engine.needs_layout());
    }

    #[test]
    fn test_take_layout_request() {
        let mut engine = row(&[]);
        assert!(engine.take_layout_request());
        assert!(!engine.take_layout_request());
        engine.set_config(LayoutConfig::default().with_bias_nudge(0));
        assert!(engine.take_layout_request());
        assert_eq!(engine.config().bias_nudge, 0);
    }

    #[test]
    fn test_engine_geometry_provider() {
        let mut engine = row(&[25]);
        engine
            .measure(MeasureSpec::exact(80), MeasureSpec::unspecified())
            .unwrap();
        assert_eq!(engine.parent_right(), Some(80));
        assert_eq!(engine.parent_bottom(), None);
        assert_eq!(engine.sibling_right(0), Some(25));
        assert_eq!(engine.bounds().width, Some(80));
    }
}
