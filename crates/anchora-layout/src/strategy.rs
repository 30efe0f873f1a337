//! Population strategies: where children come from and how they are anchored.

use anchora_core::Measurable;

use crate::constraint::Constraint;
use crate::error::LayoutError;

/// Supplies the engine's children and their constraints.
///
/// The engine asks for the child count at the start of every measure pass,
/// creates missing elements on demand and asks for each child's constraint
/// in ascending index order. Sibling anchors are therefore only valid for
/// indices below the one being resolved.
pub trait PopulationStrategy {
    /// Element type managed by the engine.
    type Element: Measurable;

    /// Number of children for the next pass.
    fn child_count(&self) -> usize;

    /// Create the element at `index`. Called once per index until the
    /// element is dropped by a shrinking child count.
    fn create_element(&mut self, index: usize) -> Self::Element;

    /// Anchor the child at `index`.
    ///
    /// `constraint` arrives reset to the container's edges.
    fn constraint_for(
        &mut self,
        index: usize,
        element: &Self::Element,
        constraint: &mut Constraint<'_>,
    ) -> Result<(), LayoutError>;

    /// Called right before the child measures itself.
    fn before_measure(&mut self, _index: usize, _element: &mut Self::Element) {}

    /// Called right after the child measured itself.
    fn after_measure(&mut self, _index: usize, _element: &mut Self::Element) {}

    /// Called before the child receives its frame.
    fn before_layout(&mut self, _index: usize, _element: &mut Self::Element) {}

    /// Called after the child received its frame.
    fn after_layout(&mut self, _index: usize, _element: &mut Self::Element) {}
}

/// One position in an [`OperatorList`]: creates its element, anchors it
/// and receives its lifecycle hooks.
pub trait ElementOperator<E> {
    /// Create the element.
    fn create(&mut self) -> E;

    /// Anchor the element.
    fn constrain(&mut self, element: &E, constraint: &mut Constraint<'_>)
        -> Result<(), LayoutError>;

    /// Called right before the element measures itself.
    fn before_measure(&mut self, _element: &mut E) {}

    /// Called right after the element measured itself.
    fn after_measure(&mut self, _element: &mut E) {}

    /// Called before the element receives its frame.
    fn before_layout(&mut self, _element: &mut E) {}

    /// Called after the element received its frame.
    fn after_layout(&mut self, _element: &mut E) {}
}

/// A strategy backed by one operator per child.
///
/// # Examples
///
/// ```
/// use anchora_core::{Measurable, MeasureSpec, Rect, Size, SizePolicy};
/// use anchora_layout::{Constraint, ElementOperator, LayoutError, OperatorList, PopulationStrategy};
///
/// struct Block(Rect);
///
/// impl Measurable for Block {
///     fn size_policy(&self) -> SizePolicy {
///         SizePolicy::CONSTRAINED
///     }
///     fn measure(&mut self, w: MeasureSpec, h: MeasureSpec) -> Size {
///         Size::new(w.size, h.size)
///     }
///     fn layout(&mut self, frame: Rect) {
///         self.0 = frame;
///     }
/// }
///
/// struct Header;
///
/// impl ElementOperator<Block> for Header {
///     fn create(&mut self) -> Block {
///         Block(Rect::ZERO)
///     }
///     fn constrain(&mut self, _: &Block, c: &mut Constraint<'_>) -> Result<(), LayoutError> {
///         c.top_to_top_of_parent_with_height(0, 48);
///         Ok(())
///     }
/// }
///
/// let list = OperatorList::new().with(Header);
/// assert_eq!(list.child_count(), 1);
/// ```
pub struct OperatorList<E> {
    operators: Vec<Box<dyn ElementOperator<E>>>,
}

impl<E> Default for OperatorList<E> {
    fn default() -> Self {
        Self {
            operators: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for OperatorList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorList")
            .field("len", &self.operators.len())
            .finish()
    }
}

impl<E> OperatorList<E> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from boxed operators.
    #[must_use]
    pub fn from_operators(operators: Vec<Box<dyn ElementOperator<E>>>) -> Self {
        Self { operators }
    }

    /// Append an operator.
    #[must_use]
    pub fn with(mut self, operator: impl ElementOperator<E> + 'static) -> Self {
        self.push(operator);
        self
    }

    /// Append an operator.
    pub fn push(&mut self, operator: impl ElementOperator<E> + 'static) {
        self.operators.push(Box::new(operator));
    }

    /// Remove and return the last operator.
    pub fn pop(&mut self) -> Option<Box<dyn ElementOperator<E>>> {
        self.operators.pop()
    }

    /// Number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<E: Measurable> PopulationStrategy for OperatorList<E> {
    type Element = E;

    fn child_count(&self) -> usize {
        self.operators.len()
    }

    fn create_element(&mut self, index: usize) -> E {
        self.operators[index].create()
    }

    fn constraint_for(
        &mut self,
        index: usize,
        element: &E,
        constraint: &mut Constraint<'_>,
    ) -> Result<(), LayoutError> {
        self.operators[index].constrain(element, constraint)
    }

    fn before_measure(&mut self, index: usize, element: &mut E) {
        if let Some(op) = self.operators.get_mut(index) {
            op.before_measure(element);
        }
    }

    fn after_measure(&mut self, index: usize, element: &mut E) {
        if let Some(op) = self.operators.get_mut(index) {
            op.after_measure(element);
        }
    }

    fn before_layout(&mut self, index: usize, element: &mut E) {
        if let Some(op) = self.operators.get_mut(index) {
            op.before_layout(element);
        }
    }

    fn after_layout(&mut self, index: usize, element: &mut E) {
        if let Some(op) = self.operators.get_mut(index) {
            op.after_layout(element);
        }
    }
}
