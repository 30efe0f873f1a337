//! Record of which edges of a constraint were explicitly anchored.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of rectangle edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Edges: u8 {
        /// Left edge.
        const LEFT   = 0b0001;
        /// Top edge.
        const TOP    = 0b0010;
        /// Right edge.
        const RIGHT  = 0b0100;
        /// Bottom edge.
        const BOTTOM = 0b1000;
    }
}

impl Edges {
    /// Both horizontal edges.
    pub const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    /// Both vertical edges.
    pub const VERTICAL: Self = Self::TOP.union(Self::BOTTOM);
}
