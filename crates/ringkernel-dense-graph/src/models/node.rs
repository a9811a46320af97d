//! Vertex and weight types for dense graphs.
//!
//! - [`VertexId`]: index of a vertex in `[0, V)`
//! - [`Weight`]: value stored in an occupied matrix cell

/// Edge weight stored in a matrix cell.
///
/// Absent edges are `None` at the cell level, so every `i32` value is a
/// legitimate weight.
pub type Weight = i32;

/// Cell value that marks a directed arc as present.
pub const ARC_WEIGHT: Weight = 1;

/// Vertex identifier.
///
/// Using a newtype prevents mixing up vertex indices with weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new vertex ID.
    pub const fn new(id: u32) -> Self {
        VertexId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of this vertex in row/column order.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl TryFrom<usize> for VertexId {
    type Error = std::num::TryFromIntError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        u32::try_from(id).map(VertexId)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0 as usize
    }
}
