use std::fmt::{Debug, Display};

use crate::VertexId;

/// Optional, non-negative weight of an edge.
/// It is only carried along for presentation, traversals ignore it.
pub type Weight = u32;

/// Number of edges in a graph. Parallel edges are counted individually.
pub type NumEdges = u32;

/// An edge is defined by two endpoints and an optional weight.
/// Whether an edge is directed is up to the graph it is stored in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Option<Weight>,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "({},{};{w})", self.from, self.to),
            None => write!(f, "({},{})", self.from, self.to),
        }
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates an unweighted edge `from -> to`
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// Creates a weighted edge `from -> to`
    pub const fn weighted(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Reverses the edge by switching the endpoints. The weight is kept.
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Returns the weight if it is present and positive.
    /// A zero weight is treated like an absent one.
    pub fn label(&self) -> Option<Weight> {
        self.weight.filter(|&w| w > 0)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from(value: (VertexId, VertexId)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<&(VertexId, VertexId)> for Edge {
    fn from(value: &(VertexId, VertexId)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from(value: (VertexId, VertexId, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2)
    }
}

impl From<&(VertexId, VertexId, Weight)> for Edge {
    fn from(value: &(VertexId, VertexId, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_keeps_weight() {
        let e = Edge::weighted(1, 2, 7);
        assert_eq!(e.reverse(), Edge::weighted(2, 1, 7));
        assert_eq!(e.reverse().reverse(), e);
    }

    #[test]
    fn label_ignores_zero() {
        assert_eq!(Edge::new(1, 2).label(), None);
        assert_eq!(Edge::weighted(1, 2, 0).label(), None);
        assert_eq!(Edge::weighted(1, 2, 3).label(), Some(3));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge::new(3, 3)), "(3,3)");
        assert_eq!(format!("{:?}", Edge::weighted(1, 4, 2)), "(1,4;2)");
        assert!(Edge::new(3, 3).is_loop());
    }
}
