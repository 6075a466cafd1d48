/*!
# Vertex Representation

Vertices are identified by arbitrary integers ([`VertexId`]) chosen by the caller.
Internally, each graph numbers its vertices densely as [`Node`] in the order they were
first registered, which allows all per-vertex state of a traversal to live in plain vectors.
*/

use std::num::NonZero;

/// Caller-facing vertex identifier. Any value is valid.
pub type VertexId = i64;

/// Dense internal index of a vertex, `0..n` in registration order
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// Logical timestamp of a traversal. `0` means *unset*, valid timestamps start at `1`.
pub type Time = u32;

/// Timestamp of a vertex that was not (yet) discovered/finished
pub const UNSET_TIME: Time = 0;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_is_niche_optimized() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_roundtrip() {
        assert_eq!(OptionalNode::new(0).map(|n| n.get()), Some(0));
        assert_eq!(OptionalNode::new(17).map(|n| n.get()), Some(17));
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }
}
