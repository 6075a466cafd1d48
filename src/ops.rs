/*!
# Graph Operations

Read-only traits shared by all graph representations. Algorithms are written against these
traits rather than against a concrete store.

Two views of a vertex exist side by side:
- the caller's [`VertexId`], used in every public input and output,
- the dense internal [`Node`] index, used by algorithms to keep per-vertex state in vectors.

The translation between both is owned by the graph ([`GraphNodeOrder::id_of`],
[`GraphNodeOrder::node_of`]).
*/

use std::ops::Range;

use crate::{error::Result, *};

/// Marker for the orientation of a graph
pub trait GraphDir: Copy + Default + 'static {
    /// *true* if edges have an orientation
    const DIRECTED: bool;
}

/// Edges `(u, v)` and `(v, u)` are distinct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Edge `{u, v}` can be traversed from both endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Provides the orientation of a graph at the type level
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the vertices of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of internal indices `0..n`.
    /// Index `u` belongs to the `u`-th registered vertex.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over all vertex ids in natural (registration) order
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices_range().map(move |u| self.id_of(u))
    }

    /// Returns the id of an internal index.
    /// ** Panics if `u >= n` **
    fn id_of(&self, u: Node) -> VertexId;

    /// Returns the internal index of a vertex id, if the vertex exists
    fn node_of(&self, id: VertexId) -> Option<Node>;

    /// Like [`GraphNodeOrder::node_of`] but reports unknown ids as error
    fn try_node_of(&self, id: VertexId) -> Result<Node> {
        self.node_of(id).ok_or(GraphError::UnknownVertex(id))
    }

    /// Returns *true* if the graph contains a vertex with this id
    fn contains(&self, id: VertexId) -> bool {
        self.node_of(id).is_some()
    }
}

/// Provides getters pertaining to the edges of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges are counted individually)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edges exactly as they were given on construction
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the (outgoing) neighborhood of `u` in adjacency order.
    /// Parallel edges show up as repeated entries.
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns an iterator over the (outgoing) neighborhood of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.as_neighbors_slice(u).len() as NumNodes
    }

    /// Returns the ids of all (outgoing) neighbors of the vertex `id` in adjacency order
    fn neighbor_ids_of(&self, id: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        let u = self.try_node_of(id)?;
        Ok(self.neighbors_of(u).map(move |v| self.id_of(v)))
    }

    /// Returns the number of (outgoing) adjacency entries of the vertex `id`
    fn out_degree_of(&self, id: VertexId) -> Result<NumNodes> {
        Ok(self.degree_of(self.try_node_of(id)?))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices_range()
            .map(|u| self.degree_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// A super trait for creating a graph from scratch from a sequence of edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph whose vertices are all endpoints of `edges` (registered in order of
    /// first appearance) and whose adjacency lists keep the order of `edges`.
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}
