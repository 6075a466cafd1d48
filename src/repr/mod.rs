/*!
# Graph Representation

A single adjacency-list store, [`Graph`], parameterized by its orientation:

- [`DiGraph`]: directed, edge `(u, v)` is only stored at `u`.
- [`UnGraph`]: undirected, edge `{u, v}` is stored at both endpoints.

A graph is built once from a sequence of edges and is structurally immutable afterwards.
Vertices are registered at their first appearance as an endpoint of an edge; this
registration order is the *natural order* of the graph and determines its internal
[`Node`] numbering. Adjacency lists keep the order of the input, including parallel edges
and self-loops.
*/

use std::marker::PhantomData;

use fxhash::FxHashMap;

use crate::{ops::*, *};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Adjacency-list graph over arbitrary integer vertex ids
#[derive(Clone)]
pub struct Graph<D: GraphDir> {
    /// Id of each internal index, in registration order
    ids: Vec<VertexId>,
    /// Inverse of `ids`
    lookup: FxHashMap<VertexId, Node>,
    /// Edges exactly as given
    edges: Vec<Edge>,
    /// Outgoing neighborhood of each internal index, in input order
    adjacency: Vec<Vec<Node>>,
    _dir: PhantomData<D>,
}

impl<D: GraphDir> Default for Graph<D> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            lookup: FxHashMap::default(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            _dir: PhantomData,
        }
    }
}

impl<D: GraphDir> std::fmt::Debug for Graph<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(if D::DIRECTED { "DiGraph" } else { "UnGraph" })
            .field("vertices", &self.ids)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<D: GraphDir> Graph<D> {
    /// Creates a graph whose vertices are registered in the order of `vertices` first,
    /// followed by any endpoint of `edges` not seen before.
    pub(crate) fn from_vertices_and_edges<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = VertexId>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let mut graph = Self::default();
        for id in vertices {
            graph.register(id);
        }
        for edge in edges {
            graph.insert_edge(edge.into());
        }
        graph
    }

    /// Returns the internal index of `id`, registering it if it is new
    fn register(&mut self, id: VertexId) -> Node {
        *self.lookup.entry(id).or_insert_with(|| {
            let u = self.ids.len() as Node;
            self.ids.push(id);
            self.adjacency.push(Vec::new());
            u
        })
    }

    fn insert_edge(&mut self, edge: Edge) {
        let u = self.register(edge.from);
        let v = self.register(edge.to);

        self.adjacency[u as usize].push(v);
        if !D::DIRECTED && u != v {
            self.adjacency[v as usize].push(u);
        }
        self.edges.push(edge);
    }
}

impl<D: GraphDir> GraphType for Graph<D> {
    type Dir = D;
}

impl<D: GraphDir> GraphNodeOrder for Graph<D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.ids.len() as NumNodes
    }

    fn id_of(&self, u: Node) -> VertexId {
        self.ids[u as usize]
    }

    fn node_of(&self, id: VertexId) -> Option<Node> {
        self.lookup.get(&id).copied()
    }
}

impl<D: GraphDir> GraphEdgeOrder for Graph<D> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}

impl<D: GraphDir> AdjacencyList for Graph<D> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.adjacency[u as usize]
    }
}

impl<D: GraphDir> GraphFromScratch for Graph<D> {
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        Self::from_vertices_and_edges(std::iter::empty(), edges)
    }
}

impl<D: GraphDir, E: Into<Edge>> FromIterator<E> for Graph<D> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn empty_graph() {
        let graph = DiGraph::from_edges(Vec::<Edge>::new());
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
        assert_eq!(graph.number_of_nodes(), 0);
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.max_degree(), 0);
    }

    #[test]
    fn registration_order() {
        let graph = DiGraph::from_edges([(5, 3), (3, 9), (9, 5), (7, 7)]);
        assert_eq!(graph.vertices().collect_vec(), vec![5, 3, 9, 7]);
        assert_eq!(graph.node_of(9), Some(2));
        assert_eq!(graph.id_of(3), 7);
        assert!(graph.contains(7));
        assert!(!graph.contains(4));
        assert_eq!(graph.try_node_of(4), Err(GraphError::UnknownVertex(4)));
    }

    #[test]
    fn edges_are_kept_verbatim() {
        let input = [
            Edge::new(1, 2),
            Edge::weighted(1, 2, 4),
            Edge::new(2, 2),
            Edge::new(2, 1),
        ];
        let graph: DiGraph = input.iter().collect();

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.edges().collect_vec(), input.to_vec());
        assert_eq!(graph.neighbor_ids_of(1).unwrap().collect_vec(), vec![2, 2]);
        assert_eq!(graph.neighbor_ids_of(2).unwrap().collect_vec(), vec![2, 1]);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn negative_ids() {
        let graph = UnGraph::from_edges([(-1, 0), (0, i64::MIN)]);
        assert_eq!(graph.vertices().collect_vec(), vec![-1, 0, i64::MIN]);
        assert_eq!(graph.out_degree_of(0), Ok(2));
    }

    #[test]
    fn debug_names_orientation() {
        let graph = DiGraph::from_edges([(1, 2)]);
        assert!(format!("{graph:?}").starts_with("DiGraph"));
        let graph = UnGraph::from_edges([(1, 2)]);
        assert!(format!("{graph:?}").starts_with("UnGraph"));
    }
}
