use tracing::debug;

use super::*;

/// Strongly connected components of directed graphs
pub trait Connectivity: AdjacencyList + GraphType<Dir = Directed> + Transpose + Sized {
    /// Computes the strongly connected components using Kosaraju's algorithm:
    ///
    /// 1. DFS on the graph in natural order, collecting vertices by descending finish time.
    /// 2. Transpose the graph.
    /// 3. DFS forest on the transposed graph, trying roots in the order of step 1.
    ///
    /// Every tree of step 3 is exactly one strongly connected component. Components are
    /// returned in the order they were discovered in step 3, which is a topological order of
    /// the condensation. Within a component, vertices appear in the finish order of step 3.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 1), (2, 3)]);
    /// assert_eq!(g.strongly_connected_components(), vec![vec![2, 1], vec![3]]);
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<VertexId>> {
        debug!(
            vertices = self.number_of_nodes(),
            "computing strongly connected components"
        );

        let order = self
            .depth_first_search()
            .topological(true)
            .run(self.vertices_range());

        // every vertex of `self` is a vertex of `transposed`
        let transposed = self.transpose();
        let roots = order.ids().filter_map(|id| transposed.node_of(id));
        let components = transposed
            .depth_first_search()
            .run_forest(roots)
            .into_components();

        debug!(
            components = components.len(),
            "strongly connected components done"
        );
        components
    }

    /// Returns a partition of vertices into SCCs (analogously to
    /// [`Connectivity::strongly_connected_components`])
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 1), (2, 3)]);
    /// let part = g.partition_into_strongly_connected_components();
    ///
    /// assert_eq!(part.number_of_classes(), 2);
    /// assert_eq!(part.class_of_edge(1, 2), Some(0));
    /// assert_eq!(part.class_of_edge(2, 3), None);
    /// ```
    fn partition_into_strongly_connected_components(&self) -> Partition {
        self.strongly_connected_components().into_partition()
    }

    /// Returns the strongly connected components that contain a cycle, i.e. components with
    /// more than one vertex or a single vertex with a self-loop
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 1), (2, 3), (4, 4), (3, 4)]);
    /// assert_eq!(
    ///     g.strongly_connected_components_no_singletons(),
    ///     vec![vec![2, 1], vec![4]]
    /// );
    /// ```
    fn strongly_connected_components_no_singletons(&self) -> Vec<Vec<VertexId>> {
        self.strongly_connected_components()
            .into_iter()
            .filter(|component| match component.as_slice() {
                [u] => self
                    .neighbor_ids_of(*u)
                    .is_ok_and(|mut neighbors| neighbors.any(|v| v == *u)),
                _ => true,
            })
            .collect()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Directed> + Transpose + Sized {}
