use super::*;

/// Reversal of all edges of a graph
pub trait Transpose: Sized {
    /// Returns a new, independently owned graph containing the edge `(v, u, w)` for every
    /// edge `(u, v, w)` of `self`.
    ///
    /// The vertex set is identical and keeps its natural order, so every vertex has the same
    /// internal index in both graphs.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2, 5), (2, 3, 0)]);
    /// let t = g.transpose();
    ///
    /// assert_eq!(
    ///     t.edges().collect::<Vec<_>>(),
    ///     vec![Edge::weighted(2, 1, 5), Edge::weighted(3, 2, 0)]
    /// );
    /// ```
    fn transpose(&self) -> Self;
}

impl<D: GraphDir> Transpose for Graph<D> {
    fn transpose(&self) -> Self {
        Graph::from_vertices_and_edges(self.vertices(), self.edges().map(|e| e.reverse()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn reverses_every_edge() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 3), (1, 2)]);
        let transposed = graph.transpose();

        assert_eq!(transposed.number_of_edges(), graph.number_of_edges());
        assert_eq!(transposed.vertices().collect_vec(), graph.vertices().collect_vec());
        assert_eq!(transposed.neighbor_ids_of(2).unwrap().collect_vec(), vec![1, 1]);
        assert_eq!(transposed.neighbor_ids_of(1).unwrap().collect_vec(), vec![3]);
        assert_eq!(transposed.neighbor_ids_of(3).unwrap().collect_vec(), vec![2, 3]);

        // the source is untouched
        assert_eq!(graph.neighbor_ids_of(1).unwrap().collect_vec(), vec![2, 2]);
    }

    #[test]
    fn keeps_internal_indices() {
        let graph = DiGraph::from_edges([(7, 3), (3, 5)]);
        let transposed = graph.transpose();

        for u in graph.vertices_range() {
            assert_eq!(graph.id_of(u), transposed.id_of(u));
        }
    }

    #[test]
    fn empty() {
        let graph = DiGraph::from_edges(Vec::<Edge>::new());
        assert!(graph.transpose().is_empty());
    }

    #[test]
    fn involution() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5, 20, 50] {
            for m in [n, n * 5] {
                let edges = weighted_random_edges(rng, n, m as usize);
                let graph = DiGraph::from_edges(edges.iter());
                let twice = graph.transpose().transpose();

                assert_eq!(
                    twice.edges().sorted().collect_vec(),
                    graph.edges().sorted().collect_vec()
                );
                assert_eq!(twice.vertices().collect_vec(), graph.vertices().collect_vec());
            }
        }
    }

    #[test]
    fn undirected_transpose_has_same_neighborhoods() {
        let graph = UnGraph::from_edges([(1, 2), (2, 3), (3, 3)]);
        let transposed = graph.transpose();

        for u in graph.vertices() {
            assert_eq!(
                transposed.neighbor_ids_of(u).unwrap().sorted().collect_vec(),
                graph.neighbor_ids_of(u).unwrap().sorted().collect_vec()
            );
        }
    }
}
