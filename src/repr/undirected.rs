use super::*;

/// Undirected graph: edge `{u, v}` is part of the neighborhoods of `u` and `v`.
/// A self-loop shows up once in the neighborhood of its vertex.
pub type UnGraph = Graph<Undirected>;

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn symmetric_neighborhoods() {
        let graph = UnGraph::from_edges([(1, 2), (2, 3), (3, 3)]);
        assert!(!UnGraph::is_directed());

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbor_ids_of(1).unwrap().collect_vec(), vec![2]);
        assert_eq!(graph.neighbor_ids_of(2).unwrap().collect_vec(), vec![1, 3]);
        assert_eq!(graph.neighbor_ids_of(3).unwrap().collect_vec(), vec![2, 3]);
    }

    #[test]
    fn parallel_edges_at_both_endpoints() {
        let graph = UnGraph::from_edges([(1, 2), (2, 1)]);
        assert_eq!(graph.out_degree_of(1), Ok(2));
        assert_eq!(graph.out_degree_of(2), Ok(2));
    }
}
