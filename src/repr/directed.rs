use super::*;

/// Directed graph: edge `(u, v)` is only part of the neighborhood of `u`
pub type DiGraph = Graph<Directed>;

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn out_neighborhoods_only() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3), (1, 3)]);
        assert!(DiGraph::is_directed());

        assert_eq!(graph.neighbor_ids_of(1).unwrap().collect_vec(), vec![2, 3]);
        assert_eq!(graph.neighbor_ids_of(2).unwrap().collect_vec(), vec![3]);
        assert_eq!(graph.neighbor_ids_of(3).unwrap().count(), 0);
        assert_eq!(
            graph.neighbor_ids_of(4).err(),
            Some(GraphError::UnknownVertex(4))
        );
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = DiGraph::from_edges([(1, 1), (1, 2), (1, 2), (1, 1)]);
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.out_degree_of(1), Ok(4));
        assert_eq!(graph.out_degree_of(2), Ok(0));
    }
}
