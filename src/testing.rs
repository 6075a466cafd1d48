//! Helpers shared by the unit tests of this crate

use rand::Rng;

use crate::{ops::*, *};

/// Creates `m` random (directed) edges between vertices `0..n`.
/// Parallel edges and self-loops are kept.
pub fn random_edges<R: Rng>(rng: &mut R, n: VertexId, m: usize) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge::new(rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

/// Like [`random_edges`] but every edge carries a random weight, some of them zero
pub fn weighted_random_edges<R: Rng>(rng: &mut R, n: VertexId, m: usize) -> Vec<Edge> {
    random_edges(rng, n, m)
        .into_iter()
        .map(|e| Edge::weighted(e.from, e.to, rng.random_range(0..4)))
        .collect()
}

/// Brute-force reachability matrix indexed by internal indices.
/// Every vertex reaches itself.
pub fn reachability<G: AdjacencyList>(graph: &G) -> Vec<Vec<bool>> {
    let n = graph.len();
    let mut reach = vec![vec![false; n]; n];

    for (u, row) in reach.iter_mut().enumerate() {
        row[u] = true;
        let mut stack = vec![u as Node];
        while let Some(v) = stack.pop() {
            for w in graph.neighbors_of(v) {
                if !row[w as usize] {
                    row[w as usize] = true;
                    stack.push(w);
                }
            }
        }
    }

    reach
}
