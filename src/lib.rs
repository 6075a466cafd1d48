/*!
`dgraphs` is a small graph library centered around **depth-first search** on graphs whose
vertices are identified by arbitrary integers:
- an iterative DFS engine that records discovery/finish timestamps and parent links,
- DFS forests with a caller-specified root order,
- graph transposition,
- **strongly connected components** via Kosaraju's algorithm.

# Representation

Vertices are identified by a caller-chosen [`VertexId`] (`i64`). Each graph additionally
numbers its vertices densely as [`Node`] (`u32`, `0..n`) in the order they first appeared as an
endpoint of an edge. This *natural order* determines the order in which a traversal tries its
roots; adjacency lists keep the order of the input.

For **edges**, we use a plain struct [`Edge`] with two endpoints and an optional weight. The
weight is only carried along for presentation (see [`io::DotWriter`]).

### Directed vs Undirected

See the [`repr`] module:
- [`DiGraph`](crate::repr::DiGraph): edge `(u, v)` can only be traversed from `u`,
- [`UnGraph`](crate::repr::UnGraph): edge `{u, v}` can be traversed from both endpoints.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a provided graph (see
[`algo::DepthFirstSearch`]). The most commonly used functionality is also implemented via
traits on the graph itself, making it usable without configuring the algorithm beforehand.

# Usage

- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations, and the
  graph representations,
- [`algo`] includes the traversal and connectivity traits implemented on graphs
  (`graph.dfs()`, `graph.strongly_connected_components()`, ...),
- [`io`] includes writers to output a given graph.

In most use-cases, `use dgraphs::{prelude::*, algo::*};` suffices.

```
use dgraphs::{prelude::*, algo::*};

let graph = DiGraph::from_edges([(1, 2), (2, 1), (2, 3)]);

let result = graph.dfs();
assert_eq!(result.ids().collect::<Vec<_>>(), vec![3, 2, 1]);
assert_eq!(result.get(3).unwrap().parent, Some(2));

assert_eq!(graph.strongly_connected_components(), vec![vec![2, 1], vec![3]]);
assert_eq!(graph.visit(4), Err(GraphError::UnknownVertex(4)));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `dgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
