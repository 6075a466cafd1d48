/*!
# Graph Algorithms

This module provides the **depth-first search** family of algorithms built on top of the graph
representation in this crate. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use dgraphs::algo::*;
```
and gain access to DFS, DFS forests, transposition and strongly connected components.
Most functionality is available both as a configurable struct (e.g. [`DepthFirstSearch`]) and
as a trait method on the graph itself (e.g. [`Traversal::dfs`]).
*/

mod connectivity;
mod partition;
mod transpose;
mod traversal;

use crate::{error::Result, prelude::*};

pub use connectivity::*;
pub use partition::*;
pub use transpose::*;
pub use traversal::*;
