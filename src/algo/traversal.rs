/*!
Depth-first search and the traversal-derived utilities built on it.

This module provides:
- [`DepthFirstSearch`], an iterative DFS engine that stamps discovery and finish times and
  parent links into a traversal-scoped attribute table.
- [`DfsResult`] and [`DfsForest`], the outputs of a whole-graph traversal (flat or grouped
  by DFS tree).
- A high-level [`Traversal`] trait that exposes the engine directly as methods on graphs,
  together with reachability, acyclicity and topological ordering.

The engine simulates the classic recursive three-color DFS with an explicit stack, so it is
not limited by the call-stack depth. Every call of [`DepthFirstSearch::dfs`] or
[`DepthFirstSearch::dfs_forest`] starts from a fresh attribute table and clock.
*/

use fxhash::FxHashMap;
use tracing::{debug, error, trace};

use super::*;

/// Traversal state of a vertex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not discovered yet
    #[default]
    Unvisited,
    /// Discovered, but some descendants are not finished yet
    InProgress,
    /// The vertex and all of its descendants are finished
    Finished,
}

/// Per-vertex entry of the attribute table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct VertexState {
    color: Color,
    parent: Option<OptionalNode>,
    discover: Time,
    finish: Time,
}

/// A stack entry. `cursor` is the position in the adjacency list of `node` at which the
/// search for the next unvisited neighbor resumes.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    cursor: usize,
}

impl Frame {
    fn new(node: Node) -> Self {
        Self { node, cursor: 0 }
    }
}

/// The attributes a traversal assigned to a single vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit {
    /// The visited vertex
    pub id: VertexId,
    /// Time at which the vertex was first entered
    pub discover: Time,
    /// Time at which the vertex and all of its descendants were done
    pub finish: Time,
    /// The vertex from which this vertex was discovered, `None` for roots of DFS trees
    pub parent: Option<VertexId>,
}

impl Visit {
    /// Returns *true* if `self` is a proper ancestor of `other` in the same traversal,
    /// i.e. the interval of `other` is nested within the interval of `self`.
    pub fn is_ancestor_of(&self, other: &Visit) -> bool {
        self.discover < other.discover && other.finish < self.finish
    }

    /// Returns *true* if the intervals of both vertices do not intersect
    pub fn is_disjoint_from(&self, other: &Visit) -> bool {
        self.finish < other.discover || other.finish < self.discover
    }

    /// Returns *true* if this vertex was the root of its DFS tree
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Output of a whole-graph DFS: all vertices in the order they were reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsResult {
    visits: Vec<Visit>,
    position: FxHashMap<VertexId, usize>,
}

impl DfsResult {
    fn new(visits: Vec<Visit>) -> Self {
        let position = visits
            .iter()
            .enumerate()
            .map(|(i, visit)| (visit.id, i))
            .collect();
        Self { visits, position }
    }

    /// Returns the visits in output order
    pub fn iter(&self) -> std::slice::Iter<'_, Visit> {
        self.visits.iter()
    }

    /// Returns the vertex ids in output order
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visits.iter().map(|visit| visit.id)
    }

    /// Returns the attributes of the vertex `id`, if it was visited
    pub fn get(&self, id: VertexId) -> Option<&Visit> {
        self.position.get(&id).map(|&i| &self.visits[i])
    }

    /// Returns the position of the vertex `id` in the output, if it was visited
    pub fn position_of(&self, id: VertexId) -> Option<usize> {
        self.position.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Consumes the result and returns the visits in output order
    pub fn into_vec(self) -> Vec<Visit> {
        self.visits
    }
}

impl IntoIterator for DfsResult {
    type Item = Visit;
    type IntoIter = std::vec::IntoIter<Visit>;

    fn into_iter(self) -> Self::IntoIter {
        self.visits.into_iter()
    }
}

impl<'a> IntoIterator for &'a DfsResult {
    type Item = &'a Visit;
    type IntoIter = std::slice::Iter<'a, Visit>;

    fn into_iter(self) -> Self::IntoIter {
        self.visits.iter()
    }
}

/// Output of a DFS-forest decomposition: one group per DFS tree, in the order the roots were
/// started. Within a tree, vertices appear in finish order (the root last).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsForest {
    trees: Vec<Vec<Visit>>,
}

impl DfsForest {
    /// Returns the trees in the order their roots were started
    pub fn trees(&self) -> &[Vec<Visit>] {
        &self.trees
    }

    pub fn number_of_trees(&self) -> usize {
        self.trees.len()
    }

    /// Returns an iterator over the vertex ids of every tree
    pub fn iter(&self) -> impl Iterator<Item = Vec<VertexId>> + '_ {
        self.trees
            .iter()
            .map(|tree| tree.iter().map(|visit| visit.id).collect())
    }

    /// Consumes the forest and returns the vertex ids of every tree
    pub fn into_components(self) -> Vec<Vec<VertexId>> {
        self.trees
            .into_iter()
            .map(|tree| tree.into_iter().map(|visit| visit.id).collect())
            .collect()
    }
}

/// Iterative depth-first search over a graph.
///
/// The engine borrows the graph and owns the attribute table (color, parent, discovery and
/// finish time of every vertex) as well as the logical clock. Both are scoped to the engine,
/// so independent traversals never share state.
///
/// Configuration follows the builder pattern:
/// - [`DepthFirstSearch::order`]: the order in which roots are tried (default: natural order),
/// - [`DepthFirstSearch::topological`]: reverse the flat output of [`DepthFirstSearch::dfs`].
///
/// # Examples
/// ```
/// use dgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([(1, 2), (2, 3), (4, 3)]);
///
/// let result = DepthFirstSearch::new(&g).order([4, 1]).dfs().unwrap();
/// assert_eq!(result.ids().collect::<Vec<_>>(), vec![3, 4, 2, 1]);
/// assert_eq!(result.get(3).unwrap().parent, Some(4));
/// ```
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    states: Vec<VertexState>,
    clock: Time,
    order: Option<Vec<VertexId>>,
    topological: bool,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new engine on `graph` with all vertices unvisited
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            states: vec![VertexState::default(); graph.len()],
            clock: 0,
            order: None,
            topological: false,
        }
    }

    /// Sets the order in which vertices are tried as roots
    pub fn set_order<I>(&mut self, order: I)
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.order = Some(order.into_iter().collect());
    }

    /// Sets the order in which vertices are tried as roots.
    /// Vertices missing from the order are only visited if they are reachable from it.
    pub fn order<I>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.set_order(order);
        self
    }

    /// If *true*, [`DepthFirstSearch::dfs`] reports vertices by descending finish time.
    ///
    /// This is a topological order only if the graph is acyclic. Cycles are **not** detected
    /// in this mode; use [`Traversal::topological_order`] for a checked variant.
    pub fn set_topological(&mut self, topological: bool) {
        self.topological = topological;
    }

    /// Builder variant of [`DepthFirstSearch::set_topological`]
    pub fn topological(mut self, topological: bool) -> Self {
        self.set_topological(topological);
        self
    }

    /// Marks every vertex as unvisited without parent and unset timestamps, and restarts the clock
    pub fn reset_attributes(&mut self) {
        self.states.fill(VertexState::default());
        self.clock = 0;
    }

    /// Returns the current attributes of the vertex `id`, or `None` if the graph does not
    /// contain it. Timestamps of vertices not reached yet are [`UNSET_TIME`].
    pub fn state_of(&self, id: VertexId) -> Option<(Color, Visit)> {
        let u = self.graph.node_of(id)?;
        Some((self.states[u as usize].color, self.visit_record(u)))
    }

    /// Runs a DFS from `root` only, continuing on the current attribute table (which is
    /// **not** reset). Returns the vertices of the DFS tree in finish order; the root is the
    /// last entry. If `root` was already visited, the tree is empty.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if the graph does not contain `root`.
    pub fn visit(&mut self, root: VertexId) -> Result<Vec<VertexId>> {
        let root = self.graph.try_node_of(root)?;
        if self.states[root as usize].color != Color::Unvisited {
            return Ok(Vec::new());
        }

        Ok(self
            .visit_node(root)
            .into_iter()
            .map(|u| self.graph.id_of(u))
            .collect())
    }

    /// Resets the attributes and traverses the whole graph, trying roots in the configured
    /// order. Returns all visited vertices tree by tree in finish order, or by descending
    /// finish time if [`DepthFirstSearch::topological`] is set.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if the configured order contains an id the graph
    /// does not contain. No attribute is touched in this case.
    pub fn dfs(&mut self) -> Result<DfsResult> {
        let roots = self.resolve_order()?;
        Ok(self.run(roots))
    }

    /// Resets the attributes and traverses the whole graph, trying roots in the configured
    /// order. Returns one group per started root.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if the configured order contains an id the graph
    /// does not contain. No attribute is touched in this case.
    pub fn dfs_forest(&mut self) -> Result<DfsForest> {
        let roots = self.resolve_order()?;
        Ok(self.run_forest(roots))
    }

    /// Flat traversal from explicit internal roots
    pub(crate) fn run<I>(&mut self, roots: I) -> DfsResult
    where
        I: IntoIterator<Item = Node>,
    {
        let mut order = self.traverse(roots).concat();
        if self.topological {
            order.reverse();
        }
        DfsResult::new(order.into_iter().map(|u| self.visit_record(u)).collect())
    }

    /// Forest traversal from explicit internal roots
    pub(crate) fn run_forest<I>(&mut self, roots: I) -> DfsForest
    where
        I: IntoIterator<Item = Node>,
    {
        let trees = self
            .traverse(roots)
            .into_iter()
            .map(|tree| tree.into_iter().map(|u| self.visit_record(u)).collect())
            .collect();
        DfsForest { trees }
    }

    /// Resets the attributes and visits every still unvisited root.
    /// Returns the finish-ordered trees in the order their roots were started.
    pub(crate) fn traverse<I>(&mut self, roots: I) -> Vec<Vec<Node>>
    where
        I: IntoIterator<Item = Node>,
    {
        self.reset_attributes();
        debug!(
            vertices = self.graph.number_of_nodes(),
            "starting depth-first traversal"
        );

        let mut trees = Vec::new();
        for root in roots {
            if self.states[root as usize].color == Color::Unvisited {
                let tree = self.visit_node(root);
                trace!(
                    root = self.graph.id_of(root),
                    size = tree.len(),
                    "finished DFS tree"
                );
                trees.push(tree);
            }
        }

        debug!(trees = trees.len(), ticks = self.clock, "depth-first traversal done");
        trees
    }

    /// Returns the internal roots of the configured order
    fn resolve_order(&self) -> Result<Vec<Node>> {
        match &self.order {
            None => Ok(self.graph.vertices_range().collect()),
            Some(ids) => ids.iter().map(|&id| self.graph.try_node_of(id)).collect(),
        }
    }

    fn tick(&mut self) -> Time {
        self.clock += 1;
        self.clock
    }

    /// Core state machine. The color of the vertex at the top of the stack decides the step:
    /// - `Unvisited`: enter it, stamping the discovery time.
    /// - `InProgress`: push its next unvisited neighbor, or finish and pop it if none is left.
    /// - `Finished`: impossible, finished vertices are popped immediately.
    fn visit_node(&mut self, root: Node) -> Vec<Node> {
        let graph = self.graph;
        let mut finished = Vec::new();
        let mut stack = vec![Frame::new(root)];

        while let Some(&Frame { node: u, cursor }) = stack.last() {
            match self.states[u as usize].color {
                Color::Unvisited => {
                    let time = self.tick();
                    let state = &mut self.states[u as usize];
                    state.color = Color::InProgress;
                    state.discover = time;
                }
                Color::InProgress => {
                    let neighbors = graph.as_neighbors_slice(u);
                    let next = neighbors[cursor..]
                        .iter()
                        .position(|&v| self.states[v as usize].color == Color::Unvisited)
                        .map(|offset| cursor + offset);

                    if let Some(i) = next {
                        let v = neighbors[i];
                        if let Some(top) = stack.last_mut() {
                            top.cursor = i + 1;
                        }
                        self.states[v as usize].parent = OptionalNode::new(u);
                        stack.push(Frame::new(v));
                    } else {
                        let time = self.tick();
                        let state = &mut self.states[u as usize];
                        state.color = Color::Finished;
                        state.finish = time;
                        stack.pop();
                        finished.push(u);
                    }
                }
                Color::Finished => {
                    error!(
                        vertex = graph.id_of(u),
                        "finished vertex on top of the DFS stack"
                    );
                    panic!(
                        "DFS invariant violated: vertex {} is finished but still on the stack",
                        graph.id_of(u)
                    );
                }
            }
        }

        finished
    }

    fn visit_record(&self, u: Node) -> Visit {
        let state = &self.states[u as usize];
        Visit {
            id: self.graph.id_of(u),
            discover: state.discover,
            finish: state.finish,
            parent: state.parent.map(|p| self.graph.id_of(p.get())),
        }
    }

    /// After a complete traversal, returns an edge `(u, v)` where `v` is an ancestor of `u`
    /// or `u` itself, if such an edge exists.
    fn find_back_edge(&self) -> Option<(Node, Node)> {
        self.graph.vertices_range().find_map(|u| {
            let su = &self.states[u as usize];
            self.graph
                .neighbors_of(u)
                .find(|&v| {
                    let sv = &self.states[v as usize];
                    sv.discover <= su.discover && su.finish <= sv.finish
                })
                .map(|v| (u, v))
        })
    }
}

/// Provides convenient traversal methods (DFS, DFS forests, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a DFS engine on this graph for further configuration
    fn depth_first_search(&self) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self)
    }

    /// Runs a DFS from `root` only and returns its tree in finish order (root last)
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 3), (4, 1)]);
    /// assert_eq!(g.visit(1).unwrap(), vec![3, 2, 1]);
    /// ```
    fn visit(&self, root: VertexId) -> Result<Vec<VertexId>> {
        self.depth_first_search().visit(root)
    }

    /// Traverses the whole graph in natural order and reports vertices in finish order
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (3, 2)]);
    ///
    /// let result = g.dfs();
    /// assert_eq!(result.ids().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// assert_eq!(result.get(1).unwrap().discover, 1);
    /// assert_eq!(result.get(1).unwrap().finish, 4);
    /// ```
    fn dfs(&self) -> DfsResult {
        self.depth_first_search().run(self.vertices_range())
    }

    /// Traverses the whole graph in natural order and reports vertices by descending finish
    /// time. For acyclic graphs this is a topological order; cycles are not detected.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (3, 2)]);
    /// assert_eq!(g.topological_dfs().ids().collect::<Vec<_>>(), vec![3, 1, 2]);
    /// ```
    fn topological_dfs(&self) -> DfsResult {
        self.depth_first_search()
            .topological(true)
            .run(self.vertices_range())
    }

    /// Traverses the whole graph trying roots in `order` and reports vertices in finish order
    fn dfs_with_order<I>(&self, order: I) -> Result<DfsResult>
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.depth_first_search().order(order).dfs()
    }

    /// Partitions the vertices into DFS trees, trying roots in `order`
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (3, 2), (3, 4)]);
    ///
    /// let forest = g.dfs_forest([2, 3, 1]).unwrap();
    /// assert_eq!(forest.into_components(), vec![vec![2], vec![4, 3], vec![1]]);
    /// ```
    fn dfs_forest<I>(&self, order: I) -> Result<DfsForest>
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.depth_first_search().order(order).dfs_forest()
    }

    /// Returns *true* if there is a path from `from` to `to`.
    /// Every vertex reaches itself.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 3)]);
    /// assert_eq!(g.is_reachable(1, 3), Ok(true));
    /// assert_eq!(g.is_reachable(3, 1), Ok(false));
    /// ```
    fn is_reachable(&self, from: VertexId, to: VertexId) -> Result<bool> {
        let mut search = self.depth_first_search();
        let target = self.try_node_of(to)?;
        search.visit(from)?;
        Ok(search.states[target as usize].color != Color::Unvisited)
    }

    /// Returns the vertices in topological order, i.e. by descending DFS finish time.
    ///
    /// # Errors
    /// Returns [`GraphError::Cycle`] with a vertex on a cycle if the graph is not acyclic.
    /// Self-loops are cycles.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([(1, 2), (3, 1)]);
    /// assert_eq!(g.topological_order(), Ok(vec![3, 1, 2]));
    ///
    /// let g = DiGraph::from_edges([(1, 2), (2, 1)]);
    /// assert_eq!(g.topological_order(), Err(GraphError::Cycle(1)));
    /// ```
    fn topological_order(&self) -> Result<Vec<VertexId>>
    where
        Self: GraphType<Dir = Directed>,
    {
        let mut search = self.depth_first_search().topological(true);
        let result = search.run(self.vertices_range());

        if let Some((_, v)) = search.find_back_edge() {
            debug!(vertex = self.id_of(v), "back edge found, graph is cyclic");
            return Err(GraphError::Cycle(self.id_of(v)));
        }

        Ok(result.ids().collect())
    }

    /// Returns *true* if the directed graph has no cycle (self-loops are cycles)
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// assert!(DiGraph::from_edges([(1, 2), (1, 3), (2, 3)]).is_acyclic());
    /// assert!(!DiGraph::from_edges([(1, 2), (2, 2)]).is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        self.topological_order().is_ok()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
