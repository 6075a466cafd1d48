//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only draw the edges of a graph, labelled with their weight
//! if it is positive.
//!
//! ```
//! use dgraphs::{prelude::*, io::*};
//!
//! let graph = DiGraph::from_edges([Edge::weighted(1, 2, 3), Edge::new(2, 3)]);
//!
//! let mut out = Vec::new();
//! DotWriter::new().symbols(true).try_write_graph(&graph, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph {\n  a -> b [label=3];\n  b -> c;\n}\n"
//! );
//! ```
use std::fmt::Display;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct DotWriter {
    /// Print ids `1..=26` as letters `a..=z`
    symbols: bool,
}

/// A vertex id as printed by a [`DotWriter`]
enum DotVertex {
    Symbol(char),
    Number(VertexId),
}

impl Display for DotVertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotVertex::Symbol(c) => write!(f, "{c}"),
            DotVertex::Number(id) => write!(f, "{id}"),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, ids `1, 2, ..., 26` are written as `a, b, ..., z`.
    /// All other ids are written as numbers.
    pub fn symbols(mut self, symbols: bool) -> Self {
        self.symbols = symbols;
        self
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    fn format_vertex(&self, id: VertexId) -> DotVertex {
        match id {
            1..=26 if self.symbols => DotVertex::Symbol((b'a' + (id - 1) as u8) as char),
            _ => DotVertex::Number(id),
        }
    }

    /// Writes an iterator of edges to `writer`, one per line.
    /// Must know if the edges are directed.
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I, directed: bool) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_dir = if directed { "->" } else { "--" };

        for edge in edges {
            write!(
                writer,
                "  {} {edge_dir} {}",
                self.format_vertex(edge.from),
                self.format_vertex(edge.to)
            )?;
            if let Some(w) = edge.label() {
                write!(writer, " [label={w}]")?;
            }
            writeln!(writer, ";")?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: GraphEdgeOrder + GraphType,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = G::is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_edges(&mut writer, graph.edges(), directed)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }
}

impl<G> DotWrite for G
where
    G: GraphEdgeOrder + GraphType,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<G: GraphEdgeOrder + GraphType>(writer: DotWriter, graph: &G) -> String {
        let mut out = Vec::new();
        writer.try_write_graph(graph, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn weighted_directed() {
        let graph = DiGraph::from_edges([
            Edge::weighted(1, 2, 5),
            Edge::weighted(2, 3, 0),
            Edge::new(3, 1),
            Edge::weighted(3, 3, 1),
        ]);

        assert_eq!(
            to_string(DotWriter::new(), &graph),
            "digraph {\n  1 -> 2 [label=5];\n  2 -> 3;\n  3 -> 1;\n  3 -> 3 [label=1];\n}\n"
        );
        assert_eq!(
            to_string(DotWriter::new().symbols(true), &graph),
            "digraph {\n  a -> b [label=5];\n  b -> c;\n  c -> a;\n  c -> c [label=1];\n}\n"
        );
    }

    #[test]
    fn undirected_edges_written_once() {
        let graph = UnGraph::from_edges([(1, 2), (2, 3)]);
        let mut out = Vec::new();
        graph.try_write_dot(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph {\n  1 -- 2;\n  2 -- 3;\n}\n"
        );
    }

    #[test]
    fn symbols_fall_back_to_numbers() {
        let graph = DiGraph::from_edges([(0, 26), (27, -3)]);
        assert_eq!(
            to_string(DotWriter::new().symbols(true), &graph),
            "digraph {\n  0 -> z;\n  27 -> -3;\n}\n"
        );
    }

    #[test]
    fn empty_graph() {
        let graph = DiGraph::from_edges(Vec::<Edge>::new());
        assert_eq!(to_string(DotWriter::new(), &graph), "digraph {\n}\n");
    }
}
