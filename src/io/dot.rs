//! # Dot
//!
//! Writes a topology as an undirected graph in the DOT language of [GraphViz](https://graphviz.org/),
//! e.g. for a quick visual check of a generated testbed. Switch `i` is named `s{i + 1}`, matching
//! the names the testbed gives its switches:
//! ```text
//! graph {
//! s1--s3;s2--s3;
//! }
//! ```
//! Switches can be highlighted, e.g. a switch left short of its target degree.

use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment switches by 1 before writing
    inc_nodes: bool,
    /// Prefix of a switch (default: 's')
    prefix: String,
    /// Switches drawn filled in the given color
    highlights: Vec<(Node, DotColor)>,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "s".to_string(),
            highlights: Vec::new(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, switches are written with their internal `0`-based id
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Fills the given switches in `color` when writing a whole graph
    pub fn highlight<I>(mut self, nodes: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.highlights.extend(nodes.into_iter().map(|u| (u, color)));
        self
    }

    /// Set the prefix of a switch (`s` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of links to `writer`, optionally colored
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I, color: Option<DotColor>) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_color = match color {
            Some(c) => format!("[color={c}]"),
            None => String::new(),
        };

        for Edge(u, v) in edges {
            write!(
                writer,
                "{}--{}{edge_color};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored switches to `writer`
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            write!(
                writer,
                "{}[style=filled, color={color}];",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_edges(&mut writer, graph.links(), None)?;
        for (color, group) in &self.highlights.iter().chunk_by(|(_, color)| *color) {
            self.color_nodes(&mut writer, group.map(|&(u, _)| u), color)?;
        }
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
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

/// Colors used to highlight switches or links
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_undirected_links() {
        let graph = Topology::from_edges(3, [Edge(2, 0), Edge(1, 2)].into_iter());

        let mut buf = Vec::new();
        graph.try_write_dot(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "graph {\ns1--s3;s2--s3;\n}\n");

        let mut buf = Vec::new();
        DotWriter::new()
            .inc_nodes(false)
            .try_write_graph(&graph, &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "graph {\ns0--s2;s1--s2;\n}\n");
    }

    #[test]
    fn writes_highlighted_switches() {
        let graph = Topology::from_edges(3, [Edge(0, 1), Edge(1, 2)].into_iter());

        let mut buf = Vec::new();
        DotWriter::new()
            .highlight([0, 2], DotColor::Red)
            .highlight([1], DotColor::Blue)
            .try_write_graph(&graph, &mut buf)
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "graph {\ns1--s2;s2--s3;\n\
             s1[style=filled, color=red];s3[style=filled, color=red];\n\
             s2[style=filled, color=blue];\n}\n"
        );
    }

    #[test]
    fn highlights_switches() {
        let writer = DotWriter::new().node_prefix("sw").inc_nodes(false);
        let mut buf = Vec::new();

        writer.start_graph(&mut buf).unwrap();
        writer
            .write_edges(&mut buf, [Edge(0, 1)], Some(DotColor::Gray))
            .unwrap();
        writer.color_nodes(&mut buf, [1], DotColor::Red).unwrap();
        writer.finish_graph(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "graph {\nsw0--sw1[color=gray];\nsw1[style=filled, color=red];\n}\n"
        );
    }
}
