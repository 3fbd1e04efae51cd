/*!
# IO

Writers that hand a generated topology to downstream tooling, and a reader for the
edge-list format so that previously written topologies can be loaded again.

## Formats

- **EdgeList**: a header line `p topo {n} {m}` followed by one line `a b` per link with `a < b`.
  Lines starting with `c` are comments.
- **Dot**: an undirected graph in the [DOT language](https://graphviz.org/doc/info/lang.html)
  of GraphViz; switch `i` is named `s{i}`.
- **Json**: an object `{"switches": n, "links": [[a, b], ...]}`.

All formats list every link exactly once and in ascending order.

## Traits

- [`GraphWriter`] is implemented by the writer of a specific format.
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod edge_list;
pub mod json;

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use edge_list::*;
pub use json::*;

/// Identifier for a topology file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    /// Header plus one link per line
    #[default]
    EdgeList,
    /// DOT language of GraphViz
    Dot,
    /// JSON object with the number of switches and the list of links
    Json,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" | "edge-list" | "edges" => Ok(FileFormat::EdgeList),
            "dot" | "gv" => Ok(FileFormat::Dot),
            "json" => Ok(FileFormat::Json),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can write topologies in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Trait for writing topologies when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_to_writer(&mut writer, format)?;
        writer.flush()
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => EdgeListWriter::default().try_write_graph(self, writer),
            FileFormat::Dot => DotWriter::default().try_write_graph(self, writer),
            FileFormat::Json => JsonWriter::default().try_write_graph(self, writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("edge-list", FileFormat::EdgeList)]
    #[case("EdgeList", FileFormat::EdgeList)]
    #[case("dot", FileFormat::Dot)]
    #[case("JSON", FileFormat::Json)]
    fn parses_formats(#[case] input: &str, #[case] expected: FileFormat) {
        assert_eq!(input.parse::<FileFormat>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "metis".parse::<FileFormat>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn dispatches_on_format() {
        let graph = Topology::from_edges(3, [Edge(2, 0), Edge(1, 2)].into_iter());

        let mut buf = Vec::new();
        graph.try_write_to_writer(&mut buf, FileFormat::EdgeList).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "p topo 3 2\n0 2\n1 2\n");

        let mut buf = Vec::new();
        graph.try_write_to_writer(&mut buf, FileFormat::Dot).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("graph {"));

        let mut buf = Vec::new();
        graph.try_write_to_writer(&mut buf, FileFormat::Json).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with('{'));
    }
}
