//! # EdgeList
//!
//! The EdgeList-Format consists of a header `p {problem} {n} {m}`, followed by `m` non-comment-lines
//! `a b`, each describing the link `Edge(a, b)` between switches `a` and `b`.
//! Switches are written as-is (`0..n`), and every link is written once with `a < b`.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use super::*;

/// Problem identifier written into the header by default
pub const DEFAULT_PROBLEM: &str = "topo";

/// Largest number of switches a header may announce by default
pub const DEFAULT_MAX_SWITCHES: NumNodes = 1 << 20;

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Second token of the header
    problem: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            problem: DEFAULT_PROBLEM.to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier in the header
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = problem.into();
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p {} {} {}",
            self.problem,
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for Edge(a, b) in graph.links() {
            writeln!(writer, "{a} {b}")?;
        }

        Ok(())
    }
}

/// A reader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Expected second token of the header; any token is accepted if `None`
    problem: Option<String>,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Headers announcing more switches are rejected before anything is allocated
    max_switches: NumNodes,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            problem: Some(DEFAULT_PROBLEM.to_string()),
            comment_identifier: "c".to_string(),
            max_switches: DEFAULT_MAX_SWITCHES,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any problem identifier in the header
    pub fn any_problem(mut self) -> Self {
        self.problem = None;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the largest number of switches a header may announce
    pub fn max_switches(mut self, n: NumNodes) -> Self {
        self.max_switches = n;
        self
    }

    /// Reads a topology from `reader`.
    ///
    /// # Errors
    /// Fails on IO errors, on a malformed header or link line, if the header announces more
    /// switches than the configured maximum, if a link names an unknown
    /// switch, is a self-loop or is listed twice, and if the number of links does not match
    /// the header.
    pub fn try_read_graph<G, R>(&self, reader: R) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing,
        R: BufRead,
    {
        let mut lines = NonCommentLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next()
            .transpose()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = self.parse_header(&header)?;
        raise_error_unless!(
            n <= self.max_switches,
            ErrorKind::InvalidData,
            format!("Header announces {n} switches, at most {} allowed", self.max_switches)
        );

        let mut graph = G::new(n);
        let mut links = 0;
        for line in lines {
            let Edge(a, b) = parse_link(&line?)?;
            raise_error_unless!(
                a < n && b < n,
                ErrorKind::InvalidData,
                format!("Link {a}--{b} names a switch outside 0..{n}")
            );
            raise_error_unless!(
                a != b,
                ErrorKind::InvalidData,
                format!("Self-loop at switch {a}")
            );
            raise_error_unless!(
                !graph.try_add_edge(a, b),
                ErrorKind::InvalidData,
                format!("Link {a}--{b} is listed twice")
            );
            links += 1;
        }

        raise_error_unless!(
            links == m,
            ErrorKind::InvalidData,
            format!("Header announces {m} links, found {links}")
        );

        Ok(graph)
    }

    /// Reads a topology from the file at `path`
    pub fn try_read_graph_file<G, P>(&self, path: P) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing,
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }

    /// Parses `p {problem} {n} {m}` into `(n, m)`
    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        let &["p", problem, n, m] = parts.as_slice() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Invalid header found: {line}")
            ));
        };

        if let Some(expected) = &self.problem {
            raise_error_unless!(
                problem == expected.as_str(),
                ErrorKind::InvalidData,
                format!("Expected problem {expected}, found {problem}")
            );
        }

        Ok((
            parse_value(n, "Header>Number of nodes")?,
            parse_value(m, "Header>Number of edges")?,
        ))
    }
}

/// Parses a link line `a b`
fn parse_link(line: &str) -> Result<Edge> {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    match parts.as_slice() {
        &[a, b] => Ok(Edge(
            parse_value(a, "Source switch")?,
            parse_value(b, "Target switch")?,
        )),
        &[_] => Err(io_error!(
            ErrorKind::InvalidData,
            "Premature end of line when parsing Target switch."
        )),
        _ => Err(io_error!(
            ErrorKind::InvalidData,
            format!("Expected a link `a b`, found: {line}")
        )),
    }
}

fn parse_value<T: FromStr>(token: &str, name: &str) -> Result<T> {
    token.parse().map_err(|_| {
        io_error!(
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {name}.")
        )
    })
}

/// Iterator over non-empty lines that do not start with the comment identifier
struct NonCommentLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> Iterator for NonCommentLines<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line)
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                other => return Some(other),
            }
        }
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Shorthand for default settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}
