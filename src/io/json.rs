//! # Json
//!
//! Writes a topology as `{"switches": n, "links": [[a, b], ...]}` for tooling that consumes JSON.

use serde::Serialize;

use super::*;

/// Serialized form of a topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyRecord {
    /// Number of switches
    pub switches: NumNodes,
    /// Every link once as `[a, b]` with `a < b`, in ascending order
    pub links: Vec<Edge>,
}

impl TopologyRecord {
    /// Collects the record of `graph`
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            switches: graph.number_of_nodes(),
            links: graph.links().collect(),
        }
    }
}

/// A writer for the Json-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Indents the output if *true*
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<G> GraphWriter<G> for JsonWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let record = TopologyRecord::from_graph(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &record)?;
        } else {
            serde_json::to_writer(&mut writer, &record)?;
        }
        writeln!(writer)
    }
}
