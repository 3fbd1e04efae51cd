//! Error types surfaced by topology generation.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Coarse classification of a [`TopologyError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The requested parameters are invalid or infeasible; nothing was constructed.
    Configuration,
    /// Construction started but reached a dead-end that no rewire could resolve.
    Exhaustion,
}

/// Error type produced by [`crate::gens::TopologyGenerator::generate`].
///
/// A failed generation never returns a partial topology.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TopologyError {
    /// A topology needs at least two switches.
    #[error("a topology needs at least 2 switches (got {nodes})")]
    TooFewNodes {
        /// The number of switches requested by the caller.
        nodes: NumNodes,
    },
    /// The target degree must satisfy `1 <= degree < nodes`.
    #[error("degree must satisfy 1 <= degree < {nodes} (got {degree})")]
    DegreeOutOfRange {
        /// The requested number of links per switch.
        degree: NumNodes,
        /// The number of switches requested by the caller.
        nodes: NumNodes,
    },
    /// No link could be rewired to connect two adjacent switches that both still need links.
    #[error("no rewire candidate found for switches {node_a} and {node_b}")]
    RewireExhausted {
        /// First switch with free ports.
        node_a: Node,
        /// Second switch with free ports, already adjacent to `node_a`.
        node_b: Node,
    },
    /// No link could be split to satisfy the ports of the last remaining switch.
    #[error("no link can be split to serve switch {node} ({ports_left} ports left)")]
    CleanupExhausted {
        /// The last switch with free ports.
        node: Node,
        /// Ports still free on `node`.
        ports_left: NumNodes,
    },
}

impl TopologyError {
    /// Returns whether the error stems from invalid parameters or from a failed construction.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewNodes { .. } | Self::DegreeOutOfRange { .. } => ErrorKind::Configuration,
            Self::RewireExhausted { .. } | Self::CleanupExhausted { .. } => ErrorKind::Exhaustion,
        }
    }
}

/// Convenient alias for results returned by the generators.
pub type Result<T> = core::result::Result<T, TopologyError>;
