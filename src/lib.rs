/*!
`topogen` generates random switch topologies for emulated network testbeds.

Given a number of switches, a topology decides which pairs of switches are connected by a
link. Two models are supported:

- [`RandomTree`](crate::gens::RandomTree): a random spanning tree, built by repeatedly linking
  two random switches and retiring one of them.
- [`Jellyfish`](crate::gens::Jellyfish): a random regular graph where every switch uses the
  same number of ports, as proposed for the Jellyfish data-center design.

# Representation

Switches are numbered `0` to `n - 1` and represented as `u32`.
Links are stored as a tuple-struct `Edge(Node, Node)`; topologies are undirected, so
`Edge(u, v)` and `Edge(v, u)` describe the same link. A topology never contains self-loops or
duplicate links.

See the [`repr`] module for the available representations:

- [`Topology`](crate::repr::Topology) with sorted adjacency arrays
- [`DenseTopology`](crate::repr::DenseTopology) with an adjacency matrix

# Design

Generators are configurable structs using the *Builder* pattern. Every generator draws all of its
randomness from a caller-provided [`rand::Rng`], so identical seeds reproduce identical
topologies.

# Usage

- [`prelude`] includes definitions for nodes, edges, graph operations and representations,
- [`gens`] includes the topology generators,
- [`algo`] includes traversal and connectivity checks,
- [`io`] includes writers for edge lists, DOT and JSON.

In most use-cases, `use topogen::{prelude::*, gens::*};` suffices.
*/

pub mod algo;
pub mod cli;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `topogen::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
