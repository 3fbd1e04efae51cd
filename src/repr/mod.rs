/*!
# Graph Representations

A topology is stored as one [`Neighborhood`] per switch. Both implementations keep their
neighbors as a *set* (no duplicate links) and iterate them in ascending order, which makes
every generated topology a deterministic function of the random draws that built it.

- [`Topology`] uses sorted small vectors and is the right choice for the sparse graphs
  generated for testbeds (degree far below `n`).
- [`DenseTopology`] uses one [`NodeBitSet`] per switch and answers adjacency queries in
  constant time, which pays off for Jellyfish instances with large degrees.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
