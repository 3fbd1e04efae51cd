/*!
# Topology Generators

This module provides the generators that decide which switches of a testbed are linked.

Generators are configured with a builder-style pattern and then consume an injected random
source exactly once per call:

1. Create a generator instance (e.g., `Jellyfish::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).degree(k)`).
3. Build a topology via `generate(&mut rng)`.

Given the same parameters and an identically seeded random source, `generate` always returns
the same topology. Invalid parameters are rejected before any construction happens.

Supported models:
- [`RandomTree`]: a random spanning tree built by random-pair attachment and elimination
- [`Jellyfish`]: a random regular graph where every switch has the same number of links

[`Strategy`] wraps both models into a single value, e.g. when the model is chosen at runtime.
The [`RandomTopology`] trait offers one-line constructors on every graph type.

# Examples

```
use rand::SeedableRng;
use topogen::{gens::*, prelude::*};

let mut rng = rand::rngs::StdRng::seed_from_u64(0);
let topo: Topology = Jellyfish::new().nodes(10).degree(3).generate(&mut rng).unwrap();

assert!(topo.degrees().all(|d| d == 3));
assert_eq!(topo.links().count(), 15);
```
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod jellyfish;
mod random_tree;

pub use jellyfish::*;
pub use random_tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes (switches) in place.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes (switches) of the generated topology.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting a target degree.
pub trait DegreeGen: Sized {
    /// Sets the target degree in place.
    fn set_degree(&mut self, k: NumNodes);

    /// Sets the number of links every switch should have.
    fn degree(mut self, k: NumNodes) -> Self {
        self.set_degree(k);
        self
    }
}

/// Common contract of all topology generators.
pub trait TopologyGenerator {
    /// Returns the number of switches the generated topology will have.
    fn number_of_nodes(&self) -> NumNodes;

    /// Checks the configured parameters without drawing any randomness.
    ///
    /// # Errors
    /// Returns a [`TopologyError`] of kind [`ErrorKind::Configuration`] if the parameters are invalid.
    fn validate(&self) -> Result<()>;

    /// Generates a topology, drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Returns a configuration error if [`TopologyGenerator::validate`] fails, and an
    /// exhaustion error if construction reached a dead-end it cannot resolve.
    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: TopologyGraph,
        R: Rng;
}

/// A topology model selected at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// See [`RandomTree`]
    RandomTree(RandomTree),
    /// See [`Jellyfish`]
    Jellyfish(Jellyfish),
}

impl Strategy {
    /// Shorthand for a [`RandomTree`] over `n` switches
    pub fn random_tree(n: NumNodes) -> Self {
        Self::RandomTree(RandomTree::new().nodes(n))
    }

    /// Shorthand for a [`Jellyfish`] over `n` switches with `k` links each
    pub fn jellyfish(n: NumNodes, k: NumNodes) -> Self {
        Self::Jellyfish(Jellyfish::new().nodes(n).degree(k))
    }

    /// Human-readable name of the model
    pub fn name(&self) -> &'static str {
        match self {
            Self::RandomTree(_) => "random-tree",
            Self::Jellyfish(_) => "jellyfish",
        }
    }
}

impl From<RandomTree> for Strategy {
    fn from(value: RandomTree) -> Self {
        Self::RandomTree(value)
    }
}

impl From<Jellyfish> for Strategy {
    fn from(value: Jellyfish) -> Self {
        Self::Jellyfish(value)
    }
}

impl TopologyGenerator for Strategy {
    fn number_of_nodes(&self) -> NumNodes {
        match self {
            Self::RandomTree(tree) => tree.number_of_nodes(),
            Self::Jellyfish(jelly) => jelly.number_of_nodes(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::RandomTree(tree) => tree.validate(),
            Self::Jellyfish(jelly) => jelly.validate(),
        }
    }

    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: TopologyGraph,
        R: Rng,
    {
        match self {
            Self::RandomTree(tree) => tree.generate(rng),
            Self::Jellyfish(jelly) => jelly.generate(rng),
        }
    }
}

/// Trait for building topologies from the supported random models directly on a graph type.
pub trait RandomTopology: Sized {
    /// Creates a random spanning tree over `n` switches.
    ///
    /// # Errors
    /// Fails if `n < 2`.
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Result<Self>
    where
        R: Rng;

    /// Creates a Jellyfish topology over `n` switches with `k` links each.
    ///
    /// # Errors
    /// Fails if the parameters are invalid or construction is exhausted.
    fn jellyfish<R>(rng: &mut R, n: NumNodes, k: NumNodes) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomTopology for G
where
    G: TopologyGraph,
{
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        RandomTree::new().nodes(n).generate(rng)
    }

    fn jellyfish<R>(rng: &mut R, n: NumNodes, k: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        Jellyfish::new().nodes(n).degree(k).generate(rng)
    }
}

/// Draws two distinct positions out of `0..len` without replacement.
///
/// ** Panics if `len < 2` **
fn sample_pair<R>(rng: &mut R, len: usize) -> (usize, usize)
where
    R: Rng,
{
    let picked = rand::seq::index::sample(rng, len, 2);
    (picked.index(0), picked.index(1))
}
