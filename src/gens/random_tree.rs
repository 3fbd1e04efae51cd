/*!
# Random Trees

Builds a random spanning tree by random-pair attachment and elimination:
all switches start in a pool, and in every step two distinct pool members
`left` and `right` are drawn without replacement, linked, and `left` leaves the pool.
`right` remains eligible and may collect further links later on.

Every step removes exactly one pool member and adds exactly one edge, so the process
stops after `n - 1` steps with a connected tree. As an eliminated switch is never drawn
again and both endpoints of a draw are distinct, neither duplicate links nor
self-loops can occur.

# Examples

```
use rand::SeedableRng;
use topogen::{algo::*, gens::*, prelude::*};

let mut rng = rand::rngs::StdRng::seed_from_u64(0);
let tree: Topology = RandomTree::new().nodes(10).generate(&mut rng).unwrap();

assert_eq!(tree.number_of_edges(), 9);
assert!(tree.is_connected());
```
*/

use tracing::{debug, instrument};

use super::*;

/// Generator for random spanning trees.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RandomTree {
    n: NumNodes,
}

impl RandomTree {
    /// Creates a new generator with `n = 0`; set the number of nodes before generating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a lazy stream over the `n - 1` tree edges in the order they are drawn.
    ///
    /// Each yielded `Edge(left, right)` names the eliminated switch first.
    ///
    /// # Errors
    /// Fails with [`TopologyError::TooFewNodes`] if `n < 2`.
    pub fn stream<'a, R>(&self, rng: &'a mut R) -> Result<RandomTreeEdges<'a, R>>
    where
        R: Rng,
    {
        self.validate()?;
        Ok(RandomTreeEdges::new(self.n, rng))
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl TopologyGenerator for RandomTree {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(TopologyError::TooFewNodes { nodes: self.n });
        }
        Ok(())
    }

    #[instrument(level = "debug", skip_all, fields(switches = self.n))]
    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: TopologyGraph,
        R: Rng,
    {
        self.validate()?;

        let mut graph = G::new(self.n);
        for Edge(left, right) in RandomTreeEdges::new(self.n, rng) {
            graph.add_edge(left, right);
        }

        debug!(links = graph.number_of_edges(), "random tree generated");
        Ok(graph)
    }
}

/// Streaming generator for random tree edges.
///
/// Holds the pool of switches that may still be eliminated and yields
/// exactly `n - 1` edges.
pub struct RandomTreeEdges<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    pool: Vec<Node>,
}

impl<'a, R> RandomTreeEdges<'a, R>
where
    R: Rng,
{
    /// Creates a new stream over a pool of `n` switches
    pub fn new(n: NumNodes, rng: &'a mut R) -> Self {
        Self {
            rng,
            pool: (0..n).collect(),
        }
    }
}

impl<'a, R> Iterator for RandomTreeEdges<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pool.len() < 2 {
            return None;
        }

        let (left, right) = sample_pair(self.rng, self.pool.len());
        let edge = Edge(self.pool[left], self.pool[right]);
        self.pool.swap_remove(left);

        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.pool.len().saturating_sub(1);
        (rem, Some(rem))
    }
}

impl<'a, R> ExactSizeIterator for RandomTreeEdges<'a, R> where R: Rng {}
