/*!
# Jellyfish

Random regular topologies as used by the Jellyfish data-center design: every switch has
`k` ports, and ports are connected uniformly at random.

Construction repeatedly draws two distinct switches that still have free ports and links them.
If the two are already linked, the draw is discarded, unless every pair of switches with
free ports is already linked. In that dead-end, a random existing link `a--b` is rewired into
`a--node_a` and `b--node_b`, which keeps the degrees of `a` and `b` and consumes one port of each
drawn switch.

If afterwards a single switch is left with several free ports, existing links `a--b` are
split into `node--a` and `node--b` until at most one port stays free. This happens only when
`n * k` is odd, in which case exactly one switch ends up with `k - 1` links.

The generator does not guarantee that the result is connected; for non-trivial degrees it
almost always is.
*/

use itertools::Itertools;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, trace, warn};

use super::*;
use crate::algo::Connectivity;

/// Generator for Jellyfish (random regular) topologies with `n` switches and `k` links each.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Jellyfish {
    n: NumNodes,
    k: NumNodes,
}

impl Jellyfish {
    /// Creates a new generator with `n = k = 0`; set both before generating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured target degree
    pub fn target_degree(&self) -> NumNodes {
        self.k
    }
}

impl NumNodesGen for Jellyfish {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl DegreeGen for Jellyfish {
    fn set_degree(&mut self, k: NumNodes) {
        self.k = k;
    }
}

impl TopologyGenerator for Jellyfish {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(TopologyError::TooFewNodes { nodes: self.n });
        }
        if self.k < 1 || self.k >= self.n {
            return Err(TopologyError::DegreeOutOfRange {
                degree: self.k,
                nodes: self.n,
            });
        }
        Ok(())
    }

    #[instrument(level = "debug", skip_all, fields(switches = self.n, degree = self.k))]
    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: TopologyGraph,
        R: Rng,
    {
        self.validate()?;

        let mut graph = G::new(self.n);
        let mut budget = PortBudget::new(self.n, self.k);
        let mut rewires = 0usize;
        let mut discarded = 0usize;

        while budget.len() > 1 {
            let (node_a, node_b) = budget.sample_pair(rng);

            if graph.has_edge(node_a, node_b) {
                if !budget.is_saturated(&graph) {
                    discarded += 1;
                    continue;
                }
                rewire(&mut graph, rng, node_a, node_b)?;
                rewires += 1;
            } else {
                graph.add_edge(node_a, node_b);
            }

            budget.consume(node_a);
            budget.consume(node_b);
        }

        if let Some((node, ports)) = budget.last_open() {
            let ports_left = split_links(&mut graph, rng, node, ports)?;
            if ports_left > 0 {
                warn!(
                    switch = node,
                    links = graph.degree_of(node),
                    "odd number of ports leaves one switch short of the target degree"
                );
            }
        }

        debug!(
            links = graph.number_of_edges(),
            rewires,
            discarded,
            connected = graph.is_connected(),
            "jellyfish topology generated"
        );
        Ok(graph)
    }
}

/// Free ports per switch during construction.
///
/// Switches with free ports are kept in `open` so that two of them can be drawn uniformly;
/// `slot` points from a switch to its position in `open`.
struct PortBudget {
    ports: Vec<NumNodes>,
    open: Vec<Node>,
    slot: Vec<Option<OptionalNode>>,
}

impl PortBudget {
    fn new(n: NumNodes, k: NumNodes) -> Self {
        Self {
            ports: vec![k; n as usize],
            open: (0..n).collect(),
            slot: (0..n).map(OptionalNode::new).collect(),
        }
    }

    /// Number of switches with free ports
    fn len(&self) -> usize {
        self.open.len()
    }

    /// Draws two distinct switches with free ports
    fn sample_pair<R: Rng>(&self, rng: &mut R) -> (Node, Node) {
        let (a, b) = sample_pair(rng, self.open.len());
        (self.open[a], self.open[b])
    }

    /// Uses up one port of `u`; `u` leaves the open set once no port is left
    fn consume(&mut self, u: Node) {
        let ports = &mut self.ports[u as usize];
        debug_assert!(*ports > 0);
        *ports -= 1;
        if *ports > 0 {
            return;
        }

        if let Some(pos) = self.slot[u as usize].take() {
            let pos = pos.get() as usize;
            self.open.swap_remove(pos);
            if let Some(&moved) = self.open.get(pos) {
                self.slot[moved as usize] = OptionalNode::new(pos as Node);
            }
        }
    }

    /// Returns *true* if all switches with free ports are pairwise linked already
    fn is_saturated<G: AdjacencyTest>(&self, graph: &G) -> bool {
        self.open
            .iter()
            .tuple_combinations()
            .all(|(&u, &v)| graph.has_edge(u, v))
    }

    /// Returns the last switch with free ports and their number if exactly one is left
    fn last_open(&self) -> Option<(Node, NumNodes)> {
        match self.open.as_slice() {
            &[u] => Some((u, self.ports[u as usize])),
            _ => None,
        }
    }
}

/// Picks a random link `a--b` such that `accept_a(a)` and `accept_b(b)` hold.
///
/// `a` is drawn uniformly among all switches that have at least one acceptable partner,
/// `b` uniformly among the acceptable partners of `a`.
fn choose_link<G, R, A, B>(graph: &G, rng: &mut R, accept_a: A, accept_b: B) -> Option<Edge>
where
    G: TopologyGraph,
    R: Rng,
    A: Fn(&G, Node) -> bool,
    B: Fn(&G, Node) -> bool,
{
    let candidates = graph
        .vertices()
        .filter(|&a| accept_a(graph, a) && graph.neighbors_of(a).any(|b| accept_b(graph, b)))
        .collect_vec();
    let &a = candidates.choose(rng)?;

    let partners = graph
        .neighbors_of(a)
        .filter(|&b| accept_b(graph, b))
        .collect_vec();
    let &b = partners.choose(rng)?;

    Some(Edge(a, b))
}

/// Resolves the dead-end where `node_a` and `node_b` need links but are already linked.
///
/// Replaces a random link `a--b` by `a--node_a` and `b--node_b`.
fn rewire<G, R>(graph: &mut G, rng: &mut R, node_a: Node, node_b: Node) -> Result<()>
where
    G: TopologyGraph,
    R: Rng,
{
    let Edge(a, b) = choose_link(
        graph,
        rng,
        |g, a| a != node_a && a != node_b && !g.has_edge(node_a, a),
        |g, b| b != node_a && b != node_b && !g.has_edge(node_b, b),
    )
    .ok_or(TopologyError::RewireExhausted { node_a, node_b })?;

    trace!(a, b, node_a, node_b, "rewiring link");
    graph.remove_edge(a, b);
    graph.add_edge(a, node_a);
    graph.add_edge(b, node_b);
    Ok(())
}

/// Splits random links `a--b` into `node--a` and `node--b` while `node` has at least two free
/// ports. Returns the number of ports that remain free (`0` or `1`).
fn split_links<G, R>(graph: &mut G, rng: &mut R, node: Node, ports: NumNodes) -> Result<NumNodes>
where
    G: TopologyGraph,
    R: Rng,
{
    let mut ports_left = ports;
    let detached = |g: &G, u: Node| u != node && !g.has_edge(node, u);

    while ports_left > 1 {
        let Edge(a, b) = choose_link(graph, rng, detached, detached)
            .ok_or(TopologyError::CleanupExhausted { node, ports_left })?;

        trace!(a, b, node, ports_left, "splitting link");
        graph.remove_edge(a, b);
        graph.add_edge(node, a);
        graph.add_edge(node, b);
        ports_left -= 2;
    }

    Ok(ports_left)
}
