//! Shared helpers for unit tests across the crate.

use std::cell::Cell;

use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::prelude::*;

/// Deterministic random source used throughout the tests
pub(crate) fn seeded(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Checks the structural guarantees every generated topology must satisfy:
/// links are symmetric, there are no self-loops or duplicate links, and the
/// degree sum matches the number of links.
pub(crate) fn assert_topology_invariants<G: TopologyGraph>(graph: &G) {
    let mut degree_sum = 0u64;

    for u in graph.vertices() {
        assert!(!graph.has_self_loop(u), "self-loop at {u}");

        let nbs = graph.neighbors_of(u).collect_vec();
        assert!(
            nbs.iter().tuple_windows().all(|(a, b)| a < b),
            "neighbors of {u} not strictly ascending: {nbs:?}"
        );
        for &v in &nbs {
            assert!(graph.has_edge(v, u), "link {u}--{v} is not symmetric");
        }

        assert_eq!(graph.degree_of(u) as usize, nbs.len());
        degree_sum += nbs.len() as u64;
    }

    assert_eq!(degree_sum, 2 * graph.number_of_edges() as u64);
    assert_eq!(graph.links().count(), graph.number_of_edges() as usize);
}

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
}

/// Number of [`CountingTopology`] instances created on the current thread
pub(crate) fn constructed_topologies() -> usize {
    CONSTRUCTED.with(Cell::get)
}

/// [`Topology`] that counts how often it is constructed
pub(crate) struct CountingTopology(Topology);

impl GraphNew for CountingTopology {
    fn new(n: NumNodes) -> Self {
        CONSTRUCTED.with(|c| c.set(c.get() + 1));
        Self(Topology::new(n))
    }
}

impl GraphNodeOrder for CountingTopology {
    fn number_of_nodes(&self) -> NumNodes {
        self.0.number_of_nodes()
    }
}

impl GraphEdgeOrder for CountingTopology {
    fn number_of_edges(&self) -> NumEdges {
        self.0.number_of_edges()
    }
}

impl AdjacencyList for CountingTopology {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.0.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.0.degree_of(u)
    }
}

impl AdjacencyTest for CountingTopology {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.0.has_edge(u, v)
    }
}

impl GraphEdgeEditing for CountingTopology {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.0.try_add_edge(u, v)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.0.try_remove_edge(u, v)
    }
}

/// Generates randomized tests for the editing operations of a topology representation.
///
/// The representation is compared against a plain adjacency matrix of bitsets.
macro_rules! test_topology_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use itertools::Itertools;
            use rand::Rng;

            use crate::{prelude::*, testing::*};

            /// Creates a list of at most `m_ub` random loop-free edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            #[test]
            fn graph_new() {
                for n in 1..30 {
                    let graph = <$graph>::new(n);

                    assert!(graph.is_singleton());
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn adjacency_matches_matrix() {
                let rng = &mut seeded(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5] {
                        let edges = random_edges(rng, n, m_ub);

                        let mut matrix = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            matrix[u as usize].set_bit(v);
                            matrix[v as usize].set_bit(u);
                        }

                        let mut graph = <$graph>::from_edges(n, edges.iter().map(Edge::reverse));
                        assert_eq!(graph.links().collect_vec(), edges);
                        assert_topology_invariants(&graph);

                        for u in 0..n {
                            assert_eq!(graph.degree_of(u), matrix[u as usize].cardinality());
                            assert_eq!(
                                graph.neighbors_of(u).collect_vec(),
                                matrix[u as usize].iter_set_bits().collect_vec()
                            );
                        }

                        let mut m = graph.number_of_edges();
                        for _ in 0..m / 2 {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            if u == v {
                                continue;
                            }

                            if matrix[u as usize].clear_bit(v) {
                                assert!(matrix[v as usize].clear_bit(u));
                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }
                            assert_eq!(graph.number_of_edges(), m);
                        }
                        assert_topology_invariants(&graph);
                    }
                }
            }
        }
    };
}

pub(crate) use test_topology_ops;
