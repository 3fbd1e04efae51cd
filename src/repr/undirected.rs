use std::fmt::{self, Debug};

use itertools::Itertools;

use super::*;

/// An undirected graph representation without self-loops or multi-edges
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Default topology representation using sorted adjacency arrays
pub type Topology = UndirectedGraph<SortedNeighborhood>;

/// Topology representation using an Adjacency-Matrix
pub type DenseTopology = UndirectedGraph<BitNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        debug_assert_ne!(u, v, "self-loops are not permitted in a topology");

        if !self.nbs[u as usize].try_add_neighbor(v) {
            assert!(!self.nbs[v as usize].try_add_neighbor(u));
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

/// Two topologies are equal if they have the same switches and the same links,
/// independent of their neighborhood representation.
impl<A: Neighborhood, B: Neighborhood> PartialEq<UndirectedGraph<B>> for UndirectedGraph<A> {
    fn eq(&self, other: &UndirectedGraph<B>) -> bool {
        self.number_of_nodes() == other.number_of_nodes()
            && self.number_of_edges() == other.number_of_edges()
            && self.links().eq(other.links())
    }
}

impl<Nbs: Neighborhood> Eq for UndirectedGraph<Nbs> {}

impl<Nbs: Neighborhood> Debug for UndirectedGraph<Nbs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UndirectedGraph(n={}, m={}, [{}])",
            self.number_of_nodes(),
            self.number_of_edges(),
            self.links().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing<Nbs: Neighborhood>() {
        let mut graph = UndirectedGraph::<Nbs>::new(5);
        assert!(graph.is_singleton());

        graph.add_edges([Edge(0, 1), Edge(3, 1), Edge(4, 2)].into_iter());
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.has_edge(1, 3) && graph.has_edge(3, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 3);

        assert_eq!(graph.links().collect_vec(), vec![Edge(0, 1), Edge(1, 3), Edge(2, 4)]);
        assert_eq!(graph.degree_distribution(), vec![(1, 4), (2, 1)]);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.min_degree(), 1);
        assert_eq!(graph.ith_neighbor(1, 1), 3);

        graph.remove_edge(3, 1);
        assert!(!graph.try_remove_edge(1, 3));
        assert_eq!(graph.number_of_edges(), 2);

        assert_eq!(graph.degree_of(3), 0);
    }

    #[test]
    fn sparse_editing() {
        editing::<SortedNeighborhood>();
    }

    #[test]
    fn dense_editing() {
        editing::<BitNeighborhood>();
    }

    #[test]
    fn equality_ignores_representation() {
        let edges = [Edge(0, 2), Edge(1, 2), Edge(3, 0)];
        let sparse = Topology::from_edges(4, edges.iter());
        let dense = DenseTopology::from_edges(4, edges.iter().map(Edge::reverse));
        assert_eq!(sparse, dense);

        let other = Topology::from_edges(4, edges[..2].iter());
        assert_ne!(sparse, other);
        assert_eq!(format!("{other:?}"), "UndirectedGraph(n=4, m=2, [(0,2), (1,2)])");
    }
}

#[cfg(test)]
crate::testing::test_topology_ops!(sparse_ops, crate::repr::Topology);
#[cfg(test)]
crate::testing::test_topology_ops!(dense_ops, crate::repr::DenseTopology);
