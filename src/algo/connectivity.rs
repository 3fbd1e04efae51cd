use std::iter::FusedIterator;

use super::*;

/// Iterator over the connected components of an undirected graph.
///
/// Components are yielded in order of their smallest node; each component is returned
/// as a sorted `Vec<Node>`.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    unvisited: NodeBitSet,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new iterator over all components of `graph`
    pub fn new(graph: &'a G) -> Self {
        let mut unvisited = graph.vertex_bitset_unset();
        for u in graph.vertices() {
            unvisited.set_bit(u);
        }
        Self { graph, unvisited }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.unvisited.iter_set_bits().next()?;

        let mut component: Vec<Node> = self.graph.bfs(start).collect();
        for &u in &component {
            self.unvisited.clear_bit(u);
        }
        component.sort_unstable();

        Some(component)
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Connectivity queries on undirected topologies
pub trait Connectivity: AdjacencyList {
    /// Returns an iterator over the connected components
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if every switch can reach every other switch.
    /// Graphs with at most one node are considered connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn components_in_order() {
        let graph = Topology::from_edges(7, [Edge(5, 1), Edge(1, 3), Edge(0, 4), Edge(4, 6)].iter());

        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 4, 6], vec![1, 3, 5], vec![2]]
        );
        assert!(!graph.is_connected());
    }

    #[test]
    fn trivial_graphs_are_connected() {
        assert!(Topology::new(0).is_connected());
        assert!(Topology::new(1).is_connected());
        assert!(!Topology::new(2).is_connected());
        assert_eq!(Topology::new(0).connected_components().count(), 0);
    }

    #[test]
    fn star_is_connected() {
        let star = DenseTopology::from_edges(6, (1..6).map(|v| Edge(0, v)));
        assert!(star.is_connected());
        assert_eq!(star.connected_components().count(), 1);
    }
}
