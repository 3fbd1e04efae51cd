/*!
Breadth-first traversal over a topology.

The traversal is exposed as a lazy iterator that yields every node reachable from the start
node exactly once, in order of increasing hop distance. Neighbors are visited in ascending
order, so the sequence only depends on the topology.
*/

use std::collections::VecDeque;

use super::*;

/// Lazy breadth-first search starting at a given node.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Starts a new search from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Consumes the search and returns the set of discovered nodes.
    /// Nodes that were discovered but not yet yielded are included.
    pub fn into_visited(self) -> NodeBitSet {
        self.visited
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Traversal algorithms offered directly on graphs
pub trait Traversal: AdjacencyList {
    /// Returns an iterator over all nodes reachable from `start` in BFS order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_visits_by_distance() {
        // 0 - 1 - 2   3 - 4
        //  \_____/
        let graph = Topology::from_edges(5, [Edge(0, 1), Edge(1, 2), Edge(0, 2), Edge(3, 4)].iter());

        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 0, 2]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4, 3]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.next(), Some(0));
        assert!(bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(3));
        assert_eq!(bfs.into_visited().cardinality(), 3);
    }
}
