use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood in a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in ascending order
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood stored as a sorted `SmallVec<[Node; N]>`.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SortedNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SortedNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(SmallVec::new())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, u);
                false
            }
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// A Neighborhood represented by a NodeBitSet
#[derive(Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        self.0.clear_bit(u)
    }

    fn clear(&mut self) {
        self.0.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn exercise<Nbs: Neighborhood>() {
        let mut nbs = Nbs::new(16);
        for u in [9, 3, 12, 3, 0] {
            nbs.try_add_neighbor(u);
        }
        assert_eq!(nbs.num_of_neighbors(), 4);
        assert_eq!(nbs.neighbors().collect_vec(), vec![0, 3, 9, 12]);
        assert!(nbs.try_add_neighbor(9));
        assert!(nbs.has_neighbor(12));
        assert!(!nbs.has_neighbor(11));

        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
        assert_eq!(nbs.neighbors().collect_vec(), vec![0, 9, 12]);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
    }

    #[test]
    fn sorted_neighborhood() {
        exercise::<SortedNeighborhood>();
        exercise::<SortedNeighborhood<2>>();
    }

    #[test]
    fn bit_neighborhood() {
        exercise::<BitNeighborhood>();
    }
}
