/*!
# Graph Algorithms

Algorithms used to inspect generated topologies. All algorithms are re-exported at the top level
of this module and implemented as traits on the graph itself:
```rust
use topogen::{algo::*, prelude::*};

let ring = Topology::from_edges(4, [Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)].iter());
assert!(ring.is_connected());
assert_eq!(ring.bfs(0).collect::<Vec<_>>(), vec![0, 1, 3, 2]);
```
*/

mod connectivity;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use traversal::*;
