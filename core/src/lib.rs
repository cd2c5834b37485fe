//! bidi-path-core: In-memory bidirectional path search.
//!
//! A pure Rust library that holds an undirected adjacency-set graph over
//! dense integer ids and finds paths by meeting a breadth-first frontier
//! from the start with a depth-first frontier from the end.
//!
//! Loading graphs from files and talking to a console are left to the
//! `bidi-path` binary; this crate only needs a [`Graph`] and two ids.

mod error;
mod graph;
mod names;
mod search;
mod traversal;

pub use error::{GraphError, NameError, SearchError};
pub use graph::{Graph, NodeId};
pub use names::NodeNames;
pub use search::{bidirectional_search, PathResult, Side};
pub use traversal::shortest_path;
