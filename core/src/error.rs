use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is outside the graph (valid ids are 1..{size})")]
    NodeOutOfRange { node: NodeId, size: usize },
}

/// Errors raised by [`NodeNames`](crate::NodeNames).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("duplicate node name '{0}'")]
    Duplicate(String),
    #[error("empty node name")]
    Empty,
}

/// Errors raised by [`bidirectional_search`](crate::bidirectional_search).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("node {node} is outside the graph (valid ids are 1..{size})")]
    NodeOutOfRange { node: NodeId, size: usize },

    /// Both frontiers were exhausted without touching.
    #[error("no path between {start} and {end} ({nodes_visited} nodes visited)")]
    NoPath {
        start: NodeId,
        end: NodeId,
        nodes_visited: usize,
    },
}
