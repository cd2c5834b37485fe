use std::collections::BTreeSet;
use std::fmt;

use crate::error::GraphError;

/// Dense node identifier. Real nodes are numbered `1..=n`; slot 0 is a
/// reserved sentinel that exists in the store but never names a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Position of this node in per-node arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// In-memory undirected graph: one ordered neighbor set per node.
///
/// Every edge is stored in both endpoints' sets, so `neighbors(a)` contains
/// `b` iff `neighbors(b)` contains `a`. Sets iterate in ascending id order,
/// which makes every traversal over the graph deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<BTreeSet<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Allocate a graph with nodes `1..=node_count` and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); node_count + 1],
            edge_count: 0,
        }
    }

    /// Number of allocated slots, including the sentinel slot 0.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len() - 1
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if `id` names a real node (not the sentinel, not past the end).
    pub fn contains(&self, id: NodeId) -> bool {
        id.get() >= 1 && id.index() < self.adjacency.len()
    }

    /// All real node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (1..self.adjacency.len() as u32).map(NodeId::new)
    }

    /// Add an undirected edge. Returns `Ok(true)` if the edge is new,
    /// `Ok(false)` for a duplicate or a self-loop (neither is stored).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        for id in [a, b] {
            if !self.contains(id) {
                return Err(GraphError::NodeOutOfRange {
                    node: id,
                    size: self.size(),
                });
            }
        }
        if a == b {
            return Ok(false);
        }

        let inserted = self.adjacency[a.index()].insert(b);
        self.adjacency[b.index()].insert(a);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Neighbors of `id` in ascending order. Empty for isolated nodes, the
    /// sentinel, and ids past the end.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id.index()).map_or(0, BTreeSet::len)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|set| set.contains(&b))
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        // BTreeMap nodes carry roughly one pointer of overhead per entry.
        let slots = self.adjacency.len() * size_of::<BTreeSet<NodeId>>();
        let entries = self.edge_count * 2 * (size_of::<NodeId>() + size_of::<usize>());
        slots + entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u32) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_size_includes_sentinel() {
        let g = Graph::with_nodes(5);
        assert_eq!(g.size(), 6);
        assert_eq!(g.node_count(), 5);
        assert!(!g.contains(n(0)));
        assert!(g.contains(n(1)));
        assert!(g.contains(n(5)));
        assert!(!g.contains(n(6)));
    }

    #[test]
    fn test_edges_are_symmetric() {
        let mut g = Graph::with_nodes(3);
        assert_eq!(g.add_edge(n(1), n(2)), Ok(true));
        assert!(g.has_edge(n(1), n(2)));
        assert!(g.has_edge(n(2), n(1)));
        assert_eq!(g.neighbors(n(2)).collect::<Vec<_>>(), vec![n(1)]);
    }

    #[test]
    fn test_parallel_edges_deduplicated() {
        let mut g = Graph::with_nodes(2);
        assert_eq!(g.add_edge(n(1), n(2)), Ok(true));
        assert_eq!(g.add_edge(n(2), n(1)), Ok(false));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(n(1)), 1);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = Graph::with_nodes(2);
        assert_eq!(g.add_edge(n(1), n(1)), Ok(false));
        assert_eq!(g.degree(n(1)), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut g = Graph::with_nodes(2);
        assert_eq!(
            g.add_edge(n(1), n(3)),
            Err(GraphError::NodeOutOfRange { node: n(3), size: 3 })
        );
        assert!(g.add_edge(n(0), n(1)).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = Graph::with_nodes(5);
        for id in [5, 3, 4, 2] {
            g.add_edge(n(1), n(id)).unwrap();
        }
        let ids: Vec<u32> = g.neighbors(n(1)).map(NodeId::get).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_neighbors_of_isolated_and_out_of_range() {
        let g = Graph::with_nodes(2);
        assert_eq!(g.neighbors(n(1)).count(), 0);
        assert_eq!(g.neighbors(n(0)).count(), 0);
        assert_eq!(g.neighbors(n(99)).count(), 0);
        assert_eq!(g.degree(n(99)), 0);
    }

    #[test]
    fn test_nodes_skips_sentinel() {
        let g = Graph::with_nodes(3);
        let ids: Vec<u32> = g.nodes().map(NodeId::get).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::with_nodes(0);
        assert_eq!(g.size(), 1);
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.nodes().count(), 0);
    }

    #[test]
    fn test_memory_usage_grows_with_edges() {
        let mut g = Graph::with_nodes(10);
        let before = g.memory_usage();
        g.add_edge(n(1), n(2)).unwrap();
        assert!(g.memory_usage() > before);
    }
}
