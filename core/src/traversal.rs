use std::collections::VecDeque;

use crate::graph::{Graph, NodeId};

/// Shortest path from `start` to `target` using single-direction BFS.
///
/// Baseline for [`bidirectional_search`](crate::bidirectional_search): same
/// graph, same ascending neighbor order, but always optimal in hop count.
/// Returns None if no path exists or either id is not a node in the graph.
pub fn shortest_path(graph: &Graph, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    if !graph.contains(start) || !graph.contains(target) {
        return None;
    }

    if start == target {
        return Some(vec![start]);
    }

    // parent[v] = node v was discovered from; start is its own parent
    let mut parent: Vec<Option<NodeId>> = vec![None; graph.size()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    parent[start.index()] = Some(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if parent[next.index()].is_some() {
                continue;
            }
            parent[next.index()] = Some(current);

            if next == target {
                return Some(reconstruct(&parent, start, target));
            }

            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(parent: &[Option<NodeId>], start: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        match parent[current.index()] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
