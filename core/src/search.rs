use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::SearchError;
use crate::graph::{Graph, NodeId};

/// Which half of a bidirectional search discovered a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Breadth-first expansion from the start node.
    Forward,
    /// Depth-first expansion from the end node.
    Backward,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Forward => Side::Backward,
            Side::Backward => Side::Forward,
        }
    }
}

/// A path found by [`bidirectional_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Start to end inclusive. Consecutive ids are adjacent in the graph.
    pub path: Vec<NodeId>,
    /// Node where the two frontiers touched.
    pub meeting: NodeId,
    /// Distinct nodes tagged by either side, both seeds included.
    pub nodes_visited: usize,
}

impl PathResult {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// How the alternating expansion loop ended.
enum Outcome {
    Meeting(NodeId),
    Exhausted,
}

/// Per-invocation bookkeeping. Never outlives one search call.
struct SearchState {
    marks: Vec<Option<Side>>,
    forward_parent: Vec<Option<NodeId>>,
    backward_parent: Vec<Option<NodeId>>,
    nodes_visited: usize,
}

impl SearchState {
    fn new(size: usize) -> Self {
        Self {
            marks: vec![None; size],
            forward_parent: vec![None; size],
            backward_parent: vec![None; size],
            nodes_visited: 0,
        }
    }

    fn mark(&mut self, node: NodeId, side: Side) {
        self.marks[node.index()] = Some(side);
        self.nodes_visited += 1;
    }

    fn parents(&self, side: Side) -> &[Option<NodeId>] {
        match side {
            Side::Forward => &self.forward_parent,
            Side::Backward => &self.backward_parent,
        }
    }

    fn set_parent(&mut self, side: Side, node: NodeId, parent: NodeId) {
        let parents = match side {
            Side::Forward => &mut self.forward_parent,
            Side::Backward => &mut self.backward_parent,
        };
        parents[node.index()] = Some(parent);
    }

    /// Scan the neighbors of `u` on behalf of `side`.
    ///
    /// Unvisited neighbors are tagged, given `u` as parent, and handed to
    /// `discovered`. The first neighbor already owned by the other side
    /// becomes the meeting point: it gets `u` as its `side` parent and the
    /// scan stops there.
    fn expand(
        &mut self,
        graph: &Graph,
        u: NodeId,
        side: Side,
        mut discovered: impl FnMut(NodeId),
    ) -> Option<NodeId> {
        for v in graph.neighbors(u) {
            let owner = self.marks[v.index()];
            match owner {
                None => {
                    self.mark(v, side);
                    self.set_parent(side, v, u);
                    discovered(v);
                }
                Some(other) if other == side.opposite() => {
                    self.set_parent(side, v, u);
                    return Some(v);
                }
                Some(_) => {}
            }
        }
        None
    }

    /// Walk `side` parents from `node` up to that side's root, returned
    /// root first.
    fn chain(&self, node: NodeId, side: Side) -> Vec<NodeId> {
        let parents = self.parents(side);
        let mut chain = vec![node];
        let mut current = node;
        while let Some(parent) = parents[current.index()] {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// Stitch `[start .. meeting]` and `[meeting .. end]` into one path.
    fn join_at(&self, meeting: NodeId) -> Vec<NodeId> {
        let mut path = self.chain(meeting, Side::Forward);
        let mut backward = self.chain(meeting, Side::Backward);
        backward.pop();
        path.extend(backward.into_iter().rev());
        path
    }
}

/// Find a path from `start` to `end` by growing a breadth-first frontier from
/// `start` and a depth-first frontier from `end`, one node expansion each in
/// turn, until one side reaches a node the other side already owns.
///
/// The path is a valid walk but not necessarily a shortest one. Returns
/// [`SearchError::NodeOutOfRange`] if either id does not name a node, and
/// [`SearchError::NoPath`] if the frontiers exhaust without touching.
pub fn bidirectional_search(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<PathResult, SearchError> {
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(SearchError::NodeOutOfRange {
                node,
                size: graph.size(),
            });
        }
    }

    if start == end {
        return Ok(PathResult {
            path: vec![start],
            meeting: start,
            nodes_visited: 1,
        });
    }

    debug!(%start, %end, "bidirectional search started");

    let (state, outcome) = explore(graph, start, end);
    match outcome {
        Outcome::Meeting(meeting) => {
            let path = state.join_at(meeting);
            debug!(
                %meeting,
                hops = path.len() - 1,
                nodes_visited = state.nodes_visited,
                "frontiers met"
            );
            Ok(PathResult {
                path,
                meeting,
                nodes_visited: state.nodes_visited,
            })
        }
        Outcome::Exhausted => {
            debug!(nodes_visited = state.nodes_visited, "frontier exhausted");
            Err(SearchError::NoPath {
                start,
                end,
                nodes_visited: state.nodes_visited,
            })
        }
    }
}

/// Seed both frontiers and run them until they meet or one runs dry.
/// `start` and `end` must be distinct ids of `graph`.
fn explore(graph: &Graph, start: NodeId, end: NodeId) -> (SearchState, Outcome) {
    let mut state = SearchState::new(graph.size());
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut stack: Vec<NodeId> = Vec::new();

    state.mark(start, Side::Forward);
    queue.push_back(start);
    state.mark(end, Side::Backward);
    stack.push(end);

    let outcome = alternate(graph, &mut state, &mut queue, &mut stack);
    (state, outcome)
}

/// One forward (FIFO) expansion, then one backward (LIFO) expansion, for as
/// long as both frontiers have work.
fn alternate(
    graph: &Graph,
    state: &mut SearchState,
    queue: &mut VecDeque<NodeId>,
    stack: &mut Vec<NodeId>,
) -> Outcome {
    while !queue.is_empty() && !stack.is_empty() {
        if let Some(u) = queue.pop_front() {
            trace!(node = %u, "forward expand");
            if let Some(meeting) = state.expand(graph, u, Side::Forward, |v| queue.push_back(v)) {
                return Outcome::Meeting(meeting);
            }
        }

        if let Some(u) = stack.pop() {
            trace!(node = %u, "backward expand");
            if let Some(meeting) = state.expand(graph, u, Side::Backward, |v| stack.push(v)) {
                return Outcome::Meeting(meeting);
            }
        }
    }
    Outcome::Exhausted
}
