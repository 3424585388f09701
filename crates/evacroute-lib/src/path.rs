use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::node::NodeIndex;

/// Result of a single-source shortest-path search.
///
/// `distances[v]` is the cheapest known cost from the start to `v`, or
/// `f64::INFINITY` when `v` is unreachable. `parents[v]` is the predecessor on
/// that cheapest path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    start: NodeIndex,
    distances: Vec<f64>,
    parents: Vec<Option<NodeIndex>>,
}

impl ShortestPathTree {
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn parents(&self) -> &[Option<NodeIndex>] {
        &self.parents
    }

    /// Finite distance to `node`, or `None` when unreachable.
    pub fn distance(&self, node: NodeIndex) -> Option<f64> {
        self.distances
            .get(node)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.distance(node).is_some()
    }

    /// Node sequence from the start to `goal`, inclusive.
    pub fn path_to(&self, goal: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_reachable(goal) {
            return None;
        }
        reconstruct_path(&self.parents, self.start, goal)
    }
}

/// Run Dijkstra's algorithm from `start` over the whole graph.
///
/// The frontier is a binary heap with lazy deletion: relaxing a node pushes a
/// new entry and leaves the old one in place, so popped entries whose cost
/// exceeds the recorded distance are stale and skipped.
pub fn shortest_path_tree(graph: &Graph, start: NodeIndex) -> ShortestPathTree {
    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut queue = BinaryHeap::new();

    if start < node_count {
        distances[start] = 0.0;
        queue.push(QueueEntry::new(start, 0.0));
    }

    while let Some(entry) = queue.pop() {
        let current_distance = distances[entry.node];
        if entry.cost.0 > current_distance {
            continue;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = current_distance + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    ShortestPathTree {
        start,
        distances,
        parents,
    }
}

/// Walk parent pointers from `goal` back to `start`.
///
/// Returns `None` when the chain ends anywhere other than `start` or loops,
/// never a partial path.
pub fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    if goal >= parents.len() || start >= parents.len() {
        return None;
    }

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        // A simple path never has more entries than there are nodes.
        if path.len() > parents.len() {
            return None;
        }
        current = parents[current]?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
