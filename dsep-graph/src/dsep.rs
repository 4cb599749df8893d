//! d-separation via the active-trail reachability procedure.
//!
//! Two nodes are d-connected given a conditioning set Z iff some trail
//! between them is active: chains and forks are blocked when their middle
//! node is in Z, colliders are open only when the collider or one of its
//! descendants is in Z.

use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use crate::dag::Dag;
use crate::query::NodeId;

/// How a trail entered the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Entry {
    /// Along an edge pointing away from the node, i.e. from one of its children.
    FromChild,
    /// Along an edge pointing into the node, i.e. from one of its parents.
    FromParent,
}

/// Whether `x` and `y` are d-connected in `dag` given `conditioning`.
///
/// Runs in O(nodes + edges) per query: one ancestor sweep from the
/// conditioning set, then a BFS over (node, entry-direction) states that
/// only follows active-trail continuations.
pub fn d_connected(dag: &Dag, x: NodeId, y: NodeId, conditioning: &[NodeId]) -> bool {
    let graph = dag.inner();
    let x = x.index();
    let y = y.index();
    if x == y {
        return true;
    }

    let z: HashSet<NodeIndex> = conditioning.iter().map(|id| id.index()).collect();

    // Phase 1: Z together with every ancestor of Z. A collider opens a trail
    // only when the collider can reach a conditioned node downward.
    let mut z_closure = z.clone();
    let mut queue: VecDeque<NodeIndex> = z.iter().copied().collect();
    while let Some(node) = queue.pop_front() {
        for parent in graph.neighbors_directed(node, Direction::Incoming) {
            if z_closure.insert(parent) {
                queue.push_back(parent);
            }
        }
    }

    // Phase 2: BFS over (node, entry-direction) states along active trails.
    let mut visited: HashSet<(NodeIndex, Entry)> = HashSet::new();
    let mut frontier: VecDeque<(NodeIndex, Entry)> = VecDeque::new();
    frontier.push_back((x, Entry::FromChild));

    while let Some((node, entry)) = frontier.pop_front() {
        if !visited.insert((node, entry)) {
            continue;
        }
        if node == y && !z.contains(&node) {
            return true;
        }
        match entry {
            Entry::FromChild => {
                // Non-collider in both continuations; blocked iff conditioned.
                if !z.contains(&node) {
                    for parent in graph.neighbors_directed(node, Direction::Incoming) {
                        frontier.push_back((parent, Entry::FromChild));
                    }
                    for child in graph.neighbors_directed(node, Direction::Outgoing) {
                        frontier.push_back((child, Entry::FromParent));
                    }
                }
            }
            Entry::FromParent => {
                // Chain continuation downward.
                if !z.contains(&node) {
                    for child in graph.neighbors_directed(node, Direction::Outgoing) {
                        frontier.push_back((child, Entry::FromParent));
                    }
                }
                // Collider reversal upward, open only under the Z-ancestor closure.
                if z_closure.contains(&node) {
                    for parent in graph.neighbors_directed(node, Direction::Incoming) {
                        frontier.push_back((parent, Entry::FromChild));
                    }
                }
            }
        }
    }
    false
}
