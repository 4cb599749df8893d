//! The narrow read-only contract the metric engine consumes.

use petgraph::stable_graph::NodeIndex;

use crate::errors::DsepResult;

/// Opaque per-graph node handle.
///
/// A handle is only meaningful for the graph that issued it. When two graphs
/// share a node-name set, resolve the name fresh against each graph instead
/// of reusing a handle across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) NodeIndex);

impl NodeId {
    pub(crate) fn index(self) -> NodeIndex {
        self.0
    }
}

/// Read-only view of a named graph: name resolution, node count, and the
/// d-connection predicate.
///
/// Implementations must be deterministic for fixed arguments and free of
/// mutation so queries can run concurrently from parallel workers.
pub trait GraphQuery: Sync {
    /// All node names. Stable for the graph's lifetime.
    fn node_names(&self) -> Vec<&str>;

    /// Number of nodes. Equals `node_names().len()`.
    fn node_count(&self) -> usize;

    /// Resolve a name to this graph's handle for it.
    fn resolve(&self, name: &str) -> DsepResult<NodeId>;

    /// Whether `x` and `y` are d-connected given the conditioning set.
    /// All handles must have been issued by this graph.
    fn is_d_connected(&self, x: NodeId, y: NodeId, conditioning: &[NodeId]) -> bool;
}
