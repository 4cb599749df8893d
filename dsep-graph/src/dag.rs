//! Named DAG over petgraph's `StableGraph`, with cycle enforcement on insert.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::Dfs;
use petgraph::Directed;

use crate::dsep;
use crate::errors::{DsepResult, GraphError};
use crate::query::{GraphQuery, NodeId};

/// A directed acyclic graph with string-named nodes.
///
/// Nodes are addressed by name from the outside and by [`NodeId`] handles
/// once resolved. Edge insertion rejects self-loops and any edge that would
/// close a cycle.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    graph: StableGraph<String, (), Directed>,
    names: HashMap<String, NodeIndex>,
}

impl Dag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a DAG from a node list and an edge list in one call.
    pub fn from_edges(nodes: &[&str], edges: &[(&str, &str)]) -> DsepResult<Self> {
        let mut dag = Self::new();
        for name in nodes {
            dag.add_node(name)?;
        }
        for (source, target) in edges {
            dag.add_edge(source, target)?;
        }
        Ok(dag)
    }

    /// Add a named node. Names must be unique within the graph.
    pub fn add_node(&mut self, name: &str) -> DsepResult<NodeId> {
        if self.names.contains_key(name) {
            return Err(GraphError::DuplicateNode {
                name: name.to_string(),
            });
        }
        let idx = self.graph.add_node(name.to_string());
        self.names.insert(name.to_string(), idx);
        Ok(NodeId(idx))
    }

    /// Add a directed edge between two named nodes.
    ///
    /// Rejects self-loops and any edge whose target already reaches its
    /// source, which would close a cycle.
    pub fn add_edge(&mut self, source: &str, target: &str) -> DsepResult<()> {
        let src = self.index_of(source)?;
        let tgt = self.index_of(target)?;
        if src == tgt {
            return Err(GraphError::SelfLoop {
                name: source.to_string(),
            });
        }
        if self.has_path(tgt, src) {
            return Err(GraphError::CycleDetected {
                from: source.to_string(),
                to: target.to_string(),
            });
        }
        self.graph.add_edge(src, tgt, ());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// DFS-based reachability check: can we reach `to` from `from`?
    fn has_path(&self, from: NodeIndex, to: NodeIndex) -> bool {
        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(node) = dfs.next(&self.graph) {
            if node == to {
                return true;
            }
        }
        false
    }

    fn index_of(&self, name: &str) -> DsepResult<NodeIndex> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode {
                name: name.to_string(),
            })
    }

    pub(crate) fn inner(&self) -> &StableGraph<String, (), Directed> {
        &self.graph
    }
}

impl GraphQuery for Dag {
    fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn resolve(&self, name: &str) -> DsepResult<NodeId> {
        self.index_of(name).map(NodeId)
    }

    fn is_d_connected(&self, x: NodeId, y: NodeId, conditioning: &[NodeId]) -> bool {
        dsep::d_connected(self, x, y, conditioning)
    }
}
