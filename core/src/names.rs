use std::collections::HashMap;

use crate::error::NameError;
use crate::graph::NodeId;

/// Bidirectional name ↔ id table.
///
/// Ids are handed out densely starting at 1, in insertion order, so a table
/// holding `n` names lines up with [`Graph::with_nodes(n)`](crate::Graph::with_nodes).
/// The table is owned by the caller and passed explicitly to whatever needs
/// to translate between names and ids.
#[derive(Debug, Clone)]
pub struct NodeNames {
    /// Index 0 is the sentinel slot and holds an empty string.
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
}

impl NodeNames {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(node_count: usize) -> Self {
        let mut names = Vec::with_capacity(node_count + 1);
        names.push(String::new());
        Self {
            names,
            ids: HashMap::with_capacity(node_count),
        }
    }

    /// Register a new name and return its id.
    pub fn insert(&mut self, name: &str) -> Result<NodeId, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if self.ids.contains_key(name) {
            return Err(NameError::Duplicate(name.to_string()));
        }
        let id = NodeId::new(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        if id.get() == 0 {
            return None;
        }
        self.names.get(id.index()).map(String::as_str)
    }

    /// Number of named nodes (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.names.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translate a path of ids back to names. Ids without a name render as
    /// their numeric form.
    pub fn render_path(&self, path: &[NodeId]) -> Vec<String> {
        path.iter()
            .map(|&id| match self.name(id) {
                Some(name) => name.to_string(),
                None => id.to_string(),
            })
            .collect()
    }
}

impl Default for NodeNames {
    fn default() -> Self {
        Self::new()
    }
}
