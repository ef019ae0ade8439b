// Dataset Port - node and edge tables exposed to pathway algorithms

use crate::domain::{GraphDataset, InteractomeEdge, NodeRecord};

/// Read access to a pipeline dataset
pub trait Dataset: Send + Sync {
    /// True when every named column exists in the node table
    fn contains_node_columns(&self, columns: &[&str]) -> bool;

    /// Node rows that set at least one of the requested columns.
    /// `NODEID` is always available on the returned records.
    fn request_node_columns(&self, columns: &[&str]) -> Vec<NodeRecord>;

    /// Interactome rows in file order
    fn interactome(&self) -> &[InteractomeEdge];
}

impl Dataset for GraphDataset {
    fn contains_node_columns(&self, columns: &[&str]) -> bool {
        columns.iter().all(|c| self.nodes.has_column(c))
    }

    fn request_node_columns(&self, columns: &[&str]) -> Vec<NodeRecord> {
        self.nodes
            .records()
            .iter()
            .filter(|r| columns.iter().any(|c| r.attributes.contains_key(*c)))
            .map(|r| {
                let mut projected = NodeRecord::new(r.id.clone());
                for c in columns {
                    if let Some(v) = r.attributes.get(*c) {
                        projected.attributes.insert(c.to_string(), v.clone());
                    }
                }
                projected
            })
            .collect()
    }

    fn interactome(&self) -> &[InteractomeEdge] {
        &self.interactome
    }
}
