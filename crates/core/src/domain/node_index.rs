// Node Index - dense 1-based integer ids handed to Hierarchical HotNet

use super::interactome::InteractomeEdge;
use std::collections::HashMap;

/// Bijective node id <-> index mapping, valid for a single invocation.
///
/// Built from the ordered-unique union of edge endpoints: every source in
/// edge order, then every target in edge order. An id is numbered by its
/// first occurrence in that sequence, starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndex {
    ids: Vec<String>,
    positions: HashMap<String, u32>,
}

impl NodeIndex {
    pub fn from_edges(edges: &[InteractomeEdge]) -> Self {
        let endpoints = edges
            .iter()
            .map(|e| e.source.as_str())
            .chain(edges.iter().map(|e| e.target.as_str()));

        let mut index = Self::default();
        for id in endpoints {
            index.insert(id);
        }
        index
    }

    fn insert(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.positions.get(id) {
            return idx;
        }
        self.ids.push(id.to_string());
        let idx = self.ids.len() as u32;
        self.positions.insert(id.to_string(), idx);
        idx
    }

    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.positions.get(id).copied()
    }

    pub fn id_of(&self, index: u32) -> Option<&str> {
        let pos = index.checked_sub(1)? as usize;
        self.ids.get(pos).map(String::as_str)
    }

    /// (index, id) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.ids
            .iter()
            .enumerate()
            .map(|(pos, id)| (pos as u32 + 1, id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str) -> InteractomeEdge {
        InteractomeEdge::undirected(a, b, 1.0)
    }

    #[test]
    fn test_sources_numbered_before_targets() {
        let edges = vec![edge("A", "B"), edge("C", "A"), edge("B", "D")];
        let index = NodeIndex::from_edges(&edges);

        // sources: A C B, then targets: B A D
        let pairs: Vec<(u32, &str)> = index.iter().collect();
        assert_eq!(pairs, vec![(1, "A"), (2, "C"), (3, "B"), (4, "D")]);
    }

    #[test]
    fn test_lookup_both_ways() {
        let index = NodeIndex::from_edges(&[edge("X", "Y")]);

        assert_eq!(index.index_of("X"), Some(1));
        assert_eq!(index.index_of("Y"), Some(2));
        assert_eq!(index.index_of("Z"), None);
        assert_eq!(index.id_of(2), Some("Y"));
        assert_eq!(index.id_of(0), None);
        assert_eq!(index.id_of(3), None);
    }

    #[test]
    fn test_empty_interactome() {
        let index = NodeIndex::from_edges(&[]);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_self_loop_counted_once() {
        let index = NodeIndex::from_edges(&[edge("A", "A")]);
        assert_eq!(index.len(), 1);
    }
}
