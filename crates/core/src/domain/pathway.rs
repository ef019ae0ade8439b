// Pathway rows - the universal output format shared by all algorithms

use super::interactome::Direction;
use serde::{Deserialize, Serialize};

/// Rank assigned to every edge of an unranked pathway
pub const DEFAULT_RANK: u32 = 1;

/// Edge as reported by an algorithm, before standardization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub node1: String,
    pub node2: String,
}

impl RawEdge {
    pub fn new(node1: impl Into<String>, node2: impl Into<String>) -> Self {
        Self {
            node1: node1.into(),
            node2: node2.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEdge {
    pub node1: String,
    pub node2: String,
    pub rank: u32,
}

/// Standardized pathway row: node1, node2, rank, direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayEdge {
    pub node1: String,
    pub node2: String,
    pub rank: u32,
    pub direction: Direction,
}

impl PathwayEdge {
    pub fn to_record(&self) -> [String; 4] {
        [
            self.node1.clone(),
            self.node2.clone(),
            self.rank.to_string(),
            self.direction.as_str().to_string(),
        ]
    }
}

/// Append the rank column. Algorithms without a native ranking put every
/// edge at rank 1.
pub fn add_rank_column(edges: Vec<RawEdge>) -> Vec<RankedEdge> {
    edges
        .into_iter()
        .map(|e| RankedEdge {
            node1: e.node1,
            node2: e.node2,
            rank: DEFAULT_RANK,
        })
        .collect()
}

/// Reinsert the direction column, marking every edge undirected
pub fn reinsert_direction_col_undirected(edges: Vec<RankedEdge>) -> Vec<PathwayEdge> {
    edges
        .into_iter()
        .map(|e| PathwayEdge {
            node1: e.node1,
            node2: e.node2,
            rank: e.rank,
            direction: Direction::Undirected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_then_direction_keeps_order() {
        let raw = vec![RawEdge::new("A", "B"), RawEdge::new("C", "D")];
        let pathway = reinsert_direction_col_undirected(add_rank_column(raw));

        assert_eq!(pathway.len(), 2);
        assert_eq!(pathway[0].to_record(), ["A", "B", "1", "U"].map(String::from));
        assert_eq!(pathway[1].to_record(), ["C", "D", "1", "U"].map(String::from));
    }

    #[test]
    fn test_empty_pathway() {
        assert!(reinsert_direction_col_undirected(add_rank_column(vec![])).is_empty());
    }
}
