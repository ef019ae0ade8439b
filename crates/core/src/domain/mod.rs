// Domain Layer - Pure data model of datasets, node indices and pathways

pub mod dataset;
pub mod error;
pub mod interactome;
pub mod node_index;
pub mod pathway;

// Re-exports
pub use dataset::{
    is_missing_value, GraphDataset, NodeRecord, NodeTable, MISSING_VALUE_MARKERS, NODE_ID_COLUMN,
    PRIZE_COLUMN,
};
pub use error::DomainError;
pub use interactome::{Direction, InteractomeEdge};
pub use node_index::NodeIndex;
pub use pathway::{
    add_rank_column, reinsert_direction_col_undirected, PathwayEdge, RankedEdge, RawEdge,
    DEFAULT_RANK,
};
