// TSV dataset source - node files + interactome file -> GraphDataset

use crate::{read_interactome, read_node_file};
use hhn_core::domain::{GraphDataset, NodeTable};
use hhn_core::error::{AppError, Result};
use std::path::PathBuf;
use tracing::info;

/// Dataset described by files on disk
#[derive(Debug, Clone)]
pub struct TsvDatasetSource {
    pub node_files: Vec<PathBuf>,
    pub interactome_file: PathBuf,
}

impl TsvDatasetSource {
    pub fn new(node_files: Vec<PathBuf>, interactome_file: impl Into<PathBuf>) -> Self {
        Self {
            node_files,
            interactome_file: interactome_file.into(),
        }
    }

    /// Read every node file (in order) and the interactome
    pub fn load(&self) -> Result<GraphDataset> {
        if self.node_files.is_empty() {
            return Err(AppError::Validation(
                "At least one node file is required".to_string(),
            ));
        }

        let mut nodes = NodeTable::new();
        for path in &self.node_files {
            read_node_file(&mut nodes, path)?;
        }
        let interactome = read_interactome(&self.interactome_file)?;

        info!(
            nodes = nodes.len(),
            columns = ?nodes.columns(),
            edges = interactome.len(),
            "Loaded dataset"
        );

        Ok(GraphDataset::new(nodes, interactome))
    }
}
