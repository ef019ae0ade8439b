// Generate Inputs Use Case
//
// Writes the three flat files Hierarchical HotNet reads:
//   scores     NODEID <TAB> prize
//   index      index <TAB> NODEID
//   edge_list  index1 <TAB> index2

use super::{EDGE_LIST_INPUT, INDEX_INPUT, REQUIRED_INPUTS, SCORES_INPUT};
use crate::application::tsv;
use crate::domain::{NodeIndex, PRIZE_COLUMN};
use crate::error::{AppError, Result};
use crate::port::{Dataset, FilenameMap};
use std::path::Path;
use tracing::{debug, info};

/// Row counts of the generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSummary {
    pub scores: usize,
    pub index: usize,
    pub edges: usize,
}

/// Execute input generation
///
/// Every row is resolved before the first file is opened, so a failure
/// leaves no partial input files behind.
///
/// # Arguments
///
/// * `data` - Dataset exposing the node table and interactome
/// * `filename_map` - Destination for each of `scores`, `edge_list`, `index`
///
/// # Errors
/// - AppError::Validation if a role is missing or the dataset has no prizes
/// - AppError::Domain if a prize is not a finite number
pub fn execute(data: &dyn Dataset, filename_map: &FilenameMap) -> Result<InputSummary> {
    for input_type in REQUIRED_INPUTS {
        if !filename_map.contains_key(input_type) {
            return Err(AppError::Validation(format!(
                "{} filename is missing",
                input_type
            )));
        }
    }

    // TODO: derive prizes from sources/targets once the fallback rule is agreed on
    if !data.contains_node_columns(&[PRIZE_COLUMN]) {
        return Err(AppError::Validation(
            "Hierarchical HotNet requires node prizes".to_string(),
        ));
    }

    let scores = collect_scores(data)?;
    let index = NodeIndex::from_edges(data.interactome());
    let edge_list = collect_edge_list(data, &index)?;

    write_scores(&scores, &filename_map[SCORES_INPUT])?;
    write_index(&index, &filename_map[INDEX_INPUT])?;
    write_edge_list(&edge_list, &filename_map[EDGE_LIST_INPUT])?;

    let summary = InputSummary {
        scores: scores.len(),
        index: index.len(),
        edges: edge_list.len(),
    };

    info!(
        scores = summary.scores,
        nodes = summary.index,
        edges = summary.edges,
        "Generated Hierarchical HotNet inputs"
    );

    Ok(summary)
}

/// Nodes with a prize, in node table order
fn collect_scores(data: &dyn Dataset) -> Result<Vec<(String, f64)>> {
    let mut scores = Vec::new();
    for node in data.request_node_columns(&[PRIZE_COLUMN]) {
        if let Some(prize) = node.prize()? {
            scores.push((node.id, prize));
        }
    }
    Ok(scores)
}

fn collect_edge_list(data: &dyn Dataset, index: &NodeIndex) -> Result<Vec<(u32, u32)>> {
    let lookup = |id: &str| {
        index
            .index_of(id)
            .ok_or_else(|| AppError::NotFound(format!("node {} has no index", id)))
    };

    data.interactome()
        .iter()
        .map(|edge| -> Result<(u32, u32)> {
            Ok((lookup(&edge.source)?, lookup(&edge.target)?))
        })
        .collect()
}

fn write_scores(scores: &[(String, f64)], path: &Path) -> Result<()> {
    let mut wtr = tsv::writer(path)?;
    for (id, prize) in scores {
        wtr.write_record([id.as_str(), tsv::format_score(*prize).as_str()])?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = scores.len(), "Wrote gene-to-score file");
    Ok(())
}

fn write_index(index: &NodeIndex, path: &Path) -> Result<()> {
    let mut wtr = tsv::writer(path)?;
    for (idx, id) in index.iter() {
        wtr.write_record([idx.to_string().as_str(), id])?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = index.len(), "Wrote index-to-gene file");
    Ok(())
}

fn write_edge_list(edge_list: &[(u32, u32)], path: &Path) -> Result<()> {
    let mut wtr = tsv::writer(path)?;
    for (source, target) in edge_list {
        wtr.write_record([source.to_string(), target.to_string()])?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = edge_list.len(), "Wrote edge list file");
    Ok(())
}
