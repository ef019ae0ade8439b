// Parse Output Use Case - raw Hierarchical HotNet edges to the universal pathway format

use crate::application::tsv;
use crate::domain::{add_rank_column, reinsert_direction_col_undirected, RawEdge};
use crate::error::{AppError, Result};
use std::path::Path;
use tracing::info;

/// Convert a raw pathway into the universal format
///
/// Raw format is `node1 <TAB> node2 [<TAB> ...]` with no header; columns past
/// the second are ignored. Output rows are `node1 node2 rank direction`, also
/// headerless, in input order. Returns the number of edges written.
pub fn execute(raw_pathway_file: &Path, standardized_pathway_file: &Path) -> Result<usize> {
    let mut reader = tsv::reader(raw_pathway_file)?;
    let mut edges = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(AppError::Parse(format!(
                "{}:{}: expected at least 2 columns, found {}",
                raw_pathway_file.display(),
                tsv::line_of(&record),
                record.len()
            )));
        }
        edges.push(RawEdge::new(&record[0], &record[1]));
    }

    let pathway = reinsert_direction_col_undirected(add_rank_column(edges));

    let mut wtr = tsv::writer(standardized_pathway_file)?;
    for edge in &pathway {
        wtr.write_record(edge.to_record())?;
    }
    wtr.flush()?;

    info!(
        raw = %raw_pathway_file.display(),
        standardized = %standardized_pathway_file.display(),
        edges = pathway.len(),
        "Standardized Hierarchical HotNet pathway"
    );

    Ok(pathway.len())
}
