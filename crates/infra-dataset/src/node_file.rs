// Node table files: headered TSV, first column NODEID

use csv::ReaderBuilder;
use hhn_core::domain::{NodeTable, NODE_ID_COLUMN};
use hhn_core::error::{AppError, Result};
use std::path::Path;
use tracing::debug;

/// Merge one node file into `table`.
///
/// Later files add columns and overwrite non-blank values of nodes already
/// present; blank cells and NA markers (`NA`, `NaN`, `null`, ...) never
/// erase an existing value.
pub fn read_node_file(table: &mut NodeTable, path: &Path) -> Result<usize> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    match headers.first() {
        Some(first) if first == NODE_ID_COLUMN => {}
        _ => {
            return Err(AppError::Parse(format!(
                "{}: first column must be {}",
                path.display(),
                NODE_ID_COLUMN
            )))
        }
    }

    for column in &headers[1..] {
        table.declare_column(column);
    }

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let id = record.get(0).map(str::trim).unwrap_or_default();
        if id.is_empty() {
            return Err(AppError::Parse(format!(
                "{}:{}: missing {}",
                path.display(),
                line,
                NODE_ID_COLUMN
            )));
        }

        let attributes = headers[1..]
            .iter()
            .zip(record.iter().skip(1))
            .map(|(column, value)| (column.clone(), value.trim().to_string()));
        table.upsert(id, attributes);
        rows += 1;
    }

    debug!(path = %path.display(), rows, columns = headers.len(), "Loaded node file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_merges_files_by_node_id() {
        let dir = tempfile::tempdir().unwrap();
        let prizes = write(dir.path(), "prizes.txt", "NODEID\tprize\nA\t1.5\nB\t0.5\n");
        let sources = write(dir.path(), "sources.txt", "NODEID\tsources\nA\tTrue\nC\tTrue\n");

        let mut table = NodeTable::new();
        assert_eq!(read_node_file(&mut table, &prizes).unwrap(), 2);
        assert_eq!(read_node_file(&mut table, &sources).unwrap(), 2);

        assert_eq!(table.len(), 3);
        assert!(table.has_column("prize"));
        assert!(table.has_column("sources"));
        assert_eq!(table.get("A").unwrap().get("sources"), Some("True"));
        assert_eq!(table.get("C").unwrap().get("prize"), None);
    }

    #[test]
    fn test_blank_cells_and_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "nodes.txt",
            "NODEID\tprize\tactive\n# comment\nA\t\tTrue\nB\t2.0\n",
        );

        let mut table = NodeTable::new();
        read_node_file(&mut table, &path).unwrap();

        assert_eq!(table.get("A").unwrap().get("prize"), None);
        assert_eq!(table.get("A").unwrap().get("active"), Some("True"));
        assert_eq!(table.get("B").unwrap().get("active"), None);
    }

    #[test]
    fn test_na_cells_read_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "nodes.txt",
            "NODEID\tprize\nA\t1.0\nB\tNA\nC\tNaN\nD\tnull\n",
        );

        let mut table = NodeTable::new();
        assert_eq!(read_node_file(&mut table, &path).unwrap(), 4);

        assert_eq!(table.len(), 4);
        assert_eq!(table.get("A").unwrap().prize().unwrap(), Some(1.0));
        for id in ["B", "C", "D"] {
            assert_eq!(table.get(id).unwrap().get("prize"), None, "{}", id);
        }
    }

    #[test]
    fn test_requires_node_id_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "nodes.txt", "gene\tprize\nA\t1.0\n");

        let err = read_node_file(&mut NodeTable::new(), &path).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
