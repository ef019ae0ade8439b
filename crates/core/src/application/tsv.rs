// Headerless tab-separated readers/writers used by every flat-file transform

use crate::error::Result;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Writer for a headerless TSV, creating missing parent directories
pub fn writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?)
}

/// Reader for a headerless TSV whose rows may differ in width
pub fn reader(path: &Path) -> Result<csv::Reader<File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

/// Line number of a record for error messages
pub fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Prize text as Hierarchical HotNet reads it: shortest round-trip form,
/// always with a fractional part for integral values (`1.0`, `0.25`)
pub fn format_score(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.25), "0.25");
        assert_eq!(format_score(-3.5), "-3.5");
    }

    #[test]
    fn test_writer_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.txt");

        let mut wtr = writer(&path).unwrap();
        wtr.write_record(["a", "b"]).unwrap();
        wtr.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\tb\n");
    }

    #[test]
    fn test_reader_flexible_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.txt");
        std::fs::write(&path, "A\tB\nC\tD\t0.5\n").unwrap();

        let rows: Vec<csv::StringRecord> = reader(&path)
            .unwrap()
            .records()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(line_of(&rows[1]), 2);
    }
}
