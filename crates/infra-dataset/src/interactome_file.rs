// Interactome file: headerless TSV `node1 node2 weight [direction]`

use csv::ReaderBuilder;
use hhn_core::domain::{Direction, InteractomeEdge};
use hhn_core::error::{AppError, Result};
use std::path::Path;
use tracing::debug;

pub fn read_interactome(path: &Path) -> Result<Vec<InteractomeEdge>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |reason: String| {
            AppError::Parse(format!("{}:{}: {}", path.display(), line, reason))
        };

        if record.len() != 3 && record.len() != 4 {
            return Err(malformed(format!(
                "expected 3 or 4 columns, found {}",
                record.len()
            )));
        }

        let weight = record[2]
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(format!("invalid weight '{}'", &record[2])))?;

        let direction = match record.get(3) {
            Some(raw) => raw
                .parse::<Direction>()
                .map_err(|e| malformed(e.to_string()))?,
            None => Direction::Undirected,
        };

        edges.push(InteractomeEdge::new(
            record[0].trim(),
            record[1].trim(),
            weight,
            direction,
        ));
    }

    debug!(path = %path.display(), edges = edges.len(), "Loaded interactome");
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(contents: &str) -> Result<Vec<InteractomeEdge>> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactome.txt");
        std::fs::write(&path, contents).unwrap();
        read_interactome(&path)
    }

    #[test]
    fn test_reads_directed_and_undirected() {
        let edges = read("A\tB\t0.98\tU\nB\tC\t0.5\tD\n").unwrap();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], InteractomeEdge::undirected("A", "B", 0.98));
        assert_eq!(edges[1].direction, Direction::Directed);
    }

    #[test]
    fn test_direction_defaults_to_undirected() {
        let edges = read("A\tB\t1\n").unwrap();
        assert_eq!(edges[0].direction, Direction::Undirected);
    }

    #[test]
    fn test_bad_weight_reports_line() {
        let err = read("A\tB\t1\nC\tD\theavy\tU\n").unwrap_err();
        assert!(err.to_string().contains(":2: invalid weight"));
    }

    #[test]
    fn test_bad_direction() {
        let err = read("A\tB\t1\tX\n").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_wrong_width() {
        assert!(read("A\tB\n").is_err());
    }
}
