// Dataset - node table + interactome consumed by pathway algorithms

use super::error::DomainError;
use super::interactome::InteractomeEdge;
use std::collections::{BTreeMap, HashMap};

/// Identifier column, always present in the node table
pub const NODE_ID_COLUMN: &str = "NODEID";

/// Node attribute holding the numeric evidence score
pub const PRIZE_COLUMN: &str = "prize";

/// Cell values read as missing, matching the NA markers of common table readers
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for blank cells and NA markers
pub fn is_missing_value(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value.trim())
}

/// One node table row; attribute values are kept as raw strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRecord {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        if column == NODE_ID_COLUMN {
            return Some(&self.id);
        }
        self.attributes.get(column).map(String::as_str)
    }

    /// Parsed prize, `None` when the node carries no prize.
    /// Infinite values are rejected along with non-numeric ones.
    pub fn prize(&self) -> Result<Option<f64>, DomainError> {
        let raw = match self.attributes.get(PRIZE_COLUMN) {
            None => return Ok(None),
            Some(raw) if is_missing_value(raw) => return Ok(None),
            Some(raw) => raw,
        };

        match raw.trim().parse::<f64>() {
            Ok(prize) if prize.is_finite() => Ok(Some(prize)),
            _ => Err(DomainError::InvalidPrize {
                node: self.id.clone(),
                value: raw.clone(),
            }),
        }
    }
}

/// Node table keyed by node id, insertion ordered
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    columns: Vec<String>,
    records: Vec<NodeRecord>,
    positions: HashMap<String, usize>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute column even if no row sets it
    pub fn declare_column(&mut self, column: &str) {
        if column != NODE_ID_COLUMN && !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
    }

    /// Insert a node or merge attributes into an existing one.
    /// Blank values and NA markers are treated as absent and never overwrite.
    pub fn upsert<I, K, V>(&mut self, id: &str, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pos = match self.positions.get(id) {
            Some(&pos) => pos,
            None => {
                self.records.push(NodeRecord::new(id));
                self.positions.insert(id.to_string(), self.records.len() - 1);
                self.records.len() - 1
            }
        };

        for (column, value) in attributes {
            let column = column.into();
            let value = value.into();
            self.declare_column(&column);
            if is_missing_value(&value) {
                continue;
            }
            self.records[pos].attributes.insert(column, value);
        }
    }

    pub fn get(&self, id: &str) -> Option<&NodeRecord> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        column == NODE_ID_COLUMN || self.columns.iter().any(|c| c == column)
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory dataset: node table and interactome
#[derive(Debug, Clone, Default)]
pub struct GraphDataset {
    pub nodes: NodeTable,
    pub interactome: Vec<InteractomeEdge>,
}

impl GraphDataset {
    pub fn new(nodes: NodeTable, interactome: Vec<InteractomeEdge>) -> Self {
        Self { nodes, interactome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_merges_attributes() {
        let mut table = NodeTable::new();
        table.upsert("A", [("prize", "1.5")]);
        table.upsert("A", [("active", "true"), ("prize", "")]);
        table.upsert("B", [("active", "false")]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["prize".to_string(), "active".to_string()]);

        let a = table.get("A").unwrap();
        assert_eq!(a.get("prize"), Some("1.5"));
        assert_eq!(a.get("active"), Some("true"));
        assert_eq!(a.get(NODE_ID_COLUMN), Some("A"));
        assert_eq!(table.get("B").unwrap().get("prize"), None);
    }

    #[test]
    fn test_declared_column_without_values() {
        let mut table = NodeTable::new();
        table.declare_column("prize");
        table.upsert("A", [("prize", " ")]);

        assert!(table.has_column("prize"));
        assert!(table.has_column(NODE_ID_COLUMN));
        assert!(!table.has_column("sources"));
        assert_eq!(table.get("A").unwrap().prize().unwrap(), None);
    }

    #[test]
    fn test_na_markers_are_absent() {
        let mut table = NodeTable::new();
        table.upsert("A", [("prize", "1.0")]);
        table.upsert("A", [("prize", "NA")]);
        for (id, marker) in [("B", "NaN"), ("C", "nan"), ("D", "N/A"), ("E", "null")] {
            table.upsert(id, [("prize", marker)]);
        }

        assert_eq!(table.get("A").unwrap().prize().unwrap(), Some(1.0));
        for id in ["B", "C", "D", "E"] {
            assert!(table.get(id).unwrap().attributes.is_empty(), "{}", id);
            assert_eq!(table.get(id).unwrap().prize().unwrap(), None);
        }
        assert!(table.has_column("prize"));
    }

    #[test]
    fn test_non_finite_prize_rejected() {
        for value in ["inf", "-inf", "infinity"] {
            let record = NodeRecord::new("A").with_attribute("prize", value);
            assert!(
                matches!(record.prize(), Err(DomainError::InvalidPrize { .. })),
                "{}",
                value
            );
        }

        // A marker set directly on the record still reads as missing
        let record = NodeRecord::new("A").with_attribute("prize", "NaN");
        assert_eq!(record.prize().unwrap(), None);
    }

    #[test]
    fn test_invalid_prize() {
        let record = NodeRecord::new("A").with_attribute("prize", "high");
        assert!(matches!(
            record.prize(),
            Err(DomainError::InvalidPrize { .. })
        ));
    }
}
