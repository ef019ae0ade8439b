// Interactome - the edge table of the interaction network

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge direction flag as written in interactome and pathway files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "D")]
    Directed,
    #[serde(rename = "U")]
    Undirected,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Directed => "D",
            Direction::Undirected => "U",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "D" | "d" => Ok(Direction::Directed),
            "U" | "u" => Ok(Direction::Undirected),
            other => Err(DomainError::InvalidDirection(other.to_string())),
        }
    }
}

/// One interactome row: (source, target, weight, direction)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractomeEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub direction: Direction,
}

impl InteractomeEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
        direction: Direction,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            direction,
        }
    }

    pub fn undirected(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self::new(source, target, weight, Direction::Undirected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("D".parse::<Direction>().unwrap(), Direction::Directed);
        assert_eq!(" U ".parse::<Direction>().unwrap(), Direction::Undirected);
        assert!(matches!(
            "X".parse::<Direction>(),
            Err(DomainError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Undirected.to_string(), "U");
        assert_eq!(Direction::Directed.to_string(), "D");
    }
}
