// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid edge direction '{0}' (expected 'D' or 'U')")]
    InvalidDirection(String),

    #[error("Invalid prize for node {node}: '{value}' is not a finite number")]
    InvalidPrize { node: String, value: String },

    #[error("Unknown container framework '{0}' (supported: docker, singularity)")]
    UnknownFramework(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
