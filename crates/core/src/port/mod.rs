// Port Layer - Interfaces for external dependencies

pub mod algorithm;
pub mod container_runner;
pub mod dataset;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use algorithm::{AlgorithmArgs, FilenameMap, PathwayAlgorithm, RunOutcome};
pub use container_runner::{ContainerError, ContainerInvocation, ContainerOutput, ContainerRunner};
pub use dataset::Dataset;
pub use time_provider::TimeProvider;
