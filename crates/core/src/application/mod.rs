// Application Layer - Use Cases of the pathway adapters

pub mod hotnet;
pub mod pipeline;
pub mod registry;
pub mod tsv;

// Re-exports
pub use hotnet::{HotNet, RunRequest};
pub use pipeline::{run_pipeline, PipelineReport};
pub use registry::AlgorithmRegistry;
