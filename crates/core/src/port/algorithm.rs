// Pathway Algorithm Port
// The contract every algorithm adapter satisfies for the pipeline driver

use crate::config::ContainerFramework;
use crate::error::Result;
use crate::port::Dataset;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Input role name -> destination file
pub type FilenameMap = BTreeMap<String, PathBuf>;

/// Algorithm argument name -> value, as given by the driver
pub type AlgorithmArgs = BTreeMap<String, String>;

/// What a successful run leaves behind
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub output_file: PathBuf,
    pub duration_ms: i64,
    pub container_log: String,
}

/// Stateless adapter around one external pathway algorithm
#[async_trait]
pub trait PathwayAlgorithm: Send + Sync {
    /// Registry name (e.g. "hhn")
    fn name(&self) -> &'static str;

    /// Input roles `generate_inputs` expects in the filename map
    fn required_inputs(&self) -> &'static [&'static str];

    /// Write the algorithm's input files from the dataset
    fn generate_inputs(&self, data: &dyn Dataset, filename_map: &FilenameMap) -> Result<()>;

    /// Run the algorithm container and leave the raw pathway at `output_file`
    async fn run(&self, args: &AlgorithmArgs, framework: ContainerFramework) -> Result<RunOutcome>;

    /// Convert the raw pathway into the universal format
    fn parse_output(&self, raw_pathway_file: &Path, standardized_pathway_file: &Path)
        -> Result<()>;
}
