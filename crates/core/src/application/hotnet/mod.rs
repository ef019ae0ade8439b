// Hierarchical HotNet adapter
//
// Hierarchical HotNet clusters high-weight nodes that are topologically close
// into statistically significant subnetworks. All of that happens inside the
// container; this module only prepares its flat files, runs it and
// standardizes what it returns.

pub mod generate_inputs;
pub mod parse_output;
pub mod run;

pub use generate_inputs::InputSummary;
pub use run::RunRequest;

use crate::config::{ContainerFramework, ContainerSettings};
use crate::error::Result;
use crate::port::{
    AlgorithmArgs, ContainerRunner, Dataset, FilenameMap, PathwayAlgorithm, RunOutcome,
};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Registry name of the algorithm
pub const NAME: &str = "hhn";

pub const SCORES_INPUT: &str = "scores";
pub const EDGE_LIST_INPUT: &str = "edge_list";
pub const INDEX_INPUT: &str = "index";
pub const OUTPUT_FILE_ARG: &str = "output_file";

/// Input roles written by `generate_inputs`
pub const REQUIRED_INPUTS: [&str; 3] = [SCORES_INPUT, EDGE_LIST_INPUT, INDEX_INPUT];

/// Hierarchical HotNet adapter (stateless apart from its injected runner)
pub struct HotNet {
    runner: Arc<dyn ContainerRunner>,
    settings: ContainerSettings,
}

impl HotNet {
    pub fn new(runner: Arc<dyn ContainerRunner>, settings: ContainerSettings) -> Self {
        Self { runner, settings }
    }

    /// Run with a typed request
    pub async fn run_request(&self, req: RunRequest) -> Result<RunOutcome> {
        run::execute(self.runner.as_ref(), &self.settings, req).await
    }
}

#[async_trait]
impl PathwayAlgorithm for HotNet {
    fn name(&self) -> &'static str {
        NAME
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &REQUIRED_INPUTS
    }

    fn generate_inputs(&self, data: &dyn Dataset, filename_map: &FilenameMap) -> Result<()> {
        generate_inputs::execute(data, filename_map).map(|_| ())
    }

    async fn run(&self, args: &AlgorithmArgs, framework: ContainerFramework) -> Result<RunOutcome> {
        self.run_request(RunRequest::from_args(args, framework)).await
    }

    fn parse_output(
        &self,
        raw_pathway_file: &Path,
        standardized_pathway_file: &Path,
    ) -> Result<()> {
        parse_output::execute(raw_pathway_file, standardized_pathway_file).map(|_| ())
    }
}
