// Pipeline driver - generate_inputs -> run -> parse_output for one algorithm

use crate::config::ContainerFramework;
use crate::error::Result;
use crate::port::{AlgorithmArgs, Dataset, FilenameMap, PathwayAlgorithm};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files produced by one pipeline pass
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub algorithm: String,
    pub inputs: FilenameMap,
    pub raw_pathway: PathBuf,
    pub pathway: PathBuf,
    pub duration_ms: i64,
    pub container_log: String,
}

/// Destination of every input role: `<out_dir>/<algorithm>-inputs/<role>.txt`
pub fn input_filename_map(algorithm: &dyn PathwayAlgorithm, out_dir: &Path) -> FilenameMap {
    let inputs_dir = out_dir.join(format!("{}-inputs", algorithm.name()));
    algorithm
        .required_inputs()
        .iter()
        .map(|role| (role.to_string(), inputs_dir.join(format!("{}.txt", role))))
        .collect()
}

/// Run the three adapter steps in order; any failure stops the pass
pub async fn run_pipeline(
    algorithm: &dyn PathwayAlgorithm,
    data: &dyn Dataset,
    out_dir: &Path,
    framework: ContainerFramework,
) -> Result<PipelineReport> {
    let name = algorithm.name();
    let inputs = input_filename_map(algorithm, out_dir);
    algorithm.generate_inputs(data, &inputs)?;

    let raw_pathway = out_dir.join(format!("{}-raw-pathway.txt", name));
    let mut args: AlgorithmArgs = inputs
        .iter()
        .map(|(role, path)| (role.clone(), path.to_string_lossy().into_owned()))
        .collect();
    args.insert(
        "output_file".to_string(),
        raw_pathway.to_string_lossy().into_owned(),
    );

    let outcome = algorithm.run(&args, framework).await?;

    let pathway = out_dir.join(format!("{}-pathway.txt", name));
    algorithm.parse_output(&outcome.output_file, &pathway)?;

    info!(
        algorithm = name,
        pathway = %pathway.display(),
        duration_ms = outcome.duration_ms,
        "Pipeline pass complete"
    );

    Ok(PipelineReport {
        algorithm: name.to_string(),
        inputs,
        raw_pathway: outcome.output_file,
        pathway,
        duration_ms: outcome.duration_ms,
        container_log: outcome.container_log,
    })
}
