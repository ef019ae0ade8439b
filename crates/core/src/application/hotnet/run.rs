// Run Use Case - invoke Hierarchical HotNet inside a container

use super::{EDGE_LIST_INPUT, INDEX_INPUT, OUTPUT_FILE_ARG, SCORES_INPUT};
use crate::config::{ContainerFramework, ContainerSettings};
use crate::error::{AppError, Result};
use crate::port::{AlgorithmArgs, ContainerInvocation, ContainerRunner, RunOutcome};
use crate::volume::prepare_volume;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Image suffix appended to `<registry>/<owner>/`
pub const IMAGE_SUFFIX: &str = "hhn";

/// Script entry point inside the image
pub const ENTRYPOINT: [&str; 2] = ["bash", "/HHN/hhn.sh"];

/// File name the tool writes under its output prefix
pub const RESULT_FILE_NAME: &str = "hhn-results.txt";

/// Pattern used to locate the result in the output directory
pub const RESULT_FILE_PATTERN: &str = "hhn-results.txt";

/// Run request; every path is required, `Option` keeps the
/// missing-argument check inside the use case
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub scores: Option<PathBuf>,
    pub edge_list: Option<PathBuf>,
    pub index: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub container_framework: ContainerFramework,
}

impl RunRequest {
    pub fn new(
        scores: impl Into<PathBuf>,
        edge_list: impl Into<PathBuf>,
        index: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            scores: Some(scores.into()),
            edge_list: Some(edge_list.into()),
            index: Some(index.into()),
            output_file: Some(output_file.into()),
            container_framework: ContainerFramework::default(),
        }
    }

    /// Build from driver arguments; empty values count as missing
    pub fn from_args(args: &AlgorithmArgs, container_framework: ContainerFramework) -> Self {
        let path = |key: &str| {
            args.get(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            scores: path(SCORES_INPUT),
            edge_list: path(EDGE_LIST_INPUT),
            index: path(INDEX_INPUT),
            output_file: path(OUTPUT_FILE_ARG),
            container_framework,
        }
    }

    pub fn with_framework(mut self, container_framework: ContainerFramework) -> Self {
        self.container_framework = container_framework;
        self
    }
}

/// Execute the run use case
///
/// # Errors
/// - AppError::Validation if a required argument is missing (no container is started)
/// - AppError::Container if the runtime fails or the container exits non-zero
/// - AppError::ExternalTool if the container finished but left no result file
pub async fn execute(
    runner: &dyn ContainerRunner,
    settings: &ContainerSettings,
    req: RunRequest,
) -> Result<RunOutcome> {
    let (scores, edge_list, index, output_file) =
        match (req.scores, req.edge_list, req.index, req.output_file) {
            (Some(scores), Some(edge_list), Some(index), Some(output_file)) => {
                (scores, edge_list, index, output_file)
            }
            (scores, edge_list, index, output_file) => {
                let missing: Vec<&str> = [
                    (SCORES_INPUT, scores.is_none()),
                    (EDGE_LIST_INPUT, edge_list.is_none()),
                    (INDEX_INPUT, index.is_none()),
                    (OUTPUT_FILE_ARG, output_file.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                return Err(AppError::Validation(format!(
                    "Required Hierarchical HotNet arguments are missing: {}",
                    missing.join(", ")
                )));
            }
        };

    let work_dir = settings.work_dir.as_str();
    let hash_length = settings.hash_length;
    let mut volumes = Vec::with_capacity(4);

    let (volume, scores_file) = prepare_volume(&scores, work_dir, hash_length)?;
    volumes.push(volume);

    let (volume, edges_file) = prepare_volume(&edge_list, work_dir, hash_length)?;
    volumes.push(volume);

    let (volume, index_file) = prepare_volume(&index, work_dir, hash_length)?;
    volumes.push(volume);

    // The tool requires the output directory to exist
    let out_dir = output_dir(&output_file);
    tokio::fs::create_dir_all(&out_dir).await?;
    let (volume, mapped_out_dir) = prepare_volume(&out_dir, work_dir, hash_length)?;
    volumes.push(volume);
    // Container paths are always posix
    let mapped_out_prefix = format!("{}/{}", mapped_out_dir, RESULT_FILE_NAME);

    // Leftovers of an earlier run must not be mistaken for this run's output
    remove_stale(&out_dir.join(RESULT_FILE_NAME)).await?;
    remove_stale(&output_file).await?;

    let mut command: Vec<String> = ENTRYPOINT.iter().map(|s| s.to_string()).collect();
    command.extend([
        "-s".to_string(),
        scores_file,
        "-e".to_string(),
        edges_file,
        "-i".to_string(),
        index_file,
        "-o".to_string(),
        mapped_out_prefix,
    ]);

    info!(
        framework = %req.container_framework,
        command = %command.join(" "),
        "Running Hierarchical HotNet"
    );

    let invocation = ContainerInvocation {
        framework: req.container_framework,
        image: settings.image_for(IMAGE_SUFFIX),
        command,
        volumes,
        working_dir: work_dir.to_string(),
    };
    let output = runner.run(&invocation).await?;

    debug!(log = %output.log, "Hierarchical HotNet container log");

    // Rename the primary output file to the requested name
    let produced = locate_result(&out_dir)?;
    tokio::fs::rename(&produced, &output_file).await?;

    info!(
        output_file = %output_file.display(),
        duration_ms = output.duration_ms,
        "Hierarchical HotNet finished"
    );

    Ok(RunOutcome {
        output_file,
        duration_ms: output.duration_ms,
        container_log: output.log,
    })
}

fn output_dir(output_file: &Path) -> PathBuf {
    match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

async fn remove_stale(stale: &Path) -> Result<()> {
    match tokio::fs::remove_file(stale).await {
        Ok(()) => {
            warn!(path = %stale.display(), "Removed stale Hierarchical HotNet output");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// First file in `out_dir` matching the result pattern
fn locate_result(out_dir: &Path) -> Result<PathBuf> {
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&out_dir.to_string_lossy()),
        RESULT_FILE_PATTERN
    );

    let matches = glob::glob(&pattern)
        .map_err(|e| AppError::Validation(format!("Invalid result pattern {}: {}", pattern, e)))?;

    matches
        .filter_map(|entry| entry.ok())
        .find(|path| path.is_file())
        .ok_or_else(|| {
            AppError::ExternalTool(format!(
                "Hierarchical HotNet produced no file matching '{}' in {}",
                RESULT_FILE_PATTERN,
                out_dir.display()
            ))
        })
}

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;
