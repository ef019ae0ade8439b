// Container Runner Port
// Abstraction for executing an algorithm image with mounted volumes

use crate::config::ContainerFramework;
use crate::volume::Volume;
use async_trait::async_trait;
use thiserror::Error;

/// Everything a runtime needs to start one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInvocation {
    pub framework: ContainerFramework,
    pub image: String,
    pub command: Vec<String>,
    pub volumes: Vec<Volume>,
    pub working_dir: String,
}

/// Result of a finished container
#[derive(Debug, Clone)]
pub struct ContainerOutput {
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
    /// Combined stdout and stderr of the container
    pub log: String,
}

/// Container errors
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Failed to start {binary}: {reason}")]
    SpawnFailed { binary: String, reason: String },

    #[error("Container exited with code {code:?}:\n{log}")]
    NonZeroExit { code: Option<i32>, log: String },

    #[error("Container timeout after {0}ms")]
    Timeout(i64),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Container Runner trait
///
/// Implementations:
/// - SubprocessContainerRunner: shells out to docker / singularity
/// - MockContainerRunner: records invocations (tests)
#[async_trait]
pub trait ContainerRunner: Send + Sync {
    /// Run the invocation to completion
    ///
    /// # Errors
    /// - ContainerError::SpawnFailed if the runtime binary cannot be started
    /// - ContainerError::NonZeroExit if the container reports failure
    /// - ContainerError::Timeout if a configured timeout elapses
    async fn run(&self, invocation: &ContainerInvocation)
        -> Result<ContainerOutput, ContainerError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::volume::host_path_for;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Succeed and write the given text at the `-o` path
        WriteOutput(String),
        /// Succeed without producing any file
        NoOutput,
        /// Exit non-zero with the given log
        Fail(String),
    }

    /// Mock Container Runner for testing
    pub struct MockContainerRunner {
        behavior: MockBehavior,
        invocations: Arc<Mutex<Vec<ContainerInvocation>>>,
    }

    impl MockContainerRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_writing(contents: impl Into<String>) -> Self {
            Self::new(MockBehavior::WriteOutput(contents.into()))
        }

        pub fn call_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }

        pub fn invocations(&self) -> Vec<ContainerInvocation> {
            self.invocations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContainerRunner for MockContainerRunner {
        async fn run(
            &self,
            invocation: &ContainerInvocation,
        ) -> Result<ContainerOutput, ContainerError> {
            self.invocations.lock().unwrap().push(invocation.clone());

            match &self.behavior {
                MockBehavior::WriteOutput(contents) => {
                    let target = invocation
                        .command
                        .iter()
                        .position(|arg| arg == "-o")
                        .and_then(|pos| invocation.command.get(pos + 1))
                        .and_then(|path| host_path_for(&invocation.volumes, path))
                        .ok_or_else(|| {
                            ContainerError::IoError("no mapped -o argument".to_string())
                        })?;
                    std::fs::write(&target, contents)
                        .map_err(|e| ContainerError::IoError(e.to_string()))?;
                    Ok(ContainerOutput {
                        exit_code: Some(0),
                        duration_ms: 10,
                        log: "mock output".to_string(),
                    })
                }
                MockBehavior::NoOutput => Ok(ContainerOutput {
                    exit_code: Some(0),
                    duration_ms: 10,
                    log: String::new(),
                }),
                MockBehavior::Fail(log) => Err(ContainerError::NonZeroExit {
                    code: Some(1),
                    log: log.clone(),
                }),
            }
        }
    }
}
