// Subprocess container runner
// reason: tokio::process for async process management, one child per invocation
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use hhn_core::config::{ContainerFramework, ContainerSettings};
use hhn_core::port::{
    ContainerError, ContainerInvocation, ContainerOutput, ContainerRunner, TimeProvider,
};

use crate::docker::docker_args;
use crate::singularity::singularity_args;

/// Runs containers by spawning the `docker` or `singularity` CLI
pub struct SubprocessContainerRunner {
    time_provider: Arc<dyn TimeProvider>,
    settings: ContainerSettings,
}

impl SubprocessContainerRunner {
    /// Create a new container runner
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    /// * `settings` - Runtime binaries and optional timeout
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessContainerRunner::new(
    ///     Arc::new(SystemTimeProvider),
    ///     ContainerSettings::default(),
    /// );
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>, settings: ContainerSettings) -> Self {
        Self {
            time_provider,
            settings,
        }
    }

    /// Binary and arguments for the requested framework
    fn command_line(&self, invocation: &ContainerInvocation) -> (String, Vec<String>) {
        match invocation.framework {
            ContainerFramework::Docker => {
                (self.settings.docker_binary.clone(), docker_args(invocation))
            }
            ContainerFramework::Singularity => (
                self.settings.singularity_binary.clone(),
                singularity_args(invocation),
            ),
        }
    }

    /// Spawn the runtime and wait for it; the child is killed if the timeout fires
    async fn spawn_and_wait(
        &self,
        binary: &str,
        args: &[String],
    ) -> Result<std::process::Output, ContainerError> {
        let child = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ContainerError::SpawnFailed {
                binary: binary.to_string(),
                reason: e.to_string(),
            })?;

        match self.settings.timeout_secs {
            Some(secs) => match timeout(Duration::from_secs(secs), child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(ContainerError::IoError(e.to_string())),
                Err(_) => Err(ContainerError::Timeout(secs as i64 * 1000)),
            },
            None => child
                .wait_with_output()
                .await
                .map_err(|e| ContainerError::IoError(e.to_string())),
        }
    }

    /// Build container output from process output
    fn build_output(
        output: std::process::Output,
        duration_ms: i64,
    ) -> Result<ContainerOutput, ContainerError> {
        let mut log = String::from_utf8_lossy(&output.stdout).to_string();
        log.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ContainerError::NonZeroExit {
                code: output.status.code(),
                log,
            });
        }

        Ok(ContainerOutput {
            exit_code: output.status.code(),
            duration_ms,
            log,
        })
    }
}

#[async_trait]
impl ContainerRunner for SubprocessContainerRunner {
    async fn run(
        &self,
        invocation: &ContainerInvocation,
    ) -> Result<ContainerOutput, ContainerError> {
        let (binary, args) = self.command_line(invocation);
        let start_time = self.time_provider.now_millis();

        info!(
            framework = %invocation.framework,
            image = %invocation.image,
            volumes = invocation.volumes.len(),
            timeout_secs = ?self.settings.timeout_secs,
            "Starting container"
        );

        let result = self
            .spawn_and_wait(&binary, &args)
            .await
            .and_then(|output| {
                Self::build_output(output, self.time_provider.now_millis() - start_time)
            });

        match &result {
            Ok(output) => info!(
                framework = %invocation.framework,
                duration_ms = output.duration_ms,
                exit_code = ?output.exit_code,
                "Container finished"
            ),
            Err(e) => warn!(framework = %invocation.framework, error = %e, "Container failed"),
        }

        result
    }
}
