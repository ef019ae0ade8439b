// Container settings shared by the runner use case and the container adapter

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default container registry host
pub const DEFAULT_REGISTRY: &str = "docker.io";

/// Default image owner on the registry
pub const DEFAULT_OWNER: &str = "reedcompbio";

/// Absolute base directory inside the container where volumes are mounted
pub const DEFAULT_WORK_DIR: &str = "/spras";

/// Number of hex characters of the path hash used in container paths
pub const DEFAULT_HASH_LENGTH: usize = 7;

/// Supported container engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFramework {
    #[default]
    Docker,
    Singularity,
}

impl ContainerFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerFramework::Docker => "docker",
            ContainerFramework::Singularity => "singularity",
        }
    }
}

impl fmt::Display for ContainerFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docker" => Ok(ContainerFramework::Docker),
            "singularity" => Ok(ContainerFramework::Singularity),
            _ => Err(DomainError::UnknownFramework(s.to_string())),
        }
    }
}

/// Container settings (the `[container]` config section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    pub framework: ContainerFramework,
    pub registry: String,
    pub owner: String,
    pub work_dir: String,
    pub hash_length: usize,
    /// No timeout when unset: a hung tool hangs the caller
    pub timeout_secs: Option<u64>,
    pub docker_binary: String,
    pub singularity_binary: String,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            framework: ContainerFramework::default(),
            registry: DEFAULT_REGISTRY.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            work_dir: DEFAULT_WORK_DIR.to_string(),
            hash_length: DEFAULT_HASH_LENGTH,
            timeout_secs: None,
            docker_binary: "docker".to_string(),
            singularity_binary: "singularity".to_string(),
        }
    }
}

impl ContainerSettings {
    /// Fully qualified image reference for an algorithm image suffix
    pub fn image_for(&self, suffix: &str) -> String {
        let registry = self.registry.trim_end_matches('/');
        if registry.is_empty() {
            format!("{}/{}", self.owner, suffix)
        } else {
            format!("{}/{}/{}", registry, self.owner, suffix)
        }
    }
}
