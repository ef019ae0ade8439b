// Volume mapping - host paths to collision-free container paths

use crate::error::{AppError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A bind mount: host directory mounted at an absolute container path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Volume {
    pub host_path: PathBuf,
    pub container_path: String,
}

impl Volume {
    /// `src:dest` form accepted by both docker `-v` and singularity `--bind`
    pub fn bind_spec(&self) -> String {
        format!("{}:{}", self.host_path.display(), self.container_path)
    }
}

/// Truncated hex SHA-256 of the path string as given by the caller
pub fn hash_filename(filename: &str, length: usize) -> String {
    let digest = hex::encode(Sha256::digest(filename.as_bytes()));
    digest[..length.min(digest.len())].to_string()
}

/// Map a host file or directory into the container under `volume_base`.
///
/// Returns the volume to mount and the path the container sees for `path`.
/// Files mount their parent directory at `<base>/<hash>`; directories mount
/// themselves at `<base>/<hash>/<name>`. The hash keeps two inputs with the
/// same file name in different directories apart.
pub fn prepare_volume(path: &Path, volume_base: &str, hash_length: usize) -> Result<(Volume, String)> {
    if !volume_base.starts_with('/') {
        return Err(AppError::Validation(format!(
            "Volume base must be an absolute path: {}",
            volume_base
        )));
    }
    if hash_length == 0 {
        return Err(AppError::Validation(
            "Volume hash length must be at least 1".to_string(),
        ));
    }

    let hash = hash_filename(&path.to_string_lossy(), hash_length);
    let dest = format!("{}/{}", volume_base.trim_end_matches('/'), hash);

    let abs = match path.canonicalize() {
        Ok(p) => p,
        Err(_) => std::path::absolute(path)?,
    };
    let name = abs
        .file_name()
        .ok_or_else(|| {
            AppError::Validation(format!("Cannot mount {}: no file name", path.display()))
        })?
        .to_string_lossy()
        .into_owned();

    if abs.is_dir() {
        let dest = format!("{}/{}", dest, name);
        let volume = Volume {
            host_path: abs,
            container_path: dest.clone(),
        };
        Ok((volume, dest))
    } else {
        let parent = abs
            .parent()
            .ok_or_else(|| {
                AppError::Validation(format!("Cannot mount {}: no parent", path.display()))
            })?
            .to_path_buf();
        let container_file = format!("{}/{}", dest, name);
        let volume = Volume {
            host_path: parent,
            container_path: dest,
        };
        Ok((volume, container_file))
    }
}

/// Translate a container path back to the host through the mounted volumes
pub fn host_path_for(volumes: &[Volume], container_path: &str) -> Option<PathBuf> {
    volumes.iter().find_map(|v| {
        let rest = container_path.strip_prefix(&v.container_path)?;
        if rest.is_empty() {
            return Some(v.host_path.clone());
        }
        let rest = rest.strip_prefix('/')?;
        Some(v.host_path.join(rest))
    })
}
