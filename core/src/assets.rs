//! Static asset resolution
//!
//! Pages reference images and animations by path. The router only needs
//! to know whether a path resolves to something displayable; what to do
//! when it does not is decided by [`MissingAssetPolicy`](crate::config::MissingAssetPolicy).

use crate::error::AssetError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolves asset references to displayable files
pub trait AssetResolver: Send + Sync {
    /// Resolve an image path
    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError>;

    /// Resolve a Lottie animation, checking that it parses
    fn resolve_animation(&self, path: &str) -> Result<PathBuf, AssetError>;
}

/// Resolves assets relative to a directory on disk
#[derive(Debug, Clone)]
pub struct FsAssetResolver {
    root: PathBuf,
}

impl FsAssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(AssetError::OutsideRoot {
                path: path.to_string(),
            });
        }

        let full = self.root.join(relative);
        if full.is_file() {
            debug!("Resolved asset {} -> {}", path, full.display());
            Ok(full)
        } else {
            Err(AssetError::NotFound {
                path: path.to_string(),
            })
        }
    }
}

impl AssetResolver for FsAssetResolver {
    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        self.locate(path)
    }

    fn resolve_animation(&self, path: &str) -> Result<PathBuf, AssetError> {
        let full = self.locate(path)?;
        let invalid = |message: String| AssetError::InvalidAnimation {
            path: path.to_string(),
            message,
        };

        let text = std::fs::read_to_string(&full).map_err(|e| invalid(e.to_string()))?;
        validate_lottie(&text).map_err(invalid)?;
        Ok(full)
    }
}

/// A Lottie file is a JSON object carrying at least a version and layers
pub fn validate_lottie(text: &str) -> Result<(), String> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let object = value
        .as_object()
        .ok_or_else(|| "top level is not a JSON object".to_string())?;

    for key in ["v", "layers"] {
        if !object.contains_key(key) {
            return Err(format!("missing '{}' field", key));
        }
    }
    if !object["layers"].is_array() {
        return Err("'layers' is not an array".to_string());
    }
    Ok(())
}
