//! CLI configuration loader for Suraksha Docs
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./suraksha.json or ./.suraksha/config.json
//! 3. User config: $XDG_CONFIG_HOME/suraksha/config.json or the platform config dir
//! 4. Built-in defaults (no files)

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use suraksha_core::{MissingAssetPolicy, PageEntry, SiteConfig};
use tracing::debug;

/// Raw configuration file format; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    pub title: Option<String>,
    pub product: Option<String>,
    pub repository_url: Option<String>,
    /// Page templates directory (supports `~` and `$VAR`)
    pub content_dir: Option<String>,
    /// Images and animations directory (supports `~` and `$VAR`)
    pub assets_dir: Option<String>,
    /// "placeholder" or "skip"
    pub missing_assets: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    /// Navigation entries; the built-in pages when absent
    pub pages: Option<Vec<PageEntry>>,
}

/// A config file together with the directory its relative paths resolve against
struct LoadedConfig {
    raw: RawConfig,
    base_dir: PathBuf,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    content_dir_override: Option<PathBuf>,
    assets_dir_override: Option<PathBuf>,
    /// Directory searched for project configs; the working directory when unset
    search_root: Option<PathBuf>,
    /// Directory holding `suraksha/config.json`
    user_config_dir: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            content_dir_override: None,
            assets_dir_override: None,
            search_root: None,
            user_config_dir: default_user_config_dir(),
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set content directory override
    pub fn with_content_dir_override(mut self, dir: PathBuf) -> Self {
        self.content_dir_override = Some(dir);
        self
    }

    /// Set assets directory override
    pub fn with_assets_dir_override(mut self, dir: PathBuf) -> Self {
        self.assets_dir_override = Some(dir);
        self
    }

    /// Search for project configs somewhere other than the working directory
    #[cfg(test)]
    pub fn with_search_root(mut self, dir: PathBuf) -> Self {
        self.search_root = Some(dir);
        self
    }

    /// Replace the user config directory; `None` disables that step
    #[cfg(test)]
    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let loaded = if let Some(override_path) = &self.config_override {
            Some(self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?)
        } else {
            self.search_and_load().await?
        };

        // Step 2: Resolve to a site config
        let mut config = match loaded {
            Some(loaded) => resolve_config(loaded)?,
            None => {
                debug!("No config file found, using built-in defaults");
                SiteConfig::default()
            }
        };

        // Step 3: Apply flag overrides
        if let Some(dir) = &self.content_dir_override {
            config.content_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.assets_dir_override {
            config.assets_dir = dir.clone();
        }

        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<Option<LoadedConfig>> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(Some(config));
        }

        // 2. User config directory
        self.try_load_user_dir().await
    }

    /// Try loading from the working directory (or the search root)
    async fn try_load_cwd(&self) -> Result<Option<LoadedConfig>> {
        let cwd = match &self.search_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        // Try ./suraksha.json first
        let suraksha_json = cwd.join("suraksha.json");
        if suraksha_json.exists() {
            return Ok(Some(self.load_file(&suraksha_json).await?));
        }

        // Try ./.suraksha/config.json
        let suraksha_dir_config = cwd.join(".suraksha").join("config.json");
        if suraksha_dir_config.exists() {
            return Ok(Some(self.load_file(&suraksha_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from the user config directory
    async fn try_load_user_dir(&self) -> Result<Option<LoadedConfig>> {
        if let Some(config_dir) = &self.user_config_dir {
            let config_path = config_dir.join("suraksha").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<LoadedConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<LoadedConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let raw: RawConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded config file {}", path.display());

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(LoadedConfig { raw, base_dir })
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `$XDG_CONFIG_HOME` when set, otherwise the platform config directory
fn default_user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Expand `~` and `$VAR`, then anchor relative paths at `base_dir`
fn expand_path(value: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(value)
        .with_context(|| format!("Failed to expand path: {}", value))?;
    let path = PathBuf::from(expanded.as_ref());
    Ok(if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    })
}

/// Resolve raw config to SiteConfig
fn resolve_config(loaded: LoadedConfig) -> Result<SiteConfig> {
    let LoadedConfig { raw, base_dir } = loaded;
    let defaults = SiteConfig::default();

    let missing_assets = match &raw.missing_assets {
        Some(value) => MissingAssetPolicy::parse(value).ok_or_else(|| {
            anyhow!(
                "Invalid value for 'missing_assets': {} (expected 'placeholder' or 'skip')",
                value
            )
        })?,
        None => defaults.missing_assets,
    };

    let content_dir = raw
        .content_dir
        .as_deref()
        .map(|dir| expand_path(dir, &base_dir))
        .transpose()?;

    let assets_dir = match raw.assets_dir.as_deref() {
        Some(dir) => expand_path(dir, &base_dir)?,
        None => base_dir.join(&defaults.assets_dir),
    };

    Ok(SiteConfig {
        title: raw.title.unwrap_or(defaults.title),
        product: raw.product.unwrap_or(defaults.product),
        repository_url: raw.repository_url.unwrap_or(defaults.repository_url),
        content_dir,
        assets_dir,
        missing_assets,
        variables: raw.variables,
        pages: raw.pages.unwrap_or(defaults.pages),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn isolated_loader(root: &Path) -> CliConfigLoader {
        CliConfigLoader::new()
            .with_search_root(root.to_path_buf())
            .with_user_config_dir(None)
    }

    #[tokio::test]
    async fn test_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = isolated_loader(temp_dir.path()).load().await.unwrap();

        assert_eq!(config.title, "Suraksha Docs");
        assert_eq!(config.pages.len(), 8);
        assert_eq!(config.assets_dir, PathBuf::from("Assets"));
        assert!(config.content_dir.is_none());
    }

    #[tokio::test]
    async fn test_cwd_file_priority() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("suraksha.json"),
            r#"{"title": "From suraksha.json"}"#,
        )
        .unwrap();
        fs::create_dir(temp_dir.path().join(".suraksha")).unwrap();
        fs::write(
            temp_dir.path().join(".suraksha").join("config.json"),
            r#"{"title": "From .suraksha"}"#,
        )
        .unwrap();

        let config = isolated_loader(temp_dir.path()).load().await.unwrap();
        assert_eq!(config.title, "From suraksha.json");
        assert_eq!(config.assets_dir, temp_dir.path().join("Assets"));
    }

    #[tokio::test]
    async fn test_user_config_dir_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::create_dir(user.path().join("suraksha")).unwrap();
        fs::write(
            user.path().join("suraksha").join("config.json"),
            r#"{"product": "Suraksha Mobile", "missing_assets": "skip"}"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_search_root(project.path().to_path_buf())
            .with_user_config_dir(Some(user.path().to_path_buf()))
            .load()
            .await
            .unwrap();

        assert_eq!(config.product, "Suraksha Mobile");
        assert_eq!(config.missing_assets, MissingAssetPolicy::Skip);
    }

    #[tokio::test]
    async fn test_override_dir_and_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path().join("site");
        fs::create_dir_all(site.join("pages")).unwrap();
        fs::write(
            site.join("config.json"),
            r#"{
                "content_dir": "pages",
                "assets_dir": "static/img",
                "variables": {"contact": "team@suraksha.dev"},
                "pages": [{"name": "Home", "template": "home.md"}]
            }"#,
        )
        .unwrap();

        let config = isolated_loader(temp_dir.path())
            .with_config_override(site.clone())
            .load()
            .await
            .unwrap();

        assert_eq!(config.content_dir, Some(site.join("pages")));
        assert_eq!(config.assets_dir, site.join("static/img"));
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.variables["contact"], "team@suraksha.dev");
    }

    #[tokio::test]
    async fn test_env_var_expansion() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var("SURAKSHA_TEST_MEDIA_ROOT", "/srv/media");
        fs::write(
            temp_dir.path().join("suraksha.json"),
            r#"{"assets_dir": "$SURAKSHA_TEST_MEDIA_ROOT/Assets"}"#,
        )
        .unwrap();

        let config = isolated_loader(temp_dir.path()).load().await.unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/media/Assets"));
    }

    #[tokio::test]
    async fn test_flag_overrides_win() {
        let temp_dir = TempDir::new().unwrap();
        let content = temp_dir.path().join("content");
        fs::create_dir(&content).unwrap();
        fs::write(
            temp_dir.path().join("suraksha.json"),
            r#"{"assets_dir": "from-file"}"#,
        )
        .unwrap();

        let config = isolated_loader(temp_dir.path())
            .with_assets_dir_override(PathBuf::from("/tmp/cli-assets"))
            .with_content_dir_override(content.clone())
            .load()
            .await
            .unwrap();

        assert_eq!(config.assets_dir, PathBuf::from("/tmp/cli-assets"));
        assert_eq!(config.content_dir, Some(content));
    }

    #[tokio::test]
    async fn test_invalid_files_are_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("suraksha.json"),
            r#"{"missing_assets": "explode"}"#,
        )
        .unwrap();
        let err = isolated_loader(temp_dir.path()).load().await.unwrap_err();
        assert!(err.to_string().contains("missing_assets"));

        fs::write(temp_dir.path().join("suraksha.json"), "{ not json").unwrap();
        assert!(isolated_loader(temp_dir.path()).load().await.is_err());

        let missing = isolated_loader(temp_dir.path())
            .with_config_override(temp_dir.path().join("nope.json"))
            .load()
            .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_missing_content_dir_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = isolated_loader(temp_dir.path())
            .with_content_dir_override(temp_dir.path().join("does-not-exist"))
            .load()
            .await;
        assert!(result.is_err());
    }
}
