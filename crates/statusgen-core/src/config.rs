//! Configuration loading.
//!
//! Structured files (the `statusgen.toml` settings file and registry
//! documents) are decoded by extension: `.toml`, `.json`, `.yaml` / `.yml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use statusgen_blocks::{MarkerPair, SpliceMode, marker::DEFAULT_COMMENT_PREFIX};

use crate::generator::GeneratorStyle;
use crate::{Error, Result, io};

/// Default name of the settings file.
pub const CONFIG_FILE_NAME: &str = "statusgen.toml";

/// Load a structured document, picking the decoder from the file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let parse_error = |format: &str, message: String| Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.into(),
        message,
    };

    match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
        "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string())),
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
        }
        _ => Err(Error::UnsupportedFormat {
            extension: extension.clone(),
        }),
    }
}

/// Settings read from `statusgen.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Registry document to generate from; the built-in registry when unset.
    pub registry: Option<PathBuf>,
    /// Comment sentinel written before the marker text.
    pub comment_prefix: String,
    /// Reject files with a missing or unterminated generated region.
    pub strict: bool,
    pub style: GeneratorStyle,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            registry: None,
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            strict: false,
            style: GeneratorStyle::default(),
        }
    }
}

impl SyncConfig {
    /// Load settings from a file.
    ///
    /// A relative `registry` path is resolved against the directory holding
    /// the settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: SyncConfig = load_document(path)?;
        if let (Some(registry), Some(base)) = (config.registry.as_mut(), path.parent()) {
            if registry.is_relative() {
                *registry = base.join(&*registry);
            }
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn markers(&self) -> MarkerPair {
        MarkerPair::with_prefix(&self.comment_prefix)
    }

    pub fn splice_mode(&self) -> SpliceMode {
        if self.strict {
            SpliceMode::Strict
        } else {
            SpliceMode::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.markers(), MarkerPair::default());
        assert_eq!(config.splice_mode(), SpliceMode::Lenient);
        assert_eq!(config.style, GeneratorStyle::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "registry = \"statuses.toml\"\ncomment_prefix = \"#\"\n\n[style]\ndeclaration_indent = 4\n",
        )
        .unwrap();

        let config = SyncConfig::load(&path).unwrap();
        assert_eq!(config.registry, Some(dir.path().join("statuses.toml")));
        assert_eq!(config.markers().begin(), "# BEGIN GENERATED CODE");
        assert_eq!(config.style.declaration_indent, 4);
        assert_eq!(config.style.case_indent, GeneratorStyle::default().case_indent);
        assert!(!config.strict);
    }

    #[test]
    fn test_absolute_registry_path_kept() {
        let dir = TempDir::new().unwrap();
        let registry = dir.path().join("elsewhere").join("statuses.json");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, format!("registry = {:?}\n", registry.display().to_string())).unwrap();

        let config = SyncConfig::load(&path).unwrap();
        assert_eq!(config.registry, Some(registry));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "registyr = \"typo.toml\"\n").unwrap();

        let err = SyncConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statusgen.ini");
        fs::write(&path, "strict = true\n").unwrap();

        let err = SyncConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
    }
}
