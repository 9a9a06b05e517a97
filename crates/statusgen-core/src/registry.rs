//! Status registries: the ordered `(name, code, description)` records that
//! generated code is produced from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::load_document;
use crate::{Error, Result};

/// Prefix marking a registry name as internal; such entries are never generated.
pub const RESERVED_PREFIX: &str = "__";

/// One named status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusEntry {
    pub name: String,
    pub code: u32,
    pub description: String,
}

impl StatusEntry {
    pub fn new(name: impl Into<String>, code: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code,
            description: description.into(),
        }
    }

    /// Whether the name follows the internal-name convention.
    pub fn is_reserved(&self) -> bool {
        self.name.starts_with(RESERVED_PREFIX)
    }
}

/// A source of status entries, in definition order.
pub trait EnumerationSource {
    /// Returns the public entries in definition order.
    ///
    /// Reserved names are filtered out. Errors mean the source could not be
    /// read or is inconsistent and are not recoverable by the caller.
    fn entries(&self) -> Result<Vec<StatusEntry>>;
}

/// An in-memory registry of status entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegistry {
    entries: Vec<StatusEntry>,
}

impl StatusRegistry {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    /// The guest agent's datastore status codes.
    pub fn builtin() -> Self {
        Self::new(vec![
            StatusEntry::new("BLOCKED", 0x02, "blocked"),
            StatusEntry::new("BUILDING", 0x09, "building"),
            StatusEntry::new("BUILD_PENDING", 0x19, "build pending"),
            StatusEntry::new("CRASHED", 0x06, "crashed"),
            StatusEntry::new("DELETED", 0x05, "deleted"),
            StatusEntry::new("FAILED", 0x08, "failed to spawn"),
            StatusEntry::new("FAILED_TIMEOUT_GUESTAGENT", 0x18, "guestagent error"),
            StatusEntry::new("NEW", 0x17, "new"),
            StatusEntry::new("PAUSED", 0x03, "paused"),
            StatusEntry::new("RUNNING", 0x01, "running"),
            StatusEntry::new("SHUTDOWN", 0x04, "shutdown"),
            StatusEntry::new("UNKNOWN", 0x16, "unknown"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnumerationSource for StatusRegistry {
    fn entries(&self) -> Result<Vec<StatusEntry>> {
        let entries: Vec<StatusEntry> = self
            .entries
            .iter()
            .filter(|entry| !entry.is_reserved())
            .cloned()
            .collect();
        validate(&entries)?;
        Ok(entries)
    }
}

/// Shape of a registry document on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryDocument {
    statuses: Vec<StatusEntry>,
}

/// A registry read from a TOML, JSON or YAML document.
///
/// ```toml
/// [[statuses]]
/// name = "RUNNING"
/// code = 0x01
/// description = "running"
/// ```
///
/// The file is read each time entries are requested.
#[derive(Debug, Clone)]
pub struct RegistryFile {
    path: PathBuf,
}

impl RegistryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document into an in-memory registry.
    pub fn load(&self) -> Result<StatusRegistry> {
        let document: RegistryDocument = load_document(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = document.statuses.len(),
            "loaded status registry"
        );
        Ok(StatusRegistry::new(document.statuses))
    }
}

impl EnumerationSource for RegistryFile {
    fn entries(&self) -> Result<Vec<StatusEntry>> {
        self.load()?.entries()
    }
}

fn validate(entries: &[StatusEntry]) -> Result<()> {
    let mut names = HashSet::new();
    let mut codes = HashSet::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(Error::invalid_registry(format!(
                "status with code {:#x} has an empty name",
                entry.code
            )));
        }
        if !names.insert(entry.name.as_str()) {
            return Err(Error::invalid_registry(format!(
                "duplicate status name {}",
                entry.name
            )));
        }
        if !codes.insert(entry.code) {
            return Err(Error::invalid_registry(format!(
                "duplicate status code {:#x} ({})",
                entry.code, entry.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reserved_names_filtered() {
        let registry = StatusRegistry::new(vec![
            StatusEntry::new("__init__", 0x99, "internal"),
            StatusEntry::new("OK", 0x0, "ok"),
            StatusEntry::new("__module__", 0x98, "internal"),
        ]);

        let entries = registry.entries().unwrap();
        assert_eq!(entries, vec![StatusEntry::new("OK", 0x0, "ok")]);
    }

    #[test]
    fn test_single_underscore_kept() {
        let registry = StatusRegistry::new(vec![StatusEntry::new("_PRIVATE", 0x1, "kept")]);
        assert_eq!(registry.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_definition_order_preserved() {
        let registry = StatusRegistry::new(vec![
            StatusEntry::new("ZED", 0x3, "z"),
            StatusEntry::new("ALPHA", 0x1, "a"),
            StatusEntry::new("MID", 0x2, "m"),
        ]);

        let names: Vec<_> = registry
            .entries()
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["ZED", "ALPHA", "MID"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = StatusRegistry::new(vec![
            StatusEntry::new("OK", 0x0, "ok"),
            StatusEntry::new("OK", 0x1, "also ok"),
        ]);
        assert!(matches!(registry.entries(), Err(Error::InvalidRegistry { .. })));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let registry = StatusRegistry::new(vec![
            StatusEntry::new("OK", 0x0, "ok"),
            StatusEntry::new("FINE", 0x0, "fine"),
        ]);
        let err = registry.entries().unwrap_err();
        assert!(err.to_string().contains("duplicate status code 0x0"));
    }

    #[test]
    fn test_duplicate_among_reserved_ignored() {
        let registry = StatusRegistry::new(vec![
            StatusEntry::new("__doc__", 0x0, "x"),
            StatusEntry::new("OK", 0x0, "ok"),
        ]);
        assert!(registry.entries().is_ok());
    }

    #[test]
    fn test_builtin_is_valid() {
        let registry = StatusRegistry::builtin();
        let entries = registry.entries().unwrap();
        assert_eq!(entries.len(), registry.len());
        assert_eq!(entries[0].name, "BLOCKED");
    }

    #[test]
    fn test_registry_file_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statuses.toml");
        fs::write(
            &path,
            r#"
[[statuses]]
name = "RUNNING"
code = 0x01
description = "running"

[[statuses]]
name = "SHUTDOWN"
code = 0x04
description = "shutdown"
"#,
        )
        .unwrap();

        let entries = RegistryFile::new(&path).entries().unwrap();
        assert_eq!(
            entries,
            vec![
                StatusEntry::new("RUNNING", 1, "running"),
                StatusEntry::new("SHUTDOWN", 4, "shutdown"),
            ]
        );
    }

    #[test]
    fn test_registry_file_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statuses.json");
        fs::write(
            &path,
            r#"{"statuses": [{"name": "NEW", "code": 23, "description": "new"}]}"#,
        )
        .unwrap();

        let entries = RegistryFile::new(&path).entries().unwrap();
        assert_eq!(entries, vec![StatusEntry::new("NEW", 0x17, "new")]);
    }

    #[test]
    fn test_registry_file_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statuses.yaml");
        fs::write(
            &path,
            "statuses:\n  - name: PAUSED\n    code: 3\n    description: paused\n",
        )
        .unwrap();

        let entries = RegistryFile::new(&path).entries().unwrap();
        assert_eq!(entries, vec![StatusEntry::new("PAUSED", 3, "paused")]);
    }

    #[test]
    fn test_registry_file_missing() {
        let dir = TempDir::new().unwrap();
        let source = RegistryFile::new(dir.path().join("nope.toml"));
        assert!(matches!(source.entries(), Err(Error::Io { .. })));
    }

    #[test]
    fn test_registry_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statuses.toml");
        fs::write(&path, "[[statuses]]\nname = \"OK\"\n").unwrap();

        let err = RegistryFile::new(&path).entries().unwrap_err();
        assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
    }
}
