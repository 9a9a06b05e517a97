//! SyncEngine implementation
//!
//! The SyncEngine regenerates the marked regions of a declaration file and
//! an implementation file from a status registry.

use std::path::{Path, PathBuf};

use statusgen_blocks::{
    Drift, MarkerPair, RegionStatus, SpliceMode, compare, join_lines, splice, unified_diff,
};

use crate::Result;
use crate::config::SyncConfig;
use crate::generator::{GeneratorStyle, generate};
use crate::io;
use crate::registry::{EnumerationSource, StatusEntry};

use super::check::CheckReport;

/// Options for planning a sync
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Marker lines delimiting the generated region
    pub markers: MarkerPair,
    /// Indentation of generated lines
    pub style: GeneratorStyle,
    /// Whether missing or unterminated regions abort the plan
    pub mode: SpliceMode,
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self {
            markers: config.markers(),
            style: config.style.clone(),
            mode: config.splice_mode(),
        }
    }
}

/// Current and regenerated contents of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    /// Name used in drift messages
    pub label: String,
    pub path: PathBuf,
    /// Lines as read from disk
    pub before: Vec<String>,
    /// Lines after splicing
    pub after: Vec<String>,
    /// Marker layout found while splicing
    pub status: RegionStatus,
}

impl FilePlan {
    fn build(
        path: &Path,
        fragment: &[String],
        markers: &MarkerPair,
        mode: SpliceMode,
    ) -> Result<Self> {
        let label = path.display().to_string();
        let before = io::read_lines(path)?;
        let spliced = splice(&before, fragment, markers).check(mode, &label)?;

        match spliced.status {
            RegionStatus::NoMarkerFound => {
                tracing::warn!(file = %label, "no generated region found, file left as is");
            }
            RegionStatus::UnterminatedRegion => {
                tracing::warn!(file = %label, "generated region has no end marker, trailing lines dropped");
            }
            RegionStatus::Replaced { regions } if regions > 1 => {
                tracing::warn!(file = %label, regions, "multiple generated regions, each receives the fragment");
            }
            RegionStatus::Replaced { .. } => {}
        }

        Ok(Self {
            label,
            path: path.to_path_buf(),
            before,
            after: spliced.lines,
            status: spliced.status,
        })
    }

    /// The regenerated file text
    pub fn text(&self) -> String {
        join_lines(&self.after)
    }

    /// First divergence between current and regenerated contents
    pub fn drift(&self) -> Option<Drift> {
        compare(&self.label, &self.before, &self.after)
    }

    /// Unified diff from current to regenerated contents
    pub fn diff(&self) -> String {
        unified_diff(&self.label, &self.before, &self.after)
    }

    pub fn is_changed(&self) -> bool {
        self.before != self.after
    }

    fn check(&self) -> CheckReport {
        CheckReport::from_drifts([self.drift()])
    }

    fn write(&self) -> Result<()> {
        io::write_lines(&self.path, &self.after)
    }
}

/// Regenerated contents of the file pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    pub declaration: FilePlan,
    pub implementation: FilePlan,
}

impl SyncPlan {
    /// Spliced declaration file text, nothing written
    pub fn preview_declaration(&self) -> String {
        self.declaration.text()
    }

    /// Spliced implementation file text, nothing written
    pub fn preview_implementation(&self) -> String {
        self.implementation.text()
    }

    /// Overwrite both files with their spliced contents
    ///
    /// Files are written even when unchanged.
    pub fn write(&self) -> Result<()> {
        for file in self.files() {
            file.write()?;
            tracing::info!(file = %file.label, changed = file.is_changed(), "regenerated");
        }
        Ok(())
    }

    /// Compare both files against their spliced contents
    ///
    /// Both files are always checked; the report lists every drifted file.
    pub fn compare(&self) -> CheckReport {
        self.declaration.check().merge(self.implementation.check())
    }

    pub fn files(&self) -> [&FilePlan; 2] {
        [&self.declaration, &self.implementation]
    }
}

/// Engine for regenerating a declaration/implementation file pair
///
/// The SyncEngine provides three operations through [`SyncPlan`]:
/// - **preview**: Show the regenerated text
/// - **write**: Write the regenerated text back
/// - **compare**: Report whether regeneration would change anything
pub struct SyncEngine {
    declaration: PathBuf,
    implementation: PathBuf,
    options: SyncOptions,
}

impl SyncEngine {
    /// Create a new SyncEngine
    ///
    /// # Arguments
    ///
    /// * `declaration` - File holding the enumerator region
    /// * `implementation` - File holding the `case`/`return` region
    /// * `options` - Markers, style and splice mode
    pub fn new(
        declaration: impl Into<PathBuf>,
        implementation: impl Into<PathBuf>,
        options: SyncOptions,
    ) -> Self {
        Self {
            declaration: declaration.into(),
            implementation: implementation.into(),
            options,
        }
    }

    /// Read the registry and both files and compute the spliced contents
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read, a file cannot be
    /// read, or a region is malformed in strict mode.
    pub fn plan(&self, source: &dyn EnumerationSource) -> Result<SyncPlan> {
        let entries = source.entries()?;
        self.plan_entries(&entries)
    }

    /// Compute the spliced contents for an explicit entry list
    pub fn plan_entries(&self, entries: &[StatusEntry]) -> Result<SyncPlan> {
        tracing::debug!(entries = entries.len(), "generating code");
        let code = generate(entries, &self.options.style);

        let declaration = FilePlan::build(
            &self.declaration,
            &code.declarations,
            &self.options.markers,
            self.options.mode,
        )?;
        let implementation = FilePlan::build(
            &self.implementation,
            &code.dispatch,
            &self.options.markers,
            self.options.mode,
        )?;

        Ok(SyncPlan {
            declaration,
            implementation,
        })
    }
}
