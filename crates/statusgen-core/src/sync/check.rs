//! Check types for drift comparison
//!
//! Reports whether regenerating the file pair would change either file.

use statusgen_blocks::Drift;

/// Status of a drift check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Regenerating would change nothing
    InSync,
    /// At least one file would change
    Drifted,
}

/// Report from a drift check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Overall status of the check
    pub status: CheckStatus,
    /// First divergence of each drifted file, in check order
    pub drifted: Vec<Drift>,
}

impl CheckReport {
    /// Create a report with no drift
    pub fn in_sync() -> Self {
        Self {
            status: CheckStatus::InSync,
            drifted: Vec::new(),
        }
    }

    /// Create a report from the per-file comparison results
    pub fn from_drifts(drifts: impl IntoIterator<Item = Option<Drift>>) -> Self {
        let drifted: Vec<Drift> = drifts.into_iter().flatten().collect();
        let status = if drifted.is_empty() {
            CheckStatus::InSync
        } else {
            CheckStatus::Drifted
        };
        Self { status, drifted }
    }

    pub fn is_in_sync(&self) -> bool {
        self.status == CheckStatus::InSync
    }

    /// Labels of the drifted files
    pub fn drifted_labels(&self) -> Vec<&str> {
        self.drifted.iter().map(Drift::label).collect()
    }

    /// Merge two reports, drifted if either is
    pub fn merge(mut self, other: CheckReport) -> Self {
        self.drifted.extend(other.drifted);
        self.status = match (self.status, other.status) {
            (CheckStatus::Drifted, _) | (_, CheckStatus::Drifted) => CheckStatus::Drifted,
            (CheckStatus::InSync, CheckStatus::InSync) => CheckStatus::InSync,
        };
        self
    }
}
