//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, Result};

/// statusgen - Keep generated status-code regions in sync with the registry
///
/// Regenerates the text between `//! BEGIN GENERATED CODE` and
/// `//! END GENERATED CODE` in a declaration file (enumerators) and an
/// implementation file (code-to-description `case` labels).
///
/// Examples:
///   statusgen status.h status.cc --print-declaration
///   statusgen status.h status.cc --replace
///   statusgen status.h status.cc --compare --diff   # CI gate
#[derive(Parser, Debug)]
#[command(name = "statusgen")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Declaration file holding the enumerator region
    pub declaration_file: PathBuf,

    /// Implementation file holding the case/return region
    pub implementation_file: PathBuf,

    /// Print the regenerated declaration file
    #[arg(long, alias = "printh")]
    pub print_declaration: bool,

    /// Print the regenerated implementation file
    #[arg(long, alias = "printcc")]
    pub print_implementation: bool,

    /// Overwrite both files with the regenerated contents
    #[arg(long)]
    pub replace: bool,

    /// Exit non-zero if regenerating would change either file. Intended for CI.
    #[arg(long)]
    pub compare: bool,

    /// With --compare, print a unified diff of each drifted file
    #[arg(long, requires = "compare")]
    pub diff: bool,

    /// Registry file (TOML, JSON or YAML); the built-in registry if omitted
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Settings file; ./statusgen.toml is used when present
    #[arg(long, value_name = "PATH", env = "STATUSGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail when a file has no generated region or an unterminated one
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What to do with the regenerated contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Write both files back
    Replace,
    /// Report drift
    Compare { diff: bool },
}

/// Validated set of requested actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    pub print_declaration: bool,
    pub print_implementation: bool,
    pub finish: Option<Finish>,
}

impl Cli {
    /// Validate the action flags
    ///
    /// At least one action is required, and `--compare` excludes `--replace`.
    pub fn actions(&self) -> Result<Actions> {
        let finish = match (self.replace, self.compare) {
            (true, true) => {
                return Err(CliError::usage(
                    "--compare and --replace cannot be used together.",
                ));
            }
            (true, false) => Some(Finish::Replace),
            (false, true) => Some(Finish::Compare { diff: self.diff }),
            (false, false) => None,
        };

        if finish.is_none() && !self.print_declaration && !self.print_implementation {
            return Err(CliError::usage(
                "Specify --print-declaration, --print-implementation, --replace, or --compare.",
            ));
        }

        Ok(Actions {
            print_declaration: self.print_declaration,
            print_implementation: self.print_implementation,
            finish,
        })
    }
}
