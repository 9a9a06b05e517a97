//! Preview, replace, and compare implementations
//!
//! All three operate on one [`SyncPlan`] computed from the registry and the
//! current file pair.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use statusgen_core::{
    CONFIG_FILE_NAME, CheckReport, EnumerationSource, RegistryFile, StatusRegistry, SyncConfig,
    SyncEngine, SyncOptions, SyncPlan,
};

use crate::cli::{Actions, Cli, Finish};
use crate::error::Result;
use crate::exit_codes;

/// Resolve settings: an explicit file, else `statusgen.toml` in `cwd`, else defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SyncConfig> {
    if let Some(path) = explicit {
        return Ok(SyncConfig::load(path)?);
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(SyncConfig::load(&local)?);
    }

    Ok(SyncConfig::default())
}

/// Run the requested actions and return the process exit code
///
/// Previews are printed first, then the files are written or compared.
pub fn run_sync(cli: &Cli, actions: Actions, cwd: &Path) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cwd)?;
    if let Some(registry) = &cli.registry {
        config.registry = Some(registry.clone());
    }
    if cli.strict {
        config.strict = true;
    }

    let source: Box<dyn EnumerationSource> = match &config.registry {
        Some(path) => Box::new(RegistryFile::new(path)),
        None => Box::new(StatusRegistry::builtin()),
    };

    let engine = SyncEngine::new(
        &cli.declaration_file,
        &cli.implementation_file,
        SyncOptions::from(&config),
    );
    let plan = engine.plan(&*source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if actions.print_declaration {
        write!(out, "{}", plan.preview_declaration())?;
    }
    if actions.print_implementation {
        write!(out, "{}", plan.preview_implementation())?;
    }

    match actions.finish {
        Some(Finish::Replace) => {
            plan.write()?;
            for file in plan.files() {
                writeln!(out, "{} {}", "Wrote".green().bold(), file.label)?;
            }
            Ok(exit_codes::SUCCESS)
        }
        Some(Finish::Compare { diff }) => {
            let report = plan.compare();
            print_report(&mut out, &plan, &report, diff)?;
            if report.is_in_sync() {
                Ok(exit_codes::SUCCESS)
            } else {
                Ok(exit_codes::FAILURE)
            }
        }
        None => Ok(exit_codes::SUCCESS),
    }
}

fn print_report(out: &mut impl Write, plan: &SyncPlan, report: &CheckReport, diff: bool) -> Result<()> {
    if report.is_in_sync() {
        writeln!(out, "{} No new changes.", "OK".green().bold())?;
        return Ok(());
    }

    for drift in &report.drifted {
        writeln!(out, "{} {}", "DRIFTED".red().bold(), drift)?;
    }

    if diff {
        for file in plan.files() {
            let text = file.diff();
            if !text.is_empty() {
                writeln!(out)?;
                write!(out, "{}", text)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Run {} to regenerate.",
        "statusgen <DECLARATION> <IMPLEMENTATION> --replace".cyan()
    )?;
    Ok(())
}
