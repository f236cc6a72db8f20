//! # propcase
//!
//! ## Usage
//!
//! ```bash
//! propcase <case-dir> <propeller.{obj,stl}> [settings.toml]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use propcase::{generate_case, CaseResult, CaseSettings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: propcase <case-dir> <propeller.{obj,stl}> [settings.toml]";

fn run(case_dir: &Path, propeller: &Path, settings_path: Option<&Path>) -> CaseResult<()> {
    let settings = match settings_path {
        Some(path) => CaseSettings::from_path(path)?,
        None => CaseSettings::default(),
    };
    let report = generate_case(case_dir, propeller, &settings)?;
    info!(
        meshes = report.mesh_files.len(),
        configs = report.config_files.len(),
        "case ready"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let (case_dir, propeller, settings) = match args.as_slice() {
        [case_dir, propeller] => (case_dir, propeller, None),
        [case_dir, propeller, settings] => (case_dir, propeller, Some(PathBuf::from(settings))),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(Path::new(case_dir), Path::new(propeller), settings.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "case generation failed");
            ExitCode::FAILURE
        }
    }
}
