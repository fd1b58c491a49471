use clap::ValueEnum;
use perfreport_core::ReportConfig;
use std::path::PathBuf;

pub mod commands;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Table,
}

/// Resolve the run configuration from command-line overrides.
///
/// Without a root the current working directory is the project root.
pub fn build_config(
    root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> perfreport_core::Result<ReportConfig> {
    let config = match root {
        Some(root) => ReportConfig::new(root),
        None => ReportConfig::from_current_dir()?,
    };

    Ok(match output_dir {
        Some(dir) => config.with_output_dir(dir),
        None => config,
    })
}
