use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;
use perfreport_core::{ReportConfig, ReportData, ReportWriter, gather_report_data};
use std::path::PathBuf;

/// Outcome of a generation run
#[derive(Debug)]
pub struct Generated {
    pub data: ReportData,
    pub written: Vec<PathBuf>,
}

/// Load, render and write every report
pub fn generate(config: &ReportConfig, timestamp: DateTime<Utc>) -> Result<Generated> {
    tracing::debug!("Project root: {}", config.project_root.display());

    let data = gather_report_data(config, timestamp)?;
    let written = ReportWriter::new(config).write_all(&data)?;

    Ok(Generated { data, written })
}

pub fn execute(config: &ReportConfig) -> Result<()> {
    println!("{}", style("📊 Generating performance reports...").bold().cyan());

    let generated = generate(config, Utc::now())?;

    for path in &generated.written {
        println!("  {} {}", style("📝").dim(), path.display());
    }
    println!(
        "{} Reports written to {} (score {}/100)",
        style("✅").green(),
        style(config.output_dir.display()).green(),
        generated.data.summary.overall_score
    );

    Ok(())
}
