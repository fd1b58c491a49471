use crate::OutputFormat;
use anyhow::Result;
use chrono::Utc;
use perfreport_core::analysis::ScoreBand;
use perfreport_core::analysis::vitals;
use perfreport_core::{ReportConfig, ReportData, gather_report_data};

/// KPI overview printed by the `summary` command
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub overall_score: f64,
    pub score_band: String,
    pub critical_issues: usize,
    pub improvements: usize,
    pub regressions: usize,
    pub trend: Option<String>,
    pub baseline_available: bool,
    pub comparison_available: bool,
    pub lighthouse_reports: usize,
    pub bundle_analysis_available: bool,
}

impl SummaryView {
    pub fn from_data(data: &ReportData) -> Self {
        let summary = &data.summary;
        Self {
            overall_score: summary.overall_score,
            score_band: ScoreBand::from_score(summary.overall_score).label().to_string(),
            critical_issues: summary.critical_issues,
            improvements: summary.improvements,
            regressions: summary.regressions,
            trend: data
                .comparison()
                .and_then(|c| c.summary.overall_trend.as_ref())
                .map(|t| t.as_str().to_string()),
            baseline_available: data.baseline.is_some(),
            comparison_available: data.comparison.is_some(),
            lighthouse_reports: data.lighthouse.as_ref().map_or(0, |l| l.len()),
            bundle_analysis_available: data.bundle_analysis.is_some(),
        }
    }
}

/// Load the available artifacts and summarize them without writing reports
pub fn summarize(config: &ReportConfig) -> Result<SummaryView> {
    let data = gather_report_data(config, Utc::now())?;
    Ok(SummaryView::from_data(&data))
}

pub fn execute(config: &ReportConfig, format: OutputFormat) -> Result<()> {
    tracing::info!(
        "Summarizing performance data in: {}",
        config.storage_dir.display()
    );

    let view = summarize(config)?;

    match format {
        OutputFormat::Json => output_json(&view)?,
        OutputFormat::Table => output_table(&view),
        OutputFormat::Pretty => output_pretty(&view),
    }

    Ok(())
}

fn availability(available: bool) -> console::StyledObject<&'static str> {
    use console::style;

    if available {
        style("available").green()
    } else {
        style("missing").dim()
    }
}

fn output_pretty(view: &SummaryView) {
    use console::style;

    println!("\n{}", style("Performance Summary").bold().cyan());
    println!("{}", style("===================").cyan());

    let band = ScoreBand::from_score(view.overall_score);
    println!(
        "\n  Overall Score:    {}/100 ({})",
        style(view.overall_score).yellow(),
        band
    );
    println!(
        "  Critical Issues:  {} {}",
        view.critical_issues,
        vitals::critical_issues_status(view.critical_issues)
    );
    println!(
        "  Improvements:     {} {}",
        view.improvements,
        vitals::improvements_status(view.improvements)
    );
    println!(
        "  Regressions:      {} {}",
        view.regressions,
        vitals::regressions_status(view.regressions)
    );
    if let Some(ref trend) = view.trend {
        println!("  Trend:            {}", trend);
    }

    println!("\n{}", style("Data Sources").bold());
    println!("  Baseline:         {}", availability(view.baseline_available));
    println!("  Comparison:       {}", availability(view.comparison_available));
    println!(
        "  Lighthouse:       {} report(s)",
        view.lighthouse_reports
    );
    println!(
        "  Bundle Analysis:  {}",
        availability(view.bundle_analysis_available)
    );

    println!();
}

fn output_json(view: &SummaryView) -> Result<()> {
    let json = serde_json::to_string_pretty(view)?;
    println!("{}", json);
    Ok(())
}

fn output_table(view: &SummaryView) {
    println!("Metric,Value");
    println!("Overall Score,{}", view.overall_score);
    println!("Score Band,{}", view.score_band);
    println!("Critical Issues,{}", view.critical_issues);
    println!("Improvements,{}", view.improvements);
    println!("Regressions,{}", view.regressions);
    if let Some(ref trend) = view.trend {
        println!("Trend,{}", trend);
    }
    println!("Baseline Available,{}", view.baseline_available);
    println!("Comparison Available,{}", view.comparison_available);
    println!("Lighthouse Reports,{}", view.lighthouse_reports);
    println!("Bundle Analysis Available,{}", view.bundle_analysis_available);
}
