//! Short Markdown summary for stakeholders.

use super::text::{self, BASELINE_UNAVAILABLE, VITALS_NOT_CAPTURED};
use crate::analysis::vitals::{self, ScoreBand};
use crate::report::{ReportData, ReportSummary};
use chrono::Duration;

/// Days until the next scheduled review
pub const REVIEW_INTERVAL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn assess(summary: &ReportSummary) -> Self {
        if summary.regressions > 0 || summary.critical_issues > 5 {
            RiskLevel::High
        } else if summary.critical_issues > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roi {
    Negative,
    Positive,
    Neutral,
}

impl Roi {
    pub fn assess(summary: &ReportSummary) -> Self {
        if summary.regressions > summary.improvements {
            Roi::Negative
        } else if summary.improvements > 0 {
            Roi::Positive
        } else {
            Roi::Neutral
        }
    }
}

pub fn render(data: &ReportData) -> String {
    let sections = [
        header(data),
        kpi_table(&data.summary),
        core_web_vitals(data),
        business_impact(&data.summary),
        recommendations(data),
        data_sources(data),
        footer(data),
    ];
    sections.concat()
}

fn header(data: &ReportData) -> String {
    let period = data
        .baseline()
        .and_then(|b| b.timestamp.as_deref())
        .map(|ts| format!("Baseline captured {}", ts))
        .unwrap_or_else(|| "Current snapshot".to_string());

    format!(
        "# Performance Executive Summary\n\n\
         **Generated:** {}  \n\
         **Reporting Period:** {}\n\n",
        text::timestamp(data),
        period
    )
}

fn kpi_table(summary: &ReportSummary) -> String {
    let mut out = String::from("## Key Performance Indicators\n\n");
    out.push_str("| Metric | Value | Status |\n");
    out.push_str("|--------|-------|--------|\n");
    out.push_str(&format!(
        "| Overall Performance Score | {}/100 | {} |\n",
        text::number(summary.overall_score),
        ScoreBand::from_score(summary.overall_score)
    ));
    out.push_str(&format!(
        "| Critical Issues | {} | {} |\n",
        summary.critical_issues,
        vitals::critical_issues_status(summary.critical_issues)
    ));
    out.push_str(&format!(
        "| Performance Improvements | {} | {} |\n",
        summary.improvements,
        vitals::improvements_status(summary.improvements)
    ));
    out.push_str(&format!(
        "| Performance Regressions | {} | {} |\n\n",
        summary.regressions,
        vitals::regressions_status(summary.regressions)
    ));
    out
}

fn core_web_vitals(data: &ReportData) -> String {
    let mut out = String::from("## Core Web Vitals\n\n");

    let Some(baseline) = data.baseline() else {
        out.push_str(&format!("{}.\n\n", BASELINE_UNAVAILABLE));
        return out;
    };
    let Some(cwv) = baseline.overall.core_web_vitals.as_ref() else {
        out.push_str(&format!("{}.\n\n", VITALS_NOT_CAPTURED));
        return out;
    };

    out.push_str("| Metric | Value | Status |\n");
    out.push_str("|--------|-------|--------|\n");
    for reading in vitals::readings(cwv) {
        out.push_str(&format!(
            "| {} ({}) | {} | {} |\n",
            reading.metric.name(),
            reading.metric.key(),
            reading.display_value(),
            reading.display_status()
        ));
    }
    out.push('\n');
    out
}

fn ux_impact(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "Users experience fast, responsive page loads across the application. \
             Current performance supports high engagement."
        }
        ScoreBand::Good => {
            "Most users experience acceptable load times. \
             Targeted optimization can further improve engagement."
        }
        ScoreBand::NeedsImprovement => {
            "Users are likely to notice slow page loads on key workflows. \
             Performance is at risk of affecting productivity and satisfaction."
        }
        ScoreBand::Poor => {
            "Users are experiencing significant delays. \
             Performance issues are likely impacting productivity and adoption."
        }
    }
}

fn risk_text(summary: &ReportSummary) -> String {
    match RiskLevel::assess(summary) {
        RiskLevel::High => format!(
            "**High Risk**: {} regression(s) and {} critical issue(s) require immediate attention.",
            summary.regressions, summary.critical_issues
        ),
        RiskLevel::Medium => format!(
            "**Medium Risk**: {} critical issue(s) should be scheduled for remediation.",
            summary.critical_issues
        ),
        RiskLevel::Low => "**Low Risk**: No critical issues or regressions detected.".to_string(),
    }
}

fn roi_text(summary: &ReportSummary) -> String {
    match Roi::assess(summary) {
        Roi::Negative => format!(
            "**Negative ROI**: Recent changes introduced more regressions ({}) than improvements ({}). \
             Prioritize regression fixes before new optimization work.",
            summary.regressions, summary.improvements
        ),
        Roi::Positive => format!(
            "**Positive ROI**: Optimization work delivered {} measurable improvement(s).",
            summary.improvements
        ),
        Roi::Neutral => {
            "**Neutral ROI**: No measurable performance change since the baseline.".to_string()
        }
    }
}

fn business_impact(summary: &ReportSummary) -> String {
    format!(
        "## Business Impact\n\n\
         ### User Experience Impact\n\n{}\n\n\
         ### Risk Level\n\n{}\n\n\
         ### Optimization ROI\n\n{}\n\n",
        ux_impact(ScoreBand::from_score(summary.overall_score)),
        risk_text(summary),
        roi_text(summary)
    )
}

/// Stakeholder-level actions derived from the summary
pub fn recommendation_items(data: &ReportData) -> Vec<String> {
    let summary = &data.summary;
    let mut items = Vec::new();

    if data.baseline.is_none() {
        items.push("Capture a performance baseline to enable trend tracking".to_string());
    }
    if summary.overall_score < 50.0 {
        items.push(format!(
            "Treat performance as a release blocker until the score exceeds 50 (currently {}/100)",
            text::number(summary.overall_score)
        ));
    } else if summary.overall_score < 70.0 {
        items.push(format!(
            "Prioritize performance optimization in the next sprint (score {}/100)",
            text::number(summary.overall_score)
        ));
    }
    if summary.critical_issues > 0 {
        items.push(format!(
            "Resolve {} critical performance issue(s) identified in the baseline",
            summary.critical_issues
        ));
    }
    if summary.regressions > 0 {
        items.push(format!(
            "Investigate and fix {} performance regression(s) before the next release",
            summary.regressions
        ));
    }
    if data.baseline.is_some() && data.comparison.is_none() {
        items.push("Run a comparison against the baseline to measure progress".to_string());
    }
    if items.is_empty() {
        items.push("Maintain current performance levels and continue weekly monitoring".to_string());
    }

    items
}

fn recommendations(data: &ReportData) -> String {
    let mut out = String::from("## Recommendations\n\n");
    for (i, item) in recommendation_items(data).iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }
    out.push('\n');
    out
}

fn data_sources(data: &ReportData) -> String {
    let mut out = String::from("## Data Sources\n\n");
    for (label, status) in text::data_sources(data) {
        match status {
            Ok(detail) => out.push_str(&format!("- **{}**: ✅ {}\n", label, detail)),
            Err(fallback) => out.push_str(&format!("- **{}**: ❌ {}\n", label, fallback)),
        }
    }
    out.push('\n');
    out
}

fn footer(data: &ReportData) -> String {
    let next_review = data.timestamp + Duration::days(REVIEW_INTERVAL_DAYS);
    format!(
        "---\n\n**Next Review:** {}\n",
        next_review.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Artifact, Comparison};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_report_falls_back() {
        let data = ReportData::empty(fixed_time());
        let md = render(&data);

        assert!(md.contains("Baseline data not available"));
        assert!(md.contains("| Overall Performance Score | 0/100 | 🔴 Poor |"));
        assert!(md.contains("Comparison data not available"));
        assert!(md.contains("Lighthouse reports not available"));
        assert!(md.contains("Bundle analysis not available"));
        assert!(md.contains("Capture a performance baseline"));
    }

    #[test]
    fn test_regressions_flagged() {
        let mut data = ReportData::empty(fixed_time());
        data.comparison = Some(
            Artifact::<Comparison>::from_value(json!({
                "summary": { "improvements": [], "regressions": [{}, {}] }
            }))
            .unwrap(),
        );
        data.summary.regressions = 2;

        let md = render(&data);

        assert!(md.contains("| Performance Regressions | 2 | ⚠️ Present |"));
        assert!(md.contains("**Negative ROI**"));
        assert!(md.contains("**High Risk**"));
    }

    #[test]
    fn test_next_review_is_a_week_out() {
        let data = ReportData::empty(fixed_time());
        assert!(render(&data).contains("**Next Review:** 2026-10-24"));
    }

    #[test]
    fn test_risk_and_roi_rules() {
        let mut summary = ReportSummary::default();
        assert_eq!(RiskLevel::assess(&summary), RiskLevel::Low);
        assert_eq!(Roi::assess(&summary), Roi::Neutral);

        summary.critical_issues = 2;
        assert_eq!(RiskLevel::assess(&summary), RiskLevel::Medium);

        summary.critical_issues = 6;
        assert_eq!(RiskLevel::assess(&summary), RiskLevel::High);

        summary.improvements = 1;
        assert_eq!(Roi::assess(&summary), Roi::Positive);

        summary.regressions = 1;
        // Equal counts are not negative
        assert_eq!(Roi::assess(&summary), Roi::Positive);
    }

    #[test]
    fn test_healthy_report_recommends_maintenance() {
        let mut data = ReportData::empty(fixed_time());
        data.baseline = Some(Artifact::from_value(json!({ "overall": { "performanceScore": 95 } })).unwrap());
        data.comparison = Some(Artifact::from_value(json!({ "current": { "performanceScore": 95 } })).unwrap());
        data.summary.overall_score = 95.0;

        let items = recommendation_items(&data);
        assert_eq!(
            items,
            vec!["Maintain current performance levels and continue weekly monitoring"]
        );
        assert!(render(&data).contains("🟢 Excellent"));
    }
}
