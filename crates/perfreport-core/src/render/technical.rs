//! Long-form Markdown report for engineers.

use super::text::{
    self, BASELINE_UNAVAILABLE, BUNDLE_UNAVAILABLE, COMPARISON_UNAVAILABLE, FEATURES_UNAVAILABLE,
    LIGHTHOUSE_UNAVAILABLE, VITALS_NOT_CAPTURED,
};
use crate::analysis::vitals::{self, Metric, VitalStatus};
use crate::analysis::{FeatureIssue, IssueAnalyzer};
use crate::report::{Feature, ReportData};

/// Features slower than this multiple of their target get a dedicated recommendation
pub const FEATURE_OVERRUN_FACTOR: f64 = 1.2;

/// Scores below this trigger a bundle-splitting recommendation
pub const BUNDLE_SPLIT_SCORE: f64 = 80.0;

pub fn render(data: &ReportData) -> String {
    let sections = [
        header(data),
        baseline_summary(data),
        comparison_summary(data),
        lighthouse(data),
        bundle_analysis(data),
        features(data),
        core_web_vitals(data),
        issues(data),
        recommendations(data),
        monitoring_status(data),
    ];
    sections.concat()
}

fn header(data: &ReportData) -> String {
    format!(
        "# Technical Performance Report\n\n**Generated:** {}\n\n",
        text::timestamp(data)
    )
}

fn baseline_summary(data: &ReportData) -> String {
    let mut out = String::from("## Baseline Summary\n\n");

    let Some(baseline) = data.baseline() else {
        out.push_str(&format!("{}.\n\n", BASELINE_UNAVAILABLE));
        return out;
    };

    let overall = &baseline.overall;
    out.push_str(&format!(
        "- **Captured:** {}\n",
        baseline.timestamp.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "- **Performance Score:** {}/100\n",
        text::optional_number(overall.performance_score)
    ));
    out.push_str(&format!(
        "- **Average Load Time:** {}\n",
        text::millis(overall.average_load_time)
    ));
    out.push_str(&format!(
        "- **Total Issues:** {}\n",
        text::optional_number(overall.total_issues)
    ));
    out.push_str(&format!(
        "- **Features Monitored:** {}\n\n",
        baseline.features.len()
    ));
    out
}

fn comparison_summary(data: &ReportData) -> String {
    let mut out = String::from("## Comparison Summary\n\n");

    let Some(comparison) = data.comparison() else {
        out.push_str(&format!("{}.\n\n", COMPARISON_UNAVAILABLE));
        return out;
    };

    let before = comparison.baseline.performance_score;
    let after = comparison.current.performance_score;
    let delta = before.zip(after).map(|(b, a)| a - b);

    out.push_str(&format!(
        "- **Baseline Score:** {}\n",
        text::optional_number(before)
    ));
    out.push_str(&format!(
        "- **Current Score:** {}\n",
        text::optional_number(after)
    ));
    out.push_str(&format!(
        "- **Score Change:** {}\n",
        match delta {
            Some(d) if d > 0.0 => format!("+{}", text::number(d)),
            Some(d) => text::number(d),
            None => "N/A".to_string(),
        }
    ));
    out.push_str(&format!(
        "- **Trend:** {}\n",
        comparison
            .summary
            .overall_trend
            .as_ref()
            .map(|t| format!("{} {}", t.glyph(), t.as_str()))
            .unwrap_or_else(|| "unknown".to_string())
    ));
    out.push_str(&format!(
        "- **Total Changes:** {}\n\n",
        text::optional_number(comparison.summary.total_changes)
    ));

    out.push_str("### Core Web Vitals Changes\n\n");
    if comparison.changes.core_web_vitals.is_empty() {
        out.push_str("No Core Web Vitals changes recorded.\n\n");
    } else {
        out.push_str("| Metric | Baseline | Current | Change |\n");
        out.push_str("|--------|----------|---------|--------|\n");
        for (key, change) in &comparison.changes.core_web_vitals {
            let show = |v: Option<f64>| match (Metric::from_key(key), v) {
                (Some(metric), Some(v)) => metric.format_value(v),
                (None, Some(v)) => text::number(v),
                (_, None) => "N/A".to_string(),
            };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                text::table_cell(key),
                show(change.baseline),
                show(change.current),
                text::percent_change(change.change)
            ));
        }
        out.push('\n');
    }

    for (title, entries) in [
        ("Improvements", &comparison.summary.improvements),
        ("Regressions", &comparison.summary.regressions),
    ] {
        out.push_str(&format!("### {}\n\n", title));
        if entries.is_empty() {
            out.push_str(&format!("No {} recorded.\n\n", title.to_lowercase()));
            continue;
        }
        for entry in entries {
            out.push_str(&format!("- {}\n", text::describe_change(entry)));
        }
        out.push('\n');
    }

    out
}

fn lighthouse(data: &ReportData) -> String {
    let mut out = String::from("## Lighthouse Reports\n\n");

    match &data.lighthouse {
        Some(reports) => {
            for (name, report) in reports {
                out.push_str(&format!("- **{}**: `{}`\n", name, report.path));
            }
            out.push('\n');
        }
        None => out.push_str(&format!("{}.\n\n", LIGHTHOUSE_UNAVAILABLE)),
    }
    out
}

fn bundle_analysis(data: &ReportData) -> String {
    let body = match &data.bundle_analysis {
        Some(_) => "Bundle statistics captured. Inspect `bundle-stats.json` with the bundle \
                    analyzer for chunk-level detail."
            .to_string(),
        None => format!("{}.", BUNDLE_UNAVAILABLE),
    };
    format!("## Bundle Analysis\n\n{}\n\n", body)
}

fn is_over_target(feature: &Feature) -> bool {
    match (feature.average_load_time, feature.target) {
        (Some(avg), Some(target)) => avg > target * FEATURE_OVERRUN_FACTOR,
        _ => false,
    }
}

fn features(data: &ReportData) -> String {
    let mut out = String::from("## Feature Performance\n\n");

    let Some(features) = data.baseline().map(|b| &b.features).filter(|f| !f.is_empty()) else {
        out.push_str(&format!("{}.\n\n", FEATURES_UNAVAILABLE));
        return out;
    };

    out.push_str("| Feature | Priority | Avg Load Time | Target | Status | Issues |\n");
    out.push_str("|---------|----------|---------------|--------|--------|--------|\n");
    for (key, feature) in features {
        let status = match (feature.average_load_time, feature.target) {
            (Some(avg), Some(target)) if avg <= target => "✅ Pass",
            (Some(_), Some(_)) => "❌ Fail",
            _ => "➖ Unknown",
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            text::table_cell(feature.display_name(key)),
            feature.priority.as_ref().map_or("N/A", |p| p.as_str()),
            text::millis(feature.average_load_time),
            text::millis(feature.target),
            status,
            feature.issues.len()
        ));
    }
    out.push('\n');

    out.push_str("### Route Load Times\n\n");
    let mut any_route = false;
    for (key, feature) in features {
        if feature.routes.is_empty() {
            continue;
        }
        any_route = true;
        out.push_str(&format!("**{}**\n\n", feature.display_name(key)));
        for (route, timing) in &feature.routes {
            out.push_str(&format!("- `{}`: {}\n", route, text::millis(timing.load_time)));
        }
        out.push('\n');
    }
    if !any_route {
        out.push_str("No route timings recorded.\n\n");
    }

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

    out.push_str("| Metric | Value | Good | Poor | Status | Recommendation |\n");
    out.push_str("|--------|-------|------|------|--------|----------------|\n");
    for reading in vitals::readings(cwv) {
        let (good, poor) = reading.metric.thresholds();
        let recommendation = match reading.status() {
            Some(VitalStatus::Good) => "Maintain current performance",
            _ => reading.metric.recommendation(),
        };
        out.push_str(&format!(
            "| {} | {} | < {} | ≥ {} | {} | {} |\n",
            reading.metric.key(),
            reading.display_value(),
            reading.metric.format_value(good),
            reading.metric.format_value(poor),
            reading.display_status(),
            recommendation
        ));
    }
    out.push('\n');
    out
}

fn issue_line(tagged: &FeatureIssue<'_>) -> String {
    let issue = tagged.issue;
    format!(
        "- **{}** `{}`: {} {} (target {})\n",
        tagged.feature,
        issue.route.as_deref().unwrap_or("-"),
        issue.kind.as_deref().unwrap_or("issue"),
        text::optional_number(issue.value),
        text::optional_number(issue.target)
    )
}

fn issues(data: &ReportData) -> String {
    let mut out = String::from("## Issues\n\n");

    if data.baseline.is_none() {
        out.push_str(&format!("{}.\n\n", BASELINE_UNAVAILABLE));
        return out;
    }

    let breakdown = IssueAnalyzer.breakdown(data);
    out.push_str(&format!(
        "{} issue(s) recorded across all features.\n\n",
        breakdown.total()
    ));
    for (title, bucket) in [
        ("Critical (High Severity)", &breakdown.critical),
        ("Medium Severity", &breakdown.medium),
    ] {
        out.push_str(&format!("### {}\n\n", title));
        if bucket.is_empty() {
            out.push_str("None.\n\n");
            continue;
        }
        for tagged in bucket {
            out.push_str(&issue_line(tagged));
        }
        out.push('\n');
    }

    if !breakdown.other.is_empty() {
        out.push_str(&format!(
            "_{} lower-severity issue(s) omitted._\n\n",
            breakdown.other.len()
        ));
    }
    out
}

/// Engineering actions derived from the loaded data
pub fn recommendation_items(data: &ReportData) -> Vec<String> {
    let mut items = Vec::new();

    if data.summary.regressions > 0 {
        items.push(format!(
            "**Critical**: Resolve {} performance regression(s) detected since the baseline",
            data.summary.regressions
        ));
    }

    let Some(baseline) = data.baseline() else {
        items.push("**High**: Capture a performance baseline before further analysis".to_string());
        return items;
    };

    if data.summary.overall_score < BUNDLE_SPLIT_SCORE {
        items.push(format!(
            "**High**: Investigate bundle splitting and lazy loading; overall score {} is below {}",
            text::number(data.summary.overall_score),
            text::number(BUNDLE_SPLIT_SCORE)
        ));
    }

    if let Some(cwv) = data.core_web_vitals() {
        for reading in vitals::readings(cwv) {
            if reading.status() == Some(VitalStatus::Poor) {
                items.push(format!(
                    "**High**: Improve {} ({}): {}",
                    reading.metric.key(),
                    reading.display_value(),
                    reading.metric.recommendation()
                ));
            }
        }
    }

    for (key, feature) in &baseline.features {
        if is_over_target(feature) {
            items.push(format!(
                "**Medium**: Optimize {}: average load time {} exceeds target {} by more than 20%",
                feature.display_name(key),
                text::millis(feature.average_load_time),
                text::millis(feature.target)
            ));
        }
    }

    if items.is_empty() {
        items.push("No technical action required; continue monitoring".to_string());
    }
    items
}

fn recommendations(data: &ReportData) -> String {
    let mut out = String::from("## Technical Recommendations\n\n");
    for (i, item) in recommendation_items(data).iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }
    out.push('\n');

    let captured: Vec<_> = data
        .baseline()
        .into_iter()
        .flat_map(|b| &b.overall.recommendations)
        .chain(data.comparison().into_iter().flat_map(|c| &c.recommendations))
        .collect();
    if !captured.is_empty() {
        out.push_str("### Captured Recommendations\n\n");
        for entry in captured {
            out.push_str(&format!("- {}\n", text::describe_recommendation(entry)));
        }
        out.push('\n');
    }
    out
}

fn monitoring_status(data: &ReportData) -> String {
    let mark = |ok: bool| if ok { "✅" } else { "⏳" };
    let has_baseline = data.baseline.is_some();

    format!(
        "## Monitoring Status\n\n\
         - {} Baseline metrics captured\n\
         - {} Comparison tracking active\n\
         - {} Core Web Vitals monitored\n\
         - {} Lighthouse audits available\n\
         - ✅ Report generation automated\n",
        mark(has_baseline),
        mark(data.comparison.is_some()),
        mark(data.core_web_vitals().is_some()),
        mark(data.lighthouse.is_some()),
    )
}
