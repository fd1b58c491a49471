//! Self-contained HTML dashboard.
//!
//! Inline CSS, the full report data as inline JSON, and a timed reload. No
//! external assets and no `<meta http-equiv="refresh">`.

use super::text::{
    self, BASELINE_UNAVAILABLE, FEATURES_UNAVAILABLE, VITALS_NOT_CAPTURED, escape_html,
};
use crate::Result;
use crate::analysis::vitals::{self, ScoreBand};
use crate::report::ReportData;

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f4f6f8; color: #1f2933; }
    header { background: #1f2933; color: #fff; padding: 24px 32px; }
    header h1 { margin: 0 0 4px; font-size: 24px; }
    header p { margin: 0; opacity: 0.8; }
    main { padding: 24px 32px; }
    section { margin-bottom: 32px; }
    h2 { font-size: 18px; margin: 0 0 12px; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px; }
    .tile { background: #fff; border-radius: 8px; padding: 16px; border-left: 6px solid #9aa5b1; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
    .tile .label { font-size: 13px; color: #616e7c; }
    .tile .value { font-size: 28px; font-weight: 600; margin: 4px 0; }
    .tile .status { font-size: 13px; }
    .good { border-left-color: #27ab83; }
    .warning { border-left-color: #f0b429; }
    .poor { border-left-color: #e12d39; }
    .unknown { border-left-color: #9aa5b1; }
    ul.features, ul.sources { list-style: none; padding: 0; margin: 0; }
    ul.features li, ul.sources li { background: #fff; border-radius: 6px; padding: 10px 14px; margin-bottom: 8px; display: flex; justify-content: space-between; }
    .fallback { color: #616e7c; font-style: italic; }
"#;

pub fn render(data: &ReportData, refresh_interval_ms: u64) -> Result<String> {
    let sections = [
        head(),
        page_header(data),
        "<main>\n".to_string(),
        kpi_tiles(data),
        vitals_grid(data),
        feature_list(data),
        data_sources(data),
        "</main>\n".to_string(),
        embedded_data(data)?,
        reload_script(refresh_interval_ms),
        "</body>\n</html>\n".to_string(),
    ];
    Ok(sections.concat())
}

fn head() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Performance Dashboard</title>\n\
         <style>{}</style>\n</head>\n<body>\n",
        STYLE
    )
}

fn page_header(data: &ReportData) -> String {
    format!(
        "<header>\n<h1>Performance Dashboard</h1>\n<p>Last Updated: {}</p>\n</header>\n",
        text::timestamp(data)
    )
}

fn tile(class: &str, label: &str, value: &str, status: &str) -> String {
    format!(
        "<div class=\"tile {}\"><div class=\"label\">{}</div><div class=\"value\">{}</div><div class=\"status\">{}</div></div>\n",
        class,
        escape_html(label),
        escape_html(value),
        escape_html(status)
    )
}

fn kpi_tiles(data: &ReportData) -> String {
    let summary = &data.summary;
    let band = ScoreBand::from_score(summary.overall_score);
    let count_class = |count: usize, bad: &'static str| if count > 0 { bad } else { "good" };

    let mut out = String::from("<section id=\"kpis\">\n<h2>Key Performance Indicators</h2>\n<div class=\"grid\">\n");
    out.push_str(&tile(
        band.css_class(),
        "Overall Score",
        &format!("{}/100", text::number(summary.overall_score)),
        &band.to_string(),
    ));
    out.push_str(&tile(
        count_class(summary.critical_issues, "poor"),
        "Critical Issues",
        &summary.critical_issues.to_string(),
        vitals::critical_issues_status(summary.critical_issues),
    ));
    out.push_str(&tile(
        if summary.improvements > 0 { "good" } else { "unknown" },
        "Improvements",
        &summary.improvements.to_string(),
        vitals::improvements_status(summary.improvements),
    ));
    out.push_str(&tile(
        count_class(summary.regressions, "warning"),
        "Regressions",
        &summary.regressions.to_string(),
        vitals::regressions_status(summary.regressions),
    ));
    out.push_str("</div>\n</section>\n");
    out
}

fn vitals_grid(data: &ReportData) -> String {
    let mut out = String::from("<section id=\"core-web-vitals\">\n<h2>Core Web Vitals</h2>\n");

    let captured = match data.baseline() {
        None => Err(BASELINE_UNAVAILABLE),
        Some(baseline) => baseline
            .overall
            .core_web_vitals
            .as_ref()
            .ok_or(VITALS_NOT_CAPTURED),
    };
    let cwv = match captured {
        Ok(cwv) => cwv,
        Err(phrase) => {
            out.push_str(&format!(
                "<p class=\"fallback\">{}</p>\n</section>\n",
                phrase
            ));
            return out;
        }
    };

    out.push_str("<div class=\"grid\">\n");
    for reading in vitals::readings(cwv) {
        let class = reading.status().map_or("unknown", |s| s.css_class());
        out.push_str(&tile(
            class,
            reading.metric.name(),
            &reading.display_value(),
            &reading.display_status(),
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn feature_list(data: &ReportData) -> String {
    let mut out = String::from("<section id=\"features\">\n<h2>Feature Performance</h2>\n");

    let Some(features) = data.baseline().map(|b| &b.features).filter(|f| !f.is_empty()) else {
        out.push_str(&format!(
            "<p class=\"fallback\">{}</p>\n</section>\n",
            FEATURES_UNAVAILABLE
        ));
        return out;
    };

    out.push_str("<ul class=\"features\">\n");
    for (key, feature) in features {
        let class = match (feature.average_load_time, feature.target) {
            (Some(avg), Some(target)) if avg <= target => "good",
            (Some(_), Some(_)) => "poor",
            _ => "unknown",
        };
        out.push_str(&format!(
            "<li class=\"{}\"><span>{}</span><span>{} / target {}</span></li>\n",
            class,
            escape_html(feature.display_name(key)),
            text::millis(feature.average_load_time),
            text::millis(feature.target)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

fn data_sources(data: &ReportData) -> String {
    let mut out = String::from("<section id=\"sources\">\n<h2>Data Sources</h2>\n<ul class=\"sources\">\n");
    for (label, status) in text::data_sources(data) {
        let (class, detail) = match status {
            Ok(detail) => ("", format!("✅ {}", detail)),
            Err(fallback) => (" class=\"fallback\"", format!("❌ {}", fallback)),
        };
        out.push_str(&format!(
            "<li{}><span>{}</span><span>{}</span></li>\n",
            class,
            label,
            escape_html(&detail)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

/// Full report data for client-side charting. `</` is escaped so the JSON
/// cannot terminate the script element.
fn embedded_data(data: &ReportData) -> Result<String> {
    let json = serde_json::to_string(data)?.replace("</", "<\\/");
    Ok(format!(
        "<script type=\"application/json\" id=\"report-data\">{}</script>\n",
        json
    ))
}

fn reload_script(refresh_interval_ms: u64) -> String {
    format!(
        "<script>\nsetTimeout(function () {{ window.location.reload(); }}, {});\n</script>\n",
        refresh_interval_ms
    )
}
