use crate::report::ReportData;
use serde_json::Value;

pub const BASELINE_UNAVAILABLE: &str = "Baseline data not available";
pub const COMPARISON_UNAVAILABLE: &str = "Comparison data not available";
pub const LIGHTHOUSE_UNAVAILABLE: &str = "Lighthouse reports not available";
pub const BUNDLE_UNAVAILABLE: &str = "Bundle analysis not available";
pub const FEATURES_UNAVAILABLE: &str = "Feature data not available";
pub const VITALS_NOT_CAPTURED: &str = "Core Web Vitals were not captured in the baseline";

/// Whole numbers without a fraction, everything else to one decimal
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn optional_number(value: Option<f64>) -> String {
    value.map(number).unwrap_or_else(|| "N/A".to_string())
}

pub fn millis(value: Option<f64>) -> String {
    value
        .map(|v| format!("{} ms", number(v)))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Signed percent with one decimal, e.g. `+5.0%` / `-12.5%`
pub fn percent_change(change: Option<f64>) -> String {
    // Sign follows the rounded value
    match change.map(|c| (c * 10.0).round() / 10.0) {
        Some(c) if c > 0.0 => format!("+{:.1}%", c),
        Some(c) if c < 0.0 => format!("{:.1}%", c),
        Some(_) => "0.0%".to_string(),
        None => "N/A".to_string(),
    }
}

/// One-line description of an improvement or regression entry.
///
/// Entries are opaque; `{metric, change}` objects get a readable form and
/// anything else falls back to compact JSON.
pub fn describe_change(entry: &Value) -> String {
    let metric = entry
        .get("metric")
        .or_else(|| entry.get("name"))
        .and_then(Value::as_str);
    let change = entry.get("change").and_then(Value::as_f64);

    match (metric, change) {
        (Some(m), Some(c)) => format!("{} ({})", m, percent_change(Some(c))),
        (Some(m), None) => m.to_string(),
        _ => match entry {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// Recommendation entries are usually strings; objects render as JSON
pub fn describe_recommendation(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markdown table cells cannot contain raw pipes or newlines
pub fn table_cell(input: &str) -> String {
    input.replace('|', "\\|").replace('\n', " ")
}

pub fn timestamp(data: &ReportData) -> String {
    data.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Availability line for each optional section, shared by all renderers
pub fn data_sources(data: &ReportData) -> Vec<(&'static str, Result<String, &'static str>)> {
    let baseline = data.baseline().map(|b| match &b.timestamp {
        Some(ts) => format!("captured {}", ts),
        None => "available".to_string(),
    });
    let comparison = data.comparison().map(|c| match &c.summary.overall_trend {
        Some(trend) => format!("trend {}", trend.as_str()),
        None => "available".to_string(),
    });
    let lighthouse = data
        .lighthouse
        .as_ref()
        .map(|reports| format!("{} report(s)", reports.len()));
    let bundle = data.bundle_analysis.as_ref().map(|_| "available".to_string());

    vec![
        ("Baseline", baseline.ok_or(BASELINE_UNAVAILABLE)),
        ("Comparison", comparison.ok_or(COMPARISON_UNAVAILABLE)),
        ("Lighthouse", lighthouse.ok_or(LIGHTHOUSE_UNAVAILABLE)),
        ("Bundle Analysis", bundle.ok_or(BUNDLE_UNAVAILABLE)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(75.0), "75");
        assert_eq!(number(1850.56), "1850.6");
        assert_eq!(optional_number(None), "N/A");
        assert_eq!(millis(Some(2600.0)), "2600 ms");
    }

    #[test]
    fn test_percent_change_is_signed() {
        assert_eq!(percent_change(Some(5.0)), "+5.0%");
        assert_eq!(percent_change(Some(-12.5)), "-12.5%");
        assert_eq!(percent_change(Some(0.0)), "0.0%");
    }

    #[test]
    fn test_percent_change_rounds_before_signing() {
        assert_eq!(percent_change(Some(0.04)), "0.0%");
        assert_eq!(percent_change(Some(-0.04)), "0.0%");
        assert_eq!(percent_change(Some(0.05)), "+0.1%");
        assert_eq!(percent_change(Some(-2.46)), "-2.5%");
    }

    #[test]
    fn test_describe_change_shapes() {
        assert_eq!(
            describe_change(&json!({ "metric": "LCP", "change": 18.2 })),
            "LCP (+18.2%)"
        );
        assert_eq!(describe_change(&json!("TTFB got slower")), "TTFB got slower");
        assert_eq!(describe_change(&json!({ "x": 1 })), r#"{"x":1}"#);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;"
        );
    }

    #[test]
    fn test_table_cell_escapes_pipes() {
        assert_eq!(table_cell("a|b\nc"), "a\\|b c");
    }
}
