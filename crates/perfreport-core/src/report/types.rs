use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate of everything found on disk for one report run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub baseline: Option<Artifact<Baseline>>,
    pub comparison: Option<Artifact<Comparison>>,
    pub lighthouse: Option<BTreeMap<String, LighthouseReport>>,
    pub bundle_analysis: Option<Value>,
    pub summary: ReportSummary,
}

impl ReportData {
    /// Report data with every section absent
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            baseline: None,
            comparison: None,
            lighthouse: None,
            bundle_analysis: None,
            summary: ReportSummary::default(),
        }
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref().map(|a| &a.data)
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref().map(|a| &a.data)
    }

    /// Core Web Vitals from the baseline, if one was captured
    pub fn core_web_vitals(&self) -> Option<&CoreWebVitals> {
        self.baseline()
            .and_then(|b| b.overall.core_web_vitals.as_ref())
    }
}

/// Generation time in the form every report prints, e.g. `2026-10-17T08:00:00.000Z`
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_timestamp(timestamp))
}

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Scalar KPIs derived from the loaded sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub overall_score: f64,
    pub critical_issues: usize,
    pub improvements: usize,
    pub regressions: usize,
}

/// A JSON artifact kept verbatim next to its typed view.
///
/// Serializes as the original document, so exports reproduce inputs exactly
/// (unknown fields and integer formatting included).
#[derive(Debug, Clone)]
pub struct Artifact<T> {
    pub data: T,
    raw: Value,
}

impl<T: DeserializeOwned> Artifact<T> {
    pub fn from_value(raw: Value) -> serde_json::Result<Self> {
        let data = T::deserialize(&raw)?;
        Ok(Self { data, raw })
    }
}

impl<T> Artifact<T> {
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<T> Serialize for Artifact<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Previously captured performance snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Baseline {
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub overall: Overall,
    #[serde(deserialize_with = "null_as_default")]
    pub features: BTreeMap<String, Feature>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overall {
    pub performance_score: Option<f64>,
    pub average_load_time: Option<f64>,
    pub total_issues: Option<f64>,
    pub core_web_vitals: Option<CoreWebVitals>,
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<Value>,
}

/// Browser-measured vitals. Times are milliseconds; CLS is unitless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreWebVitals {
    #[serde(rename = "FCP")]
    pub fcp: Option<f64>,
    #[serde(rename = "LCP")]
    pub lcp: Option<f64>,
    #[serde(rename = "FID")]
    pub fid: Option<f64>,
    #[serde(rename = "INP")]
    pub inp: Option<f64>,
    #[serde(rename = "CLS")]
    pub cls: Option<f64>,
    #[serde(rename = "TTFB")]
    pub ttfb: Option<f64>,
}

/// A functional area of the monitored application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub name: Option<String>,
    pub priority: Option<Level>,
    pub average_load_time: Option<f64>,
    pub target: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub routes: BTreeMap<String, RouteTiming>,
    #[serde(deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl Feature {
    /// Display name, falling back to the map key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteTiming {
    pub load_time: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub route: Option<String>,
    pub value: Option<f64>,
    pub target: Option<f64>,
    pub severity: Option<Level>,
}

/// Priority or severity. Unknown text is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    High,
    Medium,
    Low,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
            Level::Other(text) => text,
        }
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "high" => Level::High,
            "medium" => Level::Medium,
            "low" => Level::Low,
            _ => Level::Other(value),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

/// Baseline-versus-current comparison produced by the capture tooling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comparison {
    #[serde(deserialize_with = "null_as_default")]
    pub baseline: ScoreSnapshot,
    #[serde(deserialize_with = "null_as_default")]
    pub current: ScoreSnapshot,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: ComparisonSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub changes: Changes,
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreSnapshot {
    pub performance_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub improvements: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub regressions: Vec<Value>,
    pub overall_trend: Option<Trend>,
    pub total_changes: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Changes {
    #[serde(deserialize_with = "null_as_default")]
    pub core_web_vitals: BTreeMap<String, MetricChange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricChange {
    pub baseline: Option<f64>,
    pub current: Option<f64>,
    /// Signed percent change
    pub change: Option<f64>,
}

/// Direction reported by the comparison tooling. Passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    Unrecognized(String),
}

impl Trend {
    pub fn as_str(&self) -> &str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::Unrecognized(text) => text,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Improving => "📈",
            Trend::Declining => "📉",
            Trend::Stable => "➡️",
            Trend::Unrecognized(_) => "❔",
        }
    }
}

impl From<String> for Trend {
    fn from(value: String) -> Self {
        match value.as_str() {
            "improving" => Trend::Improving,
            "declining" => Trend::Declining,
            "stable" => Trend::Stable,
            _ => Trend::Unrecognized(value),
        }
    }
}

impl From<Trend> for String {
    fn from(trend: Trend) -> Self {
        trend.as_str().to_string()
    }
}

/// Existence record for a Lighthouse HTML report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LighthouseReport {
    pub available: bool,
    pub path: String,
}
