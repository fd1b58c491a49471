//! Normalized JSON export bundle.

use super::text;
use crate::Result;
use crate::report::{Artifact, Baseline, Comparison, ReportData, ReportSummary, iso_timestamp};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const EXPORT_PHASE: &str = "monitoring";
pub const EXPORT_REPORT_TYPE: &str = "performance-summary";

/// Fixed follow-up checklist, independent of the data
pub const NEXT_STEPS: [&str; 5] = [
    "Review critical issues with the owning feature teams",
    "Schedule optimization work for regressed metrics",
    "Re-run Lighthouse audits after the next deployment",
    "Refresh the performance baseline after major releases",
    "Review this report again in 7 days",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub generated_at: String,
    pub version: &'static str,
    pub phase: &'static str,
    pub report_type: &'static str,
    /// "available" or the fallback phrase for each optional section
    pub data_sources: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a> {
    pub metadata: ExportMetadata,
    pub summary: &'a ReportSummary,
    pub baseline: Option<&'a Artifact<Baseline>>,
    pub comparison: Option<&'a Artifact<Comparison>>,
    pub recommendations: Vec<Value>,
    pub next_steps: [&'static str; 5],
}

impl<'a> ExportEnvelope<'a> {
    pub fn new(data: &'a ReportData) -> Self {
        let data_sources = text::data_sources(data)
            .into_iter()
            .map(|(label, status)| {
                (
                    label,
                    status.map_or_else(|fallback| fallback.to_string(), |_| "available".to_string()),
                )
            })
            .collect();

        let recommendations = data
            .baseline()
            .map(|b| b.overall.recommendations.as_slice())
            .unwrap_or_default()
            .iter()
            .chain(
                data.comparison()
                    .map(|c| c.recommendations.as_slice())
                    .unwrap_or_default(),
            )
            .cloned()
            .collect();

        Self {
            metadata: ExportMetadata {
                generated_at: iso_timestamp(&data.timestamp),
                version: env!("CARGO_PKG_VERSION"),
                phase: EXPORT_PHASE,
                report_type: EXPORT_REPORT_TYPE,
                data_sources,
            },
            summary: &data.summary,
            baseline: data.baseline.as_ref(),
            comparison: data.comparison.as_ref(),
            recommendations,
            next_steps: NEXT_STEPS,
        }
    }
}

pub fn render(data: &ReportData) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&ExportEnvelope::new(data))?;
    json.push('\n');
    Ok(json)
}
