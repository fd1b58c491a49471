//! Report renderers.
//!
//! Each renderer is a pure function of [`ReportData`] built from ordered
//! section functions. Every optional section has a required fallback branch.

pub mod dashboard;
pub mod executive;
pub mod export;
pub mod technical;
mod text;

pub use text::{
    BASELINE_UNAVAILABLE, BUNDLE_UNAVAILABLE, COMPARISON_UNAVAILABLE, FEATURES_UNAVAILABLE,
    LIGHTHOUSE_UNAVAILABLE, VITALS_NOT_CAPTURED,
};

use crate::Result;
use crate::config::ReportConfig;
use crate::report::ReportData;

/// The four generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    ExecutiveSummary,
    TechnicalReport,
    Dashboard,
    Export,
}

impl ReportKind {
    /// Generation order
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ExecutiveSummary,
        ReportKind::TechnicalReport,
        ReportKind::Dashboard,
        ReportKind::Export,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::ExecutiveSummary => "executive-summary.md",
            ReportKind::TechnicalReport => "technical-report.md",
            ReportKind::Dashboard => "performance-dashboard.html",
            ReportKind::Export => "performance-export.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::ExecutiveSummary => "executive summary",
            ReportKind::TechnicalReport => "technical report",
            ReportKind::Dashboard => "performance dashboard",
            ReportKind::Export => "JSON export",
        }
    }

    pub fn render(self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        Ok(match self {
            ReportKind::ExecutiveSummary => executive::render(data),
            ReportKind::TechnicalReport => technical::render(data),
            ReportKind::Dashboard => dashboard::render(data, config.refresh_interval_ms)?,
            ReportKind::Export => export::render(data)?,
        })
    }
}
