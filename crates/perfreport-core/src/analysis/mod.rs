mod issues;
mod summary;
pub mod vitals;

pub use issues::{FeatureIssue, IssueAnalyzer, IssueBreakdown};
pub use summary::SummaryCalculator;
pub use vitals::{Metric, ScoreBand, VitalReading, VitalStatus};

use crate::report::ReportData;

/// A pure pass over loaded report data
pub trait Analyzer {
    type Output;

    fn analyze(&self, data: &ReportData) -> Self::Output;
}
