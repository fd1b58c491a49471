use super::{Analyzer, IssueAnalyzer};
use crate::report::{ReportData, ReportSummary};

/// Derives the headline KPIs from whichever sections were loaded.
///
/// The comparison score is newer than the baseline score and wins when both
/// are present.
pub struct SummaryCalculator;

impl Analyzer for SummaryCalculator {
    type Output = ReportSummary;

    fn analyze(&self, data: &ReportData) -> ReportSummary {
        let baseline_score = data.baseline().and_then(|b| b.overall.performance_score);
        let comparison_score = data.comparison().and_then(|c| c.current.performance_score);

        let (improvements, regressions) = data
            .comparison()
            .map(|c| (c.summary.improvements.len(), c.summary.regressions.len()))
            .unwrap_or((0, 0));

        let summary = ReportSummary {
            overall_score: comparison_score.or(baseline_score).unwrap_or(0.0),
            critical_issues: IssueAnalyzer.analyze(data),
            improvements,
            regressions,
        };

        tracing::debug!(
            "Summary: score={}, critical={}, improvements={}, regressions={}",
            summary.overall_score,
            summary.critical_issues,
            summary.improvements,
            summary.regressions
        );

        summary
    }
}
