use super::Analyzer;
use crate::report::{Issue, Level, ReportData};

/// An issue tagged with the feature it belongs to
#[derive(Debug, Clone)]
pub struct FeatureIssue<'a> {
    pub feature: &'a str,
    pub issue: &'a Issue,
}

/// Baseline issues bucketed by severity
#[derive(Debug, Clone, Default)]
pub struct IssueBreakdown<'a> {
    pub critical: Vec<FeatureIssue<'a>>,
    pub medium: Vec<FeatureIssue<'a>>,
    pub other: Vec<FeatureIssue<'a>>,
}

impl IssueBreakdown<'_> {
    pub fn total(&self) -> usize {
        self.critical.len() + self.medium.len() + self.other.len()
    }
}

/// Groups every baseline feature issue by severity. `high` counts as critical.
pub struct IssueAnalyzer;

impl IssueAnalyzer {
    pub fn breakdown<'a>(&self, data: &'a ReportData) -> IssueBreakdown<'a> {
        let mut breakdown = IssueBreakdown::default();

        let Some(baseline) = data.baseline() else {
            return breakdown;
        };

        for (key, feature) in &baseline.features {
            let name = feature.display_name(key);
            for issue in &feature.issues {
                let tagged = FeatureIssue {
                    feature: name,
                    issue,
                };
                match issue.severity {
                    Some(Level::High) => breakdown.critical.push(tagged),
                    Some(Level::Medium) => breakdown.medium.push(tagged),
                    _ => breakdown.other.push(tagged),
                }
            }
        }

        breakdown
    }
}

impl Analyzer for IssueAnalyzer {
    type Output = usize;

    /// Number of critical issues
    fn analyze(&self, data: &ReportData) -> usize {
        self.breakdown(data).critical.len()
    }
}
