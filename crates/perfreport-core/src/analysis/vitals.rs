//! Status bands for Core Web Vitals and the overall score.
//!
//! Every renderer classifies through this module so the thresholds live in
//! one place. All bands use strict `<` on the upper bound.

use crate::report::CoreWebVitals;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Fcp,
    Lcp,
    Fid,
    Inp,
    Cls,
    Ttfb,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Fcp,
        Metric::Lcp,
        Metric::Fid,
        Metric::Inp,
        Metric::Cls,
        Metric::Ttfb,
    ];

    /// Short key as it appears in the input artifacts
    pub fn key(self) -> &'static str {
        match self {
            Metric::Fcp => "FCP",
            Metric::Lcp => "LCP",
            Metric::Fid => "FID",
            Metric::Inp => "INP",
            Metric::Cls => "CLS",
            Metric::Ttfb => "TTFB",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key().eq_ignore_ascii_case(key))
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Fcp => "First Contentful Paint",
            Metric::Lcp => "Largest Contentful Paint",
            Metric::Fid => "First Input Delay",
            Metric::Inp => "Interaction to Next Paint",
            Metric::Cls => "Cumulative Layout Shift",
            Metric::Ttfb => "Time to First Byte",
        }
    }

    /// Upper bounds (exclusive) of the good and needs-improvement bands
    pub fn thresholds(self) -> (f64, f64) {
        match self {
            Metric::Fcp => (1800.0, 3000.0),
            Metric::Lcp => (2500.0, 4000.0),
            Metric::Fid => (100.0, 300.0),
            Metric::Inp => (200.0, 500.0),
            Metric::Cls => (0.1, 0.25),
            Metric::Ttfb => (800.0, 1800.0),
        }
    }

    pub fn classify(self, value: f64) -> VitalStatus {
        let (good, needs_improvement) = self.thresholds();
        if value < good {
            VitalStatus::Good
        } else if value < needs_improvement {
            VitalStatus::NeedsImprovement
        } else {
            VitalStatus::Poor
        }
    }

    pub fn is_unitless(self) -> bool {
        matches!(self, Metric::Cls)
    }

    pub fn format_value(self, value: f64) -> String {
        if self.is_unitless() {
            format!("{:.3}", value)
        } else {
            format!("{:.0} ms", value)
        }
    }

    /// Value for this metric. INP counts as 0 when not measured.
    pub fn value_in(self, vitals: &CoreWebVitals) -> Option<f64> {
        match self {
            Metric::Fcp => vitals.fcp,
            Metric::Lcp => vitals.lcp,
            Metric::Fid => vitals.fid,
            Metric::Inp => Some(vitals.inp.unwrap_or(0.0)),
            Metric::Cls => vitals.cls,
            Metric::Ttfb => vitals.ttfb,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Metric::Fcp => "Inline critical CSS and defer non-essential scripts",
            Metric::Lcp => "Optimize the largest above-the-fold element and preload key resources",
            Metric::Fid => "Break up long main-thread tasks and reduce JavaScript execution time",
            Metric::Inp => "Reduce event handler work and yield to the main thread during interactions",
            Metric::Cls => "Reserve space for images, embeds and late-loading content",
            Metric::Ttfb => "Cache server responses and reduce backend query time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    Good,
    NeedsImprovement,
    Poor,
}

impl VitalStatus {
    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Good => "Good",
            VitalStatus::NeedsImprovement => "Needs Improvement",
            VitalStatus::Poor => "Poor",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            VitalStatus::Good => "🟢",
            VitalStatus::NeedsImprovement => "🟡",
            VitalStatus::Poor => "🔴",
        }
    }

    /// Dashboard tile class
    pub fn css_class(self) -> &'static str {
        match self {
            VitalStatus::Good => "good",
            VitalStatus::NeedsImprovement => "warning",
            VitalStatus::Poor => "poor",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

/// One metric's value and classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalReading {
    pub metric: Metric,
    pub value: Option<f64>,
}

impl VitalReading {
    pub fn status(&self) -> Option<VitalStatus> {
        self.value.map(|v| self.metric.classify(v))
    }

    pub fn display_value(&self) -> String {
        self.value
            .map(|v| self.metric.format_value(v))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn display_status(&self) -> String {
        self.status()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "➖ No data".to_string())
    }
}

/// Readings for all six metrics, in fixed order
pub fn readings(vitals: &CoreWebVitals) -> Vec<VitalReading> {
    Metric::ALL
        .into_iter()
        .map(|metric| VitalReading {
            metric,
            value: metric.value_in(vitals),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::NeedsImprovement
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🟢",
            ScoreBand::Good => "🟡",
            ScoreBand::NeedsImprovement => "🟠",
            ScoreBand::Poor => "🔴",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Excellent | ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "warning",
            ScoreBand::Poor => "poor",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

pub fn critical_issues_status(count: usize) -> &'static str {
    match count {
        0 => "✅ None",
        1..=3 => "⚠️ Review",
        _ => "🔴 Critical",
    }
}

pub fn improvements_status(count: usize) -> &'static str {
    if count > 0 { "✅ Positive" } else { "➖ None" }
}

pub fn regressions_status(count: usize) -> &'static str {
    if count > 0 { "⚠️ Present" } else { "✅ None" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcp_boundaries_are_strict() {
        assert_eq!(Metric::Fcp.classify(1799.0), VitalStatus::Good);
        assert_eq!(Metric::Fcp.classify(1800.0), VitalStatus::NeedsImprovement);
        assert_eq!(Metric::Fcp.classify(1801.0), VitalStatus::NeedsImprovement);
        assert_eq!(Metric::Fcp.classify(2999.0), VitalStatus::NeedsImprovement);
        assert_eq!(Metric::Fcp.classify(3000.0), VitalStatus::Poor);
    }

    #[test]
    fn test_every_metric_at_its_bounds() {
        for metric in Metric::ALL {
            let (good, needs_improvement) = metric.thresholds();
            assert_eq!(metric.classify(good), VitalStatus::NeedsImprovement, "{metric}");
            assert_eq!(metric.classify(needs_improvement), VitalStatus::Poor, "{metric}");
        }

        assert_eq!(Metric::Lcp.classify(2499.0), VitalStatus::Good);
        assert_eq!(Metric::Fid.classify(99.0), VitalStatus::Good);
        assert_eq!(Metric::Inp.classify(499.0), VitalStatus::NeedsImprovement);
        assert_eq!(Metric::Cls.classify(0.099), VitalStatus::Good);
        assert_eq!(Metric::Cls.classify(0.1), VitalStatus::NeedsImprovement);
        assert_eq!(Metric::Cls.classify(0.25), VitalStatus::Poor);
        assert_eq!(Metric::Ttfb.classify(1799.0), VitalStatus::NeedsImprovement);
    }

    #[test]
    fn test_missing_inp_defaults_to_zero() {
        let vitals = CoreWebVitals::default();
        let readings = readings(&vitals);

        let inp = readings.iter().find(|r| r.metric == Metric::Inp).unwrap();
        assert_eq!(inp.value, Some(0.0));
        assert_eq!(inp.status(), Some(VitalStatus::Good));

        let fcp = readings.iter().find(|r| r.metric == Metric::Fcp).unwrap();
        assert_eq!(fcp.status(), None);
        assert_eq!(fcp.display_value(), "N/A");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50.0), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(49.9), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0.0).to_string(), "🔴 Poor");
    }

    #[test]
    fn test_kpi_statuses() {
        assert_eq!(critical_issues_status(0), "✅ None");
        assert_eq!(critical_issues_status(3), "⚠️ Review");
        assert_eq!(critical_issues_status(4), "🔴 Critical");
        assert_eq!(regressions_status(2), "⚠️ Present");
        assert_eq!(improvements_status(0), "➖ None");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Metric::from_key("ttfb"), Some(Metric::Ttfb));
        assert_eq!(Metric::from_key("TBT"), None);
    }

    #[test]
    fn test_value_formatting() {
        assert_eq!(Metric::Lcp.format_value(2500.4), "2500 ms");
        assert_eq!(Metric::Cls.format_value(0.08), "0.080");
    }
}
