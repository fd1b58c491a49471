use super::types::{Artifact, LighthouseReport, ReportData, Trend};
use crate::analysis::{Analyzer, SummaryCalculator};
use crate::config::ReportConfig;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Reads whichever performance artifacts exist for a project
pub struct ReportLoader<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportLoader<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Load every available section and compute the summary.
    ///
    /// Missing files leave their section empty. A file that exists but does
    /// not parse is an error.
    pub fn gather(&self, timestamp: DateTime<Utc>) -> Result<ReportData> {
        tracing::debug!(
            "Gathering performance data under: {}",
            self.config.storage_dir.display()
        );

        let mut data = ReportData::empty(timestamp);

        data.baseline = load_artifact(&self.config.baseline_path())?;
        data.comparison = load_artifact(&self.config.comparison_path())?;
        data.lighthouse = self.probe_lighthouse();
        data.bundle_analysis = load_json(&self.config.bundle_stats_path())?;

        if let Some(Trend::Unrecognized(text)) = data
            .comparison()
            .and_then(|c| c.summary.overall_trend.as_ref())
        {
            tracing::warn!("Unrecognized comparison trend '{}', passing through", text);
        }

        data.summary = SummaryCalculator.analyze(&data);

        tracing::info!(
            "Performance data gathered: baseline={}, comparison={}, lighthouse={}, bundle={}",
            data.baseline.is_some(),
            data.comparison.is_some(),
            data.lighthouse.as_ref().map_or(0, |l| l.len()),
            data.bundle_analysis.is_some()
        );

        Ok(data)
    }

    /// Record which Lighthouse reports exist. Contents are never read.
    fn probe_lighthouse(&self) -> Option<BTreeMap<String, LighthouseReport>> {
        let reports: BTreeMap<_, _> = self
            .config
            .lighthouse_paths()
            .into_iter()
            .filter(|(name, path)| {
                let exists = path.is_file();
                tracing::debug!("Lighthouse report {}: exists={}", name, exists);
                exists
            })
            .map(|(name, path)| {
                (
                    name,
                    LighthouseReport {
                        available: true,
                        path: path.display().to_string(),
                    },
                )
            })
            .collect();

        if reports.is_empty() {
            None
        } else {
            Some(reports)
        }
    }
}

/// Convenience wrapper around [`ReportLoader::gather`]
pub fn gather_report_data(config: &ReportConfig, timestamp: DateTime<Utc>) -> Result<ReportData> {
    ReportLoader::new(config).gather(timestamp)
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<Option<Artifact<T>>> {
    let Some(raw) = load_json(path)? else {
        return Ok(None);
    };

    let artifact = Artifact::from_value(raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(artifact))
}

fn load_json(path: &Path) -> Result<Option<Value>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("Not found, skipping: {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded: {}", path.display());
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_empty_project_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());

        let data = gather_report_data(&config, Utc::now()).unwrap();

        assert!(data.baseline.is_none());
        assert!(data.comparison.is_none());
        assert!(data.lighthouse.is_none());
        assert!(data.bundle_analysis.is_none());
        assert_eq!(data.summary.overall_score, 0.0);
    }

    #[test]
    fn test_lighthouse_existence_only() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        // Not valid HTML, never parsed
        write(&config.storage_dir.join("lighthouse-mobile.html"), "{{{");

        let data = gather_report_data(&config, Utc::now()).unwrap();
        let lighthouse = data.lighthouse.unwrap();

        assert_eq!(lighthouse.len(), 1);
        let mobile = &lighthouse["lighthouse-mobile"];
        assert!(mobile.available);
        assert!(mobile.path.ends_with("lighthouse-mobile.html"));
    }

    #[test]
    fn test_bundle_stats_kept_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        write(&config.bundle_stats_path(), r#"{"chunks": 3, "nested": {"a": [1]}}"#);

        let data = gather_report_data(&config, Utc::now()).unwrap();

        assert_eq!(
            data.bundle_analysis,
            Some(serde_json::json!({"chunks": 3, "nested": {"a": [1]}}))
        );
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        write(&config.baseline_path(), r#"{ "overall": "#);

        let result = gather_report_data(&config, Utc::now());

        match result {
            Err(Error::Parse { path, .. }) => assert_eq!(path, config.baseline_path()),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_summary_computed_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        write(
            &config.baseline_path(),
            r#"{"overall": {"performanceScore": 60}}"#,
        );
        write(
            &config.comparison_path(),
            r#"{"current": {"performanceScore": 75}, "summary": {"regressions": [{}, {}], "improvements": []}}"#,
        );

        let data = gather_report_data(&config, Utc::now()).unwrap();

        assert_eq!(data.summary.overall_score, 75.0);
        assert_eq!(data.summary.regressions, 2);
        assert_eq!(data.summary.improvements, 0);
    }

    #[test]
    fn test_null_fields_load_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        write(
            &config.baseline_path(),
            r#"{"overall": {"performanceScore": 60, "totalIssues": 5.0, "recommendations": null},
                "features": {"hr": {"issues": null, "routes": null}}}"#,
        );
        write(
            &config.comparison_path(),
            r#"{"current": null, "summary": {"improvements": null, "regressions": null, "totalChanges": 1.0},
                "changes": null, "recommendations": null}"#,
        );

        let data = gather_report_data(&config, Utc::now()).unwrap();

        let baseline = data.baseline().unwrap();
        assert_eq!(baseline.overall.total_issues, Some(5.0));
        assert!(baseline.features["hr"].issues.is_empty());
        assert_eq!(data.comparison().unwrap().summary.total_changes, Some(1.0));
        // Null comparison score falls through to the baseline
        assert_eq!(data.summary.overall_score, 60.0);
        assert_eq!(data.summary.regressions, 0);
        assert_eq!(data.summary.critical_issues, 0);
    }

    #[test]
    fn test_null_sections_load_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(temp_dir.path());
        write(&config.baseline_path(), r#"{"overall": null, "features": null}"#);

        let data = gather_report_data(&config, Utc::now()).unwrap();

        let baseline = data.baseline().unwrap();
        assert!(baseline.overall.performance_score.is_none());
        assert!(baseline.features.is_empty());
        assert_eq!(data.summary.overall_score, 0.0);
    }
}
