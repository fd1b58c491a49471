use crate::render::ReportKind;
use std::path::{Path, PathBuf};

/// Interval between automatic dashboard reloads.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 300_000;

/// Lighthouse report files probed for existence, relative to the storage directory.
pub const LIGHTHOUSE_REPORTS: [&str; 2] = ["lighthouse-desktop.html", "lighthouse-mobile.html"];

/// Filesystem layout for a report run.
///
/// Built once at startup and handed by reference to the loader and writer.
/// All paths derive from the project root unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub project_root: PathBuf,
    pub storage_dir: PathBuf,
    pub performance_dir: PathBuf,
    pub output_dir: PathBuf,
    pub refresh_interval_ms: u64,
}

impl ReportConfig {
    /// Create a configuration rooted at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let storage_dir = project_root.join("storage").join("app");
        let performance_dir = storage_dir.join("performance");
        let output_dir = storage_dir.join("reports");

        Self {
            project_root,
            storage_dir,
            performance_dir,
            output_dir,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }

    /// Create a configuration rooted at the process working directory
    pub fn from_current_dir() -> crate::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Write reports somewhere other than `storage/app/reports`
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_refresh_interval_ms(mut self, interval: u64) -> Self {
        self.refresh_interval_ms = interval;
        self
    }

    pub fn baseline_path(&self) -> PathBuf {
        self.performance_dir.join("baseline.json")
    }

    pub fn comparison_path(&self) -> PathBuf {
        self.performance_dir.join("comparison.json")
    }

    pub fn bundle_stats_path(&self) -> PathBuf {
        self.storage_dir.join("bundle-stats.json")
    }

    /// Lighthouse report names paired with the path probed for each
    pub fn lighthouse_paths(&self) -> Vec<(String, PathBuf)> {
        LIGHTHOUSE_REPORTS
            .iter()
            .map(|file| {
                let path = self.storage_dir.join(file);
                let name = Path::new(file)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| file.to_string());
                (name, path)
            })
            .collect()
    }

    pub fn output_path(&self, kind: ReportKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_root() {
        let config = ReportConfig::new("/srv/erp");

        assert_eq!(
            config.baseline_path(),
            PathBuf::from("/srv/erp/storage/app/performance/baseline.json")
        );
        assert_eq!(
            config.comparison_path(),
            PathBuf::from("/srv/erp/storage/app/performance/comparison.json")
        );
        assert_eq!(
            config.bundle_stats_path(),
            PathBuf::from("/srv/erp/storage/app/bundle-stats.json")
        );
        assert_eq!(
            config.output_path(ReportKind::Dashboard),
            PathBuf::from("/srv/erp/storage/app/reports/performance-dashboard.html")
        );
        assert_eq!(config.refresh_interval_ms, 300_000);
    }

    #[test]
    fn test_lighthouse_paths_keyed_by_stem() {
        let config = ReportConfig::new("/srv/erp");
        let paths = config.lighthouse_paths();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].0, "lighthouse-desktop");
        assert_eq!(
            paths[1].1,
            PathBuf::from("/srv/erp/storage/app/lighthouse-mobile.html")
        );
    }

    #[test]
    fn test_output_dir_override() {
        let config = ReportConfig::new("/srv/erp")
            .with_output_dir("/tmp/out")
            .with_refresh_interval_ms(60_000);
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert_eq!(
            config.output_path(ReportKind::Export),
            PathBuf::from("/tmp/out/performance-export.json")
        );
        // Inputs are unaffected by the override
        assert_eq!(
            config.baseline_path(),
            PathBuf::from("/srv/erp/storage/app/performance/baseline.json")
        );
    }
}
