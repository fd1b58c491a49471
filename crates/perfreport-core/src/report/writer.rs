use super::types::ReportData;
use crate::config::ReportConfig;
use crate::render::ReportKind;
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Renders every report kind and writes it into the output directory
pub struct ReportWriter<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportWriter<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Write all four reports, overwriting existing files.
    ///
    /// Returns the written paths in generation order. Stops at the first
    /// failure; files already written are left in place.
    pub fn write_all(&self, data: &ReportData) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir()?;

        ReportKind::ALL
            .iter()
            .map(|&kind| self.write(kind, data))
            .collect()
    }

    /// Render and write a single report
    pub fn write(&self, kind: ReportKind, data: &ReportData) -> Result<PathBuf> {
        tracing::debug!("Rendering {}", kind.label());

        let content = kind.render(data, self.config)?;
        let path = self.config.output_path(kind);

        fs::write(&path, content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Wrote {} to {}", kind.label(), path.display());
        Ok(path)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| Error::Write {
            path: dir.clone(),
            source,
        })
    }
}
