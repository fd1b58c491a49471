pub mod analysis;
pub mod config;
pub mod error;
pub mod render;
pub mod report;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use report::{ReportData, ReportLoader, ReportWriter, gather_report_data};
