mod loader;
mod types;
mod writer;

pub use loader::{ReportLoader, gather_report_data};
pub use types::*;
pub use writer::ReportWriter;
