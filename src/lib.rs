//! INVO report renderer
//!
//! Turns a scan result (target, command, free-text analysis) into a
//! standalone HTML security report in English or Russian.

pub mod cli;
pub mod errors;
pub mod locale;
pub mod models;
pub mod reporter;
pub mod sections;
pub mod template;
pub mod utils;

pub use errors::{GenerationError, ReportError, ReportResult};
pub use locale::Locale;
pub use models::{RenderedReport, ScanRecord, ScanReportInput};
pub use reporter::{HtmlReportRenderer, RenderOptions};
pub use sections::SectionStyle;
