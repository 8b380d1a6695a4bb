use chrono::{DateTime, TimeZone};
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::errors::{ReportError, ReportResult};
use crate::models::ScanReportInput;

/// Directory used for reports when no explicit output path is given
pub const DEFAULT_REPORTS_DIR: &str = "reports";

const UNSAFE_FILENAME_CHARS: &str = r"[^A-Za-z0-9._-]+";

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Derives timestamped report file names from scan inputs.
pub struct ReportPathBuilder {
    reports_dir: PathBuf,
    unsafe_chars: Regex,
}

impl ReportPathBuilder {
    pub fn new(reports_dir: impl Into<PathBuf>) -> ReportResult<Self> {
        let unsafe_chars = Regex::new(UNSAFE_FILENAME_CHARS)
            .map_err(|e| ReportError::transform(format!("invalid filename pattern: {}", e)))?;
        Ok(Self {
            reports_dir: reports_dir.into(),
            unsafe_chars,
        })
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Reduce arbitrary text to a filename-safe component
    pub fn sanitize(&self, value: &str) -> String {
        let cleaned = self.unsafe_chars.replace_all(value.trim(), "_");
        let cleaned = cleaned.trim_matches(|c: char| c == '_' || c == '.');
        if cleaned.is_empty() {
            "report".to_string()
        } else {
            cleaned.chars().take(64).collect()
        }
    }

    /// `<dir>/<scan_type>_<target>_<YYYYmmdd_HHMMSS>.html`
    pub fn path_for<Tz>(&self, input: &ScanReportInput, at: &DateTime<Tz>) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let name = format!(
            "{}_{}_{}.html",
            self.sanitize(&input.scan_type.to_lowercase()),
            self.sanitize(&input.target),
            at.format("%Y%m%d_%H%M%S")
        );
        self.reports_dir.join(name)
    }

    pub fn path_now(&self, input: &ScanReportInput) -> PathBuf {
        self.path_for(input, &chrono::Local::now())
    }
}
