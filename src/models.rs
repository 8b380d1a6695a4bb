use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::{ReportError, ReportResult};

/// Scan result as supplied by the scanning/analysis step.
///
/// Every field is optional so that incomplete records can be reported as
/// `MissingField` instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanRecord {
    pub target: Option<String>,
    #[serde(alias = "scanTime")]
    pub scan_time: Option<String>,
    pub command: Option<String>,
    pub analysis: Option<String>,
    #[serde(alias = "scanType")]
    pub scan_type: Option<String>,
}

/// A complete scan record, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReportInput {
    pub target: String,
    pub scan_time: String,
    pub command: String,
    pub analysis: String,
    pub scan_type: String,
}

/// The HTML produced for one scan and where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub html: String,
    pub path: PathBuf,
}

impl ScanRecord {
    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every field is present.
    ///
    /// Fields are checked in the order the renderer consumes them, so the
    /// first missing one is reported.
    pub fn validate(&self) -> ReportResult<ScanReportInput> {
        fn required(value: &Option<String>, name: &'static str) -> ReportResult<String> {
            value.clone().ok_or(ReportError::MissingField(name))
        }

        let scan_type = required(&self.scan_type, "scan_type")?;
        let analysis = required(&self.analysis, "analysis")?;

        Ok(ScanReportInput {
            target: required(&self.target, "target")?,
            scan_time: required(&self.scan_time, "scan_time")?,
            command: required(&self.command, "command")?,
            analysis,
            scan_type,
        })
    }
}

impl From<ScanReportInput> for ScanRecord {
    fn from(input: ScanReportInput) -> Self {
        Self {
            target: Some(input.target),
            scan_time: Some(input.scan_time),
            command: Some(input.command),
            analysis: Some(input.analysis),
            scan_type: Some(input.scan_type),
        }
    }
}
