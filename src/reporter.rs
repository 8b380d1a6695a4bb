use std::path::{Path, PathBuf};

use crate::errors::{GenerationError, ReportError, ReportResult};
use crate::locale::Locale;
use crate::models::{RenderedReport, ScanRecord, ScanReportInput};
use crate::sections::SectionStyle;
use crate::template::{self, TemplateFields, REPORT_TEMPLATE};
use crate::utils::escape_html;

/// Knobs that change the markup produced for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// How section headers in the analysis are wrapped
    pub sections: SectionStyle,
    /// Escape target, scan time, command and analysis before insertion.
    /// Off by default.
    pub escape_html: bool,
}

/// Renders scan results into standalone HTML reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReportRenderer {
    locale: Locale,
    options: RenderOptions,
}

impl HtmlReportRenderer {
    pub fn new(locale: Locale) -> Self {
        Self::with_options(locale, RenderOptions::default())
    }

    pub fn with_options(locale: Locale, options: RenderOptions) -> Self {
        Self { locale, options }
    }

    pub fn from_russian_flag(use_russian: bool) -> Self {
        Self::new(Locale::from_russian_flag(use_russian))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render `data` and write it to `output_path`, returning the path.
    ///
    /// The parent directory is created if needed and an existing file is
    /// overwritten. The write is not atomic.
    pub fn render(&self, data: &ScanRecord, output_path: impl AsRef<Path>) -> Result<PathBuf, GenerationError> {
        self.render_report(data, output_path).map(|report| report.path)
    }

    /// Like [`render`](Self::render) but also returns the generated HTML.
    pub fn render_report(
        &self,
        data: &ScanRecord,
        output_path: impl AsRef<Path>,
    ) -> Result<RenderedReport, GenerationError> {
        let output_path = output_path.as_ref();
        self.try_render(data, output_path).map_err(|e| self.fail(e))
    }

    /// Build the report HTML without touching the filesystem.
    pub fn render_html(&self, data: &ScanRecord) -> Result<String, GenerationError> {
        data.validate()
            .and_then(|input| self.build_html(&input))
            .map_err(|e| self.fail(e))
    }

    fn try_render(&self, data: &ScanRecord, output_path: &Path) -> ReportResult<RenderedReport> {
        let input = data.validate()?;
        let html = self.build_html(&input)?;
        write_report(&html, output_path)?;

        log::info!("HTML report generated: {}", output_path.display());
        Ok(RenderedReport {
            html,
            path: output_path.to_path_buf(),
        })
    }

    /// Substitute a validated scan into the report template.
    pub fn build_html(&self, input: &ScanReportInput) -> ReportResult<String> {
        let record = self.locale.record();
        log::debug!(
            "Rendering {} report for target '{}' (scan type '{}')",
            record.lang,
            input.target,
            input.scan_type
        );

        let tool_type = record.tool_type_name(&input.scan_type);

        let (target, scan_time, command, analysis_text) = if self.options.escape_html {
            (
                escape_html(&input.target),
                escape_html(&input.scan_time),
                escape_html(&input.command),
                escape_html(&input.analysis),
            )
        } else {
            (
                input.target.clone(),
                input.scan_time.clone(),
                input.command.clone(),
                input.analysis.clone(),
            )
        };

        let analysis = self
            .options
            .sections
            .annotate(&analysis_text, record.section_headers);
        log::debug!("Annotated analysis: {} -> {} bytes", analysis_text.len(), analysis.len());

        template::fill(
            REPORT_TEMPLATE,
            &TemplateFields {
                lang: record.lang,
                title: record.title,
                tool_type: &tool_type,
                target_label: record.target_label,
                target: &target,
                scan_time_label: record.scan_time_label,
                scan_time: &scan_time,
                scan_command: record.scan_command_label,
                command: &command,
                security_analysis: record.security_analysis_label,
                analysis: &analysis,
            },
        )
    }

    fn fail(&self, source: ReportError) -> GenerationError {
        let err = GenerationError::new(self.locale, source);
        log::error!("{}", err);
        err
    }
}

fn write_report(html: &str, output_path: &Path) -> ReportResult<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::io(e, parent.to_path_buf()))?;
    }
    std::fs::write(output_path, html).map_err(|e| ReportError::io(e, output_path.to_path_buf()))
}
