use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use crate::errors::{GenerationError, ReportError, ReportResult};
use crate::locale::Locale;
use crate::models::ScanRecord;
use crate::reporter::{HtmlReportRenderer, RenderOptions};
use crate::sections::SectionStyle;
use crate::utils::{ReportPathBuilder, DEFAULT_REPORTS_DIR};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "invo",
    about = "INVO - render scan results and their analysis as an HTML security report",
    version
)]
pub struct Args {
    /// JSON file with the scan record ("-" reads from stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Report file to write (derived from the scan when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for derived report paths
    #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,

    /// Report language
    #[arg(short, long, value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    /// Shorthand for --lang ru
    #[arg(long)]
    pub russian: bool,

    /// How section headers in the analysis are wrapped
    #[arg(long, value_enum, default_value_t = SectionStyle::Legacy)]
    pub sections: SectionStyle,

    /// HTML-escape scan fields before inserting them
    #[arg(long)]
    pub escape_html: bool,

    /// Enable verbose logging of all operations
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn locale(&self) -> Locale {
        if self.russian {
            Locale::Ru
        } else {
            self.lang
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            sections: self.sections,
            escape_html: self.escape_html,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    fn read_input(&self) -> ReportResult<String> {
        if self.reads_stdin() {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            std::fs::read_to_string(&self.input).map_err(|e| ReportError::io(e, self.input.clone()))
        }
    }
}

/// Read the scan record, render it and return the written report path.
///
/// Every failure, including unreadable or malformed input, carries the
/// localized failure prefix.
pub fn run(args: &Args) -> Result<PathBuf, GenerationError> {
    let locale = args.locale();
    let record = args
        .read_input()
        .and_then(|json| ScanRecord::from_json(&json))
        .map_err(|e| GenerationError::new(locale, e))?;
    let renderer = HtmlReportRenderer::with_options(locale, args.render_options());

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let builder =
                ReportPathBuilder::new(&args.reports_dir).map_err(|e| GenerationError::new(locale, e))?;
            // Incomplete records fall through to render() for the localized error
            match record.validate() {
                Ok(input) => builder.path_now(&input),
                Err(_) => builder.reports_dir().join("report.html"),
            }
        }
    };

    renderer.render(&record, &output)
}
