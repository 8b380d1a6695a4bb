//! Section annotation for the free-text analysis block.
//!
//! The analysis emitted by the scanning step is plain text in which some
//! lines are literal section headers ("EXECUTIVE SUMMARY", ...). Both styles
//! here wrap each titled section in a container `<div>` with a styled `<h3>`.
//!
//! - [`SectionStyle::Legacy`] reproduces the historical search-and-splice
//!   annotator byte for byte, including its quirks with repeated headers and
//!   text without any header (it always appends one closing tag).
//! - [`SectionStyle::Structured`] tokenizes the text into sections in a
//!   single pass and emits balanced markup.

use clap::ValueEnum;
use crate::locale::SectionHeader;

pub const SECTION_CLOSE: &str = "</div>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SectionStyle {
    /// Search-and-splice annotation compatible with existing reports
    #[default]
    Legacy,
    /// Line-based tokenizer producing balanced sections
    Structured,
}

/// One titled block of analysis text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub header: &'a SectionHeader,
    pub body: &'a str,
}

/// Analysis text split into an untitled preamble and titled sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedText<'a> {
    pub preamble: &'a str,
    pub sections: Vec<Section<'a>>,
}

pub fn section_open(display: &str) -> String {
    format!(
        r#"<div class="mt-4"><h3 class="text-lg font-bold text-blue-800 mb-2">{}</h3>"#,
        display
    )
}

impl SectionStyle {
    pub fn annotate(self, text: &str, headers: &[SectionHeader]) -> String {
        match self {
            SectionStyle::Legacy => annotate_legacy(text, headers),
            SectionStyle::Structured => annotate_structured(text, headers),
        }
    }
}

/// Historical annotator.
///
/// For each header in order: every `"<source>\n"` becomes the opening markup,
/// then the first header (in table order) whose source text still appears
/// after the inserted heading gets a closing tag in front of every one of
/// its occurrences. One closing tag is always appended.
pub fn annotate_legacy(text: &str, headers: &[SectionHeader]) -> String {
    let mut formatted = text.to_string();

    for header in headers {
        let header_line = format!("{}\n", header.source);
        let opening = format!("{}\n", section_open(header.display));
        formatted = formatted.replace(&header_line, &opening);

        // A missing heading leaves only the last character to search
        let start = formatted.find(header.display).unwrap_or_else(|| {
            formatted
                .char_indices()
                .last()
                .map(|(idx, _)| idx)
                .unwrap_or(0)
        });

        let next = headers
            .iter()
            .find(|candidate| formatted[start..].contains(candidate.source));

        if let Some(next) = next {
            formatted = formatted.replace(next.source, &format!("{}{}", SECTION_CLOSE, next.source));
        }
    }

    formatted.push_str(SECTION_CLOSE);
    formatted
}

/// Split `text` into sections at lines that consist exactly of a known header.
pub fn split_sections<'a>(text: &'a str, headers: &'a [SectionHeader]) -> SectionedText<'a> {
    let mut preamble_end = text.len();
    let mut sections: Vec<Section<'a>> = Vec::new();
    let mut current: Option<(&'a SectionHeader, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let matched = line
            .strip_suffix('\n')
            .and_then(|content| headers.iter().find(|h| h.source == content));

        if let Some(header) = matched {
            match current.take() {
                Some((open, body_start)) => sections.push(Section {
                    header: open,
                    body: &text[body_start..line_start],
                }),
                None => preamble_end = line_start,
            }
            current = Some((header, offset));
        }
    }

    if let Some((open, body_start)) = current {
        sections.push(Section {
            header: open,
            body: &text[body_start..],
        });
    }

    SectionedText {
        preamble: &text[..preamble_end],
        sections,
    }
}

pub fn annotate_structured(text: &str, headers: &[SectionHeader]) -> String {
    let parsed = split_sections(text, headers);
    let mut out = String::with_capacity(text.len() + parsed.sections.len() * 96);
    out.push_str(parsed.preamble);
    for section in &parsed.sections {
        out.push_str(&section_open(section.header.display));
        out.push('\n');
        out.push_str(section.body);
        out.push_str(SECTION_CLOSE);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    fn english() -> &'static [SectionHeader] {
        Locale::En.record().section_headers
    }

    fn open(display: &str) -> String {
        format!("{}\n", section_open(display))
    }

    #[test]
    fn test_legacy_wraps_two_sections() {
        let text = "EXECUTIVE SUMMARY\nFindings here.\nDETECTED SERVICES\nPort 80 open.\n";
        let expected = format!(
            "{}Findings here.\n</div>{}Port 80 open.\n</div>",
            open("Executive Summary"),
            open("Detected Services"),
        );
        assert_eq!(annotate_legacy(text, english()), expected);
    }

    #[test]
    fn test_legacy_without_headers_still_closes() {
        assert_eq!(annotate_legacy("nothing to see", english()), "nothing to see</div>");
        assert_eq!(annotate_legacy("", english()), "</div>");
    }

    #[test]
    fn test_legacy_out_of_order_headers_leave_one_close() {
        // Neither pass finds another header after its heading, so only the
        // trailing close is emitted.
        let text = "RECOMMENDATIONS\nPatch.\nEXECUTIVE SUMMARY\nAll good.\n";
        let expected = format!(
            "{}Patch.\n{}All good.\n</div>",
            open("Recommendations"),
            open("Executive Summary"),
        );
        assert_eq!(annotate_legacy(text, english()), expected);
    }

    #[test]
    fn test_legacy_closes_before_first_header_in_table_order() {
        // DETECTED SERVICES precedes RECOMMENDATIONS in the table, so the
        // executive summary stays open across the recommendations block.
        let text = "EXECUTIVE SUMMARY\nA\nRECOMMENDATIONS\nB\nDETECTED SERVICES\nC\n";
        let expected = format!(
            "{}A\n{}B\n</div>{}C\n</div>",
            open("Executive Summary"),
            open("Recommendations"),
            open("Detected Services"),
        );
        assert_eq!(annotate_legacy(text, english()), expected);
    }

    #[test]
    fn test_legacy_closes_before_every_occurrence() {
        let text = "EXECUTIVE SUMMARY\nSee RECOMMENDATIONS below.\nRECOMMENDATIONS\nDo X.\n";
        let expected = format!(
            "{}See </div>RECOMMENDATIONS below.\n</div>{}Do X.\n</div>",
            open("Executive Summary"),
            open("Recommendations"),
        );
        assert_eq!(annotate_legacy(text, english()), expected);
    }

    #[test]
    fn test_legacy_russian_headers() {
        let headers = Locale::Ru.record().section_headers;
        let text = "КРАТКИЕ ВЫВОДЫ\nВсё хорошо.\nРЕКОМЕНДАЦИИ\nОбновить ПО.\n";
        let expected = format!(
            "{}Всё хорошо.\n</div>{}Обновить ПО.\n</div>",
            open("Краткие выводы"),
            open("Рекомендации"),
        );
        assert_eq!(annotate_legacy(text, headers), expected);
    }

    #[test]
    fn test_split_sections_with_preamble() {
        let text = "Scan finished.\nEXECUTIVE SUMMARY\nOne host.\nRECOMMENDATIONS\nClose 23.\n";
        let parsed = split_sections(text, english());
        assert_eq!(parsed.preamble, "Scan finished.\n");
        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.sections[0].header.display, "Executive Summary");
        assert_eq!(parsed.sections[0].body, "One host.\n");
        assert_eq!(parsed.sections[1].header.display, "Recommendations");
        assert_eq!(parsed.sections[1].body, "Close 23.\n");
    }

    #[test]
    fn test_structured_matches_legacy_on_simple_input() {
        let text = "EXECUTIVE SUMMARY\nFindings here.\nDETECTED SERVICES\nPort 80 open.\n";
        assert_eq!(
            annotate_structured(text, english()),
            annotate_legacy(text, english())
        );
    }

    #[test]
    fn test_structured_without_headers_is_unchanged() {
        let text = "plain analysis\nwith two lines\n";
        assert_eq!(annotate_structured(text, english()), text);
    }

    #[test]
    fn test_structured_repeated_headers() {
        let text = "RECOMMENDATIONS\nFirst.\nRECOMMENDATIONS\nSecond.\n";
        let expected = format!(
            "{}First.\n</div>{}Second.\n</div>",
            open("Recommendations"),
            open("Recommendations"),
        );
        assert_eq!(annotate_structured(text, english()), expected);
    }

    #[test]
    fn test_structured_ignores_inline_header_text() {
        // Header text that is not on its own line is body content
        let text = "EXECUTIVE SUMMARY\nSee RECOMMENDATIONS below.\n";
        let expected = format!(
            "{}See RECOMMENDATIONS below.\n</div>",
            open("Executive Summary")
        );
        assert_eq!(annotate_structured(text, english()), expected);
    }

    #[test]
    fn test_style_dispatch() {
        let text = "no headers";
        assert_eq!(SectionStyle::Legacy.annotate(text, english()), "no headers</div>");
        assert_eq!(SectionStyle::Structured.annotate(text, english()), "no headers");
        assert_eq!(SectionStyle::default(), SectionStyle::Legacy);
    }
}
