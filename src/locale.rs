//! Bilingual label tables for the HTML report.
//!
//! Each supported language is a variant of [`Locale`] and owns one static
//! [`LocaleRecord`]. Lookups go through ordered slices so that header
//! processing always follows the declared order.

use std::borrow::Cow;
use std::fmt;

use clap::ValueEnum;

/// Supported report languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

/// A recognized section header in the analysis text and its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    /// Literal header line as emitted by the analysis step
    pub source: &'static str,
    /// Heading text shown in the rendered report
    pub display: &'static str,
}

/// Translated labels and mappings for one language.
#[derive(Debug)]
pub struct LocaleRecord {
    pub lang: &'static str,
    pub title: &'static str,
    pub target_label: &'static str,
    pub scan_time_label: &'static str,
    pub scan_command_label: &'static str,
    pub security_analysis_label: &'static str,
    pub failure_prefix: &'static str,
    pub tool_types: &'static [(&'static str, &'static str)],
    pub section_headers: &'static [SectionHeader],
}

static ENGLISH: LocaleRecord = LocaleRecord {
    lang: "en",
    title: "Security Assessment Report",
    target_label: "Target",
    scan_time_label: "Scan Time",
    scan_command_label: "Scan Command",
    security_analysis_label: "Security Analysis",
    failure_prefix: "Failed to generate report",
    tool_types: &[
        ("nmap", "Network Mapper (Nmap)"),
        ("sudomy", "Subdomain Enumeration Tool"),
    ],
    section_headers: &[
        SectionHeader { source: "EXECUTIVE SUMMARY", display: "Executive Summary" },
        SectionHeader { source: "DETECTED SERVICES", display: "Detected Services" },
        SectionHeader { source: "SECURITY ASSESSMENT", display: "Security Assessment" },
        SectionHeader { source: "RECOMMENDATIONS", display: "Recommendations" },
    ],
};

static RUSSIAN: LocaleRecord = LocaleRecord {
    lang: "ru",
    title: "Отчет по безопасности",
    target_label: "Цель",
    scan_time_label: "Время сканирования",
    scan_command_label: "Команда сканирования",
    security_analysis_label: "Анализ безопасности",
    failure_prefix: "Ошибка создания отчета",
    tool_types: &[
        ("nmap", "Сетевой сканер (Nmap)"),
        ("sudomy", "Инструмент перечисления поддоменов"),
    ],
    section_headers: &[
        SectionHeader { source: "КРАТКИЕ ВЫВОДЫ", display: "Краткие выводы" },
        SectionHeader { source: "ОБНАРУЖЕННЫЕ СЕРВИСЫ", display: "Обнаруженные сервисы" },
        SectionHeader { source: "ОЦЕНКА БЕЗОПАСНОСТИ", display: "Оценка безопасности" },
        SectionHeader { source: "РЕКОМЕНДАЦИИ", display: "Рекомендации" },
    ],
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Map the legacy "use Russian" switch onto a locale
    pub fn from_russian_flag(use_russian: bool) -> Self {
        if use_russian {
            Locale::Ru
        } else {
            Locale::En
        }
    }

    pub fn record(self) -> &'static LocaleRecord {
        match self {
            Locale::En => &ENGLISH,
            Locale::Ru => &RUSSIAN,
        }
    }

    pub fn code(self) -> &'static str {
        self.record().lang
    }
}

impl LocaleRecord {
    /// Display name for a scan tool, falling back to the upper-cased code.
    pub fn tool_type_name<'a>(&self, scan_type: &'a str) -> Cow<'a, str> {
        match self.tool_types.iter().find(|(code, _)| *code == scan_type) {
            Some((_, name)) => Cow::Borrowed(*name),
            None => {
                log::warn!("No display name for scan type '{}', using raw code", scan_type);
                Cow::Owned(scan_type.to_uppercase())
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_is_populated() {
        for locale in Locale::ALL {
            let record = locale.record();
            for label in [
                record.lang,
                record.title,
                record.target_label,
                record.scan_time_label,
                record.scan_command_label,
                record.security_analysis_label,
                record.failure_prefix,
            ] {
                assert!(!label.is_empty(), "empty label in {}", locale);
            }
            assert_eq!(record.section_headers.len(), 4);
            assert!(record
                .section_headers
                .iter()
                .all(|h| !h.source.is_empty() && !h.display.is_empty()));
        }
    }

    #[test]
    fn test_tool_type_lookup_and_fallback() {
        let en = Locale::En.record();
        assert_eq!(en.tool_type_name("nmap"), "Network Mapper (Nmap)");
        assert_eq!(en.tool_type_name("masscan"), "MASSCAN");
        // Lookup is case-sensitive
        assert_eq!(en.tool_type_name("Nmap"), "NMAP");

        let ru = Locale::Ru.record();
        assert_eq!(ru.tool_type_name("sudomy"), "Инструмент перечисления поддоменов");
    }

    #[test]
    fn test_russian_flag() {
        assert_eq!(Locale::from_russian_flag(true), Locale::Ru);
        assert_eq!(Locale::from_russian_flag(false), Locale::En);
        assert_eq!(Locale::default(), Locale::En);
    }
}
