//! The fixed HTML layout of an INVO report and its placeholder substitution.

use crate::errors::{ReportError, ReportResult};

pub const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet">
</head>
<body class="bg-gray-50">
    <div class="container mx-auto px-4 py-8 max-w-5xl">
        <!-- Header -->
        <div class="bg-gradient-to-r from-blue-600 to-blue-800 rounded-lg p-6 mb-6">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-4xl font-bold text-white">INVO</h1>
                <div class="flex items-center gap-2">
                    <span class="bg-blue-500 text-white px-3 py-1 rounded-l text-sm">AI-Powered Pentesting Tool</span>
                    <span class="bg-green-500 text-white px-3 py-1 rounded-r text-sm">{tool_type}</span>
                </div>
            </div>
            <h2 class="text-2xl font-semibold text-white mb-2">{title}</h2>
            <p class="text-lg text-white">{target_label}: {target}</p>
            <p class="text-sm text-white opacity-80">{scan_time_label}: {scan_time}</p>
        </div>

        <!-- Command Section -->
        <div class="bg-white rounded-lg shadow p-6 mb-6">
            <h2 class="text-xl font-bold mb-3 text-blue-800">{scan_command}</h2>
            <div class="bg-gray-900 text-green-400 p-4 rounded font-mono text-sm overflow-x-auto">
                {command}
            </div>
        </div>

        <!-- Analysis Section -->
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-bold mb-3 text-blue-800">{security_analysis}</h2>
            <div class="whitespace-pre-line text-gray-700">
                {analysis}
            </div>
        </div>
    </div>
</body>
</html>"#;

/// Values substituted into [`REPORT_TEMPLATE`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateFields<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub tool_type: &'a str,
    pub target_label: &'a str,
    pub target: &'a str,
    pub scan_time_label: &'a str,
    pub scan_time: &'a str,
    pub scan_command: &'a str,
    pub command: &'a str,
    pub security_analysis: &'a str,
    pub analysis: &'a str,
}

impl<'a> TemplateFields<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        let value = match name {
            "lang" => self.lang,
            "title" => self.title,
            "tool_type" => self.tool_type,
            "target_label" => self.target_label,
            "target" => self.target,
            "scan_time_label" => self.scan_time_label,
            "scan_time" => self.scan_time,
            "scan_command" => self.scan_command,
            "command" => self.command,
            "security_analysis" => self.security_analysis,
            "analysis" => self.analysis,
            _ => return None,
        };
        Some(value)
    }
}

/// Fill `{name}` placeholders in `template` in a single pass.
///
/// Substituted values are never rescanned, so user text containing braces is
/// copied through untouched.
pub fn fill(template: &str, fields: &TemplateFields<'_>) -> ReportResult<String> {
    let mut out = String::with_capacity(template.len() + fields.analysis.len() + fields.command.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ReportError::transform(format!("unterminated placeholder at byte {}", template.len() - rest.len() + open))
        })?;
        let name = &after[..close];
        let value = fields
            .lookup(name)
            .ok_or_else(|| ReportError::transform(format!("unknown template placeholder '{{{}}}'", name)))?;
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
