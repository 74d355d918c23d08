//! Scan result reporting, plain or colorized

use crossterm::style::Stylize;
use serde::Serialize;

/// Classification verdict for one fenced block, serializable for `--json`
#[derive(Debug, Clone, Serialize)]
pub struct ScanRecord {
    pub line: usize,
    pub language: Option<String>,
    pub mermaid: bool,
}

/// Render one scan record as a human-readable line
pub fn format_record(record: &ScanRecord, colorize: bool) -> String {
    let language = record.language.as_deref().unwrap_or("-");
    let verdict = if record.mermaid { "mermaid" } else { "other" };

    let verdict = if colorize {
        if record.mermaid {
            verdict.green().bold().to_string()
        } else {
            verdict.dim().to_string()
        }
    } else {
        verdict.to_string()
    };

    format!("line {:>4}  [{}]  {}", record.line, language, verdict)
}

/// Summary line printed after the per-block report
pub fn format_summary(records: &[ScanRecord]) -> String {
    let detected = records.iter().filter(|r| r.mermaid).count();
    format!(
        "{} of {} fenced block(s) detected as mermaid",
        detected,
        records.len()
    )
}
