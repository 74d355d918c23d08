//! Mermaid source detection
//!
//! Decides whether a candidate code block is Mermaid.js source. Detection is
//! a leading-keyword heuristic, not a parse: a block is accepted when some
//! line opens (after optional indentation) with one of the diagram keywords
//! Mermaid itself dispatches on. The keyword list mirrors the diagram types
//! shipped by mermaid.js; keep it in sync when Mermaid grows new ones.

use tracing::{debug, trace};

/// Start-of-line keywords for every Mermaid diagram type we recognize.
///
/// Matching is case-sensitive and stops at a word boundary, so `graph`
/// matches `graph LR` but not `graphite`.
pub const MERMAID_KEYWORDS: [&str; 31] = [
    "architecture",
    "architecture-beta",
    "block",
    "block-beta",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
    "classDiagram",
    "classDiagram-v2",
    "erDiagram",
    "graph",
    "flowchart",
    "gantt",
    "gitGraph",
    "info",
    "mindmap",
    "packet",
    "pie",
    "quadrantChart",
    "requirement",
    "requirementDiagram",
    "sankey",
    "sequenceDiagram",
    "stateDiagram",
    "stateDiagram-v2",
    "timeline",
    "journey",
    "xychart",
    "xychart-beta",
];

/// Opening marker of a Mermaid directive block, e.g. `%%{init: {...}}%%`
const DIRECTIVE_MARKER: &str = "%%{";

/// Delimiter token that opens and closes a directive
const DIRECTIVE_DELIMITER: &str = "%%";

/// Decide whether `code` is Mermaid diagram source.
///
/// When the text opens with a directive block, only the text after the
/// directive's closing delimiter is inspected. An unterminated directive
/// rejects the block outright, even if a diagram keyword appears later;
/// Mermaid itself would fail to parse such input, so claiming it here would
/// only swap a readable code block for a render error.
///
/// # Example
/// ```
/// use spyglass::detect::is_mermaid_code;
///
/// assert!(is_mermaid_code("graph LR\nA-->B"));
/// assert!(!is_mermaid_code("fn main() {}"));
/// ```
pub fn is_mermaid_code(code: &str) -> bool {
    trace!(input_len = code.len(), "classifying candidate block");

    if code.starts_with(DIRECTIVE_MARKER) {
        let segments: Vec<&str> = code.split(DIRECTIVE_DELIMITER).collect();

        if segments.len() <= 2 {
            debug!("directive block never closes, rejecting");
            return false;
        }

        // Well-formed directive: only the remainder after the closing
        // delimiter counts.
        return has_keyword_line(segments[2]);
    }

    has_keyword_line(code)
}

/// Scan every line for a diagram-opening keyword.
///
/// Line-by-line scanning means front matter or `%%` comment lines ahead of
/// the real opening keyword do not defeat detection.
fn has_keyword_line(text: &str) -> bool {
    let matched = text.lines().any(line_opens_diagram);
    if matched {
        debug!("keyword line found, block accepted");
    }
    matched
}

/// True when the line starts, after optional leading whitespace, with one of
/// the diagram keywords followed by a word boundary. Mid-line occurrences do
/// not count.
fn line_opens_diagram(line: &str) -> bool {
    let rest = line.trim_start();
    MERMAID_KEYWORDS.iter().any(|keyword| {
        rest.starts_with(keyword)
            && rest[keyword.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}
