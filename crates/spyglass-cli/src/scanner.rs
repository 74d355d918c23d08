//! Fenced code block extraction from Markdown sources
//!
//! The library treats block discovery as the host's business; for the CLI
//! the "document" is a Markdown file and candidates are fenced code blocks.

use tracing::debug;

/// A fenced code block found in a Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// 1-based line number of the opening fence
    pub line: usize,
    /// First token of the fence info string, if any
    pub language: Option<String>,
    /// Block content, without the fences
    pub text: String,
}

/// Extract every fenced code block (``` or ~~~) from a Markdown document.
///
/// A fence closes only on a line with the same fence character, at least as
/// many of them, and nothing else but whitespace. An unclosed fence runs to
/// the end of the document, matching CommonMark.
pub fn extract_fenced_blocks(markdown: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<(char, usize, usize, Option<String>, Vec<&str>)> = None;

    for (index, line) in markdown.lines().enumerate() {
        match &mut open {
            None => {
                if let Some((fence_char, fence_len, info)) = fence_open(line) {
                    open = Some((fence_char, fence_len, index + 1, info, Vec::new()));
                }
            }
            Some((fence_char, fence_len, start, info, content)) => {
                if fence_close(line, *fence_char, *fence_len) {
                    blocks.push(FencedBlock {
                        line: *start,
                        language: info.take(),
                        text: content.join("\n"),
                    });
                    open = None;
                } else {
                    content.push(line);
                }
            }
        }
    }

    // Unclosed fence: take what we have
    if let Some((_, _, start, info, content)) = open {
        blocks.push(FencedBlock {
            line: start,
            language: info,
            text: content.join("\n"),
        });
    }

    debug!(blocks = blocks.len(), "extracted fenced code blocks");
    blocks
}

/// Parse a fence-opening line: returns fence char, fence length, and the
/// info string's first token
fn fence_open(line: &str) -> Option<(char, usize, Option<String>)> {
    let trimmed = line.trim_start();
    let fence_char = match trimmed.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return None,
    };
    let fence_len = trimmed.chars().take_while(|c| *c == fence_char).count();
    if fence_len < 3 {
        return None;
    }

    let info = trimmed[fence_len..].trim();
    // An info string containing a backtick is not a fence per CommonMark
    if fence_char == '`' && info.contains('`') {
        return None;
    }
    let language = info
        .split_whitespace()
        .next()
        .map(|token| token.to_string());

    Some((fence_char, fence_len, language))
}

fn fence_close(line: &str, fence_char: char, fence_len: usize) -> bool {
    let trimmed = line.trim();
    trimmed.chars().take_while(|c| *c == fence_char).count() >= fence_len
        && trimmed.chars().all(|c| c == fence_char)
}
