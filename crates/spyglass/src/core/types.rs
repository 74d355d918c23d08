//! Fundamental types for block discovery and diagram identity

use std::fmt;

/// A candidate diagram source block discovered in a rendered page.
///
/// Blocks are ephemeral: they are rediscovered on every scan and carry no
/// identity beyond their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
}

impl CodeBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw source text of the block
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The leading `%%{...}%%` directive, when present and terminated.
    ///
    /// An unterminated directive yields `None`; the classifier treats that
    /// case as an outright rejection.
    pub fn directive(&self) -> Option<&str> {
        if !self.text.starts_with("%%{") {
            return None;
        }
        self.text[3..]
            .find("%%")
            .map(|close| &self.text[..3 + close + 2])
    }
}

/// Opaque handle for a candidate block, assigned by the document host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

/// Identifier for a rendered diagram, handed to the external renderer and
/// used to key the pan/zoom controller arena
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramId(String);

impl DiagramId {
    pub fn new(sequence: u64) -> Self {
        Self(format!("mermaid-{}", sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Light/dark indicator supplied by the host theme provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}
