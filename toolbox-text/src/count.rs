//! Text statistics

use serde::{Deserialize, Serialize};

/// Counts for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Total characters, whitespace included.
    pub characters: usize,
    /// Whitespace-delimited words.
    pub words: usize,
    /// Newline-delimited lines; empty text still counts as one line.
    pub lines: usize,
    /// Blank-line-separated blocks with visible content.
    pub paragraphs: usize,
}

/// Analyze a piece of text.
pub fn analyze(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        lines: text.split('\n').count(),
        paragraphs: text
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .count(),
    }
}
