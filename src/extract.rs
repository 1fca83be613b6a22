//! Mermaid Block Extraction
//!
//! Pulls fenced ```` ```mermaid ```` blocks out of markdown text. Pure text
//! scanning, no validation or I/O.

use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;

/// Opening marker, language tag, whitespace, lazily-matched body, closing marker
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```mermaid\s+(.*?)```").expect("fence pattern is valid")
});

/// Opening marker only, used to spot fences that never close
static OPENER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```mermaid\s").expect("opener pattern is valid"));

/// A diagram block found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based position of the block within its document
    pub ordinal: usize,
    /// 1-based line of the opening fence
    pub line: usize,
    /// Diagram source between the fences
    pub content: &'a str,
}

/// Lazy iterator over the mermaid blocks of one document
pub struct Blocks<'a> {
    text: &'a str,
    captures: CaptureMatches<'static, 'a>,
    ordinal: usize,
    // Line bookkeeping so we never rescan the prefix
    scanned_to: usize,
    line: usize,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;
        let body = caps.get(1)?;

        self.line += count_newlines(&self.text[self.scanned_to..whole.start()]);
        self.scanned_to = whole.start();
        self.ordinal += 1;

        Some(Block {
            ordinal: self.ordinal,
            line: self.line,
            content: body.as_str(),
        })
    }
}

/// Iterate over the mermaid blocks of `text` in document order.
///
/// Unterminated fences produce no block. Call again to restart.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        text,
        captures: FENCE_RE.captures_iter(text),
        ordinal: 0,
        scanned_to: 0,
        line: 1,
    }
}

/// Line of a mermaid opener that has no closing fence, if any
pub fn unterminated_fence(text: &str) -> Option<usize> {
    let tail_start = FENCE_RE.find_iter(text).last().map_or(0, |m| m.end());
    let opener = OPENER_RE.find(&text[tail_start..])?;
    let offset = tail_start + opener.start();
    Some(count_newlines(&text[..offset]) + 1)
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
