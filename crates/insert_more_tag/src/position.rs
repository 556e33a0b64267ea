// crates/insert_more_tag/src/position.rs

use excerpt_config::ExcerptConfig;
use once_cell::sync::Lazy;
use regex::Regex;

// A fenced block at the very start of the post, plus whatever whitespace
// follows the closing fence.
static LEADING_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A```[\s\S]*?```\s*").unwrap());

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Which rule picked the cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    LeadingCodeBlock,
    AfterSecondParagraph,
    AfterFirstParagraph,
    WordBoundary,
}

/// Computes where the marker block goes, as a char offset into `content`.
///
/// Expects content that already passed the length and marker guards; the
/// result is always strictly inside the content.
pub fn compute_offset(content: &str, trimmed_len: usize, config: &ExcerptConfig) -> (usize, Strategy) {
    let content_len = content.chars().count();

    let (offset, strategy) = if let Some(m) = LEADING_FENCE_RE.find(content) {
        (content[..m.end()].chars().count(), Strategy::LeadingCodeBlock)
    } else {
        let paragraphs: Vec<&str> = content.split(PARAGRAPH_SEPARATOR).collect();
        if paragraphs.len() >= 2 {
            let first = paragraphs[0].chars().count();
            if paragraphs[0].trim().chars().count() < config.short_paragraph {
                let second = paragraphs[1].chars().count();
                (first + second + 4, Strategy::AfterSecondParagraph)
            } else {
                (first + 2, Strategy::AfterFirstParagraph)
            }
        } else {
            let start = config.fallback_cut.min(scale(trimmed_len, config.cut_ratio));
            // Walk forward to the next space or newline so no word is split.
            let skipped = content
                .chars()
                .skip(start)
                .take_while(|&c| c != ' ' && c != '\n')
                .count();
            (start + skipped, Strategy::WordBoundary)
        }
    };

    if offset >= content_len {
        let clamped = scale(content_len, config.cut_ratio);
        log::debug!(
            "{:?} offset {} is past the end ({} chars), clamped to {}",
            strategy,
            offset,
            content_len,
            clamped
        );
        return (clamped, strategy);
    }
    (offset, strategy)
}

fn scale(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).floor() as usize
}
