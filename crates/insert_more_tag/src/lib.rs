// crates/insert_more_tag/src/lib.rs

//! Inserts the `<!-- more -->` excerpt marker into long posts whose author
//! did not place one.
//!
//! Posts are skipped when their layout is not the configured one, when the
//! trimmed body is too short to need a teaser, when the marker is already
//! there, or when the body is short enough to be shown in full. Otherwise the
//! cut goes after a leading code block, after the first (or second, if the
//! first is short) paragraph, or at a word boundary near 60% of the body.

mod position;

pub use position::Strategy;

use excerpt_config::ExcerptConfig;
use more_marker::{has_more_marker, MORE_BLOCK};
use post_hooks::{BeforePostRender, Post, PostFilter};

/// Returns the char offset at which the marker block would be inserted, or
/// `None` if the content should be left as it is.
pub fn find_insert_position(content: &str, config: &ExcerptConfig) -> Option<usize> {
    let trimmed_len = content.trim().chars().count();

    if trimmed_len < config.min_length {
        log::trace!("skipping: {} chars is too short for an excerpt", trimmed_len);
        return None;
    }
    if has_more_marker(content) {
        log::trace!("skipping: excerpt marker already present");
        return None;
    }
    if trimmed_len <= config.full_length {
        log::trace!("skipping: {} chars is shown in full", trimmed_len);
        return None;
    }

    let (offset, strategy) = position::compute_offset(content, trimmed_len, config);
    log::debug!("inserting excerpt marker at char {} ({:?})", offset, strategy);
    Some(offset)
}

/// Returns the content with the marker block spliced in, or `None` if the
/// content should be left as it is.
pub fn insert_more_tag(content: &str, config: &ExcerptConfig) -> Option<String> {
    let offset = find_insert_position(content, config)?;
    let byte_idx = content
        .char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());

    let mut out = String::with_capacity(content.len() + MORE_BLOCK.len());
    out.push_str(&content[..byte_idx]);
    out.push_str(MORE_BLOCK);
    out.push_str(&content[byte_idx..]);
    Some(out)
}

/// Applies the excerpt heuristic to a post with the default thresholds.
pub fn add_more_tag(post: Post) -> Post {
    add_more_tag_with(post, &ExcerptConfig::default())
}

/// Applies the excerpt heuristic to a post. Only `content` may change.
pub fn add_more_tag_with(mut post: Post, config: &ExcerptConfig) -> Post {
    if !config.enabled || post.layout != config.layout {
        return post;
    }
    if let Some(content) = insert_more_tag(&post.content, config) {
        log::debug!("added excerpt marker to '{}'", post.source);
        post.content = content;
    }
    post
}

/// The inserter packaged as a before-render filter.
#[derive(Clone, Debug, Default)]
pub struct MoreTagFilter {
    config: ExcerptConfig,
}

impl MoreTagFilter {
    pub fn new(config: ExcerptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExcerptConfig {
        &self.config
    }
}

impl PostFilter for MoreTagFilter {
    fn filter(&self, post: Post) -> Post {
        add_more_tag_with(post, &self.config)
    }

    fn name(&self) -> &str {
        "insert_more_tag"
    }
}

/// Registers the inserter on a pipeline's before-render chain.
pub fn register(chain: &mut BeforePostRender, config: ExcerptConfig) {
    chain.register(MoreTagFilter::new(config));
}
