// crates/more_marker/src/lib.rs

//! The excerpt marker shared by the inserter and by anything that later
//! cuts a post into teaser and body.

/// Exact form of the marker, as downstream renderers search for it.
pub const MORE_MARKER: &str = "<!-- more -->";

/// What actually gets spliced into a post: the marker surrounded by blank
/// lines so it always sits in a paragraph of its own.
pub const MORE_BLOCK: &str = "\n\n<!-- more -->\n\n";

/// Returns `true` if the content already carries the excerpt marker.
pub fn has_more_marker(content: &str) -> bool {
    content.contains(MORE_MARKER)
}

/// Splits the content at the first excerpt marker.
///
/// Returns the teaser (everything before the marker) and the remainder
/// (everything after it), or `None` if there is no marker.
pub fn split_excerpt(content: &str) -> Option<(&str, &str)> {
    content
        .find(MORE_MARKER)
        .map(|idx| (&content[..idx], &content[idx + MORE_MARKER.len()..]))
}
