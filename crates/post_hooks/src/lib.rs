// crates/post_hooks/src/lib.rs

//! `post_hooks` — the record a publishing pipeline hands to its
//! before-render filters, and an explicit chain to run those filters.
//!
//!  * The chain is owned by the pipeline; nothing is registered globally.
//!  * Lower priority runs first, equal priorities keep registration order.

/// Priority given to filters registered without an explicit one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// A post as seen by before-render filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    /// Layout classifier from the front matter ("post", "page", ...).
    pub layout: String,
    /// Raw body text, before any rendering.
    pub content: String,
    /// Path of the post inside the site; only used for diagnostics.
    pub source: String,
}

impl Post {
    pub fn new(layout: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            content: content.into(),
            source: String::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// A filter invoked on every post before it is rendered.
pub trait PostFilter: Send + Sync {
    /// Takes the post by value and returns it, modified or not.
    fn filter(&self, post: Post) -> Post;

    /// Short name used in log output.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> PostFilter for F
where
    F: Fn(Post) -> Post + Send + Sync,
{
    fn filter(&self, post: Post) -> Post {
        self(post)
    }
}

struct Registered {
    priority: i32,
    filter: Box<dyn PostFilter>,
}

/// The "before post render" extension point.
#[derive(Default)]
pub struct BeforePostRender {
    filters: Vec<Registered>,
}

impl BeforePostRender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter with [`DEFAULT_PRIORITY`].
    pub fn register<P: PostFilter + 'static>(&mut self, filter: P) {
        self.register_with_priority(DEFAULT_PRIORITY, filter);
    }

    /// Registers a filter; lower priorities run earlier.
    pub fn register_with_priority<P: PostFilter + 'static>(&mut self, priority: i32, filter: P) {
        // Insert after every filter with priority <= the new one so that
        // registration order is kept within a priority.
        let idx = self.filters.partition_point(|r| r.priority <= priority);
        self.filters.insert(
            idx,
            Registered {
                priority,
                filter: Box::new(filter),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Threads the post through every registered filter in order.
    pub fn run(&self, post: Post) -> Post {
        self.filters.iter().fold(post, |post, registered| {
            log::trace!(
                "before_post_render: {} (priority {}) on '{}'",
                registered.filter.name(),
                registered.priority,
                post.source
            );
            registered.filter.filter(post)
        })
    }
}
