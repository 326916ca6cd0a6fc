//! Eligibility predicates over raw opening-tag source
//!
//! Tag source is the matched opening tag without its leading `<`.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

/// Attribute token that opts a tag into inlining
pub const INLINE_MARKER: &str = "data-inline";

lazy_static! {
    static ref STYLESHEET_REL: Regex = Regex::new(r#"rel=("|')stylesheet("|')"#)
        .expect("BUG: hardcoded stylesheet rel regex is invalid - this is a compile-time bug");
}

/// True iff the tag source carries the inline marker (presence only, no value check)
#[must_use]
pub fn is_inline_tag(tag_source: &str) -> bool {
    has_marker(tag_source, INLINE_MARKER)
}

/// True iff the tag source contains `rel="stylesheet"` or `rel='stylesheet'`
#[must_use]
pub fn is_stylesheet(tag_source: &str) -> bool {
    STYLESHEET_REL.is_match(tag_source)
}

fn has_marker(tag_source: &str, marker: &str) -> bool {
    tag_source.contains(marker)
}

/// Shareable eligibility predicate
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Condition {
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Tag carries the default inline marker
    #[must_use]
    pub fn inline_tag() -> Self {
        Self::from_fn(is_inline_tag)
    }

    /// Tag carries the given marker token
    #[must_use]
    pub fn marker(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        Self::from_fn(move |source| has_marker(source, &marker))
    }

    /// Tag is a stylesheet link
    #[must_use]
    pub fn stylesheet() -> Self {
        Self::from_fn(is_stylesheet)
    }

    /// Both this and `other` must hold
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        Self::from_fn(move |source| self.matches(source) && other.matches(source))
    }

    #[must_use]
    pub fn matches(&self, tag_source: &str) -> bool {
        (self.0)(tag_source)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}
