//! Replacement rules: which tags to inline and what to put in their place

use std::fmt;
use std::sync::Arc;

use super::conditions::{Condition, INLINE_MARKER};
use super::errors::InlineResult;
use super::resolver::ResolveScope;

/// Function from a resolved attribute value to replacement markup
pub type PathReplacer<'a> = Box<dyn Fn(&str) -> InlineResult<String> + 'a>;

/// Produces a path replacer bound to one build context.
///
/// Called once per rule per `process` call.
pub trait ReplacerFactory: Send + Sync {
    fn replacer<'a>(&'a self, scope: ResolveScope<'a>) -> PathReplacer<'a>;
}

impl<F> ReplacerFactory for F
where
    F: for<'a> Fn(ResolveScope<'a>) -> PathReplacer<'a> + Send + Sync,
{
    fn replacer<'a>(&'a self, scope: ResolveScope<'a>) -> PathReplacer<'a> {
        self(scope)
    }
}

/// Resolves the referenced file and wraps its content between two literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapResolved {
    pub open: String,
    pub close: String,
}

impl WrapResolved {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl ReplacerFactory for WrapResolved {
    fn replacer<'a>(&'a self, scope: ResolveScope<'a>) -> PathReplacer<'a> {
        Box::new(move |path: &str| {
            let content = scope.resolve(path)?;
            let mut out = String::with_capacity(self.open.len() + content.len() + self.close.len());
            out.push_str(&self.open);
            out.push_str(content);
            out.push_str(&self.close);
            Ok(out)
        })
    }
}

/// One inlining transform: tag + attribute + eligibility + replacement
#[derive(Clone)]
pub struct ReplacementRule {
    pub tag: String,
    pub attribute: String,
    /// When `None`, the processor's default condition applies. A rule that
    /// should fire on every tag needs `Condition::from_fn(|_| true)`.
    pub condition: Option<Condition>,
    pub replacer: Arc<dyn ReplacerFactory>,
}

impl ReplacementRule {
    pub fn new(
        tag: impl Into<String>,
        attribute: impl Into<String>,
        replacer: impl ReplacerFactory + 'static,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            condition: None,
            replacer: Arc::new(replacer),
        }
    }

    /// Rule whose replacer is a closure over the resolve scope
    pub fn from_fn<F>(tag: impl Into<String>, attribute: impl Into<String>, factory: F) -> Self
    where
        F: for<'a> Fn(ResolveScope<'a>) -> PathReplacer<'a> + Send + Sync + 'static,
    {
        Self::new(tag, attribute, factory)
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

impl fmt::Debug for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementRule")
            .field("tag", &self.tag)
            .field("attribute", &self.attribute)
            .field("condition", &self.condition.is_some())
            .finish_non_exhaustive()
    }
}

/// Default rule sequence using the standard `data-inline` marker
#[must_use]
pub fn default_replacements() -> Vec<ReplacementRule> {
    replacements_for_marker(INLINE_MARKER)
}

/// Default rule sequence keyed on a custom marker token.
///
/// 1. `<link href>` marked and `rel="stylesheet"` becomes `<style>...</style>`
/// 2. `<script src>` marked becomes `<script>` + content. No closing tag is
///    emitted; the source document's own `</script>` follows.
#[must_use]
pub fn replacements_for_marker(marker: &str) -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new("link", "href", WrapResolved::new("<style>", "</style>"))
            .with_condition(Condition::marker(marker).and(Condition::stylesheet())),
        ReplacementRule::new("script", "src", WrapResolved::new("<script>", ""))
            .with_condition(Condition::marker(marker)),
    ]
}
