//! Construction-time options for the inline processor

use std::fmt;
use std::sync::Arc;

use crate::inline::{Condition, FatalLog, ReplacementRule};

/// Shallow-override options for [`make_inline_processor`](crate::inline::make_inline_processor).
///
/// `None` keeps the default for that field. `Some` replaces the default
/// wholesale; nothing is merged below the top level.
#[derive(Clone, Default)]
pub struct InlineOptions {
    /// File-name globs the processor claims
    pub files: Option<Vec<String>>,
    /// Display name
    pub name: Option<String>,
    /// Default eligibility for rules without their own condition
    pub condition: Option<Condition>,
    /// Entire rule sequence, in application order
    pub replacements: Option<Vec<ReplacementRule>>,
    /// Fatal log sink supplied by the host pipeline
    pub logger: Option<Arc<dyn FatalLog>>,
}

impl InlineOptions {
    #[must_use]
    pub fn builder() -> super::builder::InlineOptionsBuilder {
        super::builder::InlineOptionsBuilder::new()
    }
}

impl fmt::Debug for InlineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineOptions")
            .field("files", &self.files)
            .field("name", &self.name)
            .field("condition", &self.condition)
            .field("replacements", &self.replacements)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
