//! Setter methods for `InlineOptionsBuilder`
//!
//! Each setter replaces the whole field, matching the shallow-override
//! semantics of `InlineOptions`.

use std::sync::Arc;

use super::builder::InlineOptionsBuilder;
use crate::inline::{Condition, FatalLog, ReplacementRule};

impl InlineOptionsBuilder {
    #[must_use]
    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.options.condition = Some(condition);
        self
    }

    /// Replace the entire default rule sequence
    #[must_use]
    pub fn replacements(mut self, rules: Vec<ReplacementRule>) -> Self {
        self.options.replacements = Some(rules);
        self
    }

    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn FatalLog>) -> Self {
        self.options.logger = Some(logger);
        self
    }
}
