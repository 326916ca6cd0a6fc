//! Fluent builder for `InlineOptions`

use super::types::InlineOptions;
use crate::inline::{InlineProcessor, InlineResult, make_inline_processor};

#[derive(Debug, Clone, Default)]
pub struct InlineOptionsBuilder {
    pub(crate) options: InlineOptions,
}

impl InlineOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish with the collected overrides
    #[must_use]
    pub fn build(self) -> InlineOptions {
        self.options
    }

    /// Finish and construct the processor in one step
    pub fn into_processor(self) -> InlineResult<InlineProcessor> {
        make_inline_processor(self.options)
    }
}
