pub mod config;
pub mod inline;
pub mod pipeline;

pub use config::{InlineOptions, InlineOptionsBuilder, InlineSettings};
pub use inline::{
    BuildContext, Condition, FatalLog, FileRecord, InlineError, InlineProcessor, InlineResult,
    LogFatal, MemoryBuildContext, ReplacementRule, ReplacerFactory, WrapResolved,
    make_inline_processor,
};
pub use pipeline::{Processor, ProcessorRegistry, RunReport};
