//! Tag inlining
//!
//! Scans rendered markup for `<link>`/`<script>` tags opted in with a marker
//! attribute, resolves the referenced file through the build context, and
//! substitutes its content for the tag.

pub mod conditions;
pub mod errors;
pub mod processor;
pub mod resolver;
pub mod rules;
pub mod scanner;
pub mod types;

pub use conditions::{Condition, INLINE_MARKER, is_inline_tag, is_stylesheet};
pub use errors::{InlineError, InlineResult};
pub use processor::{DEFAULT_FILES, DEFAULT_NAME, InlineProcessor, make_inline_processor};
pub use resolver::{FatalLog, LogFatal, ResolveScope, resolve_content};
pub use rules::{
    PathReplacer, ReplacementRule, ReplacerFactory, WrapResolved, default_replacements,
    replacements_for_marker,
};
pub use scanner::{TagMatch, TagPattern, replace_tag};
pub use types::{BuildContext, FileRecord, MemoryBuildContext};
