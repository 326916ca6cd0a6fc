//! Content resolution through the build context
//!
//! The logger is passed in explicitly alongside the context rather than
//! captured by the resolver.

use super::errors::{InlineError, InlineResult};
use super::types::BuildContext;

/// Fatal-severity log sink supplied by the host pipeline
pub trait FatalLog: Send + Sync {
    fn fatal(&self, message: &str);
}

/// Default sink forwarding to the `log` facade at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFatal;

impl FatalLog for LogFatal {
    fn fatal(&self, message: &str) {
        log::error!(target: "inline_replacer::fatal", "{message}");
    }
}

/// Everything a replacer needs to resolve paths during one `process` call
#[derive(Clone, Copy)]
pub struct ResolveScope<'a> {
    pub context: &'a dyn BuildContext,
    pub logger: &'a dyn FatalLog,
}

impl<'a> ResolveScope<'a> {
    pub fn new(context: &'a dyn BuildContext, logger: &'a dyn FatalLog) -> Self {
        Self { context, logger }
    }

    pub fn resolve(&self, path: &str) -> InlineResult<&'a str> {
        resolve_content(self.logger, self.context, path)
    }
}

/// Look up the content to inline for `path`.
///
/// Succeeds only when a record exists and its content is non-empty. On failure
/// the sink receives `inline file: <path> not found` before the error is returned.
pub fn resolve_content<'a>(
    logger: &dyn FatalLog,
    context: &'a dyn BuildContext,
    path: &str,
) -> InlineResult<&'a str> {
    match context.get_file_by_path(path) {
        Some(record) if !record.data().is_empty() => {
            log::debug!("Resolved inline file {path} ({} bytes)", record.data().len());
            Ok(record.data())
        }
        _ => {
            let error = InlineError::ResolutionFailure {
                path: path.to_string(),
            };
            logger.fatal(&error.to_string());
            Err(error)
        }
    }
}
