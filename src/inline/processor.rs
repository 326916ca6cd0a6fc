//! The inline processor: rule orchestration and the pipeline-facing contract

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::conditions::Condition;
use super::errors::{InlineError, InlineResult};
use super::resolver::{FatalLog, LogFatal, ResolveScope};
use super::rules::{ReplacementRule, default_replacements};
use super::scanner::TagPattern;
use super::types::{BuildContext, FileRecord};
use crate::config::InlineOptions;

/// File-name globs claimed by default
pub const DEFAULT_FILES: [&str; 5] = ["*.html", "*.htm", "*.phtml", "*.tpl", "*.vm"];

/// Display name used by default
pub const DEFAULT_NAME: &str = "InlineReplacer";

/// A configured inline processor.
///
/// Built once by [`make_inline_processor`]; holds no per-file state.
#[derive(Clone)]
pub struct InlineProcessor {
    files: Vec<String>,
    name: String,
    condition: Condition,
    replacements: Vec<ReplacementRule>,
    logger: Arc<dyn FatalLog>,
    file_patterns: Vec<glob::Pattern>,
    tag_patterns: Vec<TagPattern>,
}

/// Build a processor from defaults shallow-overridden by `options`.
///
/// Each `Some` field replaces its default wholesale: supplying `replacements`
/// swaps out the entire default rule list.
pub fn make_inline_processor(options: InlineOptions) -> InlineResult<InlineProcessor> {
    let InlineOptions {
        files,
        name,
        condition,
        replacements,
        logger,
    } = options;

    let files =
        files.unwrap_or_else(|| DEFAULT_FILES.iter().map(|f| (*f).to_string()).collect());
    let replacements = replacements.unwrap_or_else(default_replacements);

    let file_patterns = files
        .iter()
        .map(|f| {
            glob::Pattern::new(f).map_err(|e| InlineError::InvalidPattern {
                pattern: f.clone(),
                message: e.to_string(),
            })
        })
        .collect::<InlineResult<Vec<_>>>()?;

    let tag_patterns = replacements
        .iter()
        .map(|rule| TagPattern::new(&rule.tag, &rule.attribute))
        .collect::<InlineResult<Vec<_>>>()?;

    Ok(InlineProcessor {
        files,
        name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        condition: condition.unwrap_or_else(Condition::inline_tag),
        replacements,
        logger: logger.unwrap_or_else(|| Arc::new(LogFatal) as Arc<dyn FatalLog>),
        file_patterns,
        tag_patterns,
    })
}

impl InlineProcessor {
    /// Processor with every default in place
    pub fn new() -> InlineResult<Self> {
        make_inline_processor(InlineOptions::default())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Default eligibility for rules that carry no condition of their own
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub fn replacements(&self) -> &[ReplacementRule] {
        &self.replacements
    }

    /// True iff the file name at `path` matches one of the claimed globs
    #[must_use]
    pub fn claims(&self, path: &str) -> bool {
        let Some(file_name) = Path::new(path).file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.file_patterns.iter().any(|p| p.matches(file_name))
    }

    /// Apply every rule, in order, to `content` and return the rewritten text.
    ///
    /// Later rules see the output of earlier ones. Any resolution failure
    /// aborts the whole transform.
    pub fn process_content(&self, content: &str, context: &dyn BuildContext) -> InlineResult<String> {
        let scope = ResolveScope::new(context, self.logger.as_ref());
        let mut output = content.to_string();

        for (rule, pattern) in self.replacements.iter().zip(&self.tag_patterns) {
            let condition = rule.condition.as_ref().unwrap_or(&self.condition);
            let replace = rule.replacer.replacer(scope);
            let mut inlined = 0usize;

            output = pattern.replace(
                &output,
                |source| condition.matches(source),
                |path| {
                    let replacement = replace(path)?;
                    inlined += 1;
                    Ok(replacement)
                },
            )?;

            if inlined > 0 {
                log::debug!("{}: inlined {inlined} <{}> tag(s)", self.name, rule.tag);
            }
        }

        Ok(output)
    }

    /// Rewrite `file` in place, then signal completion.
    ///
    /// On error nothing is written back and `done` is not called.
    pub fn process<F>(&self, file: &mut FileRecord, context: &dyn BuildContext, done: F) -> InlineResult<()>
    where
        F: FnOnce(),
    {
        let output = self.process_content(file.data(), context).inspect_err(|e| {
            log::warn!("{}: aborting {}: {e}", self.name, file.path());
        })?;

        file.set_data(output);
        done();
        Ok(())
    }
}

impl fmt::Debug for InlineProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineProcessor")
            .field("name", &self.name)
            .field("files", &self.files)
            .field("replacements", &self.replacements)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::rules::WrapResolved;
    use crate::inline::types::MemoryBuildContext;

    #[test]
    fn test_defaults() {
        let p = InlineProcessor::new().unwrap();
        assert_eq!(p.name(), "InlineReplacer");
        assert_eq!(p.files(), DEFAULT_FILES);
        assert_eq!(p.replacements().len(), 2);
    }

    #[test]
    fn test_claims_by_file_name() {
        let p = InlineProcessor::new().unwrap();
        assert!(p.claims("src/index.html"));
        assert!(p.claims("tpl/page.tpl"));
        assert!(p.claims("view.vm"));
        assert!(!p.claims("src/main.js"));
        assert!(!p.claims("index.html.bak"));
    }

    #[test]
    fn test_replacements_override_is_wholesale() {
        let options = InlineOptions {
            replacements: Some(vec![ReplacementRule::new(
                "img",
                "src",
                WrapResolved::new("<svg-inline>", "</svg-inline>"),
            )]),
            ..InlineOptions::default()
        };
        let p = make_inline_processor(options).unwrap();
        assert_eq!(p.replacements().len(), 1);
        assert_eq!(p.name(), DEFAULT_NAME);

        let ctx = MemoryBuildContext::new()
            .with_file("a.svg", "<path/>")
            .with_file("a.css", "p{}");
        let html = r#"<img data-inline src="a.svg"><link data-inline rel="stylesheet" href="a.css">"#;
        let out = p.process_content(html, &ctx).unwrap();
        assert_eq!(
            out,
            r#"<svg-inline><path/></svg-inline><link data-inline rel="stylesheet" href="a.css">"#
        );
    }

    #[test]
    fn test_rule_without_condition_uses_processor_default() {
        let options = InlineOptions {
            condition: Some(Condition::marker("inline")),
            replacements: Some(vec![ReplacementRule::new(
                "script",
                "src",
                WrapResolved::new("<script>", "</script>"),
            )]),
            ..InlineOptions::default()
        };
        let p = make_inline_processor(options).unwrap();
        let ctx = MemoryBuildContext::new().with_file("a.js", "go()");

        let out = p
            .process_content(r#"<script inline src="a.js"><script src="a.js">"#, &ctx)
            .unwrap();
        assert_eq!(out, r#"<script>go()</script><script src="a.js">"#);
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let options = InlineOptions {
            files: Some(vec!["[".to_string()]),
            ..InlineOptions::default()
        };
        assert!(matches!(
            make_inline_processor(options),
            Err(InlineError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_failure_leaves_file_untouched() {
        let p = InlineProcessor::new().unwrap();
        let ctx = MemoryBuildContext::new().with_file("a.css", "p{}");
        let original = r#"<link data-inline rel="stylesheet" href="a.css"><script data-inline src="gone.js">"#;
        let mut file = FileRecord::new("index.html", original);
        let mut called = false;

        let err = p.process(&mut file, &ctx, || called = true).unwrap_err();
        assert_eq!(err.missing_path(), Some("gone.js"));
        assert_eq!(file.data(), original);
        assert!(!called);
    }
}
