//! Explicit processor registry

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use crate::inline::{BuildContext, FileRecord, InlineProcessor, MemoryBuildContext};

/// A build stage operating on one file at a time
pub trait Processor: Send + Sync {
    fn name(&self) -> &str;

    /// File-name globs this processor claims
    fn files(&self) -> &[String];

    fn claims(&self, path: &str) -> bool;

    /// Transform `file`. `done` is invoked exactly once on success and never on error.
    fn process(
        &self,
        file: &mut FileRecord,
        context: &dyn BuildContext,
        done: &mut dyn FnMut(),
    ) -> Result<()>;
}

impl Processor for InlineProcessor {
    fn name(&self) -> &str {
        InlineProcessor::name(self)
    }

    fn files(&self) -> &[String] {
        InlineProcessor::files(self)
    }

    fn claims(&self, path: &str) -> bool {
        InlineProcessor::claims(self, path)
    }

    fn process(
        &self,
        file: &mut FileRecord,
        context: &dyn BuildContext,
        done: &mut dyn FnMut(),
    ) -> Result<()> {
        InlineProcessor::process(self, file, context, done)?;
        Ok(())
    }
}

/// Outcome of running one profile over a build context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// (processor name, file path) in execution order
    pub processed: Vec<(String, String)>,
}

/// Named, ordered processor lists
#[derive(Default, Clone)]
pub struct ProcessorRegistry {
    profiles: BTreeMap<String, Vec<Arc<dyn Processor>>>,
}

impl ProcessorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the processor list for `profile`
    pub fn register(&mut self, profile: impl Into<String>, processors: Vec<Arc<dyn Processor>>) {
        self.profiles.insert(profile.into(), processors);
    }

    /// Append one processor to `profile`, creating it if needed
    pub fn push(&mut self, profile: impl Into<String>, processor: Arc<dyn Processor>) {
        self.profiles.entry(profile.into()).or_default().push(processor);
    }

    #[must_use]
    pub fn profile(&self, profile: &str) -> Option<&[Arc<dyn Processor>]> {
        self.profiles.get(profile).map(Vec::as_slice)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Run every processor of `profile` in order over the files it claims.
    ///
    /// Files are visited in path order. Each processed file is committed back
    /// to the context before the next one runs. The first failure stops the
    /// run; the failing file keeps its previous content.
    pub fn run_profile(&self, profile: &str, context: &mut MemoryBuildContext) -> Result<RunReport> {
        let Some(processors) = self.profiles.get(profile) else {
            bail!("Unknown processor profile: {profile}");
        };

        let mut report = RunReport::default();

        for processor in processors {
            for path in context.paths() {
                if !processor.claims(&path) {
                    continue;
                }

                let Some(record) = context.get_file_by_path(&path) else {
                    continue;
                };
                let mut file = record.clone();
                let mut completions = 0usize;

                processor
                    .process(&mut file, &*context, &mut || completions += 1)
                    .with_context(|| format!("{} failed on {path}", processor.name()))?;

                if completions != 1 {
                    log::warn!(
                        "{} signalled completion {completions} times for {path}",
                        processor.name()
                    );
                }

                context.insert(file);
                report.processed.push((processor.name().to_string(), path));
            }
        }

        log::info!(
            "Profile '{profile}' processed {} file(s)",
            report.processed.len()
        );
        Ok(report)
    }
}
