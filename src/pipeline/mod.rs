//! Processor registration and per-profile execution
//!
//! Processors are handed to the registry explicitly under a named profile
//! (e.g. `default`, `release`); nothing is looked up from ambient state.

pub mod registry;

pub use registry::{Processor, ProcessorRegistry, RunReport};
