//! Configuration for the inline processor
//!
//! `InlineOptions` is the shallow-override options object, `InlineOptionsBuilder`
//! builds it fluently, and `InlineSettings` is its JSON-loadable subset.

// Sub-modules
pub mod builder;
pub mod methods;
pub mod settings;
pub mod types;

// Re-exports for public API
pub use builder::InlineOptionsBuilder;
pub use settings::InlineSettings;
pub use types::InlineOptions;
