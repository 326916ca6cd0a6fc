//! Runs the inline processor over a small in-memory site and prints the result.
//!
//! ```text
//! RUST_LOG=debug cargo run --example inline_demo
//! ```

use std::sync::Arc;

use anyhow::Result;
use html_inline_replacer::{InlineProcessor, MemoryBuildContext, Processor, ProcessorRegistry};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut context = MemoryBuildContext::new()
        .with_file(
            "index.html",
            r#"<html>
<head>
    <link data-inline rel="stylesheet" href="src/main.css">
    <link rel="stylesheet" href="src/print.css">
</head>
<body>
    <script data-inline src="src/boot.js"></script>
</body>
</html>"#,
        )
        .with_file("src/main.css", "body{margin:0}")
        .with_file("src/print.css", "@media print{}")
        .with_file("src/boot.js", "console.log('ready');");

    let inliner: Arc<dyn Processor> = Arc::new(InlineProcessor::new()?);

    let mut registry = ProcessorRegistry::new();
    registry.register("default", vec![inliner.clone()]);
    registry.register("release", vec![inliner]);

    let report = registry.run_profile("default", &mut context)?;
    for (processor, path) in &report.processed {
        log::info!("{processor} -> {path}");
    }

    if let Some(page) = context.get_mut("index.html") {
        println!("{}", page.data());
    }

    Ok(())
}
