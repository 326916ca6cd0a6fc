//! Test utilities shared by the inline replacer test suite

use std::sync::{Arc, Mutex};

use html_inline_replacer::{FatalLog, InlineOptions, InlineProcessor, make_inline_processor};

/// Fatal sink that records every message it receives
#[derive(Default)]
pub struct RecordingLog {
    messages: Mutex<Vec<String>>,
}

impl RecordingLog {
    #[allow(dead_code)]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("log mutex poisoned").clone()
    }
}

impl FatalLog for RecordingLog {
    fn fatal(&self, message: &str) {
        self.messages
            .lock()
            .expect("log mutex poisoned")
            .push(message.to_string());
    }
}

/// Default processor wired to a recording sink
#[allow(dead_code)]
pub fn recording_processor() -> (InlineProcessor, Arc<RecordingLog>) {
    let log = Arc::new(RecordingLog::default());
    let processor = make_inline_processor(InlineOptions {
        logger: Some(log.clone() as Arc<dyn FatalLog>),
        ..InlineOptions::default()
    })
    .expect("default options are valid");
    (processor, log)
}
