use std::collections::VecDeque;

use anyhow::{
    Error,
    Result,
};
use packbot::{
    Recognizer,
    ScannedEntry,
    Screenshot,
};

/// Recognizer that serves scripted pages.
///
/// Once the script runs out, the final page repeats, the same way a real list
/// keeps showing its last screen after scrolling stops. An empty script
/// always recognizes an empty page.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    pages: VecDeque<Vec<ScannedEntry>>,
    last: Vec<ScannedEntry>,
    fail_next: bool,
}

impl ScriptedRecognizer {
    pub fn new<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = Vec<ScannedEntry>>,
    {
        Self {
            pages: pages.into_iter().collect(),
            last: Vec::new(),
            fail_next: false,
        }
    }

    /// Arms the next recognition to fail, as if the capture were unreadable.
    pub fn fail_next_page(&mut self) {
        self.fail_next = true;
    }
}

impl Recognizer for ScriptedRecognizer {
    fn recognize(
        &mut self,
        _screenshot: &Screenshot,
        track_quantity: bool,
    ) -> Result<Vec<ScannedEntry>> {
        if self.fail_next {
            self.fail_next = false;
            return Err(Error::msg("unreadable capture"));
        }
        let page = match self.pages.pop_front() {
            Some(page) => {
                self.last = page.clone();
                page
            }
            None => self.last.clone(),
        };
        if track_quantity {
            Ok(page)
        } else {
            Ok(page
                .into_iter()
                .map(|entry| ScannedEntry::name_only(entry.name))
                .collect())
        }
    }
}
