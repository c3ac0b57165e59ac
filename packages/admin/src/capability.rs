//! Side effects the view needs from its host: asking the user to confirm a
//! destructive action and turning a picked file into a preview URL.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use common::Attachment;
use uuid::Uuid;

/// Yes/no confirmation before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Creates and revokes preview URLs for attached files.
pub trait ObjectUrls: Send + Sync {
    fn create(&self, file: &Attachment) -> String;
    fn revoke(&self, url: &str);
}

/// Confirms everything. Used for `--yes` and non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Answers from a fixed script and remembers every prompt it was shown.
///
/// Once the script runs out every further prompt is declined.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(false)
    }
}

/// Keeps attached files addressable by `blob:` URLs for as long as they are
/// not revoked.
#[derive(Debug, Default)]
pub struct InMemoryObjectUrls {
    live: Mutex<HashMap<String, String>>,
}

impl InMemoryObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name behind a live URL.
    pub fn resolve(&self, url: &str) -> Option<String> {
        self.live.lock().ok()?.get(url).cloned()
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }
}

impl ObjectUrls for InMemoryObjectUrls {
    fn create(&self, file: &Attachment) -> String {
        let url = format!("blob:slt-admin/{}", Uuid::new_v4());
        if let Ok(mut live) = self.live.lock() {
            live.insert(url.clone(), file.file_name.clone());
        }
        url
    }

    fn revoke(&self, url: &str) {
        if let Ok(mut live) = self.live.lock() {
            live.remove(url);
        }
    }
}
