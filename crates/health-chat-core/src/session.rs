//! Chat session state.
//!
//! A session owns the chat transcript and every test result extracted during
//! the app session, accumulated across report uploads. The extractor itself
//! stays stateless; this is the explicit caller-owned collection the prompt
//! builder reads from.

use crate::models::{ChatMessage, TestResult};

/// Accumulated state for one app session.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    results: Vec<TestResult>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append results from one report to the session accumulator.
    ///
    /// Returns how many results were added so the caller can phrase
    /// "extracted N results" vs "no test results found". Zero is a valid
    /// outcome, not an error. Results are kept in upload order; duplicates
    /// across uploads are kept (per-report de-duplication already happened
    /// in the extractor).
    pub fn record_results(&mut self, results: Vec<TestResult>) -> usize {
        let added = results.len();
        self.results.extend(results);
        added
    }

    /// All results accumulated so far, in upload order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Number of accumulated results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Drop all accumulated results.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Append a message to the transcript.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The transcript in chronological order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
