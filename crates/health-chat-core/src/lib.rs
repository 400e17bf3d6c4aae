//! Health-Chat Core Library
//!
//! Local-first core for a mobile chat app that answers questions about a
//! user's uploaded lab reports.
//!
//! # Architecture
//!
//! ```text
//! Report PDF → Text layer decode → Line heuristic → TestResult list
//!                                                        │
//!                                        [Session accumulator, per app run]
//!                                                        │
//!                                              Context builder (llm crate)
//!                                                        │
//!                                              Prompt → Inference engine
//! ```
//!
//! # Core Principle
//!
//! **Extraction is pure and decode failures stay distinct from empty
//! results.** A report that decodes fine but yields nothing is a valid
//! zero-result outcome, never an error.
//!
//! # Modules
//!
//! - [`document`]: PDF text-layer decoding
//! - [`extractor`]: Line-oriented test-result heuristic
//! - [`models`]: Domain types (TestResult, ChatMessage)
//! - [`session`]: Per-run accumulator for results and transcript

pub mod document;
pub mod extractor;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use document::{DocumentError, DocumentResult};
pub use extractor::{ReportExtractor, DEFAULT_LOOKAHEAD_WINDOW, DEFAULT_NOISE_KEYWORDS};
pub use models::{ChatMessage, MessageSender, TestResult};
pub use session::ChatSession;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HealthChatError {
    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Session error: {0}")]
    SessionError(String),
}

impl From<document::DocumentError> for HealthChatError {
    fn from(e: document::DocumentError) -> Self {
        HealthChatError::DocumentError(e.to_string())
    }
}

impl From<serde_json::Error> for HealthChatError {
    fn from(e: serde_json::Error) -> Self {
        HealthChatError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for HealthChatError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HealthChatError::SessionError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Start a fresh chat session with the default extractor configuration.
#[uniffi::export]
pub fn new_session() -> Arc<HealthChatSession> {
    Arc::new(HealthChatSession {
        extractor: ReportExtractor::new(),
        state: Mutex::new(ChatSession::new()),
    })
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe session wrapper for FFI.
///
/// The mobile shell drives the whole pipeline through this object. It must
/// run `ingest_report_file` off the UI thread; the work itself is synchronous
/// and bounded.
#[derive(uniffi::Object)]
pub struct HealthChatSession {
    extractor: ReportExtractor,
    state: Mutex<ChatSession>,
}

#[uniffi::export]
impl HealthChatSession {
    // =========================================================================
    // Report Ingestion
    // =========================================================================

    /// Decode a PDF on disk and ingest its test results.
    ///
    /// Returns how many results this report added. Zero means the document
    /// decoded fine but nothing matched - callers surface that as "no test
    /// results found", not as a failure.
    pub fn ingest_report_file(&self, path: String) -> Result<u32, HealthChatError> {
        let text = document::extract_text(&path)?;
        self.ingest_report_text(text)
    }

    /// Ingest already-decoded report text.
    pub fn ingest_report_text(&self, text: String) -> Result<u32, HealthChatError> {
        let results = self.extractor.extract(&text);
        let mut state = self.state.lock()?;
        Ok(state.record_results(results) as u32)
    }

    // =========================================================================
    // Result Access
    // =========================================================================

    /// All results accumulated this session, in upload order.
    pub fn test_results(&self) -> Result<Vec<FfiTestResult>, HealthChatError> {
        let state = self.state.lock()?;
        Ok(state.results().iter().cloned().map(|r| r.into()).collect())
    }

    /// Number of accumulated results.
    pub fn result_count(&self) -> Result<u32, HealthChatError> {
        let state = self.state.lock()?;
        Ok(state.result_count() as u32)
    }

    /// Drop all accumulated results (e.g., "start over" in the UI).
    pub fn clear_results(&self) -> Result<(), HealthChatError> {
        let mut state = self.state.lock()?;
        state.clear_results();
        Ok(())
    }

    /// Export accumulated results as JSON.
    pub fn export_results_json(&self) -> Result<String, HealthChatError> {
        let state = self.state.lock()?;
        Ok(serde_json::to_string(state.results())?)
    }

    // =========================================================================
    // Transcript Operations
    // =========================================================================

    /// Append a user message to the transcript.
    pub fn push_user_message(&self, text: String) -> Result<FfiChatMessage, HealthChatError> {
        self.push_message(ChatMessage::user(text))
    }

    /// Append an assistant message to the transcript.
    pub fn push_assistant_message(
        &self,
        text: String,
    ) -> Result<FfiChatMessage, HealthChatError> {
        self.push_message(ChatMessage::assistant(text))
    }

    /// Append an app status message to the transcript.
    pub fn push_system_message(&self, text: String) -> Result<FfiChatMessage, HealthChatError> {
        self.push_message(ChatMessage::system(text))
    }

    /// The transcript in chronological order.
    pub fn messages(&self) -> Result<Vec<FfiChatMessage>, HealthChatError> {
        let state = self.state.lock()?;
        Ok(state.messages().iter().cloned().map(|m| m.into()).collect())
    }
}

impl HealthChatSession {
    fn push_message(&self, message: ChatMessage) -> Result<FfiChatMessage, HealthChatError> {
        let mut state = self.state.lock()?;
        state.push_message(message.clone());
        Ok(message.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe test result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTestResult {
    pub test_name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
}

impl From<TestResult> for FfiTestResult {
    fn from(result: TestResult) -> Self {
        Self {
            test_name: result.test_name,
            value: result.value,
            unit: result.unit,
            reference_range: result.reference_range,
        }
    }
}

impl From<FfiTestResult> for TestResult {
    fn from(result: FfiTestResult) -> Self {
        TestResult {
            test_name: result.test_name,
            value: result.value,
            unit: result.unit,
            reference_range: result.reference_range,
        }
    }
}

/// FFI-safe chat message.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChatMessage {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp: String,
}

impl From<ChatMessage> for FfiChatMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            text: message.text,
            sender: format!("{:?}", message.sender),
            timestamp: message.timestamp,
        }
    }
}
