//! Text generation over an external inference engine.
//!
//! The engine is opaque to the rest of the app: it can generate text from a
//! prompt and report whether a model is loaded, nothing more. [`MockGenerator`]
//! implements the trait deterministically for testing without model weights.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No model is loaded")]
    ModelNotLoaded,

    #[error("Inference error: {0}")]
    Inference(String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Options forwarded to the engine for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

/// Shown instead of a whitespace-only engine response.
pub const BLANK_RESPONSE_FALLBACK: &str = "I apologize, but I couldn't generate a response. \
     Please ensure the AI model is properly loaded and try again.";

/// The engine-facing interface.
pub trait TextGenerator {
    /// Generate a response for a fully-built prompt.
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> GenerationResult<String>;

    /// Whether a model is currently loaded and ready.
    fn is_model_loaded(&self) -> bool;

    /// Name of the loaded model, if any.
    fn model_name(&self) -> Option<String>;
}

/// Replace a whitespace-only response with the user-facing fallback.
pub fn fallback_if_blank(response: String) -> String {
    if response.trim().is_empty() {
        BLANK_RESPONSE_FALLBACK.to_string()
    } else {
        response
    }
}

/// Mock generator for testing without actual LLM inference.
pub struct MockGenerator {
    loaded: bool,
    canned_response: Option<String>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// A loaded mock that echoes a summary of the prompt.
    pub fn new() -> Self {
        Self {
            loaded: true,
            canned_response: None,
        }
    }

    /// A mock with no model loaded.
    pub fn unloaded() -> Self {
        Self {
            loaded: false,
            canned_response: None,
        }
    }

    /// A loaded mock that always answers with the given text.
    pub fn with_response(response: &str) -> Self {
        Self {
            loaded: true,
            canned_response: Some(response.to_string()),
        }
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> GenerationResult<String> {
        if !self.loaded {
            return Err(GenerationError::ModelNotLoaded);
        }

        let response = match &self.canned_response {
            Some(canned) => canned.clone(),
            None => format!("[mock response to a {}-character prompt]", prompt.len()),
        };

        // Honor max_tokens roughly, one whitespace-delimited word per token
        let truncated: Vec<&str> = response
            .split_whitespace()
            .take(options.max_tokens as usize)
            .collect();

        Ok(truncated.join(" "))
    }

    fn is_model_loaded(&self) -> bool {
        self.loaded
    }

    fn model_name(&self) -> Option<String> {
        self.loaded.then(|| "mock-model".to_string())
    }
}
