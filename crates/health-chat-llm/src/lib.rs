//! LLM plumbing for the health chat app.
//!
//! Model loading, tokenized generation, and streaming live in an external
//! inference engine; this crate only builds prompts from extracted lab facts
//! and defines the engine-facing trait the app talks to.

pub mod generation;
pub mod prompts;

pub use generation::*;
pub use prompts::*;
