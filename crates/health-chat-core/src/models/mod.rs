//! Domain models for the health-chat system.

mod chat;
mod report;

pub use chat::*;
pub use report::*;
