//! Lab-report models.

use serde::{Deserialize, Serialize};

/// A single extracted test result from a lab report.
///
/// Only constructed once both a qualifying name line and a qualifying value
/// line have been paired up by the extractor; no partial records exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TestResult {
    /// Cleaned, human-readable test label (e.g., "HEMOGLOBIN")
    pub test_name: String,
    /// The numeric-like result exactly as it appeared in the text
    pub value: String,
    /// Measurement unit - reserved, not populated by the line heuristic
    #[serde(default)]
    pub unit: String,
    /// Reference range - reserved, not populated by the line heuristic
    #[serde(default)]
    pub reference_range: String,
}

impl TestResult {
    /// Create a test result from a name/value pair.
    pub fn new(test_name: String, value: String) -> Self {
        Self {
            test_name,
            value,
            unit: String::new(),
            reference_range: String::new(),
        }
    }
}
