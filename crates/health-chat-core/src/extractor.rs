//! Lab-report test-result extractor.
//!
//! Turns the stripped text layer of a lab report into (test name, value)
//! pairs using a line-oriented heuristic:
//! - Noise filtering (report boilerplate, separators, short fragments)
//! - Name-candidate classification (capitalization shape of report headings)
//! - Value-candidate classification (bare numeric tokens)
//! - Bounded lookahead pairing of names with the next value line
//!
//! The heuristic is deliberately permissive: the output feeds a language
//! model as advisory context, not a clinical record, so false positives are
//! tolerated over false negatives.

use std::collections::HashSet;

use crate::models::TestResult;

/// Number of lines scanned after a name candidate for its value.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 6;

/// Minimum line length for a name candidate.
const MIN_NAME_LEN: usize = 3;

/// Minimum fraction of alphabetic characters that must be uppercase for a
/// line to read as a report heading rather than prose.
const MIN_UPPERCASE_RATIO: f64 = 0.5;

/// Boilerplate keywords whose presence (case-insensitive) marks a line as
/// noise. Extendable at runtime via [`ReportExtractor::add_noise_keyword`].
pub const DEFAULT_NOISE_KEYWORDS: [&str; 12] = [
    "TEST PARAMETER",
    "REFERENCE RANGE",
    "RESULT",
    "UNIT",
    "Page",
    "Report Status",
    "Collected On",
    "Reported On",
    "Method:",
    "Automated",
    "Lab ID",
    "Registered On",
];

/// Extractor for test-result pairs from raw report text.
pub struct ReportExtractor {
    /// Noise keywords, stored uppercased for case-insensitive matching
    noise_keywords: Vec<String>,
    /// How many lines past a name candidate to scan for its value
    lookahead_window: usize,
}

impl Default for ReportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportExtractor {
    /// Create an extractor with the default noise keywords and window.
    pub fn new() -> Self {
        Self {
            noise_keywords: DEFAULT_NOISE_KEYWORDS
                .iter()
                .map(|kw| kw.to_uppercase())
                .collect(),
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
        }
    }

    /// Override the lookahead window size.
    pub fn with_lookahead_window(mut self, window: usize) -> Self {
        self.lookahead_window = window;
        self
    }

    /// Add a noise keyword for a new report layout.
    pub fn add_noise_keyword(&mut self, keyword: &str) {
        self.noise_keywords.push(keyword.to_uppercase());
    }

    /// Extract all test results from raw report text.
    ///
    /// Pure function of the input: never fails, an empty result list is a
    /// valid outcome for text with nothing recognizable in it.
    pub fn extract(&self, raw_text: &str) -> Vec<TestResult> {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut results = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if self.is_noise_line(line) {
                i += 1;
                continue;
            }

            if self.is_name_candidate(line) {
                let window_end = usize::min(i + self.lookahead_window + 1, lines.len());

                for j in (i + 1)..window_end {
                    if is_value_candidate(lines[j]) {
                        results.push(TestResult::new(
                            clean_test_name(line),
                            lines[j].to_string(),
                        ));
                        // Consume the value line so it is never revisited
                        i = j;
                        break;
                    }
                }
            }

            i += 1;
        }

        dedup_preserving_order(results)
    }

    /// Check whether a line is report boilerplate to be ignored entirely.
    pub fn is_noise_line(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        if self
            .noise_keywords
            .iter()
            .any(|kw| upper.contains(kw.as_str()))
        {
            return true;
        }

        line.chars().count() <= 2 || line.chars().all(|c| matches!(c, '-' | ':' | '/'))
    }

    /// Check whether a line's capitalization shape reads as a test label.
    pub fn is_name_candidate(&self, line: &str) -> bool {
        if line.chars().count() < MIN_NAME_LEN {
            return false;
        }
        match line.chars().next() {
            Some(first) if first.is_uppercase() => {}
            _ => return false,
        }
        if self.is_noise_line(line) {
            return false;
        }

        let letters: Vec<char> = line.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.is_empty() {
            return false;
        }

        let uppercase = letters.iter().filter(|c| c.is_uppercase()).count();
        (uppercase as f64 / letters.len() as f64) >= MIN_UPPERCASE_RATIO
    }
}

/// Check whether a line is a bare numeric result value.
///
/// Only digits and the decimal point qualify, and at least one digit is
/// required, so separator fragments like "." or "..." never match.
pub fn is_value_candidate(line: &str) -> bool {
    !line.is_empty()
        && line.chars().all(|c| c.is_ascii_digit() || c == '.')
        && line.chars().any(|c| c.is_ascii_digit())
}

/// Clean a matched name line: collapse whitespace runs to single spaces,
/// strip trailing colons, trim. Never applied to value lines.
pub fn clean_test_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(':').trim().to_string()
}

/// Remove duplicate records by full field equality, first occurrence wins.
fn dedup_preserving_order(results: Vec<TestResult>) -> Vec<TestResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.clone()))
        .collect()
}
