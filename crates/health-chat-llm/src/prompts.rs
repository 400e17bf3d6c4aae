//! Chat prompts for the health assistant.
//!
//! The prompt grounds the model in whatever test results have been extracted
//! so far and reminds it to defer to healthcare providers.

use serde::{Deserialize, Serialize};

/// Header line above the extracted results in the prompt context.
pub const CONTEXT_HEADER: &str = "Patient's Medical Test Results:";

/// Context used before any report has been uploaded.
pub const EMPTY_CONTEXT: &str =
    "No medical reports have been uploaded yet. General health guidance can be provided.";

/// One extracted fact as the prompt layer sees it.
///
/// Kept local to this crate so the mobile shell can compose the core and llm
/// crates without a dependency between them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportFact {
    pub name: String,
    pub value: String,
}

impl ReportFact {
    pub fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Serialize extracted facts into the bullet-list context block.
pub fn build_medical_context(facts: &[ReportFact]) -> String {
    if facts.is_empty() {
        return EMPTY_CONTEXT.to_string();
    }

    let mut context = String::from(CONTEXT_HEADER);
    context.push('\n');

    for fact in facts {
        context.push_str(&format!("- {}: {}\n", fact.name, fact.value));
    }

    context
}

/// Build the full generation prompt for one user question.
pub fn make_chat_prompt(user_query: &str, context: &str) -> String {
    format!(
        r#"You are a knowledgeable health assistant analyzing medical reports and answering health questions.

Medical Data Available:
{}

User Question: {}

Please provide a clear, helpful response based on the medical data available. If you don't have relevant data for the specific question, provide general health guidance while noting the limitation. Keep responses professional, informative, and remind users to consult healthcare providers for medical decisions.

Response:"#,
        context, user_query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_formatting() {
        let facts = vec![
            ReportFact::new("HEMOGLOBIN".into(), "13.5".into()),
            ReportFact::new("WBC COUNT".into(), "7200".into()),
        ];

        let context = build_medical_context(&facts);

        assert!(context.starts_with(CONTEXT_HEADER));
        assert!(context.contains("- HEMOGLOBIN: 13.5\n"));
        assert!(context.contains("- WBC COUNT: 7200\n"));
    }

    #[test]
    fn test_empty_context_fallback() {
        assert_eq!(build_medical_context(&[]), EMPTY_CONTEXT);
    }

    #[test]
    fn test_context_preserves_order() {
        let facts = vec![
            ReportFact::new("ALPHA".into(), "1".into()),
            ReportFact::new("BETA".into(), "2".into()),
        ];

        let context = build_medical_context(&facts);
        let alpha = context.find("ALPHA").unwrap();
        let beta = context.find("BETA").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_chat_prompt() {
        let context = build_medical_context(&[ReportFact::new("MCV".into(), "88".into())]);
        let prompt = make_chat_prompt("Is my MCV normal?", &context);

        assert!(prompt.contains("health assistant"));
        assert!(prompt.contains("- MCV: 88"));
        assert!(prompt.contains("User Question: Is my MCV normal?"));
        assert!(prompt.contains("consult healthcare providers"));
        assert!(prompt.ends_with("Response:"));
    }

    #[test]
    fn test_chat_prompt_without_reports() {
        let prompt = make_chat_prompt("How much water should I drink?", EMPTY_CONTEXT);

        assert!(prompt.contains("No medical reports have been uploaded yet"));
        assert!(!prompt.contains(CONTEXT_HEADER));
    }
}
