//! Prompt templates for the enrichment flow

use crate::enrichment::verdict::{ACCEPT_TOKEN, REJECT_TOKEN};

/// Templates for the Executor task and the Planner's validation request
pub struct EnrichmentPromptTemplate;

impl EnrichmentPromptTemplate {
    /// System prompt framing the Executor role
    pub fn executor_system() -> &'static str {
        r#"You are a data enrichment assistant.
Your task is to analyze one data row and provide enrichment attributes.
Return ONLY a flat JSON object: each key is an attribute name and each value is the enrichment value as a string.
Put explanations and supporting weblinks in an "evidence" field only when the task asks for justification, to keep the other fields clean."#
    }

    /// User prompt carrying one row and the enrichment command
    pub fn executor_task(row_json: &str, command: &str, request_evidence: bool) -> String {
        let evidence_note = if request_evidence {
            "Include your explanation and an evidence weblink in an \"evidence\" field."
        } else {
            "Do not include explanations outside the JSON object."
        };
        format!(
            r#"I need you to enrich the following data row:

DATA ROW:
{row_json}

ENRICHMENT TASK:
{command}

Return ONLY a JSON object with the enriched attributes as key-value pairs. {evidence_note}"#
        )
    }

    /// System prompt framing the validation judge
    pub fn validation_system() -> &'static str {
        r#"You are a validation assistant. Your task is to determine if the enrichment data provided matches the requirements and is likely to be accurate.
Respond with your validation result and reasoning."#
    }

    /// User prompt asking for a verdict on one enrichment result
    pub fn validation_request(row_json: &str, command: &str, result_json: &str) -> String {
        format!(
            r#"Please validate the following enrichment result:

ORIGINAL DATA ROW:
{row_json}

ENRICHMENT TASK:
{command}

ENRICHMENT RESULT:
{result_json}

Does this enrichment result look reasonable and likely accurate with a mid-to-low bar of confidence?
Begin your answer with '{ACCEPT_TOKEN}' if yes or '{REJECT_TOKEN}' if not, followed by your reasoning."#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_task_contains_row_and_command() {
        let prompt =
            EnrichmentPromptTemplate::executor_task(r#"{"name": "Ada"}"#, "add a country", false);
        assert!(prompt.contains(r#"{"name": "Ada"}"#));
        assert!(prompt.contains("add a country"));
        assert!(!prompt.contains("evidence weblink"));
    }

    #[test]
    fn test_executor_task_evidence_request() {
        let prompt = EnrichmentPromptTemplate::executor_task("{}", "add sources", true);
        assert!(prompt.contains("evidence weblink"));
    }

    #[test]
    fn test_validation_request_names_both_tokens() {
        let prompt = EnrichmentPromptTemplate::validation_request("{}", "cmd", "{}");
        assert!(prompt.contains(ACCEPT_TOKEN));
        assert!(prompt.contains(REJECT_TOKEN));
    }
}
