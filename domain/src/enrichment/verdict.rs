//! Validation verdict and verdict response parsing
//!
//! The Planner constrains the validation model to open its answer with one
//! of two fixed tokens. Parsing is a case-insensitive substring match on the
//! accept token anywhere in the response — deliberately loose, preserved for
//! compatibility with the established prompt protocol. A rationale that
//! happens to quote the accept token (e.g. when restating the instructions)
//! will misclassify; tightening this to a prefix match is a known stricter
//! alternative that must not be adopted silently.

use serde::{Deserialize, Serialize};

/// Token the validation model emits to accept an enrichment result.
pub const ACCEPT_TOKEN: &str = "WOOHOO";

/// Token the validation model emits to reject an enrichment result.
pub const REJECT_TOKEN: &str = "NAYNAY";

/// The Planner's judgment of one enrichment result (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Whether the result was accepted.
    pub accepted: bool,
    /// Free-text reasoning, or the error text when validation itself failed.
    pub rationale: String,
}

impl ValidationVerdict {
    pub fn accept(rationale: impl Into<String>) -> Self {
        Self {
            accepted: true,
            rationale: rationale.into(),
        }
    }

    pub fn reject(rationale: impl Into<String>) -> Self {
        Self {
            accepted: false,
            rationale: rationale.into(),
        }
    }
}

/// Extract a verdict from a free-form validation response.
///
/// The full response becomes the rationale.
pub fn parse_verdict_response(response: &str) -> ValidationVerdict {
    let accepted = response.to_uppercase().contains(ACCEPT_TOKEN);
    ValidationVerdict {
        accepted,
        rationale: response.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_token_anywhere() {
        let verdict = parse_verdict_response("WOOHOO - values look plausible for this row.");
        assert!(verdict.accepted);
        assert!(verdict.rationale.contains("plausible"));
    }

    #[test]
    fn test_accept_token_case_insensitive() {
        assert!(parse_verdict_response("woohoo, fine by me").accepted);
    }

    #[test]
    fn test_reject_response() {
        let verdict = parse_verdict_response("NAYNAY. The country does not match the name.");
        assert!(!verdict.accepted);
    }

    #[test]
    fn test_missing_tokens_reject() {
        assert!(!parse_verdict_response("I am not sure about this one.").accepted);
    }

    #[test]
    fn test_documented_loose_match_ambiguity() {
        // The parse is a substring match by design: a rejection that quotes
        // the accept token is classified as acceptance.
        let verdict =
            parse_verdict_response("NAYNAY — I was told to answer WOOHOO only when certain.");
        assert!(verdict.accepted);
    }
}
