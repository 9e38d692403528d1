//! Terminal classification of a row's enrichment attempt sequence

use serde::{Deserialize, Serialize};

/// Name of the column that records each row's [`RowOutcome`].
pub const AI_DECISION_COLUMN: &str = "ai_decision";

/// Final state of one row after the retry loop terminates (Value Object)
///
/// `Error` dominates `Invalid`: any transport exception during a row's
/// attempts forces the `Error` classification, even when the last attempt
/// was a clean rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowOutcome {
    /// An accepted enrichment result was merged.
    Valid,
    /// Every attempt was rejected and no exception occurred.
    Invalid,
    /// At least one attempt raised a transport exception.
    Error,
}

impl RowOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowOutcome::Valid => "valid",
            RowOutcome::Invalid => "invalid",
            RowOutcome::Error => "error",
        }
    }

    /// Classification of an exhausted retry budget.
    pub fn from_exhausted(had_error: bool) -> Self {
        if had_error {
            RowOutcome::Error
        } else {
            RowOutcome::Invalid
        }
    }
}

impl std::fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(RowOutcome::Valid.as_str(), "valid");
        assert_eq!(RowOutcome::Invalid.as_str(), "invalid");
        assert_eq!(RowOutcome::Error.as_str(), "error");
    }

    #[test]
    fn test_error_dominates_on_exhaustion() {
        assert_eq!(RowOutcome::from_exhausted(true), RowOutcome::Error);
        assert_eq!(RowOutcome::from_exhausted(false), RowOutcome::Invalid);
    }
}
