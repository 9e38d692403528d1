//! Enrichment command value object

use serde::{Deserialize, Serialize};

/// A natural-language enrichment instruction (Value Object)
///
/// Describes what the Executor should add to every row, e.g.
/// "add each customer's most likely nationality and gender".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    content: String,
}

impl Command {
    /// Create a new command
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Command cannot be empty");
        Self { content }
    }

    /// Try to create a new command, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the command content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the user asked for justification alongside the values.
    ///
    /// Drives the optional `evidence` field in the Executor's task.
    pub fn requests_evidence(&self) -> bool {
        let lower = self.content.to_lowercase();
        ["evidence", "justif", "source", "explain", "reason"]
            .iter()
            .any(|kw| lower.contains(kw))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        Command::new(s)
    }
}

impl From<String> for Command {
    fn from(s: String) -> Self {
        Command::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_creation() {
        let c = Command::new("add a country field");
        assert_eq!(c.content(), "add a country field");
    }

    #[test]
    #[should_panic]
    fn test_empty_command_panics() {
        Command::new("   ");
    }

    #[test]
    fn test_try_new() {
        assert!(Command::try_new("").is_none());
        assert!(Command::try_new("  \t ").is_none());
        assert!(Command::try_new("add gender").is_some());
    }

    #[test]
    fn test_requests_evidence() {
        assert!(Command::new("add nationality with evidence links").requests_evidence());
        assert!(Command::new("explain why for each").requests_evidence());
        assert!(!Command::new("add a country field").requests_evidence());
    }
}
