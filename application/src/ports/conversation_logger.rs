//! Port for the role-tagged conversation trace.
//!
//! Defines the [`ConversationLogger`] trait for recording enrichment events
//! (planner analysis, executor output, validation verdicts, errors) as an
//! ordered, append-only trace.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the conversation
//! between the two roles for observability. No component logic consumes it —
//! it is write-only from the orchestrators' point of view.

/// Role tag of a conversation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Orchestration bookkeeping (row boundaries, retries, final statuses).
    System,
    /// Planner activity: context building and task formulation.
    Planner,
    /// Executor activity: task processing and generated data.
    Executor,
    /// Planner validation verdicts.
    PlannerValidation,
    /// Per-attempt transport failures.
    Error,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::System => "system",
            EventKind::Planner => "planner",
            EventKind::Executor => "executor",
            EventKind::PlannerValidation => "planner_validation",
            EventKind::Error => "error",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One conversation trace event.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub kind: EventKind,
    pub message: String,
}

impl ConversationEvent {
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Port for logging conversation events.
///
/// Implementations append each event to their medium (JSONL file, console).
/// The `log` method is intentionally synchronous and non-fallible so logging
/// can never disrupt enrichment — failures are silently ignored.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when tracing is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

/// Fan-out to several loggers (e.g. console plus a JSONL trace file).
pub struct CompositeConversationLogger {
    loggers: Vec<Box<dyn ConversationLogger>>,
}

impl CompositeConversationLogger {
    pub fn new(loggers: Vec<Box<dyn ConversationLogger>>) -> Self {
        Self { loggers }
    }
}

impl ConversationLogger for CompositeConversationLogger {
    fn log(&self, event: ConversationEvent) {
        for logger in &self.loggers {
            logger.log(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(EventKind::System.as_str(), "system");
        assert_eq!(EventKind::Planner.as_str(), "planner");
        assert_eq!(EventKind::Executor.as_str(), "executor");
        assert_eq!(EventKind::PlannerValidation.as_str(), "planner_validation");
        assert_eq!(EventKind::Error.as_str(), "error");
    }
}
