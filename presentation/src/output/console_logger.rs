//! Colored console rendering of the conversation trace

use colored::Colorize;
use duet_application::{ConversationEvent, ConversationLogger, EventKind};
use duet_domain::util::truncate_str;

/// Maximum rendered message length before truncation.
const MAX_MESSAGE_LEN: usize = 500;

/// Prints conversation events to stdout with per-role coloring.
///
/// Mirrors the trace the JSONL logger records, for humans following along.
pub struct ConsoleConversationLogger;

impl ConversationLogger for ConsoleConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let tag = match event.kind {
            EventKind::System => "[system]".dimmed(),
            EventKind::Planner => "[planner]".blue().bold(),
            EventKind::Executor => "[executor]".yellow().bold(),
            EventKind::PlannerValidation => "[verdict]".magenta().bold(),
            EventKind::Error => "[error]".red().bold(),
        };
        let message = truncate_str(&event.message, MAX_MESSAGE_LEN);
        if message.len() < event.message.len() {
            println!("{} {}…", tag, message);
        } else {
            println!("{} {}", tag, message);
        }
    }
}
