//! Console output adapters

pub mod console;
pub mod console_logger;

pub use console::ConsoleFormatter;
pub use console_logger::ConsoleConversationLogger;
