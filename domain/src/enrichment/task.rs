//! Enrichment task and row context

use crate::session::entities::Message;
use crate::table::Row;

/// Per-row context the Planner builds before formulating a task (Value Object)
///
/// Currently wraps the row's data alone. It exists as a distinct seam so
/// cross-cutting context augmentation (external lookups, reference data) has
/// one place to land without touching task formulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RowContext {
    row: Row,
}

impl RowContext {
    pub fn new(row: Row) -> Self {
        Self { row }
    }

    pub fn row(&self) -> &Row {
        &self.row
    }
}

/// A task for the Executor: role-tagged messages plus the originating
/// context (Value Object)
///
/// The context is a read-only snapshot carried along for later validation,
/// not a shared mutable object.
#[derive(Debug, Clone)]
pub struct EnrichmentTask {
    messages: Vec<Message>,
    context: RowContext,
}

impl EnrichmentTask {
    pub fn new(messages: Vec<Message>, context: RowContext) -> Self {
        Self { messages, context }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn context(&self) -> &RowContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    #[test]
    fn test_context_is_a_snapshot() {
        let row = Row::new(vec![("name".to_string(), CellValue::text("Ada"))]);
        let context = RowContext::new(row.clone());
        let task = EnrichmentTask::new(vec![Message::user("enrich this")], context.clone());

        assert_eq!(task.context(), &context);
        assert_eq!(task.context().row(), &row);
        assert_eq!(task.messages().len(), 1);
    }
}
