//! Checklist item model definition.

/// A sub-leaf entry belonging to exactly one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub status: i64,
}
