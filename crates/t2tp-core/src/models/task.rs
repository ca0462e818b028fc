//! Project and task model definitions.

/// Title of the synthetic project holding unfiled tasks.
pub const INBOX_TITLE: &str = "Inbox";

/// Kind of a `TMTask` row, stored in its `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task (`0`)
    Task,

    /// Project (`1`)
    Project,

    /// Header grouping tasks inside a project (`2`)
    ActionGroup,
}

impl TaskKind {
    /// Decode the store's numeric type code. Unknown codes are plain tasks.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => TaskKind::Project,
            2 => TaskKind::ActionGroup,
            _ => TaskKind::Task,
        }
    }
}

/// Scheduling fields shared by projects and tasks.
///
/// Timestamps are seconds since the Unix epoch. A stored value of zero counts
/// as absent, like a missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Schedule {
    pub due: Option<f64>,
    pub start: Option<f64>,
    pub today_index: Option<i64>,
    pub stop: Option<f64>,
}

impl Schedule {
    /// Whether the record is flagged for the Today list.
    pub fn is_today(&self) -> bool {
        self.today_index.is_some_and(|index| index != 0)
    }
}

/// A named container of tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Store identifier, `None` for the synthetic Inbox
    pub id: Option<String>,

    pub title: String,

    /// Raw notes including the store's markup envelope
    pub notes: Option<String>,

    pub schedule: Schedule,
}

impl Project {
    /// The pseudo-project collecting tasks with neither area nor project.
    pub fn inbox() -> Self {
        Self {
            id: None,
            title: INBOX_TITLE.to_string(),
            notes: None,
            schedule: Schedule::default(),
        }
    }
}

/// A task or action group row.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub kind: TaskKind,
    pub status: i64,

    /// Raw notes including the store's markup envelope
    pub notes: Option<String>,

    pub schedule: Schedule,

    /// Number of checklist items recorded on the row
    pub checklist_items: i64,
}

impl Task {
    pub fn is_action_group(&self) -> bool {
        self.kind == TaskKind::ActionGroup
    }

    pub fn has_checklist(&self) -> bool {
        self.checklist_items != 0
    }
}
