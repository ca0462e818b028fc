//! Result of an export run.

use std::fmt;

use serde::Serialize;

use crate::{error::Result, models::OutputMode};

/// Counts of emitted nodes and the sinks that received them.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ExportSummary {
    pub mode: OutputMode,
    pub areas: usize,
    pub projects: usize,
    pub action_groups: usize,
    pub tasks: usize,
    pub checklist_items: usize,

    /// Every sink opened during the run, in order (`-` is standard output)
    pub sinks: Vec<String>,
}

impl ExportSummary {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} areas, {} projects, {} action groups, {} tasks and {} checklist items ",
            self.areas, self.projects, self.action_groups, self.tasks, self.checklist_items
        )?;
        match self.sinks.as_slice() {
            [single] => write!(f, "to {single}"),
            sinks => write!(f, "into {} files ({} mode)", sinks.len(), self.mode),
        }
    }
}
