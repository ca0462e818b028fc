//! Project, task and checklist listings.

use rusqlite::Row;

use crate::{
    error::Result,
    models::{ChecklistItem, Project, Schedule, Task, TaskKind},
};

const TASK_FIELDS: &str = "
    SELECT uuid, status, title, type, notes, area, dueDate, startDate, todayIndex,
           checklistItemsCount, stopDate
    FROM TMTask";

const PROJECTS_IN_AREA: &str = r#"
    WHERE type = 1
    AND area = ?1
    AND trashed = 0
    AND status < 2
    ORDER BY "index""#;

const PROJECTS_WITHOUT_AREA: &str = r#"
    WHERE type = 1
    AND area IS NULL
    AND trashed = 0
    AND status < 2
    ORDER BY "index""#;

// Plain tasks sort before headers.
const TASKS_IN_PROJECT: &str = r#"
    WHERE type != 1
    AND project = ?1
    AND trashed = 0
    AND status < 2
    ORDER BY type, "index""#;

const TASKS_IN_AREA_WITHOUT_PROJECT: &str = r#"
    WHERE type != 1
    AND area = ?1
    AND project IS NULL
    AND trashed = 0
    AND status < 2
    ORDER BY type, "index""#;

const TASKS_IN_INBOX: &str = r#"
    WHERE type != 1
    AND project IS NULL
    AND area IS NULL
    AND actionGroup IS NULL
    AND trashed = 0
    AND status < 2
    ORDER BY "index""#;

const TASKS_IN_ACTION_GROUP: &str = r#"
    WHERE type = 0
    AND actionGroup = ?1
    AND trashed = 0
    AND status < 2
    ORDER BY "index""#;

const CHECKLIST_ITEMS_OF_TASK: &str = r#"
    SELECT uuid, title, status
    FROM TMChecklistItem
    WHERE task = ?1
    ORDER BY "index""#;

impl super::Database {
    /// Projects assigned to `area_id`, in store order.
    pub fn list_projects_in_area(&self, area_id: &str) -> Result<Vec<Project>> {
        let sql = format!("{TASK_FIELDS}{PROJECTS_IN_AREA}");
        self.query_rows(&sql, [area_id], project_from_row, "projects in area")
    }

    /// Projects with no area, in store order.
    pub fn list_projects_without_area(&self) -> Result<Vec<Project>> {
        let sql = format!("{TASK_FIELDS}{PROJECTS_WITHOUT_AREA}");
        self.query_rows(&sql, [], project_from_row, "projects without area")
    }

    /// Tasks and action groups of a project, plain tasks first.
    pub fn list_tasks_in_project(&self, project_id: &str) -> Result<Vec<Task>> {
        let sql = format!("{TASK_FIELDS}{TASKS_IN_PROJECT}");
        self.query_rows(&sql, [project_id], task_from_row, "tasks in project")
    }

    /// Tasks filed directly under an area, outside any project.
    pub fn list_tasks_in_area_without_project(&self, area_id: &str) -> Result<Vec<Task>> {
        let sql = format!("{TASK_FIELDS}{TASKS_IN_AREA_WITHOUT_PROJECT}");
        self.query_rows(&sql, [area_id], task_from_row, "tasks in area")
    }

    /// Tasks with neither area, project nor header.
    pub fn list_inbox_tasks(&self) -> Result<Vec<Task>> {
        let sql = format!("{TASK_FIELDS}{TASKS_IN_INBOX}");
        self.query_rows(&sql, [], task_from_row, "inbox tasks")
    }

    /// Tasks below an action group header.
    pub fn list_tasks_in_action_group(&self, group_id: &str) -> Result<Vec<Task>> {
        let sql = format!("{TASK_FIELDS}{TASKS_IN_ACTION_GROUP}");
        self.query_rows(&sql, [group_id], task_from_row, "tasks in action group")
    }

    /// Checklist entries of a task. Checklist items are not filtered by status.
    pub fn list_checklist_items(&self, task_id: &str) -> Result<Vec<ChecklistItem>> {
        self.query_rows(
            CHECKLIST_ITEMS_OF_TASK,
            [task_id],
            checklist_item_from_row,
            "checklist items",
        )
    }
}

/// Reads an epoch column, mapping NULL and zero to `None`.
fn epoch(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<f64>> {
    Ok(row
        .get::<_, Option<f64>>(column)?
        .filter(|seconds| *seconds != 0.0))
}

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        due: epoch(row, "dueDate")?,
        start: epoch(row, "startDate")?,
        today_index: row.get("todayIndex")?,
        stop: epoch(row, "stopDate")?,
    })
}

fn title(row: &Row<'_>) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>("title")?.unwrap_or_default())
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: Some(row.get("uuid")?),
        title: title(row)?,
        notes: row.get("notes")?,
        schedule: schedule_from_row(row)?,
    })
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("uuid")?,
        title: title(row)?,
        kind: TaskKind::from_code(row.get::<_, Option<i64>>("type")?.unwrap_or_default()),
        status: row.get::<_, Option<i64>>("status")?.unwrap_or_default(),
        notes: row.get("notes")?,
        schedule: schedule_from_row(row)?,
        checklist_items: row
            .get::<_, Option<i64>>("checklistItemsCount")?
            .unwrap_or_default(),
    })
}

fn checklist_item_from_row(row: &Row<'_>) -> rusqlite::Result<ChecklistItem> {
    Ok(ChecklistItem {
        id: row.get("uuid")?,
        title: title(row)?,
        status: row.get::<_, Option<i64>>("status")?.unwrap_or_default(),
    })
}
