#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

// Noon UTC, so dates are stable in any time zone
pub const MARCH_1: f64 = 1_709_294_400.0;
pub const FEB_14: f64 = 1_707_912_000.0;
pub const APRIL_2: f64 = 1_712_059_200.0;

pub const TASK: i64 = 0;
pub const PROJECT: i64 = 1;
pub const ACTION_GROUP: i64 = 2;

/// One `TMTask` row.
#[derive(Default)]
pub struct TaskRow<'a> {
    pub uuid: &'a str,
    pub kind: i64,
    pub status: i64,
    pub trashed: bool,
    pub title: &'a str,
    pub notes: Option<&'a str>,
    pub area: Option<&'a str>,
    pub project: Option<&'a str>,
    pub action_group: Option<&'a str>,
    pub due: Option<f64>,
    pub start: Option<f64>,
    pub today_index: Option<i64>,
    pub checklist_items: i64,
    pub stop: Option<f64>,
    pub index: i64,
}

/// A Things-shaped store in a temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub db_path: PathBuf,
    conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("Things.sqlite3");
        let conn = Connection::open(&db_path).expect("Failed to create fixture store");
        conn.execute_batch(SCHEMA).expect("Failed to create schema");
        Self { dir, db_path, conn }
    }

    pub fn out(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn area(&self, uuid: &str, title: &str, index: i64) {
        self.conn
            .execute(
                r#"INSERT INTO TMArea (uuid, title, visible, "index") VALUES (?1, ?2, 1, ?3)"#,
                params![uuid, title, index],
            )
            .expect("Failed to insert area");
    }

    pub fn task(&self, row: TaskRow<'_>) {
        self.conn
            .execute(
                r#"INSERT INTO TMTask (uuid, type, status, trashed, title, notes, area, project,
                    actionGroup, dueDate, startDate, todayIndex, checklistItemsCount, stopDate, "index")
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"#,
                params![
                    row.uuid,
                    row.kind,
                    row.status,
                    row.trashed,
                    row.title,
                    row.notes,
                    row.area,
                    row.project,
                    row.action_group,
                    row.due,
                    row.start,
                    row.today_index,
                    row.checklist_items,
                    row.stop,
                    row.index
                ],
            )
            .expect("Failed to insert task");
    }

    pub fn checklist_item(&self, uuid: &str, task: &str, title: &str, index: i64) {
        self.conn
            .execute(
                r#"INSERT INTO TMChecklistItem (uuid, title, status, task, "index") VALUES (?1, ?2, 0, ?3, ?4)"#,
                params![uuid, title, task, index],
            )
            .expect("Failed to insert checklist item");
    }

    fn ensure_tag(&self, title: &str) -> String {
        let uuid = format!("tag-{title}");
        self.conn
            .execute(
                "INSERT OR IGNORE INTO TMTag (uuid, title) VALUES (?1, ?2)",
                params![uuid, title],
            )
            .expect("Failed to insert tag");
        uuid
    }

    pub fn task_tag(&self, task: &str, title: &str) {
        let tag = self.ensure_tag(title);
        self.conn
            .execute(
                "INSERT INTO TMTaskTag (tasks, tags) VALUES (?1, ?2)",
                params![task, tag],
            )
            .expect("Failed to tag task");
    }

    pub fn area_tag(&self, area: &str, title: &str) {
        let tag = self.ensure_tag(title);
        self.conn
            .execute(
                "INSERT INTO TMAreaTag (areas, tags) VALUES (?1, ?2)",
                params![area, tag],
            )
            .expect("Failed to tag area");
    }
}

pub fn wrap_notes(content: &str) -> String {
    format!(r#"<note xml:space="preserve">{content}</note>"#)
}

/// Store with two areas, an inbox, headers, checklists, tags, notes and
/// records that must stay hidden.
pub fn household() -> Fixture {
    let fx = Fixture::new();

    fx.task(TaskRow {
        uuid: "t-call",
        title: "Call mom",
        today_index: Some(5),
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "p-side",
        kind: PROJECT,
        title: "Side Project",
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-sketch",
        title: "Sketch",
        project: Some("p-side"),
        ..TaskRow::default()
    });

    fx.area("a-work", "Work", 2);
    fx.area("a-home", "Home", 1);
    fx.area_tag("a-home", "Family");

    fx.task(TaskRow {
        uuid: "t-water",
        title: "Water plants",
        area: Some("a-home"),
        start: Some(FEB_14),
        ..TaskRow::default()
    });

    let notes = wrap_notes(r#"Weekly
see <a href="https://example.com">list</a>"#);
    fx.task(TaskRow {
        uuid: "p-chores",
        kind: PROJECT,
        title: "Chores",
        notes: Some(notes.as_str()),
        area: Some("a-home"),
        ..TaskRow::default()
    });
    fx.task_tag("p-chores", "Errand");

    fx.task(TaskRow {
        uuid: "t-milk",
        title: "Buy milk",
        project: Some("p-chores"),
        due: Some(MARCH_1),
        checklist_items: 2,
        ..TaskRow::default()
    });
    fx.task_tag("t-milk", "Shop");
    fx.task_tag("t-milk", "Home-Office");
    fx.checklist_item("c-oat", "t-milk", "Oat", 1);
    fx.checklist_item("c-soy", "t-milk", "Soy", 0);

    fx.task(TaskRow {
        uuid: "g-weekend",
        kind: ACTION_GROUP,
        title: "Weekend",
        notes: Some(wrap_notes("never shown").as_str()),
        project: Some("p-chores"),
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-mow",
        title: "Mow lawn",
        action_group: Some("g-weekend"),
        start: Some(FEB_14),
        today_index: Some(1),
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-vacuum",
        title: "Vacuum",
        project: Some("p-chores"),
        stop: Some(APRIL_2),
        index: 5,
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-old",
        title: "Old",
        status: 2,
        project: Some("p-chores"),
        index: 1,
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-trash",
        title: "Trash",
        trashed: true,
        project: Some("p-chores"),
        index: 2,
        ..TaskRow::default()
    });

    fx.task(TaskRow {
        uuid: "p-report",
        kind: PROJECT,
        title: "Report",
        status: 2,
        area: Some("a-work"),
        ..TaskRow::default()
    });
    fx.task(TaskRow {
        uuid: "t-draft",
        title: "Draft",
        project: Some("p-report"),
        ..TaskRow::default()
    });

    fx
}
