//! TaskPaper text templates.
//!
//! Each function renders one node at a nesting level (the number of leading
//! tabs). Tag suffixes arrive pre-joined from [`crate::tags::TagSet::suffix`]:
//! either empty or a space followed by space-separated `@tokens`.
//!
//! | Node          | Template                       |
//! |---------------|--------------------------------|
//! | Area, Project | *(blank)* `<indent><title>:<tags>` |
//! | Action group  | `<indent><title>:`             |
//! | Task          | `<indent>- <title><tags>`      |
//! | Checklist     | `<indent>- <title>`            |
//!
//! Notes render one line per note line at `level + 1`.

pub mod datetime;
pub mod notes;

pub use datetime::LocalDate;

/// Rendered text for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Preceded by a blank separator line when the sink already has output
    pub separated: bool,

    /// Lines without trailing newline
    pub lines: Vec<String>,
}

impl Block {
    fn line(line: String) -> Self {
        Self {
            separated: false,
            lines: vec![line],
        }
    }

    fn separated(line: String) -> Self {
        Self {
            separated: true,
            lines: vec![line],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Leading tabs for `level`.
pub fn indent(level: usize) -> String {
    "\t".repeat(level)
}

/// Area header, only rendered inline in combined mode.
pub fn area_header(title: &str, level: usize, tags: &str) -> Block {
    Block::separated(format!("{}{title}:{tags}", indent(level)))
}

pub fn project_header(title: &str, level: usize, tags: &str) -> Block {
    Block::separated(format!("{}{title}:{tags}", indent(level)))
}

/// Action groups carry neither tags nor notes.
pub fn action_group_header(title: &str, level: usize) -> Block {
    Block::line(format!("{}{title}:", indent(level)))
}

pub fn task_line(title: &str, level: usize, tags: &str) -> Block {
    Block::line(format!("{}- {title}{tags}", indent(level)))
}

pub fn checklist_line(title: &str, level: usize) -> Block {
    Block::line(format!("{}- {title}", indent(level)))
}

/// Notes of a node rendered at `level`, indented one level deeper.
pub fn notes_block(notes: Option<&str>, level: usize) -> Block {
    let Some(raw) = notes.filter(|raw| !raw.is_empty()) else {
        return Block::default();
    };

    let prefix = indent(level + 1);
    Block {
        separated: false,
        lines: notes::note_lines(raw)
            .into_iter()
            .map(|line| format!("{prefix}{line}"))
            .collect(),
    }
}
