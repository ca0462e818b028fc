//! Typed records read from the Things store.
//!
//! Every row the walker visits is materialised into one of these structs when
//! it is fetched and dropped once its subtree has been exported. Nothing here
//! is written back to the store.
//!
//! - [`Area`]: top-level bucket, including the synthetic "no area" bucket
//! - [`Project`]: container of tasks, including the synthetic Inbox
//! - [`Task`]: a task or an action group (header)
//! - [`ChecklistItem`]: leaf entry below a task
//! - [`OutputMode`]: granularity of the produced files

pub mod area;
pub mod checklist;
pub mod mode;
pub mod task;

pub use area::Area;
pub use checklist::ChecklistItem;
pub use mode::OutputMode;
pub use task::{Project, Schedule, Task, TaskKind};
