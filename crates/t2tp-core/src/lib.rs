//! Core library for exporting a Things 3 database to TaskPaper files.
//!
//! This crate walks the area → project → action group → task → checklist
//! hierarchy stored in a Things SQLite database and renders it as a
//! tab-indented TaskPaper outline. Output can go into one combined file,
//! one file per area, or one file per project.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Exporter │───▶│  Walker  │───▶│  render  │───▶│  Router  │
//! │ (driver) │    │ (db, tags│    │(templates│    │ (sinks)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! - [`db`]: read-only, ordered listing queries returning typed [`models`]
//! - [`tags`]: explicit and schedule-derived `@tags`
//! - [`render`]: TaskPaper line templates and notes unwrapping
//! - [`router`]: active-sink stack with scoped file sinks
//! - [`walker`]: depth-first traversal tying the above together
//! - [`exporter`]: entry point returning an [`ExportSummary`]
//!
//! # Quick Start
//!
//! ```no_run
//! use t2tp_core::{ExportParams, Exporter, OutputMode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ExportParams {
//!     database: "Things.sqlite3".into(),
//!     mode: OutputMode::PerProject,
//!     target: "Things3 export".into(),
//!     stdout: false,
//! };
//!
//! let summary = Exporter::new(params).run()?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod exporter;
pub mod models;
pub mod params;
pub mod render;
pub mod router;
pub mod tags;
pub mod walker;

// Re-export commonly used types
pub use db::Database;
pub use error::{ExportError, Result};
pub use exporter::{ExportSummary, Exporter};
pub use models::{Area, ChecklistItem, OutputMode, Project, Schedule, Task, TaskKind};
pub use params::ExportParams;
pub use router::Router;
pub use tags::{TagDeriver, TagSet};
pub use walker::Walker;
