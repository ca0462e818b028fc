//! Export driver.
//!
//! [`Exporter::run`] validates the parameters, opens the store read-only,
//! sets up the top-level sink for the selected mode and walks the hierarchy.
//! The store connection is closed whether or not the walk succeeds; any
//! failure aborts the whole export and is returned to the caller.

use std::{
    fs,
    io::{self, Write},
};

use jiff::tz::TimeZone;
use log::{info, warn};

use crate::{
    db::Database,
    error::{ExportError, IoResultExt, Result},
    models::OutputMode,
    params::ExportParams,
    router::Router,
    tags::TagDeriver,
    walker::Walker,
};

pub mod summary;

pub use summary::ExportSummary;

/// Runs exports for one set of parameters.
#[derive(Debug, Clone)]
pub struct Exporter {
    params: ExportParams,
    deriver: TagDeriver,
}

impl Exporter {
    /// Exporter formatting dates in the system time zone.
    pub fn new(params: ExportParams) -> Self {
        Self {
            params,
            deriver: TagDeriver::system(),
        }
    }

    /// Formats synthesized dates in `time_zone` instead of the system zone.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.deriver = TagDeriver::new(time_zone);
        self
    }

    /// Runs the export to the destinations named by the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Configuration` for invalid parameters, before
    /// the store is opened
    /// Returns `ExportError::DatabaseNotFound` or `ExportError::Database` if
    /// the store cannot be opened or read
    /// Returns `ExportError::FileSystem` if an output file or directory
    /// cannot be created
    pub fn run(&self) -> Result<ExportSummary> {
        self.params.validate()?;
        let db = Database::open(&self.params.database)?;
        info!(
            "Exporting {} in {} mode",
            self.params.database.display(),
            self.params.mode
        );

        let router = match self.open_router() {
            Ok(router) => router,
            Err(e) => {
                if let Err(close) = db.close() {
                    warn!("Failed to close database after setup error: {close}");
                }
                return Err(e);
            }
        };
        self.export(db, router)
    }

    /// Runs a combined-mode export into `writer`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Configuration` unless the mode is combined
    pub fn run_into(&self, writer: Box<dyn Write>) -> Result<ExportSummary> {
        if self.params.mode != OutputMode::Combined {
            return Err(ExportError::configuration(format!(
                "writing into a single stream requires format {}, not {}",
                OutputMode::Combined,
                self.params.mode
            )));
        }
        let db = Database::open(&self.params.database)?;
        self.export(db, Router::new("stream", writer))
    }

    fn open_router(&self) -> Result<Router> {
        match self.params.mode {
            OutputMode::Combined if self.params.stdout => Ok(Router::stdout()),
            OutputMode::Combined => {
                let path = self.params.combined_file();
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).fs_context(parent)?;
                }
                Router::create_file(&path)
            }
            OutputMode::PerArea | OutputMode::PerProject => {
                let target = &self.params.target;
                fs::create_dir_all(target).fs_context(target)?;
                Ok(Router::idle(Box::new(io::sink())))
            }
        }
    }

    fn export(&self, db: Database, mut router: Router) -> Result<ExportSummary> {
        let mut walker = Walker::new(&db, &self.deriver, self.params.mode, &self.params.target);
        let walked = walker.walk(&mut router);
        let mut summary = walker.into_summary();

        let closed = db.close();
        if let Err(e) = walked {
            if let Err(close) = closed {
                warn!("Failed to close database after export error: {close}");
            }
            return Err(e);
        }
        closed?;

        summary.sinks = router.finish()?;
        info!("{summary}");
        Ok(summary)
    }
}
