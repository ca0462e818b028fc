//! Parameter structures for the export operation.
//!
//! These are interface-agnostic: the CLI maps its clap arguments onto
//! [`ExportParams`], and library users fill it in directly.

use std::path::PathBuf;

use crate::{
    error::{ExportError, Result},
    models::OutputMode,
    router::FILE_EXTENSION,
};

/// Default store file, looked up in the working directory.
pub const DEFAULT_DATABASE: &str = "Things.sqlite3";

/// Default output file stem or directory.
pub const DEFAULT_TARGET: &str = "Things3 export";

/// Parameters for a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    /// Path to the Things SQLite database
    pub database: PathBuf,

    /// Granularity of the produced files
    pub mode: OutputMode,

    /// Output file (combined mode) or directory (per-area, per-project)
    pub target: PathBuf,

    /// Write to standard output instead of a file (combined mode only)
    pub stdout: bool,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            mode: OutputMode::default(),
            target: PathBuf::from(DEFAULT_TARGET),
            stdout: false,
        }
    }
}

impl ExportParams {
    /// Checks option combinations that cannot be expressed by the types.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Configuration` if `stdout` is combined with a
    /// file-per-scope mode, or if the target is empty for a file export
    pub fn validate(&self) -> Result<()> {
        if self.stdout && self.mode != OutputMode::Combined {
            return Err(ExportError::configuration(format!(
                "standard output only works with format {}, not {}",
                OutputMode::Combined,
                self.mode
            )));
        }
        if !self.stdout && self.target.as_os_str().is_empty() {
            return Err(ExportError::configuration("target must not be empty"));
        }
        Ok(())
    }

    /// File written in combined mode: the target, with `.taskpaper` appended
    /// unless already present.
    pub fn combined_file(&self) -> PathBuf {
        let has_extension = self
            .target
            .extension()
            .is_some_and(|ext| ext == FILE_EXTENSION);
        if has_extension {
            self.target.clone()
        } else {
            let mut name = self.target.clone().into_os_string();
            name.push(".");
            name.push(FILE_EXTENSION);
            PathBuf::from(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExportParams::default();
        assert_eq!(params.database, PathBuf::from("Things.sqlite3"));
        assert_eq!(params.mode, OutputMode::PerProject);
        assert_eq!(params.target, PathBuf::from("Things3 export"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_stdout_requires_combined_mode() {
        let params = ExportParams {
            stdout: true,
            mode: OutputMode::PerArea,
            ..ExportParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ExportError::Configuration { .. })
        ));

        let params = ExportParams {
            stdout: true,
            mode: OutputMode::Combined,
            ..ExportParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_empty_target_rejected() {
        let params = ExportParams {
            target: PathBuf::new(),
            ..ExportParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_combined_file_appends_extension() {
        let params = ExportParams {
            target: PathBuf::from("out/Things3 export"),
            ..ExportParams::default()
        };
        assert_eq!(
            params.combined_file(),
            PathBuf::from("out/Things3 export.taskpaper")
        );

        let params = ExportParams {
            target: PathBuf::from("out/all.taskpaper"),
            ..ExportParams::default()
        };
        assert_eq!(params.combined_file(), PathBuf::from("out/all.taskpaper"));
    }
}
