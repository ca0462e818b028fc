//! Output granularity.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// What ends up in one TaskPaper file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything in a single file (or the process output)
    #[serde(rename = "all")]
    Combined,

    /// One file per area
    #[serde(rename = "area")]
    PerArea,

    /// One directory per area holding one file per project
    #[default]
    #[serde(rename = "project")]
    PerProject,
}

impl FromStr for OutputMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "combined" => Ok(OutputMode::Combined),
            "area" | "per-area" => Ok(OutputMode::PerArea),
            "project" | "per-project" => Ok(OutputMode::PerProject),
            _ => Err(ExportError::configuration(format!("unknown format {s}"))),
        }
    }
}

impl OutputMode {
    /// Canonical name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Combined => "all",
            OutputMode::PerArea => "area",
            OutputMode::PerProject => "project",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("all".parse::<OutputMode>().unwrap(), OutputMode::Combined);
        assert_eq!("Area".parse::<OutputMode>().unwrap(), OutputMode::PerArea);
        assert_eq!(
            "per-project".parse::<OutputMode>().unwrap(),
            OutputMode::PerProject
        );
    }

    #[test]
    fn test_unknown_mode_is_configuration_error() {
        let err = "folder".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, ExportError::Configuration { .. }));
        assert!(err.to_string().contains("folder"));
    }

    #[test]
    fn test_round_trips_through_display() {
        for mode in [OutputMode::Combined, OutputMode::PerArea, OutputMode::PerProject] {
            assert_eq!(mode.to_string().parse::<OutputMode>().unwrap(), mode);
        }
    }
}
