//! Area model definition.

/// Title used for the bucket holding everything without an area.
pub const NO_AREA_TITLE: &str = "no area";

/// Top-level grouping of projects and tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Store identifier, `None` for the "no area" bucket
    pub id: Option<String>,

    /// Title of the area
    pub title: String,
}

impl Area {
    /// The implicit bucket for projects and tasks that belong to no area.
    pub fn unassigned() -> Self {
        Self {
            id: None,
            title: NO_AREA_TITLE.to_string(),
        }
    }

    /// Whether this is the "no area" bucket.
    pub fn is_unassigned(&self) -> bool {
        self.id.is_none()
    }
}
