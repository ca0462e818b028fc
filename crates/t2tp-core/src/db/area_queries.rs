//! Area listing.

use rusqlite::Row;

use crate::{error::Result, models::Area};

const AREAS: &str = r#"SELECT uuid, title FROM TMArea ORDER BY "index""#;

impl super::Database {
    /// Lists all declared areas in store order.
    pub fn list_areas(&self) -> Result<Vec<Area>> {
        self.query_rows(AREAS, [], area_from_row, "areas")
    }
}

fn area_from_row(row: &Row<'_>) -> rusqlite::Result<Area> {
    Ok(Area {
        id: Some(row.get("uuid")?),
        title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
    })
}
