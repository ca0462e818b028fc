//! Explicit tag lookups through the join tables.

use crate::error::Result;

const TASK_TAGS: &str = "
    SELECT tag.title AS title FROM TMTaskTag AS tt, TMTag AS tag
    WHERE tt.tasks = ?1
    AND tt.tags = tag.uuid";

const AREA_TAGS: &str = "
    SELECT tag.title AS title FROM TMAreaTag AS at, TMTag AS tag
    WHERE at.areas = ?1
    AND at.tags = tag.uuid";

impl super::Database {
    /// Tag titles attached to an area, in discovery order.
    pub fn list_area_tags(&self, area_id: &str) -> Result<Vec<String>> {
        self.tag_titles(AREA_TAGS, area_id)
    }

    /// Tag titles attached to a project or task, in discovery order.
    pub fn list_task_tags(&self, task_id: &str) -> Result<Vec<String>> {
        self.tag_titles(TASK_TAGS, task_id)
    }

    fn tag_titles(&self, sql: &str, id: &str) -> Result<Vec<String>> {
        let titles = self.query_rows(
            sql,
            [id],
            |row| row.get::<_, Option<String>>("title"),
            "tags",
        )?;
        Ok(titles.into_iter().flatten().collect())
    }
}
