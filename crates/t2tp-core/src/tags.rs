//! Tag derivation.
//!
//! A node's tag set starts with the explicit tags from the store's join
//! tables, in discovery order, followed by tags synthesized from its
//! scheduling fields. Duplicate tokens are dropped, keeping the first.

use jiff::tz::TimeZone;
use log::warn;

use crate::{models::Schedule, render::LocalDate};

/// Ordered, duplicate-free set of `@tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` unless the exact token is already present.
    pub fn add(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Adds explicit tags given by their store titles.
    pub fn extend_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for title in titles {
            self.add(make_tag(title.as_ref()));
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Space-joined tags behind a single space, or an empty string.
    pub fn suffix(&self) -> String {
        if self.tags.is_empty() {
            String::new()
        } else {
            format!(" {}", self.tags.join(" "))
        }
    }
}

/// Turns a tag title into a token: `Home-Office` becomes `@Home_Office`.
pub fn make_tag(title: &str) -> String {
    format!("@{}", title.replace([' ', '-'], "_"))
}

/// Synthesizes scheduling tags, formatting dates in a fixed time zone.
#[derive(Debug, Clone)]
pub struct TagDeriver {
    time_zone: TimeZone,
}

impl TagDeriver {
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Deriver using the system's local time zone.
    pub fn system() -> Self {
        Self::new(TimeZone::system())
    }

    /// Appends scheduling tags to `tags`:
    ///
    /// 1. `@due(date)` for a due date
    /// 2. `@today` when flagged for today with a start date, `@someday` when
    ///    flagged without one
    /// 3. otherwise `@startDate(date)` for a start date
    /// 4. `@done(date)` for a completion date
    pub fn apply(&self, schedule: &Schedule, tags: &mut TagSet) {
        if let Some(date) = schedule.due.and_then(|due| self.date(due, "due")) {
            tags.add(format!("@due({date})"));
        }

        if schedule.is_today() {
            if schedule.start.is_some() {
                tags.add("@today".to_string());
            } else {
                tags.add("@someday".to_string());
            }
        } else if let Some(date) = schedule.start.and_then(|start| self.date(start, "start")) {
            tags.add(format!("@startDate({date})"));
        }

        if let Some(date) = schedule.stop.and_then(|stop| self.date(stop, "stop")) {
            tags.add(format!("@done({date})"));
        }
    }

    fn date(&self, seconds: f64, field: &str) -> Option<String> {
        let date = LocalDate::from_epoch(seconds, &self.time_zone).map(|d| d.to_string());
        if date.is_none() {
            warn!("Skipping out-of-range {field} timestamp {seconds}");
        }
        date
    }
}

impl Default for TagDeriver {
    fn default() -> Self {
        Self::system()
    }
}
