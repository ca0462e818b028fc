//! Depth-first traversal of the task hierarchy.
//!
//! Visit order:
//!
//! 1. the "no area" bucket: its Inbox, then projects without area
//! 2. each declared area: loose tasks, then its projects
//! 3. inside a project: plain tasks, then action groups
//! 4. inside an action group: its tasks
//! 5. inside a task: notes, then checklist items
//!
//! Every visit derives tags, renders, and emits to the router's active sink
//! before descending. Scopes that own a file do so through
//! [`Router::with_file`], so the parent sink is back in place when a scope
//! returns, whether it succeeded or not.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    db::Database,
    error::{IoResultExt, Result},
    exporter::ExportSummary,
    models::{Area, OutputMode, Project, Task},
    render,
    router::{sanitize_segment, sink_file_name, Router},
    tags::{TagDeriver, TagSet},
};

/// Walks the store and streams TaskPaper text into a [`Router`].
pub struct Walker<'a> {
    db: &'a Database,
    deriver: &'a TagDeriver,
    mode: OutputMode,
    target: &'a Path,
    summary: ExportSummary,
}

impl<'a> Walker<'a> {
    /// `target` is the output directory for the per-area and per-project
    /// modes and unused in combined mode.
    pub fn new(db: &'a Database, deriver: &'a TagDeriver, mode: OutputMode, target: &'a Path) -> Self {
        Self {
            db,
            deriver,
            mode,
            target,
            summary: ExportSummary::new(mode),
        }
    }

    /// Visits the "no area" bucket and then every declared area.
    pub fn walk(&mut self, router: &mut Router) -> Result<()> {
        self.export_area(&Area::unassigned(), router)?;
        for area in self.db.list_areas()? {
            self.export_area(&area, router)?;
        }
        Ok(())
    }

    /// Counts gathered so far.
    pub fn into_summary(self) -> ExportSummary {
        self.summary
    }

    /// Exports one area, opening its file or directory depending on the mode.
    pub fn export_area(&mut self, area: &Area, router: &mut Router) -> Result<()> {
        debug!("Area: {} ({:?})", area.title, area.id);
        if !area.is_unassigned() {
            self.summary.areas += 1;
        }

        match self.mode {
            OutputMode::Combined => {
                let mut tags = TagSet::new();
                if let Some(id) = &area.id {
                    tags.extend_titles(self.db.list_area_tags(id)?);
                }
                router.emit(&render::area_header(&area.title, 0, &tags.suffix()))?;
                self.area_body(area, 1, None, router)
            }
            OutputMode::PerArea => {
                let path = self.target.join(sink_file_name(&area.title));
                router.with_file(&path, |router| self.area_body(area, 0, None, router))
            }
            OutputMode::PerProject => {
                let dir = self.area_dir(area);
                create_dir(&dir)?;
                self.area_body(area, 0, Some(&dir), router)
            }
        }
    }

    /// Directory holding an area's project files in per-project mode.
    fn area_dir(&self, area: &Area) -> PathBuf {
        self.target.join(sanitize_segment(&area.title))
    }

    fn area_body(
        &mut self,
        area: &Area,
        level: usize,
        project_dir: Option<&Path>,
        router: &mut Router,
    ) -> Result<()> {
        let projects = match &area.id {
            None => {
                self.export_project(&Project::inbox(), level, project_dir, router)?;
                self.db.list_projects_without_area()?
            }
            Some(id) => {
                let loose = self.db.list_tasks_in_area_without_project(id)?;
                self.export_loose_tasks(area, &loose, level, project_dir, router)?;
                self.db.list_projects_in_area(id)?
            }
        };

        for project in &projects {
            self.export_project(project, level, project_dir, router)?;
        }
        Ok(())
    }

    /// Tasks filed under an area but outside any project. In per-project mode
    /// they get a file named after the area, created only when needed.
    fn export_loose_tasks(
        &mut self,
        area: &Area,
        tasks: &[Task],
        level: usize,
        project_dir: Option<&Path>,
        router: &mut Router,
    ) -> Result<()> {
        match project_dir {
            Some(_) if tasks.is_empty() => Ok(()),
            Some(dir) => {
                let path = dir.join(sink_file_name(&area.title));
                router.with_file(&path, |router| self.export_tasks(tasks, 0, router))
            }
            None => self.export_tasks(tasks, level, router),
        }
    }

    fn export_project(
        &mut self,
        project: &Project,
        level: usize,
        project_dir: Option<&Path>,
        router: &mut Router,
    ) -> Result<()> {
        debug!("Project: {} ({:?})", project.title, project.id);
        self.summary.projects += 1;

        let mut tags = TagSet::new();
        if let Some(id) = &project.id {
            tags.extend_titles(self.db.list_task_tags(id)?);
        }
        self.deriver.apply(&project.schedule, &mut tags);

        match project_dir {
            Some(dir) => {
                let path = dir.join(sink_file_name(&project.title));
                router.with_file(&path, |router| {
                    self.project_body(project, level, &tags, router)
                })
            }
            None => self.project_body(project, level, &tags, router),
        }
    }

    fn project_body(
        &mut self,
        project: &Project,
        level: usize,
        tags: &TagSet,
        router: &mut Router,
    ) -> Result<()> {
        router.emit(&render::project_header(&project.title, level, &tags.suffix()))?;
        router.emit(&render::notes_block(project.notes.as_deref(), level))?;

        let tasks = match &project.id {
            None => self.db.list_inbox_tasks()?,
            Some(id) => self.db.list_tasks_in_project(id)?,
        };
        self.export_tasks(&tasks, level + 1, router)
    }

    fn export_tasks(&mut self, tasks: &[Task], level: usize, router: &mut Router) -> Result<()> {
        for task in tasks {
            self.export_task(task, level, router)?;
        }
        Ok(())
    }

    fn export_task(&mut self, task: &Task, level: usize, router: &mut Router) -> Result<()> {
        debug!(
            "Task: {} ({}) Level: {} Status: {} Type: {:?}",
            task.title, task.id, level, task.status, task.kind
        );

        if task.is_action_group() {
            self.summary.action_groups += 1;
            router.emit(&render::action_group_header(&task.title, level))?;
            let children = self.db.list_tasks_in_action_group(&task.id)?;
            return self.export_tasks(&children, level + 1, router);
        }

        self.summary.tasks += 1;
        let mut tags = TagSet::new();
        tags.extend_titles(self.db.list_task_tags(&task.id)?);
        self.deriver.apply(&task.schedule, &mut tags);

        router.emit(&render::task_line(&task.title, level, &tags.suffix()))?;
        router.emit(&render::notes_block(task.notes.as_deref(), level))?;

        if task.has_checklist() {
            for item in self.db.list_checklist_items(&task.id)? {
                self.summary.checklist_items += 1;
                router.emit(&render::checklist_line(&item.title, level + 1))?;
            }
        }
        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).fs_context(path)
}
