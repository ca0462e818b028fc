//! Output routing.
//!
//! The [`Router`] owns a stack of sinks. The top of the stack is the active
//! sink and receives every rendered block. Scopes that need their own file
//! call [`Router::with_file`], which pushes a freshly truncated file, runs the
//! scope, then pops, flushes and closes it on every exit path. Sinks below
//! the top stay open and become active again once the scope returns.
//!
//! A path opened a second time during the same run is appended to rather
//! than truncated, so two scopes sharing a file name never erase each other.

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{IoResultExt, Result},
    render::Block,
};

/// Extension of every file the export writes.
pub const FILE_EXTENSION: &str = "taskpaper";

/// Label recorded for the process output stream.
pub const STDOUT_LABEL: &str = "-";

/// Makes a title usable as a single path segment.
pub fn sanitize_segment(title: &str) -> String {
    title.replace('/', "|")
}

/// `<title>.taskpaper` with the title sanitized.
pub fn sink_file_name(title: &str) -> String {
    format!("{}.{FILE_EXTENSION}", sanitize_segment(title))
}

struct Sink {
    writer: Box<dyn Write>,
    has_output: bool,
}

impl Sink {
    fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            has_output: false,
        }
    }

    /// Opens `path`, truncating it unless `append` is set.
    fn open(path: &Path, append: bool) -> Result<Self> {
        let file = if append {
            info!("Appending to {}", path.display());
            OpenOptions::new().append(true).open(path).fs_context(path)?
        } else {
            info!("Writing {}", path.display());
            File::create(path).fs_context(path)?
        };
        let has_output = file.metadata().fs_context(path)?.len() > 0;

        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            has_output,
        })
    }
}

/// Single-slot sink manager with stack discipline.
pub struct Router {
    stack: Vec<Sink>,
    opened: Vec<String>,
    files: HashSet<PathBuf>,
}

impl Router {
    /// Router whose base sink is `writer`, recorded as opened under `label`.
    pub fn new(label: impl Into<String>, writer: Box<dyn Write>) -> Self {
        let mut router = Self::idle(writer);
        router.opened.push(label.into());
        router
    }

    /// Router whose base sink only serves as the fallback between scopes and
    /// is not counted as an opened sink.
    pub fn idle(writer: Box<dyn Write>) -> Self {
        Self {
            stack: vec![Sink::new(writer)],
            opened: Vec::new(),
            files: HashSet::new(),
        }
    }

    /// Router writing to the process output stream.
    pub fn stdout() -> Self {
        Self::new(STDOUT_LABEL, Box::new(BufWriter::new(io::stdout())))
    }

    /// Router writing to a freshly created file at `path`.
    pub fn create_file(path: &Path) -> Result<Self> {
        let sink = Sink::open(path, false)?;
        let mut router = Self {
            stack: vec![sink],
            opened: vec![path.display().to_string()],
            files: HashSet::new(),
        };
        router.files.insert(path.to_path_buf());
        Ok(router)
    }

    /// Writes `block` to the active sink.
    pub fn emit(&mut self, block: &Block) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }

        let sink = self.active();
        if block.separated && sink.has_output {
            sink.writer.write_all(b"\n")?;
        }
        for line in &block.lines {
            sink.writer.write_all(line.as_bytes())?;
            sink.writer.write_all(b"\n")?;
        }
        sink.has_output = true;
        Ok(())
    }

    /// Runs `scope` with the file at `path` as the active sink. The file is
    /// truncated the first time the run opens it and appended to afterwards.
    pub fn with_file<T, F>(&mut self, path: &Path, scope: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let append = self.files.contains(path);
        let sink = Sink::open(path, append)?;
        self.files.insert(path.to_path_buf());
        let label = (!append).then(|| path.display().to_string());
        self.enter(label, sink, scope)
    }

    /// Runs `scope` with `writer` as the active sink, restoring the previous
    /// sink afterwards even if `scope` fails.
    pub fn with_sink<T, F>(&mut self, label: String, writer: Box<dyn Write>, scope: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.enter(Some(label), Sink::new(writer), scope)
    }

    /// Labels of every sink opened so far, in opening order. A reopened file
    /// is listed once.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    /// Flushes the base sink and returns the opened-sink record.
    pub fn finish(mut self) -> Result<Vec<String>> {
        for sink in self.stack.iter_mut().rev() {
            sink.writer.flush()?;
        }
        Ok(self.opened)
    }

    fn enter<T, F>(&mut self, label: Option<String>, sink: Sink, scope: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.opened.extend(label);
        self.stack.push(sink);

        let result = scope(self);
        let closed = self.pop();

        let value = result?;
        closed?;
        Ok(value)
    }

    fn active(&mut self) -> &mut Sink {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn pop(&mut self) -> Result<()> {
        // The base sink is never popped by a scope.
        if self.stack.len() > 1 {
            if let Some(mut sink) = self.stack.pop() {
                sink.writer.flush()?;
            }
        }
        Ok(())
    }
}
