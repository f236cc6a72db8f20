//! # Case Files
//!
//! Reading template files and writing rendered configuration files.
//!
//! Rendering a tree is all-or-nothing: every template is rendered in
//! memory first and files are written only when all of them succeeded.

use crate::blocks::{replace_blocks, BlockRule};
use crate::error::{TemplateError, TemplateResult};
use crate::lazy_dict::LazyDict;
use crate::template::Template;
use config::constants::TEMPLATE_SUFFIX;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Minimal file access needed to render a case.
///
/// # Examples
/// ```
/// use case_template::{CaseFiles, InMemoryFiles};
/// use std::path::Path;
///
/// let mut files = InMemoryFiles::default();
/// files.write(Path::new("system/controlDict"), "application pimpleFoam;").unwrap();
/// assert!(files.read_to_string(Path::new("system/controlDict")).is_ok());
/// ```
pub trait CaseFiles {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &Path) -> TemplateResult<String>;

    /// Creates or replaces a file, creating missing parent directories.
    fn write(&mut self, path: &Path, contents: &str) -> TemplateResult<()>;
}

/// Files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFiles;

impl CaseFiles for DiskFiles {
    fn read_to_string(&self, path: &Path) -> TemplateResult<String> {
        fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))
    }

    fn write(&mut self, path: &Path, contents: &str) -> TemplateResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TemplateError::io(parent, e))?;
        }
        fs::write(path, contents).map_err(|e| TemplateError::io(path, e))
    }
}

/// In-memory files, for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFiles {
    files: HashMap<PathBuf, String>,
}

impl InMemoryFiles {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Contents of a file, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl CaseFiles for InMemoryFiles {
    fn read_to_string(&self, path: &Path) -> TemplateResult<String> {
        self.files.get(path).cloned().ok_or_else(|| TemplateError::Io {
            path: path.to_path_buf(),
            message: "file not found".into(),
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> TemplateResult<()> {
        self.insert(path, contents);
        Ok(())
    }
}

/// Output path of a template: `destination/<relative path without .tmpl>`.
pub fn output_path(relative: &Path, destination: &Path) -> TemplateResult<PathBuf> {
    let file_name = relative
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(TEMPLATE_SUFFIX))
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            TemplateError::invalid_input(format!(
                "template '{}' does not end in '{TEMPLATE_SUFFIX}'",
                relative.display()
            ))
        })?;
    Ok(destination.join(relative.with_file_name(file_name)))
}

/// Renders one template text: block replacement, then token substitution.
pub fn render_text(dict: &LazyDict, text: &str, blocks: &[BlockRule]) -> TemplateResult<String> {
    let replaced = replace_blocks(text, blocks)?;
    dict.render(&replaced)
}

/// Renders every template of `templates` (paths relative to `source`) into
/// `destination`, mirroring their subdirectories. Returns the written
/// paths.
///
/// Nothing is written unless every template renders.
#[instrument(skip_all, fields(templates = templates.len(), destination = %destination.display()))]
pub fn render_tree<P: AsRef<Path>>(
    dict: &LazyDict,
    files: &mut impl CaseFiles,
    source: &Path,
    destination: &Path,
    templates: &[P],
    blocks: &[BlockRule],
) -> TemplateResult<Vec<PathBuf>> {
    let snapshot = dict.snapshot();

    let rendered = templates
        .iter()
        .map(|relative| {
            let relative = relative.as_ref();
            let input = source.join(relative);
            let render = || -> TemplateResult<(PathBuf, String)> {
                let text = files.read_to_string(&input)?;
                let replaced = replace_blocks(&text, blocks)?;
                let content = snapshot.render(&Template::parse(&replaced)?)?;
                Ok((output_path(relative, destination)?, content))
            };
            render().map_err(|e| e.in_file(&input))
        })
        .collect::<TemplateResult<Vec<_>>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (path, content) in rendered {
        files.write(&path, &content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote case file");
        written.push(path);
    }
    info!(files = written.len(), "rendered case files");
    Ok(written)
}

#[cfg(test)]
mod tests;
