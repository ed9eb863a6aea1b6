//! Output writer for regenerated files
//!
//! Reads the existing destination, merges the freshly generated lines into it
//! so hand-edited regions survive, and only then replaces the destination.
//! The merged content is buffered completely before anything touches the disk,
//! so a structural error in either the prior file or the generated lines leaves
//! the destination exactly as it was.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gsl_core::{merge_lines, read_regions, RegionMap};
use similar::{ChangeTag, TextDiff};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::sink::LineBuffer;

/// Configuration for output writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputWriterConfig {
    /// Whether to run in dry-run mode (preview only)
    pub dry_run: bool,
    /// Whether to copy the previous file to `<path>.bak` before replacing it
    pub create_backups: bool,
}

impl Default for OutputWriterConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            create_backups: true,
        }
    }
}

/// What happened (or would happen) to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Destination did not exist
    Created,
    /// Destination existed with different content
    Updated,
    /// Merged content equals the existing content
    Unchanged,
}

impl WriteAction {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WriteAction::Created => "Created",
            WriteAction::Updated => "Updated",
            WriteAction::Unchanged => "Unchanged",
        }
    }
}

/// Line-level change counts between the old and new file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Lines added
    pub added: usize,
    /// Lines removed
    pub removed: usize,
}

/// Result of writing one generated file
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// Destination path
    pub path: PathBuf,
    /// Action taken
    pub action: WriteAction,
    /// Whether this was a dry-run
    pub dry_run: bool,
    /// Backup of the previous content, if one was made
    pub backup_path: Option<PathBuf>,
    /// Regions whose previous content was kept
    pub preserved: Vec<String>,
    /// Regions that are new in this generation
    pub fresh: Vec<String>,
    /// Previous regions no longer generated; their content was discarded
    pub dropped: Vec<String>,
    /// Change counts
    pub diff: DiffStats,
    /// Unified diff from the old to the new content
    pub unified_diff: String,
}

impl WriteReport {
    /// Whether the destination was (or would be) modified
    pub fn changed(&self) -> bool {
        self.action != WriteAction::Unchanged
    }
}

/// Writes generated lines to a file while preserving customized regions
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    config: OutputWriterConfig,
}

impl OutputWriter {
    /// Create a new output writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new output writer with custom configuration
    pub fn with_config(config: OutputWriterConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &OutputWriterConfig {
        &self.config
    }

    /// Merge `lines` into the file at `path`
    ///
    /// The existing file is read completely first. Nothing is written if the
    /// merge fails, if the result equals the current content, or in dry-run
    /// mode.
    pub fn write<T, S>(&self, path: &Path, lines: T) -> Result<WriteReport, GenerationError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let existing = Self::read_existing(path)?;
        let regions = match &existing {
            Some(content) => read_regions(content.as_bytes())?,
            None => RegionMap::new(),
        };
        debug!(
            "Recovered {} region(s) from {}",
            regions.len(),
            path.display()
        );

        let outcome = merge_lines(regions, lines)?;
        let content = render(&outcome.lines);

        let old_content = existing.as_deref().unwrap_or("");
        let (diff, unified_diff) = compute_diff(old_content, &content, path);

        let action = match &existing {
            None => WriteAction::Created,
            Some(old) if *old == content => WriteAction::Unchanged,
            Some(_) => WriteAction::Updated,
        };

        let mut backup_path = None;
        if action != WriteAction::Unchanged && !self.config.dry_run {
            if existing.is_some() && self.config.create_backups {
                backup_path = Some(self.create_backup(path)?);
            }
            self.write_atomic(path, &content)?;
            info!(
                "{} {} (+{} -{}, {} region(s) preserved)",
                action.label(),
                path.display(),
                diff.added,
                diff.removed,
                outcome.preserved.len()
            );
        } else {
            debug!(
                "Not writing {} ({}{})",
                path.display(),
                action.label(),
                if self.config.dry_run { ", dry-run" } else { "" }
            );
        }

        Ok(WriteReport {
            path: path.to_path_buf(),
            action,
            dry_run: self.config.dry_run,
            backup_path,
            preserved: outcome.preserved,
            fresh: outcome.fresh,
            dropped: outcome.dropped,
            diff,
            unified_diff,
        })
    }

    /// Run a template against a fresh [`LineBuffer`] and write the result
    pub fn generate<F>(&self, path: &Path, template: F) -> Result<WriteReport, GenerationError>
    where
        F: FnOnce(&mut LineBuffer),
    {
        let mut buffer = LineBuffer::new();
        template(&mut buffer);
        self.write(path, buffer)
    }

    /// Preview the merge without writing (dry-run mode)
    pub fn preview<T, S>(&self, path: &Path, lines: T) -> Result<WriteReport, GenerationError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = self.config.clone();
        config.dry_run = true;

        let writer = OutputWriter::with_config(config);
        writer.write(path, lines)
    }

    /// Get a one-line summary of a write report
    pub fn summarize_report(&self, report: &WriteReport) -> String {
        format!(
            "{}: {} (+{} -{}), regions preserved: {}, new: {}, dropped: {}{}",
            report.path.display(),
            report.action.label(),
            report.diff.added,
            report.diff.removed,
            report.preserved.len(),
            report.fresh.len(),
            report.dropped.len(),
            if report.dry_run { " (dry-run)" } else { "" }
        )
    }

    fn read_existing(path: &Path) -> Result<Option<String>, GenerationError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Copy the current file to `<path>.bak`
    fn create_backup(&self, path: &Path) -> Result<PathBuf, GenerationError> {
        let backup_path = PathBuf::from(format!("{}.bak", path.display()));

        fs::copy(path, &backup_path).map_err(|e| {
            GenerationError::WriteFailed(format!(
                "Failed to create backup {}: {}",
                backup_path.display(),
                e
            ))
        })?;

        Ok(backup_path)
    }

    /// Write to a temporary sibling file and rename it over the destination
    ///
    /// A symlinked destination is written through to its target, and an
    /// existing file keeps its permissions.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<(), GenerationError> {
        let target = match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).map_err(|e| {
                GenerationError::WriteFailed(format!(
                    "Failed to resolve link {}: {}",
                    path.display(),
                    e
                ))
            })?,
            _ => path.to_path_buf(),
        };
        let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    GenerationError::WriteFailed(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let temp_path = temp_path(&target);
        fs::write(&temp_path, content).map_err(|e| {
            GenerationError::WriteFailed(format!(
                "Failed to write {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        if let Some(permissions) = permissions {
            if let Err(e) = fs::set_permissions(&temp_path, permissions) {
                let _ = fs::remove_file(&temp_path);
                return Err(GenerationError::WriteFailed(format!(
                    "Failed to copy permissions to {}: {}",
                    temp_path.display(),
                    e
                )));
            }
        }

        if let Err(e) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(GenerationError::WriteFailed(format!(
                "Failed to replace {}: {}",
                target.display(),
                e
            )));
        }

        Ok(())
    }
}

/// Join lines into file content, terminating every line
fn render(lines: &[String]) -> String {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

fn compute_diff(old: &str, new: &str, path: &Path) -> (DiffStats, String) {
    let text_diff = TextDiff::from_lines(old, new);

    let mut stats = DiffStats::default();
    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.added += 1,
            ChangeTag::Delete => stats.removed += 1,
            ChangeTag::Equal => {}
        }
    }

    let name = path.display().to_string();
    let unified = text_diff
        .unified_diff()
        .context_radius(3)
        .header(&name, &name)
        .to_string();

    (stats, unified)
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = format!(
        ".{}.gsl-{}.tmp",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("output"),
        Uuid::new_v4()
    );
    path.with_file_name(file_name)
}
