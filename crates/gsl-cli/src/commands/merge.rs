// Merge freshly generated output into an existing file

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use gsl_generation::{OutputWriter, OutputWriterConfig, WriteAction, WriteReport};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

/// Merge generated lines into a destination file
pub struct MergeCommand {
    pub dest: PathBuf,
    /// Generated lines; stdin when `None` or `-`
    pub input: Option<PathBuf>,
    pub dry_run: bool,
    pub show_diff: bool,
    pub create_backups: bool,
}

impl MergeCommand {
    pub fn new(dest: PathBuf, input: Option<PathBuf>) -> Self {
        Self {
            dest,
            input,
            dry_run: false,
            show_diff: false,
            create_backups: true,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    pub fn with_backups(mut self, create_backups: bool) -> Self {
        self.create_backups = create_backups;
        self
    }

    fn read_input(&self) -> CliResult<Vec<String>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                debug!("Reading generated lines from {}", path.display());
                let file = fs::File::open(path)?;
                Ok(BufReader::new(file).lines().collect::<io::Result<Vec<_>>>()?)
            }
            _ => {
                debug!("Reading generated lines from stdin");
                Ok(io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?)
            }
        }
    }

    /// Merge the given lines into the destination
    pub fn run(&self, lines: Vec<String>) -> CliResult<WriteReport> {
        if self.dest.is_dir() {
            return Err(CliError::InvalidArgument {
                message: format!("{} is a directory", self.dest.display()),
            });
        }

        let writer = OutputWriter::with_config(OutputWriterConfig {
            dry_run: self.dry_run,
            create_backups: self.create_backups,
        });
        Ok(writer.write(&self.dest, lines)?)
    }
}

impl Command for MergeCommand {
    fn execute(&self) -> CliResult<()> {
        let lines = self.read_input()?;
        let report = self.run(lines)?;
        println!("{}", render_report(&report, &OutputStyle::default(), self.show_diff));
        Ok(())
    }
}

/// Human-readable summary of a write
pub fn render_report(report: &WriteReport, style: &OutputStyle, show_diff: bool) -> String {
    let mut out = Vec::new();
    let path = style.code(&report.path.display().to_string());

    let headline = match (report.action, report.dry_run) {
        (WriteAction::Unchanged, _) => style.info(&format!("{} is up to date", path)),
        (WriteAction::Created, true) => style.info(&format!("Would create {}", path)),
        (WriteAction::Updated, true) => style.info(&format!("Would update {}", path)),
        (WriteAction::Created, false) => style.success(&format!("Created {}", path)),
        (WriteAction::Updated, false) => style.success(&format!("Updated {}", path)),
    };
    out.push(headline);

    if report.changed() {
        out.push(format!(
            "  +{} -{} lines",
            report.diff.added, report.diff.removed
        ));
    }
    if !report.preserved.is_empty() {
        out.push(format!("  preserved: {}", report.preserved.join(", ")));
    }
    if !report.fresh.is_empty() {
        out.push(format!("  new: {}", report.fresh.join(", ")));
    }
    if !report.dropped.is_empty() {
        out.push(style.warning(&format!(
            "Discarded content of regions no longer generated: {}",
            report.dropped.join(", ")
        )));
    }
    if let Some(backup) = &report.backup_path {
        out.push(format!("  backup: {}", backup.display()));
    }
    if show_diff && report.changed() {
        out.push(style.diff(report.unified_diff.trim_end()));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generated() -> Vec<String> {
        vec![
            "class A {".to_string(),
            "  // <default GSL customizable: body>".to_string(),
            "  // fill in".to_string(),
            "  // </GSL customizable: body>".to_string(),
            "}".to_string(),
        ]
    }

    #[test]
    fn test_merge_preserves_edits() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("A.java");
        fs::write(
            &dest,
            "class A {\n  // <GSL customizable: body>\n  int x = 1;\n  // </GSL customizable: body>\n}\n",
        )
        .unwrap();

        let report = MergeCommand::new(dest.clone(), None)
            .with_backups(false)
            .run(generated())
            .unwrap();

        assert_eq!(report.action, WriteAction::Unchanged);
        assert_eq!(report.preserved, vec!["body"]);
    }

    #[test]
    fn test_dry_run_from_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("A.java");
        let input = temp_dir.path().join("generated.txt");
        fs::write(&input, generated().join("\n")).unwrap();

        let cmd = MergeCommand::new(dest.clone(), Some(input)).with_dry_run(true);
        let lines = cmd.read_input().unwrap();
        assert_eq!(lines, generated());

        let report = cmd.run(lines).unwrap();
        assert_eq!(report.action, WriteAction::Created);
        assert!(!dest.exists());

        let text = render_report(&report, &OutputStyle::plain(), true);
        assert!(text.starts_with("ℹ Would create"));
        assert!(text.contains("new: body"));
        assert!(text.contains("+  // fill in"));
    }

    #[test]
    fn test_structural_error_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("A.java");

        let err = MergeCommand::new(dest.clone(), None)
            .run(vec!["// <GSL customizable: a>".to_string()])
            .unwrap_err();

        assert!(matches!(err, CliError::Generation(_)));
        assert!(err.user_message().contains("line 1"));
        assert!(!dest.exists());
    }

    #[test]
    fn test_directory_destination_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = MergeCommand::new(temp_dir.path().to_path_buf(), None)
            .run(vec!["x".to_string()])
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_render_dropped_regions() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("A.java");
        fs::write(&dest, "<GSL customizable: old>\nkeep me\n</GSL customizable: old>\n").unwrap();

        let report = MergeCommand::new(dest, None)
            .with_backups(false)
            .run(vec!["fresh".to_string()])
            .unwrap();

        let text = render_report(&report, &OutputStyle::plain(), false);
        assert!(text.starts_with("✓ Updated"));
        assert!(text.contains("⚠ Discarded content of regions no longer generated: old"));
    }
}
