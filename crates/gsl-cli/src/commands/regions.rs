// List customizable regions recovered from a file

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use gsl_core::{read_regions, RegionMap, RegionRecord};
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

/// Show the regions a merge would preserve from a file
pub struct RegionsCommand {
    pub file: PathBuf,
    pub json: bool,
}

impl RegionsCommand {
    pub fn new(file: PathBuf, json: bool) -> Self {
        Self { file, json }
    }

    /// Extract the region map; a missing file is an error here
    pub fn extract(&self) -> CliResult<RegionMap> {
        let file = fs::File::open(&self.file)?;
        Ok(read_regions(BufReader::new(file))?)
    }
}

impl Command for RegionsCommand {
    fn execute(&self) -> CliResult<()> {
        let regions = self.extract()?;

        if self.json {
            let json = serde_json::to_string_pretty(&regions)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", json);
        } else {
            let style = OutputStyle::default();
            println!(
                "{}",
                style.header(&format!("Regions in {}", self.file.display()))
            );
            println!("{}", format_regions(&regions, &style));
        }

        Ok(())
    }
}

/// One line per region, in file order
pub fn format_regions(regions: &RegionMap, style: &OutputStyle) -> String {
    if regions.is_empty() {
        return style.info("No customizable regions");
    }

    regions
        .iter()
        .map(|(name, record)| {
            let state = match record {
                RegionRecord::Preserved(_) => format!(
                    "content ({} line{})",
                    record.line_count(),
                    if record.line_count() == 1 { "" } else { "s" }
                ),
                RegionRecord::PreservedEmpty => "empty".to_string(),
            };
            format!("  {}  {}", style.code(name), state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
