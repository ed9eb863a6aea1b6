//! Recovery of region contents from previously generated output

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Pass, RegionError, Result};
use crate::marker::{classify, Classified, MarkerKind};
use crate::region::{RegionMap, RegionRecord};

/// Region currently being accumulated
#[derive(Debug)]
struct OpenRegion {
    name: String,
    line: usize,
    body: Vec<String>,
}

/// Line-by-line scanner over prior output
///
/// Feed every line with [`RegionExtractor::feed`], then call
/// [`RegionExtractor::finish`] to obtain the map.
#[derive(Debug, Default)]
pub struct RegionExtractor {
    map: RegionMap,
    open: Option<OpenRegion>,
    line: usize,
}

impl RegionExtractor {
    /// Create an extractor positioned before the first line
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the next line (without its terminator)
    pub fn feed(&mut self, text: &str) -> std::result::Result<(), RegionError> {
        self.line += 1;
        let line = self.line;

        let marker = match classify(text) {
            Classified::Plain(plain) => {
                if let Some(open) = self.open.as_mut() {
                    open.body.push(plain.to_string());
                }
                return Ok(());
            }
            Classified::Marker(marker) => marker,
        };

        match marker.kind {
            MarkerKind::Open | MarkerKind::Empty => {
                if let Some(open) = &self.open {
                    return Err(RegionError::NestedRegion {
                        pass: Pass::Prior,
                        line,
                        name: marker.name.to_string(),
                        open: open.name.clone(),
                    });
                }
                if self.map.contains(marker.name) {
                    return Err(RegionError::DuplicateRegion {
                        pass: Pass::Prior,
                        line,
                        name: marker.name.to_string(),
                    });
                }

                if marker.kind == MarkerKind::Empty {
                    self.map
                        .insert(marker.name.to_string(), RegionRecord::PreservedEmpty);
                } else {
                    self.open = Some(OpenRegion {
                        name: marker.name.to_string(),
                        line,
                        body: Vec::new(),
                    });
                }
            }
            MarkerKind::Close => {
                let open = match self.open.take() {
                    Some(open) => open,
                    None => {
                        return Err(RegionError::UnopenedRegion {
                            pass: Pass::Prior,
                            line,
                            name: marker.name.to_string(),
                        })
                    }
                };
                if open.name != marker.name {
                    return Err(RegionError::RegionNameMismatch {
                        pass: Pass::Prior,
                        line,
                        expected: open.name,
                        found: marker.name.to_string(),
                    });
                }

                debug!(
                    "Recovered region '{}' ({} lines)",
                    open.name,
                    open.body.len()
                );
                self.map
                    .insert(open.name, RegionRecord::Preserved(open.body));
            }
        }

        Ok(())
    }

    /// Finish scanning and return the recovered regions
    pub fn finish(self) -> std::result::Result<RegionMap, RegionError> {
        if let Some(open) = self.open {
            return Err(RegionError::UnclosedRegion {
                pass: Pass::Prior,
                line: open.line,
                name: open.name,
            });
        }
        Ok(self.map)
    }
}

/// Extract regions from an in-memory sequence of lines
pub fn extract_regions<I, S>(lines: I) -> std::result::Result<RegionMap, RegionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = RegionExtractor::new();
    for line in lines {
        extractor.feed(line.as_ref())?;
    }
    extractor.finish()
}

/// Extract regions from a reader, consuming it fully
pub fn read_regions<R: BufRead>(reader: R) -> Result<RegionMap> {
    let mut extractor = RegionExtractor::new();
    for line in reader.lines() {
        extractor.feed(&line?)?;
    }
    Ok(extractor.finish()?)
}

/// Extract regions from a file; a missing file yields an empty map
pub fn read_regions_from_path(path: &Path) -> Result<RegionMap> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No prior output at {}", path.display());
            return Ok(RegionMap::new());
        }
        Err(e) => return Err(e.into()),
    };
    read_regions(BufReader::new(file))
}
