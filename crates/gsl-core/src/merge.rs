//! Merging freshly generated lines with recovered region contents
//!
//! [`MergeWriter`] pulls lines from the generator one at a time and yields the
//! merged output lazily. Region bodies recovered from the prior output replace
//! whatever the generator produced for the same region name; brand-new regions
//! pass through untouched.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use crate::error::{Pass, RegionError};
use crate::marker::{classify, Classified, Marker, MarkerKind};
use crate::region::{RegionMap, RegionRecord};

/// Summary of a completed merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Merged output lines, without terminators
    pub lines: Vec<String>,
    /// Regions whose prior content was spliced in
    pub preserved: Vec<String>,
    /// Regions that did not exist before and kept the generated body
    pub fresh: Vec<String>,
    /// Prior regions the generator no longer declares; their content is gone
    pub dropped: Vec<String>,
}

/// Lazy merge over a generated line stream
///
/// Yields `Ok(line)` for every output line. After the first `Err` the
/// iterator is exhausted.
#[derive(Debug)]
pub struct MergeWriter<I> {
    regions: RegionMap,
    lines: I,
    line: usize,
    open: Option<(String, usize)>,
    skipping: bool,
    seen: HashSet<String>,
    pending: VecDeque<String>,
    preserved: Vec<String>,
    fresh: Vec<String>,
    done: bool,
}

impl<I, S> MergeWriter<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    /// Create a merge over `lines` using the regions recovered from prior output
    pub fn new<T>(regions: RegionMap, lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = S>,
    {
        Self {
            regions,
            lines: lines.into_iter(),
            line: 0,
            open: None,
            skipping: false,
            seen: HashSet::new(),
            pending: VecDeque::new(),
            preserved: Vec::new(),
            fresh: Vec::new(),
            done: false,
        }
    }

    /// Finish the merge, draining any remaining input
    pub fn finish(mut self) -> Result<MergeOutcome, RegionError> {
        let mut lines = Vec::new();
        for line in self.by_ref() {
            lines.push(line?);
        }
        Ok(MergeOutcome {
            lines,
            preserved: self.preserved,
            fresh: self.fresh,
            dropped: self.regions.into_names(),
        })
    }

    fn step(&mut self, text: String) -> Result<(), RegionError> {
        let marker = match classify(&text) {
            Classified::Plain(_) => {
                if !self.skipping {
                    self.pending.push_back(text);
                }
                return Ok(());
            }
            Classified::Marker(marker) => marker,
        };

        match marker.kind {
            MarkerKind::Open | MarkerKind::Empty => self.start_region(&marker, &text),
            MarkerKind::Close => self.close_region(&marker, &text),
        }
    }

    fn start_region(&mut self, marker: &Marker<'_>, text: &str) -> Result<(), RegionError> {
        let line = self.line;
        let name = marker.name;

        if let Some((open, _)) = &self.open {
            return Err(RegionError::NestedRegion {
                pass: Pass::Generated,
                line,
                name: name.to_string(),
                open: open.clone(),
            });
        }
        if self.seen.contains(name) {
            return Err(RegionError::DuplicateRegion {
                pass: Pass::Generated,
                line,
                name: name.to_string(),
            });
        }
        if !marker.is_default {
            return Err(RegionError::GeneratorMarkerNotDefault {
                pass: Pass::Generated,
                line,
                name: name.to_string(),
            });
        }
        self.seen.insert(name.to_string());

        let declared_open = marker.kind == MarkerKind::Open;
        match self.regions.remove(name) {
            None => {
                debug!("Region '{}' is new, keeping generated content", name);
                self.pending.push_back(text.to_string());
                self.fresh.push(name.to_string());
                self.skipping = false;
            }
            Some(RegionRecord::PreservedEmpty) => {
                debug!("Region '{}' stays empty", name);
                self.pending.push_back(marker.render(MarkerKind::Empty, false));
                self.preserved.push(name.to_string());
                self.skipping = true;
            }
            Some(RegionRecord::Preserved(body)) => {
                debug!("Preserving region '{}' ({} lines)", name, body.len());
                self.pending.push_back(marker.render(MarkerKind::Open, false));
                self.pending.extend(body);
                self.pending.push_back(marker.render(MarkerKind::Close, false));
                self.preserved.push(name.to_string());
                self.skipping = true;
            }
        }

        if declared_open {
            self.open = Some((name.to_string(), line));
        } else {
            self.skipping = false;
        }
        Ok(())
    }

    fn close_region(&mut self, marker: &Marker<'_>, text: &str) -> Result<(), RegionError> {
        let line = self.line;
        let open = match self.open.take() {
            Some((open, _)) => open,
            None => {
                return Err(RegionError::UnopenedRegion {
                    pass: Pass::Generated,
                    line,
                    name: marker.name.to_string(),
                })
            }
        };
        if open != marker.name {
            return Err(RegionError::RegionNameMismatch {
                pass: Pass::Generated,
                line,
                expected: open,
                found: marker.name.to_string(),
            });
        }

        // the synthetic close was emitted together with the preserved body
        if !self.skipping {
            self.pending.push_back(text.to_string());
        }
        self.skipping = false;
        Ok(())
    }

    fn fail(&mut self, err: RegionError) -> Option<Result<String, RegionError>> {
        self.done = true;
        self.pending.clear();
        Some(Err(err))
    }
}

impl<I, S> Iterator for MergeWriter<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    type Item = Result<String, RegionError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            match self.lines.next() {
                Some(text) => {
                    self.line += 1;
                    if let Err(err) = self.step(text.into()) {
                        return self.fail(err);
                    }
                }
                None => {
                    self.done = true;
                    if let Some((name, line)) = self.open.take() {
                        return self.fail(RegionError::UnclosedRegion {
                            pass: Pass::Generated,
                            line,
                            name,
                        });
                    }
                    for name in self.regions.names() {
                        warn!("Region '{}' is no longer generated, dropping its content", name);
                    }
                    return None;
                }
            }
        }
    }
}

/// Merge a generated line stream with recovered regions, buffering the result
pub fn merge_lines<T, S>(regions: RegionMap, lines: T) -> Result<MergeOutcome, RegionError>
where
    T: IntoIterator<Item = S>,
    S: Into<String>,
{
    MergeWriter::new(regions, lines).finish()
}
