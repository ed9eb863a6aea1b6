#![warn(missing_docs)]

//! Customization-preserving merge engine
//!
//! Regenerating a file from a template must not destroy hand edits made inside
//! named customizable regions. This crate recovers the content of those regions
//! from the previously generated file and splices it into a freshly generated
//! line stream.
//!
//! The flow is always the same:
//!
//! 1. [`read_regions_from_path`] (or [`extract_regions`]) scans the prior output
//!    into a [`RegionMap`]. A missing file is the first-generation case and
//!    yields an empty map.
//! 2. [`MergeWriter`] consumes the new lines, consults the map and yields the
//!    merged output. [`merge_lines`] buffers the whole result.
//!
//! Prior output must be read completely before the destination is rewritten,
//! since both usually refer to the same path.

pub mod error;
pub mod extractor;
pub mod marker;
pub mod merge;
pub mod region;

// Re-export public API
pub use error::{MergeError, Pass, RegionError, Result};
pub use extractor::{extract_regions, read_regions, read_regions_from_path, RegionExtractor};
pub use marker::{classify, marker_text, Classified, Marker, MarkerKind};
pub use merge::{merge_lines, MergeOutcome, MergeWriter};
pub use region::{RegionMap, RegionRecord};
