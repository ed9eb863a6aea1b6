//! Error types for region extraction and merging

use std::fmt;

use thiserror::Error;

/// Which scan produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Scanning the previously generated file on disk
    Prior,
    /// Scanning the freshly generated line stream
    Generated,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Prior => write!(f, "prior output"),
            Pass::Generated => write!(f, "generated output"),
        }
    }
}

/// Structural errors in the placement of customizable region markers
///
/// Every variant records the pass that found it and the 1-based line number
/// of the offending marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Closing marker without any open region
    #[error("{pass}, line {line}: closing marker for region '{name}' but no region is open")]
    UnopenedRegion {
        /// Pass that found the error
        pass: Pass,
        /// Line of the closing marker
        line: usize,
        /// Name on the closing marker
        name: String,
    },

    /// Closing marker names a different region than the open one
    #[error("{pass}, line {line}: closing marker for region '{found}' but region '{expected}' is open")]
    RegionNameMismatch {
        /// Pass that found the error
        pass: Pass,
        /// Line of the closing marker
        line: usize,
        /// Name of the region currently open
        expected: String,
        /// Name on the closing marker
        found: String,
    },

    /// Opening or self-closing marker while another region is open
    #[error("{pass}, line {line}: region '{name}' starts inside region '{open}'")]
    NestedRegion {
        /// Pass that found the error
        pass: Pass,
        /// Line of the nested marker
        line: usize,
        /// Name on the nested marker
        name: String,
        /// Name of the region already open
        open: String,
    },

    /// Region name used twice in the same pass
    #[error("{pass}, line {line}: region '{name}' is declared more than once")]
    DuplicateRegion {
        /// Pass that found the error
        pass: Pass,
        /// Line of the second declaration
        line: usize,
        /// Duplicated name
        name: String,
    },

    /// Input ended while a region was still open
    #[error("{pass}, line {line}: region '{name}' is never closed")]
    UnclosedRegion {
        /// Pass that found the error
        pass: Pass,
        /// Line of the opening marker
        line: usize,
        /// Name of the unclosed region
        name: String,
    },

    /// Generator emitted a marker without the `default` flag
    #[error("{pass}, line {line}: generated marker for region '{name}' is not flagged default")]
    GeneratorMarkerNotDefault {
        /// Always [`Pass::Generated`]
        pass: Pass,
        /// Line of the marker
        line: usize,
        /// Region name
        name: String,
    },
}

impl RegionError {
    /// Pass in which the error occurred
    pub fn pass(&self) -> Pass {
        match self {
            RegionError::UnopenedRegion { pass, .. }
            | RegionError::RegionNameMismatch { pass, .. }
            | RegionError::NestedRegion { pass, .. }
            | RegionError::DuplicateRegion { pass, .. }
            | RegionError::UnclosedRegion { pass, .. }
            | RegionError::GeneratorMarkerNotDefault { pass, .. } => *pass,
        }
    }

    /// 1-based line number of the offending marker
    pub fn line(&self) -> usize {
        match self {
            RegionError::UnopenedRegion { line, .. }
            | RegionError::RegionNameMismatch { line, .. }
            | RegionError::NestedRegion { line, .. }
            | RegionError::DuplicateRegion { line, .. }
            | RegionError::UnclosedRegion { line, .. }
            | RegionError::GeneratorMarkerNotDefault { line, .. } => *line,
        }
    }

    /// Region name found on the offending marker
    pub fn name(&self) -> &str {
        match self {
            RegionError::UnopenedRegion { name, .. }
            | RegionError::NestedRegion { name, .. }
            | RegionError::DuplicateRegion { name, .. }
            | RegionError::UnclosedRegion { name, .. }
            | RegionError::GeneratorMarkerNotDefault { name, .. } => name,
            RegionError::RegionNameMismatch { found, .. } => found,
        }
    }
}

/// Errors from the reader-based entry points
#[derive(Debug, Error)]
pub enum MergeError {
    /// Structural marker error
    #[error(transparent)]
    Region(#[from] RegionError),

    /// IO error while reading prior output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for reader-based operations
pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_cover_mismatch() {
        let err = RegionError::RegionNameMismatch {
            pass: Pass::Generated,
            line: 7,
            expected: "body".to_string(),
            found: "footer".to_string(),
        };

        assert_eq!(err.pass(), Pass::Generated);
        assert_eq!(err.line(), 7);
        assert_eq!(err.name(), "footer");
    }

    #[test]
    fn test_display_mentions_pass_and_line() {
        let err = RegionError::DuplicateRegion {
            pass: Pass::Prior,
            line: 12,
            name: "imports".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("prior output"));
        assert!(message.contains("line 12"));
        assert!(message.contains("imports"));
    }

    #[test]
    fn test_merge_error_wraps_region_error() {
        let err: MergeError = RegionError::UnclosedRegion {
            pass: Pass::Prior,
            line: 3,
            name: "body".to_string(),
        }
        .into();

        assert!(matches!(err, MergeError::Region(_)));
        assert!(err.to_string().contains("never closed"));
    }
}
