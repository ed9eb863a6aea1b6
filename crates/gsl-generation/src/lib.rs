#![warn(missing_docs)]

//! Generator-side helpers for GSL output
//!
//! Templates write lines into an explicit [`LineSink`]. The collected lines are
//! handed to [`OutputWriter`], which merges them with the previous version of
//! the destination so customized regions survive regeneration, and replaces
//! the file only after the merge succeeded.

pub mod case;
pub mod error;
pub mod lines;
pub mod output_writer;
pub mod sink;

// Re-export public API
pub use case::CaseStyle;
pub use error::GenerationError;
pub use lines::lines;
pub use output_writer::{DiffStats, OutputWriter, OutputWriterConfig, WriteAction, WriteReport};
pub use sink::{LineBuffer, LineSink};
