//! Release notes rendering and writing.

pub mod assemble;
pub mod format;
pub mod writer;

pub use assemble::generate_release_notes;
pub use format::{format_entry, short_hash, SUMMARY_INSTRUCTION};
pub use writer::{generate_summary, write_release_notes, DEFAULT_OUTPUT_FILE};
