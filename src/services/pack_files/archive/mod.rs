//! In-memory ZIP access for uploaded packs.
//!
//! Listing never decompresses; entry bytes are read on demand.

mod reader;
mod types;

// Re-export public API
pub use reader::PackArchive;
pub use types::{normalize_entry_path, ArchiveEntry};

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
