/// One entry of an opened archive, listed without reading its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Position in the archive's central directory.
    pub index: usize,
    /// Entry name with `\` separators normalized to `/`.
    pub path: String,
    pub is_dir: bool,
    /// Declared uncompressed size.
    pub size: u64,
}

/// Normalize an entry name to forward-slash separators.
pub fn normalize_entry_path(name: &str) -> String {
    name.replace('\\', "/")
}
