use super::types::{normalize_entry_path, ArchiveEntry};
use crate::types::errors::ArchiveError;
use std::io::{Cursor, Read};
use std::sync::Arc;
use zip::ZipArchive;

/// An in-memory ZIP archive.
///
/// Cloning is cheap: the bytes and the parsed central directory are shared,
/// so each worker task can hold its own handle and read entries independently.
#[derive(Debug, Clone)]
pub struct PackArchive {
    zip: ZipArchive<Cursor<Arc<[u8]>>>,
}

impl PackArchive {
    /// Parse the central directory. Entry contents are not touched.
    pub fn open(bytes: impl Into<Arc<[u8]>>) -> Result<Self, ArchiveError> {
        let zip = ZipArchive::new(Cursor::new(bytes.into()))
            .map_err(|e| ArchiveError::Corrupt(e.to_string()))?;
        Ok(Self { zip })
    }

    /// List every entry in archive order.
    pub fn entries(&mut self) -> Result<Vec<ArchiveEntry>, ArchiveError> {
        (0..self.zip.len()).map(|index| self.entry_at(index)).collect()
    }

    /// Look up an entry by its exact (normalized) name.
    pub fn find(&mut self, name: &str) -> Option<ArchiveEntry> {
        let index = match self.zip.index_for_name(name) {
            Some(index) => index,
            // Names stored with `\` separators only match after normalization
            None => (0..self.zip.len()).find(|&i| {
                self.zip
                    .name_for_index(i)
                    .is_some_and(|raw| normalize_entry_path(raw) == name)
            })?,
        };
        self.entry_at(index).ok()
    }

    /// Read an entry, failing once more than `cap` bytes decompress.
    ///
    /// The cap is enforced on the actual stream, not the declared size, so a
    /// lying header cannot inflate past it.
    pub fn read_bytes(&mut self, entry: &ArchiveEntry, cap: u64) -> Result<Vec<u8>, ArchiveError> {
        let read_err = |reason: String| ArchiveError::Read {
            path: entry.path.clone(),
            reason,
        };

        let file = self
            .zip
            .by_index(entry.index)
            .map_err(|e| read_err(e.to_string()))?;

        let mut buf = Vec::with_capacity(entry.size.min(cap).min(1 << 20) as usize);
        file.take(cap.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|e| read_err(e.to_string()))?;

        if buf.len() as u64 > cap {
            return Err(ArchiveError::TooLarge {
                path: entry.path.clone(),
                limit: cap,
            });
        }
        Ok(buf)
    }

    pub fn read_text(&mut self, entry: &ArchiveEntry, cap: u64) -> Result<String, ArchiveError> {
        let bytes = self.read_bytes(entry, cap)?;
        String::from_utf8(bytes).map_err(|e| ArchiveError::Read {
            path: entry.path.clone(),
            reason: e.to_string(),
        })
    }

    fn entry_at(&mut self, index: usize) -> Result<ArchiveEntry, ArchiveError> {
        let file = self
            .zip
            .by_index_raw(index)
            .map_err(|e| ArchiveError::Entry {
                index,
                reason: e.to_string(),
            })?;
        let path = normalize_entry_path(file.name());

        Ok(ArchiveEntry {
            index,
            is_dir: file.is_dir() || path.ends_with('/'),
            size: file.size(),
            path,
        })
    }
}
