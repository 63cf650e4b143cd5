//! core/playlist.rs
//! The playlist store: an append-only list of queued files plus the
//! "current track" cursor.
//!
//! Ordinals are display numbers assigned at insertion (1-based, always
//! increasing, never reused), independent of list position.

use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// One queued file.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub ordinal: u64,
}

impl Entry {
    /// Row label for the playlist view, e.g. `3. song.mp3`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.ordinal, file_name(&self.path))
    }
}

/// Raw file name (with extension). Falls back to the full path text for
/// paths like `..` that have no final component.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Ordered queue of entries. Insertion order is playback order; the
/// cursor wraps in both directions.
///
/// Invariant: `cursor` is `None` exactly while the list is empty, and
/// always in-bounds otherwise. There is no remove/reorder/clear.
#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<Entry>,
    cursor: Option<usize>,
    appended: u64,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to the end of the queue. Duplicates are allowed.
    ///
    /// Returns `true` when this was the first entry, which also makes it
    /// the current track (the caller is expected to start playing it).
    pub fn append(&mut self, path: PathBuf) -> bool {
        self.appended += 1;
        self.entries.push(Entry {
            path,
            ordinal: self.appended,
        });

        if self.cursor.is_none() {
            self.cursor = Some(0);
            return true;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry at the cursor, if any track is current.
    pub fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor?)
    }

    /// Move the cursor to an explicit index (track clicked in the list).
    /// Out-of-range indices are ignored; the view only emits valid ones.
    pub fn set_cursor(&mut self, index: usize) -> Option<&Entry> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index)
    }

    /// Step the cursor by `delta` entries, wrapping in both directions.
    /// Returns the new cursor, or `None` on an empty playlist.
    pub fn advance(&mut self, delta: i64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let len = self.entries.len() as i64;
        let at = self.cursor.unwrap_or(0) as i64;
        let next = (at + delta).rem_euclid(len) as usize;

        self.cursor = Some(next);
        Some(next)
    }
}
