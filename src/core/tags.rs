//! core/tags.rs
//! ID3 tag reading for the now-playing display.
//!
//! Three outcomes are kept distinct so callers can log them differently,
//! even though two of them render the same way:
//! - tag present: fields as found
//! - no tag at all: empty snapshot
//! - unreadable tag: `Err(TagError)`

use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike};
use thiserror::Error;

use super::playlist::file_name;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("tag read failed: {0}")]
    Read(#[from] id3::Error),
}

/// What one tag read produced. Not cached; re-read on every selection.
#[derive(Debug, Clone, Default)]
pub struct TagSnapshot {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub artwork: Option<Vec<u8>>,
}

/// Resolved display values for the current track. Always renderable:
/// the fallback policy has already been applied.
#[derive(Debug, Clone)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub artwork: Option<Vec<u8>>,
}

/// Read the ID3 tag of `path`. A file without any tag is the "absent"
/// branch and returns an empty snapshot; only a failed read is an error.
pub fn read_snapshot(path: &Path) -> Result<TagSnapshot, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(snapshot_from_tag(&tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(TagSnapshot::default()),
        Err(e) => Err(TagError::Read(e)),
    }
}

/// Apply the fallback policy to a read outcome.
///
/// Missing title and missing artist BOTH fall back to the raw file
/// name, extension included. A failed read logs and then renders
/// exactly like an absent tag; it never blocks playback.
pub fn display_for(path: &Path, outcome: Result<TagSnapshot, TagError>) -> NowPlaying {
    let snapshot = match outcome {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "tag read failed; using file name");
            TagSnapshot::default()
        }
    };

    let fallback = file_name(path);

    NowPlaying {
        title: snapshot.title.unwrap_or_else(|| fallback.clone()),
        artist: snapshot.artist.unwrap_or(fallback),
        artwork: snapshot.artwork,
    }
}

fn snapshot_from_tag(tag: &Tag) -> TagSnapshot {
    TagSnapshot {
        title: clean(tag.title()),
        artist: clean(tag.artist()),
        artwork: first_picture(tag),
    }
}

/// Empty and whitespace-only frames count as absent.
fn clean(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Bytes of the first embedded picture (APIC/PIC), if any.
fn first_picture(tag: &Tag) -> Option<Vec<u8>> {
    for frame in tag.frames() {
        if frame.id() != "APIC" && frame.id() != "PIC" {
            continue;
        }
        if let Content::Picture(p) = frame.content() {
            return Some(p.data.clone());
        }
    }
    None
}
