//! gui/update/import.rs
//! Getting files into the playlist: the picker dialog and window drops.

use std::path::PathBuf;

use iced::Task;

use super::super::state::{App, Message};
use super::transport;

/// Open the multi-select picker off the UI thread. The dialog filter
/// matches what the player actually accepts.
pub(crate) fn open_files_pressed() -> Task<Message> {
    Task::perform(
        async {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Choose Music Files")
                .add_filter("Audio Files", &["mp3", "m4a"])
                .pick_files()
                .await;

            picked
                .map(|files| {
                    files
                        .into_iter()
                        .map(|f| f.path().to_path_buf())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        },
        Message::FilesPicked,
    )
}

pub(crate) fn files_picked(state: &mut App, paths: Vec<PathBuf>) -> Task<Message> {
    // Empty = dialog cancelled.
    add_files(state, paths)
}

/// iced delivers window-level drops one path at a time, already
/// filtered to real file-system paths.
pub(crate) fn file_dropped(state: &mut App, path: PathBuf) -> Task<Message> {
    add_files(state, vec![path])
}

/// Append in payload order. Appending cannot fail; the first track ever
/// appended becomes current and starts playing immediately.
pub(crate) fn add_files(state: &mut App, paths: Vec<PathBuf>) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }

    let count = paths.len();
    let mut first_track = None;

    for path in paths {
        tracing::debug!(path = %path.display(), "queueing file");
        if state.playlist.append(path) {
            first_track = state.playlist.cursor();
        }
    }

    state.status = if count == 1 {
        "Added 1 file".to_string()
    } else {
        format!("Added {count} files")
    };

    match first_track {
        Some(index) => transport::play_track(state, index),
        None => Task::none(),
    }
}
