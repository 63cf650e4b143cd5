//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{App, Message};

mod import;
mod transport;


pub(crate) fn update(state: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick => transport::drain_events(state),

        // Import
        Message::OpenFilesPressed => import::open_files_pressed(),
        Message::FilesPicked(paths) => import::files_picked(state, paths),
        Message::FileDropped(path) => import::file_dropped(state, path),

        // Playlist + transport
        Message::TrackClicked(i) => transport::play_track(state, i),
        Message::TogglePlayPause => transport::toggle_play_pause(state),
        Message::Next => transport::next(state),
        Message::Prev => transport::prev(state),

        // Seek
        Message::SeekDragged(pct) => transport::seek_dragged(state, pct),
        Message::SeekReleased => transport::seek_released(state),

        // Volume
        Message::VolumeDragged(pct) => transport::volume_dragged(state, pct),
        Message::VolumeReleased => transport::volume_released(state),
    }
}
