//! GUI state + messages.
//! Pure data definitions used by update and view.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use iced::widget::image;

use crate::core::config::Settings;
use crate::core::playback::{EngineEvent, Transport};
use crate::core::playlist::Playlist;

use super::util::fmt_time_label;

/// Fixed UI heights (pixels)
pub(crate) const LIST_HEIGHT: f32 = 360.0;
pub(crate) const COVER_SIZE: f32 = 160.0;

/// App state
pub(crate) struct App {
    /// Status text shown near the top (imports, now playing, errors).
    pub status: String,

    /// The queue. Append-only; insertion order is playback order.
    pub playlist: Playlist,

    // Engine plumbing, created lazily on first playback.
    pub transport: Option<Box<dyn Transport>>,
    pub engine_events: Option<RefCell<Receiver<EngineEvent>>>,

    // Derived playback state, rebuilt on every track change.
    pub is_playing: bool,
    pub position_ms: u64,
    pub duration_ms: Option<u64>,

    /// Seek slider position, 0..=100. Follows playback progress except
    /// while the user is dragging.
    pub seek_pct: f32,
    pub seek_dragging: bool,
    /// Volume slider position, 0..=100. Committed to the engine only on
    /// release.
    pub volume_pct: f32,

    // Now-playing display (fallbacks already applied).
    pub title_line: String,
    pub artist_line: String,
    pub cover: Option<image::Handle>,
    /// Configured fallback cover; `None` means the placeholder widget.
    pub default_cover: Option<image::Handle>,
}

impl App {
    /// Initial state from the resolved settings.
    pub(crate) fn with_settings(settings: Settings) -> Self {
        let default_cover = settings.artwork.default_cover.as_ref().and_then(|path| {
            match std::fs::read(path) {
                Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "default cover unreadable; using placeholder"
                    );
                    None
                }
            }
        });

        Self {
            status: "Open files or drop them on the playlist.".to_string(),
            playlist: Playlist::new(),

            transport: None,
            engine_events: None,

            is_playing: false,
            position_ms: 0,
            duration_ms: None,

            seek_pct: 0.0,
            seek_dragging: false,
            volume_pct: (settings.audio.volume * 100.0).clamp(0.0, 100.0),

            title_line: String::new(),
            artist_line: String::new(),
            cover: None,
            default_cover,
        }
    }

    /// Startup state: config file + env, falling back to defaults.
    pub(crate) fn load() -> Self {
        let settings = match Settings::load() {
            Ok(s) => {
                if let Err(e) = s.validate() {
                    tracing::warn!(error = %e, "invalid config; using defaults");
                    Settings::default()
                } else {
                    s
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "config load failed; using defaults");
                Settings::default()
            }
        };

        Self::with_settings(settings)
    }

    /// Recompute everything the view renders from the playback state.
    /// The view never derives these itself.
    pub(crate) fn view_state(&self) -> ViewState {
        ViewState {
            transport_label: if self.is_playing { "Pause" } else { "Play" },
            time_label: fmt_time_label(self.position_ms, self.duration_ms),
            seek_position: self.seek_pct,
            volume_position: self.volume_pct,
            title: if self.title_line.is_empty() {
                "Nothing playing".to_string()
            } else {
                self.title_line.clone()
            },
            artist: self.artist_line.clone(),
        }
    }
}

/// Derived labels and slider positions for the transport bar and the
/// now-playing panel.
#[derive(Debug, Clone)]
pub(crate) struct ViewState {
    pub transport_label: &'static str,
    /// `"MM:SS / MM:SS"`, or `"MM:SS / --:--"` while duration is unknown.
    pub time_label: String,
    pub seek_position: f32,
    pub volume_position: f32,
    pub title: String,
    pub artist: String,
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Periodic poll that drains engine events.
    Tick,

    // Import
    OpenFilesPressed,
    /// Dialog result; empty when the user cancelled.
    FilesPicked(Vec<PathBuf>),
    /// One file dropped onto the window.
    FileDropped(PathBuf),

    // Playlist + transport
    TrackClicked(usize),
    TogglePlayPause,
    Next,
    Prev,

    // Seek slider: live seeks while dragging, flag cleared on release.
    SeekDragged(f32),
    SeekReleased,

    // Volume slider: position updates while dragging, commit on release.
    VolumeDragged(f32),
    VolumeReleased,
}
