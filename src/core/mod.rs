//! core/mod.rs
//!
//! Everything the GUI is not:
//! - the playlist store (ordered queue + cursor)
//! - tag reading and the display fallback policy
//! - the playback engine (audio thread + command/event channels)
//! - settings
//!
//! Nothing in here imports iced.

pub mod config;
pub mod playback;
pub mod playlist;
pub mod tags;
