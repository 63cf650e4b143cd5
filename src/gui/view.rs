//! The GUI renderer.
//! Reads `&App` (and its recomputed `ViewState`) and produces widgets;
//! never mutates state.

use iced::Length;
use iced::widget::{Column, button, column, row, scrollable, text};

use super::state::{App, LIST_HEIGHT, Message};

mod widgets;

pub(crate) fn view(state: &App) -> Column<'_, Message> {
    let open_btn = button("Open Files…").on_press(Message::OpenFilesPressed);
    let header = row![open_btn, text(&state.status).size(14)].spacing(12);

    let body = row![
        build_playlist(state).width(Length::FillPortion(2)),
        widgets::now_playing_panel(state).width(Length::FillPortion(1)),
    ]
    .spacing(12);

    column![header, body, widgets::playback_bar(state)]
        .spacing(12)
        .padding(12)
}

/// The queue, one clickable row per entry. Clicking a row plays it.
fn build_playlist(state: &App) -> Column<'_, Message> {
    if state.playlist.is_empty() {
        return column![
            text("Playlist"),
            text("Drop audio files here, or use Open Files…").size(14),
        ]
        .spacing(8);
    }

    let mut list = column![];
    for (i, entry) in state.playlist.entries().enumerate() {
        let prefix = if state.playlist.cursor() == Some(i) {
            "▶ "
        } else {
            "  "
        };

        list = list.push(
            button(text(format!("{prefix}{}", entry.label())))
                .on_press(Message::TrackClicked(i)),
        );
    }

    column![
        text("Playlist"),
        scrollable(list.spacing(6)).height(Length::Fixed(LIST_HEIGHT)),
    ]
    .spacing(8)
}
