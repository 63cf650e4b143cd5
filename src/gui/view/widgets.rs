//! Reusable widgets: the now-playing panel and the bottom playback bar.

use iced::widget::{button, column, container, image, row, slider, text};
use iced::{Alignment, Element, Length};

use super::super::state::{App, COVER_SIZE, Message};

/// Cover art, current title, current artist.
pub(crate) fn now_playing_panel(state: &App) -> iced::widget::Column<'_, Message> {
    let vs = state.view_state();

    // Embedded art, else the configured default cover, else placeholder.
    let art = state.cover.as_ref().or(state.default_cover.as_ref());

    column![
        text("Now playing"),
        cover_thumb(art, COVER_SIZE),
        text(vs.title).size(18),
        text(vs.artist).size(14),
    ]
    .spacing(10)
}

fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(28), text("cover").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}

/// If `handle` exists, show it; otherwise show the placeholder.
fn cover_thumb(handle: Option<&image::Handle>, size: f32) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Bottom playback bar: transport buttons, seek slider with the
/// `MM:SS / MM:SS` readout, volume slider. Emits only Messages.
pub(crate) fn playback_bar(state: &App) -> iced::widget::Container<'_, Message> {
    let vs = state.view_state();

    let prev_btn = button("⏮").on_press(Message::Prev);
    let play_btn = button(vs.transport_label).on_press(Message::TogglePlayPause);
    let next_btn = button("⏭").on_press(Message::Next);

    let seek = slider(0.0..=100.0, vs.seek_position, Message::SeekDragged)
        .on_release(Message::SeekReleased)
        .width(Length::Fill);

    let vol = slider(0.0..=100.0, vs.volume_position, Message::VolumeDragged)
        .on_release(Message::VolumeReleased)
        .width(Length::Fixed(140.0));

    let bar = row![
        row![prev_btn, play_btn, next_btn]
            .spacing(8)
            .align_y(Alignment::Center),
        row![seek, text(vs.time_label).size(12)]
            .spacing(10)
            .align_y(Alignment::Center)
            .width(Length::Fill),
        row![text("Vol").size(12), vol]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar).padding(12)
}
