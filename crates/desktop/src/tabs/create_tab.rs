use iced::widget::{button, column, row, slider, text, Space};
use iced::{Element, Length, Theme};

use framestitch_core::shared::constants::{MAX_FPS, MIN_FPS};

use crate::app::{scaled, App, Message};
use crate::widgets::feedback_line::feedback_line;
use crate::widgets::file_row::file_row;

pub fn view<'a>(app: &App, theme: &Theme) -> Element<'a, Message> {
    let fs = app.settings.font_scale;
    let session = &app.session;

    let fps_row = row![
        text("Framerate").size(scaled(13.0, fs)),
        slider(MIN_FPS..=MAX_FPS, session.fps, Message::FpsChanged),
        text(format!("{} fps", session.fps)).size(scaled(13.0, fs)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let ready = session.image_dir.is_some() && session.video_output.is_some();
    let create_btn = button(text("Create Video").size(scaled(15.0, fs)))
        .on_press_maybe(ready.then_some(Message::CreateVideo))
        .padding([14, 24])
        .width(Length::Fill);

    let mut col = column![
        file_row(
            fs,
            "Image folder",
            session.image_dir.as_deref(),
            Message::SelectImageFolder,
            theme,
        ),
        Space::new().height(12),
        file_row(
            fs,
            "Saves to",
            session.video_output.as_deref(),
            Message::SelectVideoOutput,
            theme,
        ),
        Space::new().height(16),
        fps_row,
        Space::new().height(20),
        create_btn,
    ]
    .spacing(0);

    if let Some(feedback) = &app.create_feedback {
        col = col
            .push(Space::new().height(16))
            .push(feedback_line(fs, feedback, theme));
    }

    col.into()
}
