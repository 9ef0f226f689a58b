use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Theme};

use crate::app::{scaled, App, Feedback, Message};
use crate::theme::tertiary_color;
use crate::widgets::feedback_line::feedback_line;
use crate::widgets::file_row::file_row;

pub fn view<'a>(app: &App, theme: &Theme) -> Element<'a, Message> {
    let fs = app.settings.font_scale;
    let session = &app.session;

    let ready = session.video_input.is_some() && session.extract_dir.is_some();
    let extract_btn = button(text("Extract Images").size(scaled(15.0, fs)))
        .on_press_maybe(ready.then_some(Message::ExtractImages))
        .padding([14, 24])
        .width(Length::Fill);

    let mut col = column![
        file_row(
            fs,
            "Video",
            session.video_input.as_deref(),
            Message::SelectVideo,
            theme,
        ),
        Space::new().height(12),
    ]
    .spacing(0);

    if let Some(probe) = &app.probe {
        col = col.push(stats_panel(fs, probe, theme));
        col = col.push(Space::new().height(12));
    }

    col = col
        .push(file_row(
            fs,
            "Destination folder",
            session.extract_dir.as_deref(),
            Message::SelectExtractFolder,
            theme,
        ))
        .push(Space::new().height(20))
        .push(extract_btn);

    if let Some(feedback) = &app.extract_feedback {
        col = col
            .push(Space::new().height(16))
            .push(feedback_line(fs, feedback, theme));

        if matches!(feedback, Feedback::Success(_)) {
            col = col.push(Space::new().height(8)).push(
                button(text("Show in Folder").size(scaled(13.0, fs)))
                    .on_press(Message::ShowExtractFolder)
                    .padding([8, 16])
                    .style(button::secondary),
            );
        }
    }

    col.into()
}

/// Metadata report for the currently selected video, or the probe error.
fn stats_panel<'a>(
    fs: f32,
    probe: &Result<framestitch_core::pipeline::probe_video_use_case::VideoProbe, String>,
    theme: &Theme,
) -> Element<'a, Message> {
    let palette = theme.extended_palette();
    let content: Element<'a, Message> = match probe {
        Ok(probe) => text(probe.to_string())
            .size(scaled(13.0, fs))
            .color(tertiary_color(theme))
            .into(),
        Err(e) => text(format!("Error reading video statistics: {e}"))
            .size(scaled(13.0, fs))
            .color(palette.danger.base.color)
            .into(),
    };

    container(content)
        .padding([12, 16])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
