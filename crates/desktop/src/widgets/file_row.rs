use std::path::Path;

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Theme};

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

/// A labeled path field with a browse button, used for every file and
/// folder input on the conversion tabs.
pub fn file_row<'a>(
    fs: f32,
    label: &str,
    path: Option<&Path>,
    on_browse: Message,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let display_text: Element<'a, Message> = if let Some(path) = path {
        text(path.display().to_string()).size(scaled(14.0, fs)).into()
    } else {
        text("Nothing selected")
            .size(scaled(14.0, fs))
            .color(tertiary)
            .into()
    };

    let btn = button(text("Browse\u{2026}").size(scaled(13.0, fs)))
        .padding([6, 14])
        .on_press(on_browse)
        .style(button::secondary);

    let label_text = text(label.to_uppercase())
        .size(scaled(11.0, fs))
        .color(tertiary);

    let content = row![column![label_text, display_text].width(Length::Fill), btn]
        .spacing(8)
        .align_y(iced::Alignment::Center);

    container(content)
        .padding([12, 16])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
