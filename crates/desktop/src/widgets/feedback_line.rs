use iced::widget::text;
use iced::{Element, Theme};

use crate::app::{scaled, Feedback, Message};
use crate::theme::tertiary_color;

/// Renders a conversion result in the palette color matching its kind.
pub fn feedback_line<'a>(fs: f32, feedback: &Feedback, theme: &Theme) -> Element<'a, Message> {
    let palette = theme.extended_palette();
    let (message, color) = match feedback {
        Feedback::Success(msg) => (msg.clone(), palette.success.base.color),
        Feedback::Notice(msg) => (msg.clone(), tertiary_color(theme)),
        Feedback::Error(msg) => (msg.clone(), palette.danger.base.color),
    };

    text(message).size(scaled(13.0, fs)).color(color).into()
}
