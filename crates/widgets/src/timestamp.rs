use floe_core::{event::Message, state::AppState};
use floe_theme::Theme;
use iced::{
    widget::{column, text},
    Alignment, Element,
};

/// Card showing when the most recent reading was generated.
#[derive(Debug, Default)]
pub struct TimestampWidget;

impl TimestampWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let stamp = match &state.snapshot().latest {
            Some(reading) => reading.timestamp.clone(),
            None => String::from("no readings yet"),
        };

        column![
            text("Last Reading At").size(theme.heading_size),
            text(stamp).size(theme.font_size + 4.0),
        ]
        .spacing(f32::from(theme.gap))
        .align_x(Alignment::Center)
        .into()
    }
}
