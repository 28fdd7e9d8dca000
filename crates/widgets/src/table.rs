use floe_core::{event::Message, state::AppState};
use floe_theme::Theme;
use iced::{
    widget::{column, row, text},
    Element, Length,
};

/// "Most Recent Readings" — a header row plus one row per buffered reading,
/// in buffer (chronological) order.
#[derive(Debug, Default)]
pub struct TableWidget;

impl TableWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let table = &state.snapshot().table;

        let header = row![
            text("Temperature (°C)")
                .size(theme.font_size)
                .color(theme.muted.to_iced())
                .width(Length::FillPortion(1)),
            text("Timestamp")
                .size(theme.font_size)
                .color(theme.muted.to_iced())
                .width(Length::FillPortion(2)),
        ];

        let mut rows = column![text("Most Recent Readings").size(theme.heading_size), header]
            .spacing(f32::from(theme.gap));

        for entry in &table.rows {
            rows = rows.push(row![
                text(&entry.temperature)
                    .size(theme.font_size)
                    .width(Length::FillPortion(1)),
                text(&entry.timestamp)
                    .size(theme.font_size)
                    .width(Length::FillPortion(2)),
            ]);
        }

        rows.into()
    }
}
