use floe_config::StationConfig;
use floe_core::event::Message;
use floe_theme::Theme;
use iced::{
    widget::{column, rule, text},
    Element,
};

/// Station identity and reference links shown beside the live cards.
#[derive(Debug, Default)]
pub struct SidebarWidget;

impl SidebarWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, station: &'a StationConfig, theme: &'a Theme) -> Element<'a, Message> {
        let mut col = column![
            text(&station.name).size(theme.heading_size + 4.0),
            text(&station.description)
                .size(theme.font_size)
                .color(theme.muted.to_iced()),
            rule::horizontal(1.0f32),
        ]
        .spacing(f32::from(theme.gap));

        if !station.links.is_empty() {
            col = col.push(text("Links:").size(theme.font_size));
            for link in &station.links {
                col = col.push(
                    column![
                        text(&link.label).size(theme.font_size - 1.0),
                        text(&link.url)
                            .size(theme.font_size - 2.0)
                            .color(theme.accent.to_iced()),
                    ]
                    .spacing(2),
                );
            }
        }

        col.into()
    }
}
