use crate::format::format_temp;
use floe_core::{event::Message, reading::Reading, state::AppState};
use floe_theme::Theme;
use iced::{
    widget::{column, text},
    Alignment, Element,
};

/// Value box showing the latest temperature with a warmer/colder hint.
///
/// Before the first reading it renders a placeholder instead of a value.
#[derive(Debug, Default)]
pub struct ReadoutWidget;

impl ReadoutWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let snapshot = state.snapshot();

        let value = match &snapshot.latest {
            Some(reading) => format_temp(reading.temperature),
            None => String::from("--.- °C"),
        };

        let caption = match &snapshot.latest {
            Some(reading) => hint(reading.temperature, &snapshot.readings),
            None => "waiting for first reading",
        };

        column![
            text("Current Temperature").size(theme.heading_size),
            text(value).size(theme.value_size).color(theme.accent.to_iced()),
            text(caption).size(theme.font_size - 1.0).color(theme.muted.to_iced()),
        ]
        .spacing(f32::from(theme.gap))
        .align_x(Alignment::Center)
        .into()
    }
}

/// Compare the latest reading against the buffered mean.
fn hint(latest: f64, readings: &[Reading]) -> &'static str {
    if readings.len() < 2 {
        return "steady";
    }

    let mean = readings.iter().map(|r| r.temperature).sum::<f64>() / readings.len() as f64;
    if latest > mean + 0.05 {
        "warmer than usual"
    } else if latest < mean - 0.05 {
        "colder than usual"
    } else {
        "steady"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(temps: &[f64]) -> Vec<Reading> {
        temps
            .iter()
            .map(|t| Reading::new(*t, "2026-03-01 12:00:00"))
            .collect()
    }

    #[test]
    fn single_reading_is_steady() {
        assert_eq!(hint(-17.0, &readings(&[-17.0])), "steady");
    }

    #[test]
    fn above_the_mean_reads_warmer() {
        assert_eq!(hint(-16.2, &readings(&[-17.8, -17.5, -16.2])), "warmer than usual");
    }

    #[test]
    fn below_the_mean_reads_colder() {
        assert_eq!(hint(-17.9, &readings(&[-16.4, -16.6, -17.9])), "colder than usual");
    }
}
