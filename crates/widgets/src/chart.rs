use floe_core::{event::Message, state::AppState, trend::TrendLine};
use floe_theme::Theme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size};

/// Scatter chart of the buffered readings with a least-squares trend overlay.
///
/// Degrades gracefully: no readings renders a waiting caption, and a single
/// reading renders one point with no line.
#[derive(Debug, Default)]
pub struct ChartWidget;

impl ChartWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        Canvas::new(ChartProgram { state, theme })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

struct ChartProgram<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

// Inner margins around the plot area; the left edge reserves room for the
// y-axis bound labels.
const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_BOTTOM: f32 = 20.0;
const POINT_RADIUS: f32 = 4.0;

impl canvas::Program<Message> for ChartProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let temps = {
            let snapshot = self.state.snapshot();
            snapshot
                .readings
                .iter()
                .map(|r| r.temperature)
                .collect::<Vec<f64>>()
        };

        let plot = Rectangle {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };

        frame.stroke(
            &Path::rectangle(
                Point::new(plot.x, plot.y),
                Size::new(plot.width, plot.height),
            ),
            Stroke::default()
                .with_color(self.theme.grid.to_iced())
                .with_width(1.0),
        );

        if temps.is_empty() {
            frame.fill_text(canvas::Text {
                content: String::from("collecting readings…"),
                position: Point::new(
                    plot.x + plot.width / 2.0 - 70.0,
                    plot.y + plot.height / 2.0,
                ),
                color: self.theme.muted.to_iced(),
                size: self.theme.font_size.into(),
                ..canvas::Text::default()
            });
            return vec![frame.into_geometry()];
        }

        // Pad the observed span so points never sit on the frame.
        let lo = temps.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let span = (hi - lo).max(0.5);
        let y_lo = lo - span * 0.25;
        let y_hi = hi + span * 0.25;

        let x_at = |i: usize| -> f32 {
            if temps.len() == 1 {
                plot.x + plot.width / 2.0
            } else {
                plot.x + plot.width * i as f32 / (temps.len() - 1) as f32
            }
        };
        let y_at = |t: f64| -> f32 {
            let norm = ((t - y_lo) / (y_hi - y_lo)) as f32;
            plot.y + plot.height * (1.0 - norm)
        };

        // Y-axis bound labels.
        for (value, y) in [(y_hi, plot.y), (y_lo, plot.y + plot.height)] {
            frame.fill_text(canvas::Text {
                content: format!("{value:.1}"),
                position: Point::new(6.0, y - 7.0),
                color: self.theme.muted.to_iced(),
                size: (self.theme.font_size - 2.0).into(),
                ..canvas::Text::default()
            });
        }

        // Trend line first so points render on top of it. Fewer than two
        // points simply draws no line.
        if let Some(line) = TrendLine::fit(&temps) {
            let last = (temps.len() - 1) as f64;
            let path = Path::line(
                Point::new(x_at(0), y_at(line.value_at(0.0))),
                Point::new(x_at(temps.len() - 1), y_at(line.value_at(last))),
            );
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(self.theme.chart_trend.to_iced())
                    .with_width(2.0),
            );
        }

        for (i, t) in temps.iter().enumerate() {
            frame.fill(
                &Path::circle(Point::new(x_at(i), y_at(*t)), POINT_RADIUS),
                self.theme.chart_point.to_iced(),
            );
        }

        vec![frame.into_geometry()]
    }
}
