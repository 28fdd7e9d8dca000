//! Iced application shell for the floe dashboard.
//!
//! Owns the application loop and wires together all background tasks:
//! - sample generator (one reading per configured interval)
//! - config file watcher (live theme / capacity reload on change)
//! - 1-second timer (header clock)

use chrono::Local;
use floe_config::{default_path, load as load_config, ConfigWatcher, DashboardConfig};
use floe_core::{event::Message as AppMessage, state::AppState};
use floe_sampler::spawn_sampler;
use floe_theme::Theme;
use floe_widgets::{ChartWidget, ReadoutWidget, SidebarWidget, TableWidget, TimestampWidget};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row, text, Space},
    Alignment, Element, Length, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sidebar width in logical pixels.
const SIDEBAR_WIDTH: f32 = 260.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the dashboard window.  Never returns under normal operation.
pub fn run() -> iced::Result {
    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title("floe — live station dashboard")
        .subscription(Dashboard::subscription)
        .style(Dashboard::style)
        .window_size(Size::new(980.0, 640.0))
        .run()
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// One-second timer tick — updates the header clock.
    Tick,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    state:     AppState,
    config:    DashboardConfig,
    theme:     Theme,
    sidebar:   SidebarWidget,
    readout:   ReadoutWidget,
    timestamp: TimestampWidget,
    table:     TableWidget,
    chart:     ChartWidget,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_default();
        let theme  = Theme::from_config(&config.theme);
        let state  = AppState::new(config.history.effective_capacity());

        let dashboard = Self {
            state,
            config,
            theme,
            sidebar:   SidebarWidget::new(),
            readout:   ReadoutWidget::new(),
            timestamp: TimestampWidget::new(),
            table:     TableWidget::new(),
            chart:     ChartWidget::new(),
        };

        (dashboard, Task::none())
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.state.time = Local::now();
            }
            Message::App(AppMessage::ReadingSampled(reading)) => {
                debug!(temperature = reading.temperature, "reading sampled");
                self.state.record(reading);
            }
            Message::App(AppMessage::ConfigReloaded) => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    if cfg.sampler != self.config.sampler {
                        warn!("Sampler changes take effect after a restart");
                    }
                    self.theme = Theme::from_config(&cfg.theme);
                    self.state.resize_history(cfg.history.effective_capacity());
                    self.config = cfg;
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let theme = &self.theme;

        // ── Header: station name + live clock ────────────────────────────────
        let clock = self.state.time.format(&theme.clock_format).to_string();
        let header = row![
            text(&self.config.station.name).size(theme.heading_size + 6.0),
            Space::new().width(Length::Fill),
            text(clock).size(theme.font_size),
        ]
        .align_y(Alignment::Center);

        // ── Sidebar: station identity and links ──────────────────────────────
        let sidebar = card(
            theme,
            self.sidebar.view(&self.config.station, theme).map(Message::App),
        )
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill);

        // ── Main column: readout · timestamp · table · chart ─────────────────
        let readout   = card(theme, self.readout.view(&self.state, theme).map(Message::App));
        let timestamp = card(theme, self.timestamp.view(&self.state, theme).map(Message::App));
        let table     = card(theme, self.table.view(&self.state, theme).map(Message::App));
        let chart     = card(theme, self.chart.view(&self.state, theme).map(Message::App))
            .height(Length::Fill);

        let main = column![
            row![readout, timestamp].spacing(f32::from(theme.gap)),
            table,
            chart,
        ]
        .spacing(f32::from(theme.gap))
        .width(Length::Fill);

        let body = row![sidebar, main].spacing(f32::from(theme.gap)).height(Length::Fill);

        column![header, body]
            .padding(theme.padding)
            .spacing(f32::from(theme.gap))
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick);

        Subscription::batch([
            tick,
            Subscription::run(sampler_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Card container ────────────────────────────────────────────────────────────

/// Wrap widget content in a rounded card using the theme's surface color.
fn card<'a>(
    theme: &Theme,
    content: impl Into<Element<'a, Message>>,
) -> iced::widget::Container<'a, Message> {
    let bg = theme.card_bg.to_iced();
    let radius = theme.border_radius;

    container(content)
        .padding(theme.padding)
        .width(Length::Fill)
        .style(move |_: &iced::Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  Iced uses the function pointer address
// to deduplicate subscriptions across redraws.

/// Generates one reading per configured interval and forwards it to the app.
///
/// The interval and temperature range are read from the config file when the
/// subscription starts; changing them requires a restart.
fn sampler_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let sampler_cfg = load_config(default_path()).unwrap_or_default().sampler;
        let (min, max) = sampler_cfg.range();
        let mut rx = spawn_sampler(sampler_cfg.interval(), min, max);

        while let Some(reading) = rx.recv().await {
            let _ = sender.try_send(Message::App(AppMessage::ReadingSampled(reading)));
        }

        // Sampler task exited — shouldn't happen; stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
