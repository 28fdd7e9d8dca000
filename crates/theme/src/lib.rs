pub mod colors;

pub use colors::Color;

use floe_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub foreground:    Color,
    /// Secondary text (captions, hints, empty states).
    pub muted:         Color,
    pub accent:        Color,
    pub card_bg:       Color,
    /// Chart frame and axis color.
    pub grid:          Color,
    pub chart_point:   Color,
    pub chart_trend:   Color,
    pub font_size:     f32,
    /// Card header size, derived from `font_size`.
    pub heading_size:  f32,
    /// Readout value size, derived from `font_size`.
    pub value_size:    f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
    /// `strftime` format string for the header clock.
    pub clock_format:  String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::BASE),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::TEXT),
            muted:         Color::from_hex(&cfg.muted).unwrap_or(Color::TEXT.with_alpha(0.6)),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::MAUVE),
            card_bg:       Color::from_hex(&cfg.card_bg).unwrap_or(Color::SURFACE),
            grid:          Color::from_hex(&cfg.grid).unwrap_or(Color::TEXT.with_alpha(0.25)),
            chart_point:   Color::from_hex(&cfg.chart_point).unwrap_or(Color::BLUE),
            chart_trend:   Color::from_hex(&cfg.chart_trend).unwrap_or(Color::RED),
            font_size:     cfg.font_size,
            heading_size:  cfg.font_size + 2.0,
            value_size:    cfg.font_size * 2.4,
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
            clock_format:  cfg.clock_format.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
