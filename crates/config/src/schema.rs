use floe_core::history::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `floe.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Station identity shown in the sidebar.
    pub station: StationConfig,
    /// Sample generation settings.
    pub sampler: SamplerConfig,
    /// History buffer settings.
    pub history: HistoryConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Station identity and reference links for the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub name: String,
    pub description: String,
    pub links: Vec<LinkConfig>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            name: "Antarctic Explorer".to_string(),
            description: "Simulated real-time temperature readings from a polar research station."
                .to_string(),
            links: vec![LinkConfig {
                label: "Source".to_string(),
                url: "https://github.com/floe-dashboard/floe".to_string(),
            }],
        }
    }
}

/// One reference link shown in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

/// Sample generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seconds between generated readings.
    pub interval_secs: u64,
    /// Lower bound of the simulated temperature range (°C).
    pub min_temp: f64,
    /// Upper bound of the simulated temperature range (°C).
    pub max_temp: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3,
            min_temp: -18.0,
            max_temp: -16.0,
        }
    }
}

impl SamplerConfig {
    /// Tick interval, clamped to at least one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    /// Temperature range as `(min, max)`, normalising an inverted pair.
    pub fn range(&self) -> (f64, f64) {
        if self.min_temp <= self.max_temp {
            (self.min_temp, self.max_temp)
        } else {
            (self.max_temp, self.min_temp)
        }
    }
}

/// History buffer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of readings retained for the table and chart.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Capacity clamped to at least one reading.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Secondary text color (captions, hints).
    pub muted: String,
    /// Accent / highlight color.
    pub accent: String,
    /// Card background color.
    pub card_bg: String,
    /// Chart frame and grid line color.
    pub grid: String,
    /// Scatter point color.
    pub chart_point: String,
    /// Trend line color.
    pub chart_trend: String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius for cards (pixels).
    pub border_radius: f32,
    /// Inner padding for each card (pixels).
    pub padding: u16,
    /// Gap between cards (pixels).
    pub gap: u16,
    /// `strftime` format string for the header clock.
    pub clock_format: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground:    "#cdd6f4".to_string(), // Catppuccin Mocha — text
            muted:         "#9399b2".to_string(), // Catppuccin Mocha — overlay2
            accent:        "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            card_bg:       "#313244".to_string(), // Catppuccin Mocha — surface0
            grid:          "#45475a".to_string(), // Catppuccin Mocha — surface1
            chart_point:   "#89b4fa".to_string(), // Catppuccin Mocha — blue
            chart_trend:   "#f38ba8".to_string(), // Catppuccin Mocha — red
            font_size:     14.0,
            border_radius: 8.0,
            padding:       12,
            gap:           10,
            clock_format:  "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_configuration() {
        let cfg = DashboardConfig::default();

        assert_eq!(cfg.sampler.interval_secs, 3);
        assert_eq!(cfg.sampler.range(), (-18.0, -16.0));
        assert_eq!(cfg.history.effective_capacity(), 5);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: DashboardConfig = toml::from_str(
            r#"
            [sampler]
            interval_secs = 10

            [history]
            capacity = 12
            "#,
        )
        .unwrap();

        assert_eq!(cfg.sampler.interval_secs, 10);
        assert_eq!(cfg.sampler.min_temp, -18.0);
        assert_eq!(cfg.history.capacity, 12);
        assert_eq!(cfg.theme.background, "#1e1e2e");
    }

    #[test]
    fn inverted_range_is_normalised() {
        let cfg = SamplerConfig {
            min_temp: -16.0,
            max_temp: -18.0,
            ..SamplerConfig::default()
        };

        assert_eq!(cfg.range(), (-18.0, -16.0));
    }

    #[test]
    fn zero_values_are_clamped() {
        let sampler = SamplerConfig {
            interval_secs: 0,
            ..SamplerConfig::default()
        };
        let history = HistoryConfig { capacity: 0 };

        assert_eq!(sampler.interval(), Duration::from_secs(1));
        assert_eq!(history.effective_capacity(), 1);
    }

    #[test]
    fn station_links_parse() {
        let cfg: DashboardConfig = toml::from_str(
            r#"
            [station]
            name = "Ridge A"

            [[station.links]]
            label = "Live feed"
            url = "https://example.org/feed"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.station.name, "Ridge A");
        assert_eq!(cfg.station.links.len(), 1);
        assert_eq!(cfg.station.links[0].url, "https://example.org/feed");
    }
}
