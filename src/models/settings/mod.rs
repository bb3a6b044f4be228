// Settings module
// Widget configuration persisted as TOML

use serde::{Deserialize, Serialize};

use crate::services::fit_text::{MAX_FONT_SIZE, MIN_FONT_SIZE};

pub const DEFAULT_QUOTE_URL: &str = "https://dummyjson.com/quotes/random";

/// Smallest window the native viewport allows.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 220.0;

/// Top-level widget configuration. Every section falls back to its defaults
/// when omitted from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WidgetSettings {
    pub fit_text: FitTextSettings,
    pub countdown: CountdownSettings,
    pub quote: QuoteSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitTextSettings {
    /// Upper bound for auto-fitted font sizes, in points
    pub max_font_size: f32,
    /// Shrinks that keep at least this fraction of the current size are ignored
    pub tolerance: f32,
}

impl Default for FitTextSettings {
    fn default() -> Self {
        Self {
            max_font_size: 80.0,
            tolerance: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    pub tick_interval_ms: u64,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUOTE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    /// Landscape windows up to this width switch to the compact layout
    pub compact_max_width: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 480.0,
            compact_max_width: 768.0,
        }
    }
}

impl WidgetSettings {
    /// Validate all settings
    pub fn validate(&self) -> Result<(), String> {
        let max_font_size = self.fit_text.max_font_size;
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&max_font_size) {
            return Err(format!(
                "Max font size must be between {} and {}, got {}",
                MIN_FONT_SIZE, MAX_FONT_SIZE, max_font_size
            ));
        }

        if !(self.fit_text.tolerance > 0.0 && self.fit_text.tolerance <= 1.0) {
            return Err(format!(
                "Fit tolerance must be in (0, 1], got {}",
                self.fit_text.tolerance
            ));
        }

        if self.countdown.tick_interval_ms == 0 {
            return Err("Tick interval must be greater than zero".to_string());
        }

        if self.quote.timeout_secs == 0 {
            return Err("Quote timeout must be greater than zero".to_string());
        }

        if !(self.quote.url.starts_with("https://") || self.quote.url.starts_with("http://")) {
            return Err(format!("Quote URL must be http(s), got '{}'", self.quote.url));
        }

        if self.window.width < MIN_WINDOW_WIDTH || self.window.height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window size {}x{} is below the {}x{} minimum",
                self.window.width, self.window.height, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ));
        }

        Ok(())
    }
}
