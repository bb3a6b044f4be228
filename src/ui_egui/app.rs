mod inputs;
mod lifecycle;
mod render;

use std::sync::Arc;

use self::inputs::InputState;
use crate::models::settings::WidgetSettings;
use crate::services::countdown::CountdownService;
use crate::services::fit_text::FitText;
use crate::services::quote::{QuoteSource, QuoteState};

pub struct CountdownApp {
    settings: WidgetSettings,
    /// Persisted title/date and the derived countdown
    countdown: CountdownService,
    quote: QuoteState,
    /// Absent when the HTTP client could not be built
    quote_source: Option<Arc<dyn QuoteSource>>,
    title_fit: FitText,
    time_left_fit: FitText,
    /// Draft values behind the title field and the date/time pickers
    inputs: InputState,
    compact: bool,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
