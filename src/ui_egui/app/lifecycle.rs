use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use super::inputs::{InputCommand, InputState};
use super::CountdownApp;
use crate::models::settings::WidgetSettings;
use crate::services::countdown::{CountdownService, TickHandler};
use crate::services::fit_text::FitText;
use crate::services::quote::{HttpQuoteSource, QuoteError, QuoteSource, QuoteState};
use crate::services::settings::SettingsService;
use crate::services::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::ui_egui::layout::is_compact;
use crate::ui_egui::theme::apply_system_theme;

/// Repaint cadence while the quote request is still in flight.
const QUOTE_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: WidgetSettings) -> Self {
        apply_system_theme(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let on_tick: TickHandler = Arc::new(move || repaint_ctx.request_repaint());
        let countdown = CountdownService::new(open_store()).with_tick_handler(
            Duration::from_millis(settings.countdown.tick_interval_ms),
            on_tick,
        );

        let inputs = InputState::new(
            countdown.title(),
            countdown.target(),
            Local::now().date_naive(),
        );

        let mut quote = QuoteState::new();
        let quote_source: Option<Arc<dyn QuoteSource>> = match HttpQuoteSource::new(&settings.quote)
        {
            Ok(source) => Some(Arc::new(source)),
            Err(e) => {
                log::warn!("Quote client unavailable: {:#}", e);
                None
            }
        };
        match &quote_source {
            Some(source) => quote.start(Arc::clone(source)),
            None => quote.apply(Err(QuoteError::Unavailable)),
        }

        Self {
            title_fit: FitText::new(settings.fit_text.max_font_size, settings.fit_text.tolerance),
            time_left_fit: FitText::new(
                settings.fit_text.max_font_size,
                settings.fit_text.tolerance,
            ),
            settings,
            countdown,
            quote,
            quote_source,
            inputs,
            compact: false,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.countdown.refresh(Local::now());

        if self.quote.poll() {
            ctx.request_repaint();
        }
        if self.quote.is_loading() {
            ctx.request_repaint_after(QUOTE_POLL_INTERVAL);
        }

        let screen = ctx.screen_rect();
        self.compact = is_compact(
            screen.width(),
            screen.height(),
            self.settings.window.compact_max_width,
        );

        let commands = self.render_central_panel(ctx);
        self.apply_commands(commands);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.title_fit.detach();
        self.time_left_fit.detach();
        self.countdown.stop_ticking();
        log::info!("Countdown widget shutting down");
    }

    fn apply_commands(&mut self, commands: Vec<InputCommand>) {
        for command in commands {
            match command {
                InputCommand::SetTitle(title) => self.countdown.set_title(title.as_deref()),
                InputCommand::SetDate(date) => {
                    self.countdown.set_date(date.as_deref());
                    if date.is_none() {
                        self.inputs = InputState::new(
                            self.countdown.title(),
                            None,
                            Local::now().date_naive(),
                        );
                    }
                }
                InputCommand::RefreshQuote => {
                    if let Some(source) = &self.quote_source {
                        self.quote.start(Arc::clone(source));
                    }
                }
            }
        }
    }
}

fn open_store() -> Box<dyn KeyValueStore> {
    let path = SettingsService::resolve_storage_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create data directory {}: {}", parent.display(), e);
            }
        }
    }

    match SqliteStore::open(&path.to_string_lossy()) {
        Ok(store) => {
            log::info!("Using local storage at {}", path.display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!(
                "Failed to open local storage at {}: {:#}, falling back to memory",
                path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}
