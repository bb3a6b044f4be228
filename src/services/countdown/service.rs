use std::time::Duration;

use chrono::{DateTime, Local};

use super::ticker::{CountdownTicker, TickHandler};
use crate::models::countdown::{
    self, calculate_time_left, parse_target, CountdownDisplay, TimeLeft,
};
use crate::services::storage::{load_non_blank, KeyValueStore, DATE_KEY, TITLE_KEY};

/// Owns the persisted title/date pair and derives the countdown from them.
///
/// Without a store the service runs headless: nothing is persisted and all
/// display strings are empty.
pub struct CountdownService {
    store: Option<Box<dyn KeyValueStore>>,
    title: Option<String>,
    date: Option<String>,
    now: DateTime<Local>,
    ticker: CountdownTicker,
    tick_interval: Duration,
    on_tick: Option<TickHandler>,
}

impl CountdownService {
    /// Loads `title` and `date` from the store once.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let title = load_non_blank(store.as_ref(), TITLE_KEY);
        let date = load_non_blank(store.as_ref(), DATE_KEY);

        log::info!(
            "Loaded countdown state: title={:?}, date={:?}",
            title.as_deref(),
            date.as_deref()
        );

        Self {
            store: Some(store),
            title,
            date,
            now: Local::now(),
            ticker: CountdownTicker::new(),
            tick_interval: Duration::from_secs(1),
            on_tick: None,
        }
    }

    pub fn headless() -> Self {
        Self {
            store: None,
            title: None,
            date: None,
            now: Local::now(),
            ticker: CountdownTicker::new(),
            tick_interval: Duration::from_secs(1),
            on_tick: None,
        }
    }

    /// Installs the callback fired on every tick and arms the ticker if the
    /// stored target is still ahead.
    pub fn with_tick_handler(mut self, interval: Duration, on_tick: TickHandler) -> Self {
        self.tick_interval = interval;
        self.on_tick = Some(on_tick);
        self.rearm_ticker(Local::now());
        self
    }

    pub fn surface_available(&self) -> bool {
        self.store.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn target(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_target)
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.title = normalize(title);
        self.persist(TITLE_KEY, self.title.clone());
    }

    pub fn set_date(&mut self, date: Option<&str>) {
        self.set_date_at(date, Local::now());
    }

    /// Stores a new target, resamples the clock and re-arms the ticker.
    pub fn set_date_at(&mut self, date: Option<&str>, now: DateTime<Local>) {
        self.date = normalize(date);
        self.persist(DATE_KEY, self.date.clone());
        self.now = now;
        self.rearm_ticker(now);
    }

    /// Samples the wall clock. Stops ticking once there is nothing left to count.
    pub fn refresh(&mut self, now: DateTime<Local>) {
        self.now = now;
        if self.ticker.is_armed() && self.time_left().is_none() {
            log::info!("Countdown reached its target");
            self.ticker.cancel();
        }
    }

    /// Cancels the ticker, e.g. when the view is torn down.
    pub fn stop_ticking(&mut self) {
        self.ticker.cancel();
    }

    pub fn time_left(&self) -> Option<TimeLeft> {
        self.target()
            .and_then(|target| calculate_time_left(target, self.now))
    }

    pub fn display(&self) -> CountdownDisplay {
        let surface = self.surface_available();
        CountdownDisplay {
            countdown_title: countdown::countdown_title(self.title(), surface),
            time_left_title: countdown::time_left_title(self.date(), self.now, surface),
            title_present: countdown::title_present(self.title(), surface),
        }
    }

    fn rearm_ticker(&mut self, now: DateTime<Local>) {
        self.ticker.cancel();

        let Some(on_tick) = self.on_tick.clone() else {
            return;
        };
        let Some(target) = self.target() else {
            return;
        };
        if calculate_time_left(target, now).is_none() {
            return;
        }

        self.ticker.arm(self.tick_interval, on_tick);
    }

    fn persist(&mut self, key: &str, value: Option<String>) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        let value = value.unwrap_or_default();
        if let Err(err) = store.set(key, &value) {
            log::warn!("Failed to persist '{}': {:#}", key, err);
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}
