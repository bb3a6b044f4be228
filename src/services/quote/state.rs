use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::{Quote, QuoteError, QuoteSource};

/// Shown in place of the quote when it could not be loaded.
pub const FALLBACK_QUOTE: &str = "Failed to load quote.";

/// Quote text plus the loading flag the UI renders a spinner for.
pub struct QuoteState {
    quote: Option<String>,
    author: Option<String>,
    loading: bool,
    result_rx: Option<Receiver<Result<Quote, QuoteError>>>,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteState {
    pub fn new() -> Self {
        Self {
            quote: None,
            author: None,
            loading: true,
            result_rx: None,
        }
    }

    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Kicks off a fetch on a worker thread. A fetch already in flight is abandoned.
    pub fn start(&mut self, source: Arc<dyn QuoteSource>) {
        self.loading = true;

        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(source.fetch_random());
        });
    }

    /// Applies the worker's result once it has arrived.
    ///
    /// Should be called once per frame. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.result_rx else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(QuoteError::WorkerGone),
        };

        self.result_rx = None;
        self.apply(result);
        true
    }

    pub fn apply(&mut self, result: Result<Quote, QuoteError>) {
        match result {
            Ok(quote) => {
                self.quote = Some(quote.quote);
                self.author = quote.author;
            }
            Err(err) => {
                log::warn!("Failed to load quote: {}", err);
                self.quote = Some(FALLBACK_QUOTE.to_string());
                self.author = None;
            }
        }
        self.loading = false;
    }
}
