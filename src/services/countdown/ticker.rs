use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Callback fired on every tick. Runs on the ticker thread.
pub type TickHandler = Arc<dyn Fn() + Send + Sync>;

/// Repeating timer backed by a worker thread.
///
/// Arming always cancels the previous timer first, so at most one tick
/// source is live per ticker. Dropping the ticker cancels it as well.
#[derive(Default)]
pub struct CountdownTicker {
    active: Option<ActiveTicker>,
}

struct ActiveTicker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    pub fn arm(&mut self, interval: Duration, on_tick: TickHandler) {
        self.cancel();

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        log::debug!("Countdown ticker armed ({:?} interval)", interval);
        self.active = Some(ActiveTicker { stop_tx, handle });
    }

    pub fn cancel(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // The worker may already be gone if the handler panicked.
        let _ = active.stop_tx.send(());
        if active.handle.join().is_err() {
            log::warn!("Countdown ticker thread panicked");
        }
        log::debug!("Countdown ticker cancelled");
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
