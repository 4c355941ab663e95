//! Run a suggester on a worker thread so the caller's loop keeps going.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use parking_lot::Mutex;

use super::{EngineError, MoveSuggester};
use crate::board::Move;

/// Shares one suggester between requests; each request gets its own thread.
///
/// Requests queue on the mutex, so an engine process only ever sees one
/// `position`/`go` pair at a time.
pub struct BackgroundSuggester<S> {
    inner: Arc<Mutex<S>>,
    name: String,
}

impl<S: MoveSuggester + Send + 'static> BackgroundSuggester<S> {
    #[must_use]
    pub fn new(suggester: S) -> Self {
        let name = suggester.name().to_string();
        BackgroundSuggester {
            inner: Arc::new(Mutex::new(suggester)),
            name,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while a request holds the suggester.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.inner.is_locked()
    }

    /// Start thinking about `fen` and return a handle to the answer.
    pub fn request(&self, fen: impl Into<String>) -> Result<PendingSuggestion, EngineError> {
        let fen = fen.into();
        let inner = Arc::clone(&self.inner);
        let (tx, rx) = mpsc::channel();
        debug!("{} thinking on {fen}", self.name);

        let handle = thread::Builder::new()
            .name(format!("suggest-{}", self.name))
            .spawn(move || {
                let result = inner.lock().suggest(&fen);
                // The receiver may already be gone; the answer is simply dropped.
                let _ = tx.send(result);
            })?;

        Ok(PendingSuggestion {
            rx,
            handle: Some(handle),
        })
    }

    /// Run `f` with exclusive access to the wrapped suggester, waiting for
    /// any request in flight.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

/// An answer that may not have arrived yet.
pub struct PendingSuggestion {
    rx: Receiver<Result<Move, EngineError>>,
    handle: Option<JoinHandle<()>>,
}

impl PendingSuggestion {
    /// Non-blocking check. `None` while the worker is still thinking.
    pub fn poll(&mut self) -> Option<Result<Move, EngineError>> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(EngineError::Closed))
            }
        }
    }

    /// Block until the worker answers.
    pub fn wait(mut self) -> Result<Move, EngineError> {
        let result = self.rx.recv().unwrap_or(Err(EngineError::Closed));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("suggestion worker panicked");
            }
        }
    }
}
