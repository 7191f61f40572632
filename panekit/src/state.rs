//! Shared observable values.
//!
//! A [`State`] is written by whoever owns a piece of application data and
//! read by any number of views. Every write bumps a version number; each
//! view holds its own [`Watch`] remembering the last version it acted on, so
//! one reader catching up never hides the change from another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Observable value shared between a component and the host application.
///
/// # Example
///
/// ```
/// use panekit::State;
///
/// let selection = State::new(None::<u32>);
/// let mut outline = selection.watch();
/// let mut inspector = selection.watch();
///
/// selection.set(Some(7));
/// assert!(outline.take_changed());
/// assert!(inspector.is_changed());
/// assert_eq!(inspector.get(), Some(7));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Replace the value and notify every watcher.
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = value;
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of writes so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Start watching from the current version; earlier writes count as seen.
    pub fn watch(&self) -> Watch<T> {
        Watch {
            seen: self.version(),
            state: self.clone(),
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// One reader's view of a [`State`], tracking what it has already seen.
#[derive(Debug)]
pub struct Watch<T> {
    state: State<T>,
    seen: u64,
}

impl<T> Watch<T> {
    /// True if the state was written since this watcher last caught up.
    pub fn is_changed(&self) -> bool {
        self.state.version() != self.seen
    }

    /// Catch up, returning whether there was anything new.
    pub fn take_changed(&mut self) -> bool {
        let current = self.state.version();
        let changed = current != self.seen;
        self.seen = current;
        changed
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.state.get()
    }

    pub fn state(&self) -> &State<T> {
        &self.state
    }
}
