use std::sync::Arc;

use tokio::sync::watch;

/// Counts in-flight store calls. Loading is reported while at least one
/// [`LoadingGuard`] is alive.
#[derive(Debug, Clone)]
pub struct LoadingTracker {
    counter: Arc<watch::Sender<usize>>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        let (counter, _) = watch::channel(0);
        Self {
            counter: Arc::new(counter),
        }
    }

    pub fn show(&self) -> LoadingGuard {
        self.counter.send_modify(|count| *count += 1);
        LoadingGuard {
            counter: self.counter.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.counter.borrow() > 0
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.counter.subscribe()
    }
}

#[derive(Debug)]
#[must_use = "loading stops as soon as the guard is dropped"]
pub struct LoadingGuard {
    counter: Arc<watch::Sender<usize>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.counter
            .send_modify(|count| *count = count.saturating_sub(1));
    }
}
