use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A stop request that supports interruptible waits.
///
/// The reconnect loop sleeps in multi-second stretches; waits on this
/// signal wake immediately when a stop is requested instead of running
/// out the timer.
pub struct StopSignal {
    requested: AtomicBool,
    lock: Mutex<()>,
    condvar: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            lock: Mutex::new(()),
            condvar: Condvar::new(),
        }
    }

    /// Request a stop and wake every waiting thread.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
        self.condvar.notify_all();
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sleep for `duration` unless a stop arrives first.
    ///
    /// Returns `true` if the wait was cut short by a stop request.
    pub fn wait(&self, duration: Duration) -> bool {
        if self.is_requested() {
            return true;
        }

        let guard = match self.lock.lock() {
            Ok(guard) => guard,
            // A poisoned lock means a waiter panicked; treat as stopped.
            Err(_) => return true,
        };
        match self
            .condvar
            .wait_timeout_while(guard, duration, |_| !self.is_requested())
        {
            Ok((_, timeout)) => !timeout.timed_out(),
            Err(_) => true,
        }
    }

    /// The underlying flag, for code driven by a plain `&AtomicBool`.
    pub fn flag(&self) -> &AtomicBool {
        &self.requested
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_starts_clear() {
        let signal = StopSignal::new();
        assert!(!signal.is_requested());
        assert!(!signal.flag().load(Ordering::SeqCst));
    }

    #[test]
    fn test_request_sets_flag() {
        let signal = StopSignal::new();
        signal.request();
        assert!(signal.is_requested());
        assert!(signal.flag().load(Ordering::SeqCst));
    }

    #[test]
    fn test_wait_times_out_without_request() {
        let signal = StopSignal::new();
        let start = Instant::now();
        assert!(!signal.wait(Duration::from_millis(40)));
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_wait_returns_immediately_when_already_requested() {
        let signal = StopSignal::new();
        signal.request();
        let start = Instant::now();
        assert!(signal.wait(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_wait_interrupted_by_request() {
        let signal = Arc::new(StopSignal::new());

        let waiter = {
            let signal = Arc::clone(&signal);
            thread::spawn(move || {
                let start = Instant::now();
                let interrupted = signal.wait(Duration::from_secs(10));
                (interrupted, start.elapsed())
            })
        };

        thread::sleep(Duration::from_millis(50));
        signal.request();

        let (interrupted, elapsed) = waiter.join().unwrap();
        assert!(interrupted);
        assert!(elapsed < Duration::from_secs(1));
    }
}
