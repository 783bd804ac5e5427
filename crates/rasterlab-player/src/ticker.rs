//! Cancellable cooperative timer.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

struct TickerShared {
    cancelled: AtomicBool,
    stop: Notify,
}

/// Cancellation token for a running ticker.
///
/// Cheap to clone and safe to keep after the ticker itself finished.
/// Cancellation is synchronous from the caller's perspective: the flag
/// is re-read inside the tick callback before any work happens, so once
/// `cancel` returns, no further tick is observed, including one that
/// was already queued by the timer.
#[derive(Clone)]
pub struct TickerToken {
    shared: Arc<TickerShared>,
}

impl TickerToken {
    /// Request cancellation and wake the ticker if it is sleeping.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Release);
        self.shared.stop.notify_one();
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }
}

/// Handle to a spawned ticker task.
pub struct TickerHandle {
    token: TickerToken,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// A detached cancellation token for this ticker.
    pub fn token(&self) -> TickerToken {
        self.token.clone()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the ticker task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the ticker task to exit.
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

/// Spawn a timer that invokes `on_tick` every `interval`.
///
/// The first tick fires immediately, each following one after
/// `interval`. The callback ends the loop from inside by returning
/// [`ControlFlow::Break`]; the caller ends it from outside through the
/// handle or token. Ticks never overlap and never run after
/// cancellation.
pub fn spawn_ticker<F>(interval: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    let shared = Arc::new(TickerShared {
        cancelled: AtomicBool::new(false),
        stop: Notify::new(),
    });
    let token = TickerToken {
        shared: shared.clone(),
    };

    let task = tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = shared.stop.notified() => break,
                _ = timer.tick() => {
                    // A cancel that raced the timer wins: the tick does
                    // nothing once the flag is up.
                    if shared.cancelled.load(Ordering::Acquire) {
                        break;
                    }
                    if on_tick().is_break() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("ticker exited");
    });

    TickerHandle { token, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_break() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let handle = spawn_ticker(Duration::from_millis(10), move || {
            let n = seen.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        handle.finished().await;
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_future_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let handle = spawn_ticker(Duration::from_millis(10), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        tokio::time::sleep(Duration::from_millis(35)).await;
        handle.cancel();
        let at_cancel = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_first_tick_is_quiet() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let handle = spawn_ticker(Duration::from_millis(10), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });
        handle.cancel();
        handle.finished().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn token_outlives_the_handle() {
        let handle = spawn_ticker(Duration::from_millis(10), || ControlFlow::Break(()));
        let token = handle.token();
        handle.finished().await;
        token.cancel();
        assert!(token.is_cancelled());
    }
}
