//! Single-flight step playback.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{clamp_interval, spawn_ticker, Playback, TickerHandle, TickerToken};

/// Handle to one playback run.
///
/// Returned by [`StepPlayer::start`]; owns the run's cancellation token
/// rather than sharing ambient mutable state, so "restart cancels the
/// previous run" is an explicit operation.
pub struct PlaybackHandle {
    ticker: TickerHandle,
    paused: Arc<AtomicBool>,
    cursor: Arc<AtomicUsize>,
    done: Arc<AtomicBool>,
}

impl PlaybackHandle {
    /// Stop the run. No step or completion callback fires afterwards.
    pub fn cancel(&self) {
        self.ticker.cancel();
    }

    /// Freeze the cursor; the timer keeps running but delivers nothing.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Continue from the frozen cursor.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Whether the run is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.ticker.is_cancelled()
    }

    /// Whether the sequence ran to completion.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Index of the most recently delivered step.
    pub fn current_index(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// A detached cancellation token for this run.
    pub fn token(&self) -> TickerToken {
        self.ticker.token()
    }

    /// Wait until the run's task has exited.
    pub async fn finished(self) {
        self.ticker.finished().await;
    }
}

/// Drives at most one playback run at a time on its target.
///
/// `start` cancels whatever run is still in flight before spawning the
/// next one, which is what keeps a stale animation from drawing over a
/// fresh one.
#[derive(Default)]
pub struct StepPlayer {
    active: Option<TickerToken>,
}

impl StepPlayer {
    /// Create a player with no active run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the in-flight run, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }

    /// Start playing `steps`, one per tick of the clamped interval.
    ///
    /// `on_step` receives each step with its index, in generation order,
    /// none skipped. `on_done` fires once, after the last step; neither
    /// callback fires after cancellation. Any previous run on this
    /// player is cancelled first.
    pub fn start<T, F, D>(
        &mut self,
        steps: Vec<T>,
        interval_ms: u64,
        mut on_step: F,
        on_done: D,
    ) -> PlaybackHandle
    where
        T: Send + 'static,
        F: FnMut(&T, usize) + Send + 'static,
        D: FnOnce() + Send + 'static,
    {
        self.cancel();

        let interval = clamp_interval(interval_ms);
        tracing::debug!(
            "starting playback: {} steps at {} ms per step",
            steps.len(),
            interval.as_millis()
        );

        let paused = Arc::new(AtomicBool::new(false));
        let cursor = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(AtomicBool::new(false));

        let mut playback = Playback::new(steps);
        playback.start();

        let tick_paused = paused.clone();
        let tick_cursor = cursor.clone();
        let tick_done = done.clone();
        let mut on_done = Some(on_done);

        let ticker = spawn_ticker(interval, move || {
            if tick_paused.load(Ordering::Acquire) {
                return std::ops::ControlFlow::Continue(());
            }
            match playback.step_forward() {
                Some((step, index)) => {
                    tick_cursor.store(index, Ordering::Release);
                    on_step(step, index);
                    std::ops::ControlFlow::Continue(())
                }
                None => {
                    tick_done.store(true, Ordering::Release);
                    if let Some(finish) = on_done.take() {
                        finish();
                    }
                    std::ops::ControlFlow::Break(())
                }
            }
        });

        self.active = Some(ticker.token());
        PlaybackHandle {
            ticker,
            paused,
            cursor,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn delivers_every_step_in_order_then_done() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let done_tx = tx.clone();
        let mut player = StepPlayer::new();

        let handle = player.start(
            vec!["a", "b", "c"],
            20,
            move |step, index| {
                tx.send((index, *step)).unwrap();
            },
            move || {
                done_tx.send((usize::MAX, "done")).unwrap();
            },
        );
        handle.finished().await;

        let mut seen = Vec::new();
        while let Ok(item) = rx.try_recv() {
            seen.push(item);
        }
        assert_eq!(
            seen,
            vec![(0, "a"), (1, "b"), (2, "c"), (usize::MAX, "done")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_all_callbacks() {
        let steps: Vec<usize> = (0..1_000).collect();
        let count = Arc::new(AtomicUsize::new(0));
        let done_count = Arc::new(AtomicUsize::new(0));
        let step_seen = count.clone();
        let done_seen = done_count.clone();
        let mut player = StepPlayer::new();

        let handle = player.start(
            steps,
            10,
            move |_, _| {
                step_seen.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                done_seen.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(55)).await;
        handle.cancel();
        let at_cancel = count.load(Ordering::SeqCst);
        assert!(at_cancel > 0);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
        assert_eq!(done_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn starting_again_cancels_the_previous_run() {
        let first_count = Arc::new(AtomicUsize::new(0));
        let first_seen = first_count.clone();
        let mut player = StepPlayer::new();

        let _first = player.start(
            (0..1_000).collect::<Vec<_>>(),
            10,
            move |_, _| {
                first_seen.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        );
        tokio::time::sleep(Duration::from_millis(35)).await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let second = player.start(
            vec![7, 8],
            10,
            move |step, _| {
                tx.send(*step).unwrap();
            },
            || {},
        );
        let stale = first_count.load(Ordering::SeqCst);

        second.finished().await;
        assert_eq!(first_count.load(Ordering::SeqCst), stale);
        assert_eq!(rx.try_recv().unwrap(), 7);
        assert_eq!(rx.try_recv().unwrap(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_resume_continues() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut player = StepPlayer::new();

        let handle = player.start(
            (0..5).collect::<Vec<_>>(),
            10,
            move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        );
        handle.pause();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!handle.is_done());

        handle.resume();
        handle.finished().await;
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_sequence_completes_immediately() {
        let done = Arc::new(AtomicBool::new(false));
        let done_flag = done.clone();
        let mut player = StepPlayer::new();

        let handle = player.start(
            Vec::<i32>::new(),
            10,
            |_, _| {},
            move || {
                done_flag.store(true, Ordering::SeqCst);
            },
        );
        handle.finished().await;
        assert!(done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn current_index_tracks_delivery() {
        let mut player = StepPlayer::new();
        let handle = player.start((0..3).collect::<Vec<_>>(), 10, |_, _| {}, || {});
        while !handle.is_done() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(handle.current_index(), 2);
    }
}
