//! Periodic timer driving the shuffle flicker.
//!
//! The timer is a tokio task that emits a bounded number of ticks through a
//! sink. [`ShuffleTimer`] owns the task and aborts it on drop, so releasing
//! the handle is the only thing any exit path has to do.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleTick {
    /// Pick cycle that started the timer.
    pub generation: u64,
    /// 1-based position of this tick within the cycle.
    pub seq: u32,
}

/// Receives ticks. Returning `false` stops the timer early (receiver gone).
pub type TickSink = Arc<dyn Fn(ShuffleTick) -> bool + Send + Sync>;

pub struct ShuffleTimer {
    task: JoinHandle<()>,
}

impl ShuffleTimer {
    /// Fire `ticks` times, one `interval` apart, starting one interval from now.
    pub fn start(
        runtime: &Handle,
        interval: Duration,
        ticks: u32,
        generation: u64,
        sink: TickSink,
    ) -> Self {
        let period = interval.max(Duration::from_millis(1));
        let task = runtime.spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for seq in 1..=ticks {
                timer.tick().await;
                if !sink(ShuffleTick { generation, seq }) {
                    tracing::trace!(generation, "shuffle tick dropped (receiver gone)");
                    break;
                }
            }
        });
        Self { task }
    }

    /// True once every tick has been emitted or the task was aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ShuffleTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn channel_sink() -> (TickSink, mpsc::UnboundedReceiver<ShuffleTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: TickSink = Arc::new(move |tick| tx.send(tick).is_ok());
        (sink, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn emits_bounded_ticks_in_order() {
        let (sink, mut rx) = channel_sink();
        let timer = ShuffleTimer::start(&Handle::current(), Duration::from_millis(100), 3, 9, sink);

        let mut seen = Vec::new();
        while let Some(tick) = rx.recv().await {
            assert_eq!(tick.generation, 9);
            seen.push(tick.seq);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_interval() {
        let (sink, mut rx) = channel_sink();
        let started = Instant::now();
        let _timer = ShuffleTimer::start(&Handle::current(), Duration::from_millis(100), 1, 1, sink);

        rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_ticks() {
        let (sink, mut rx) = channel_sink();
        let timer = ShuffleTimer::start(&Handle::current(), Duration::from_millis(100), 30, 1, sink);

        rx.recv().await.unwrap();
        drop(timer);
        tokio::time::sleep(Duration::from_secs(5)).await;

        // The aborted task dropped its sender, closing the channel.
        assert_eq!(rx.recv().await, None);
    }
}
