//! Pacing between consecutive upstream calls.
//!
//! The free translation endpoint throttles aggressive clients, so headlines
//! are translated one at a time with a pause in between. The pause policy
//! lives here, apart from the fetch logic, so it can be tuned or swapped.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::trace;

/// Trait for the wait inserted between two items.
///
/// Futures are not required to be `Send`, matching [`crate::api::HttpGet`].
#[allow(async_fn_in_trait)]
pub trait Pace {
    /// Wait before the next item starts.
    async fn pause(&self);
}

/// Sleep for a fixed interval. A zero interval does not yield at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    /// Pause for `interval` between items.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The configured pause.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pace for FixedDelay {
    async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        trace!(interval_ms = self.interval.as_millis() as u64, "Pausing");
        sleep(self.interval).await;
    }
}

/// Run `step` over `items` strictly in order.
///
/// Each step is awaited to completion before the next one starts. `pacer`
/// pauses between consecutive steps, never before the first nor after the
/// last.
pub async fn run_paced<P, I, F, Fut>(pacer: &P, items: I, mut step: F) -> Vec<Fut::Output>
where
    P: Pace,
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Fut,
    Fut: Future,
{
    let mut items = items.into_iter().enumerate().peekable();
    let mut out = Vec::new();
    while let Some((index, item)) = items.next() {
        out.push(step(index, item).await);
        if items.peek().is_some() {
            pacer.pause().await;
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Pace;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Pacer that only records that it was asked to pause.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingPace {
        pub log: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingPace {
        pub fn sharing(log: Rc<RefCell<Vec<String>>>) -> Self {
            Self { log }
        }

        pub fn pauses(&self) -> usize {
            self.log.borrow().iter().filter(|e| *e == "pause").count()
        }
    }

    impl Pace for RecordingPace {
        async fn pause(&self) {
            self.log.borrow_mut().push("pause".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingPace;
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_pauses_between_but_not_after_last() {
        let pacer = RecordingPace::default();
        let log = pacer.log.clone();

        let out = run_paced(&pacer, ["a", "b", "c"], |i, item| {
            let log = log.clone();
            async move {
                log.borrow_mut().push(format!("step {i} {item}"));
                i * 10
            }
        })
        .await;

        assert_eq!(out, vec![0, 10, 20]);
        assert_eq!(
            *log.borrow(),
            vec!["step 0 a", "pause", "step 1 b", "pause", "step 2 c"]
        );
    }

    #[tokio::test]
    async fn test_single_and_empty_inputs_never_pause() {
        let pacer = RecordingPace::default();
        let out = run_paced(&pacer, [7], |_, x| async move { x }).await;
        assert_eq!(out, vec![7]);

        let none: Vec<u8> = Vec::new();
        let out = run_paced(&pacer, none, |_, x| async move { x }).await;
        assert!(out.is_empty());
        assert_eq!(pacer.pauses(), 0);
    }

    #[tokio::test]
    async fn test_fixed_delay_waits() {
        let pacer = FixedDelay::new(Duration::from_millis(20));
        let t0 = Instant::now();
        run_paced(&pacer, 0..4, |_, x| async move { x }).await;
        assert!(t0.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_zero_delay_is_immediate() {
        let pacer = FixedDelay::new(Duration::ZERO);
        let t0 = Instant::now();
        run_paced(&pacer, 0..100, |_, x| async move { x }).await;
        assert!(t0.elapsed() < Duration::from_millis(500));
    }
}
