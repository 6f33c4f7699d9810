//! 临时提示 ("Item added to cart!")
//!
//! A notice that clears itself after a fixed delay. The delay runs in a
//! spawned tokio task guarded by a [`CancellationToken`]; when it fires it
//! posts [`FeedbackExpired`] back to the owner's event loop instead of
//! touching state directly. Showing a new notice supersedes the old timer,
//! and dropping the notice cancels whatever is still pending.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Default display time for the notice
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 2000;

/// Notice shown after every add
pub const ITEM_ADDED_MESSAGE: &str = "Item added to cart!";

/// Timer fired for the notice shown as `generation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackExpired {
    pub generation: u64,
}

#[derive(Debug)]
pub struct FeedbackNotice {
    message: Option<String>,
    /// Bumped by every `show`; expiries for older generations are stale
    generation: u64,
    delay: Duration,
    timer: Option<CancellationToken>,
    expired_tx: mpsc::UnboundedSender<FeedbackExpired>,
}

impl FeedbackNotice {
    pub fn new(delay: Duration, expired_tx: mpsc::UnboundedSender<FeedbackExpired>) -> Self {
        Self {
            message: None,
            generation: 0,
            delay,
            timer: None,
            expired_tx,
        }
    }

    /// Show `message` and (re)start the clear timer
    ///
    /// Outside a tokio runtime the notice stays until superseded or dismissed.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.cancel_timer();
        self.generation += 1;
        self.message = Some(message.into());

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No tokio runtime, feedback notice will not auto-clear");
            return self.generation;
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.expired_tx.clone();
        let generation = self.generation;
        let delay = self.delay;

        handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the owner was torn down
                    let _ = tx.send(FeedbackExpired { generation });
                }
            }
        });

        self.timer = Some(token);
        self.generation
    }

    /// Handle a timer event; returns true when the notice was cleared
    pub fn expire(&mut self, event: FeedbackExpired) -> bool {
        if event.generation != self.generation || self.message.is_none() {
            tracing::trace!(
                stale = event.generation,
                current = self.generation,
                "Ignoring stale feedback expiry"
            );
            return false;
        }
        self.message = None;
        self.timer = None;
        true
    }

    /// Clear now and cancel the pending timer
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.timer.take() {
            token.cancel();
        }
    }
}

impl Drop for FeedbackNotice {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice() -> (FeedbackNotice, mpsc::UnboundedReceiver<FeedbackExpired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            FeedbackNotice::new(Duration::from_millis(DEFAULT_FEEDBACK_DELAY_MS), tx),
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_clears_after_delay() {
        let (mut notice, mut rx) = notice();
        let generation = notice.show(ITEM_ADDED_MESSAGE);
        assert_eq!(notice.message(), Some(ITEM_ADDED_MESSAGE));
        assert!(notice.is_timer_pending());

        let event = rx.recv().await.unwrap();
        assert_eq!(event, FeedbackExpired { generation });
        assert!(notice.expire(event));
        assert_eq!(notice.message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_cleared_before_delay() {
        let (mut notice, mut rx) = notice();
        notice.show(ITEM_ADDED_MESSAGE);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(notice.message(), Some(ITEM_ADDED_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_again_restarts_timer() {
        let (mut notice, mut rx) = notice();
        notice.show(ITEM_ADDED_MESSAGE);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let second = notice.show(ITEM_ADDED_MESSAGE);

        // First timer was cancelled, only the second one fires
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(notice.message(), Some(ITEM_ADDED_MESSAGE));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.generation, second);
        assert!(notice.expire(event));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_ignored() {
        let (mut notice, _rx) = notice();
        let first = notice.show("first");
        notice.show("second");
        assert!(!notice.expire(FeedbackExpired { generation: first }));
        assert_eq!(notice.message(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let (mut notice, mut rx) = notice();
        notice.show(ITEM_ADDED_MESSAGE);
        notice.dismiss();
        assert!(!notice.is_timer_pending());
        assert_eq!(notice.message(), None);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (mut notice, mut rx) = notice();
        notice.show(ITEM_ADDED_MESSAGE);
        drop(notice);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_show_without_runtime_keeps_message() {
        let (mut notice, _rx) = notice();
        notice.show(ITEM_ADDED_MESSAGE);
        assert_eq!(notice.message(), Some(ITEM_ADDED_MESSAGE));
        assert!(!notice.is_timer_pending());
    }
}
