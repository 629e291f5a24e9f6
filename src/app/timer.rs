//! Simulated service delays
//!
//! Every fake network call in the flow is a tokio task that sleeps and then
//! reports back over a channel. Tasks belong to a [`TimerScope`]; dropping
//! the scope (when its screen is unmounted) aborts them. Each timer carries
//! a unique [`TimerId`] and a fired event is only acted on if the scope that
//! scheduled it still claims the id, so an event already in flight when its
//! screen went away is discarded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

/// Unique handle of one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What a timer reports when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Identity login: OTP "sent" to the mobile number
    OtpSent,
    /// Identity login: 4-digit OTP "verified"
    LoginVerified,
    /// Bank selection: account discovery finished
    AccountsFetched,
    /// Bank OTP: one second of the resend countdown elapsed
    ResendTick,
    /// Bank OTP: 6-digit code "verified"
    BankOtpVerified,
    /// Success: time to move on to processing
    SuccessRedirect,
    /// Processing: advance the step animation
    ProcessingStep,
    /// Processing: analysis "finished"
    ProcessingFinished,
    /// Result: raise the system notification
    ShowNotification,
    /// Trust center: hide the revocation toast
    ToastExpired,
    /// Notification overlay: auto-hide
    NotificationExpired,
}

/// A timer that went off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub event: TimerEvent,
}

/// Hands out timer scopes that all report into one channel
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<Fired>,
    next_id: Arc<AtomicU64>,
}

impl Scheduler {
    /// Create a scheduler and the receiving end of its fired-timer channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Fired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (scheduler, rx)
    }

    /// A fresh, empty scope
    pub fn scope(&self) -> TimerScope {
        TimerScope {
            scheduler: self.clone(),
            pending: HashMap::new(),
        }
    }

    fn allocate(&self) -> TimerId {
        TimerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
struct Pending {
    handle: JoinHandle<()>,
    repeating: bool,
}

/// Timers owned by one screen (or by the notification overlay).
///
/// Scheduling spawns onto the current tokio runtime.
#[derive(Debug)]
pub struct TimerScope {
    scheduler: Scheduler,
    pending: HashMap<TimerId, Pending>,
}

impl TimerScope {
    /// Fire `event` once after `delay`
    pub fn after(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        let id = self.scheduler.allocate();
        let tx = self.scheduler.tx.clone();
        let deadline = Instant::now() + delay;

        let handle = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            let _ = tx.send(Fired { id, event });
        });

        debug!("Scheduled {:?} ({:?}) in {:?}", event, id, delay);
        self.pending.insert(
            id,
            Pending {
                handle,
                repeating: false,
            },
        );
        id
    }

    /// Fire `event` every `period`, first after one full period, until cancelled
    pub fn every(&mut self, period: Duration, event: TimerEvent) -> TimerId {
        let id = self.scheduler.allocate();
        let tx = self.scheduler.tx.clone();
        let start = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(start, period);
            loop {
                ticker.tick().await;
                if tx.send(Fired { id, event }).is_err() {
                    break;
                }
            }
        });

        debug!("Scheduled {:?} ({:?}) every {:?}", event, id, period);
        self.pending.insert(
            id,
            Pending {
                handle,
                repeating: true,
            },
        );
        id
    }

    /// Abort a timer. Returns false if it was not pending in this scope.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.remove(&id) {
            Some(pending) => {
                pending.handle.abort();
                trace!("Cancelled {:?}", id);
                true
            }
            None => false,
        }
    }

    /// Abort every timer in the scope
    pub fn cancel_all(&mut self) {
        for (id, pending) in self.pending.drain() {
            pending.handle.abort();
            trace!("Cancelled {:?}", id);
        }
    }

    /// Accept a fired timer if this scope still owns it.
    ///
    /// One-shot timers are released on claim; repeating timers stay pending.
    pub fn claim(&mut self, id: TimerId) -> bool {
        match self.pending.get(&id) {
            Some(pending) if pending.repeating => true,
            Some(_) => {
                self.pending.remove(&id);
                true
            }
            None => false,
        }
    }

    /// Whether a timer is still pending in this scope
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Drop for TimerScope {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            debug!("Dropping scope with {} pending timer(s)", self.pending.len());
        }
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<Fired>) -> Vec<Fired> {
        let mut fired = Vec::new();
        while let Ok(event) = rx.try_recv() {
            fired.push(event);
        }
        fired
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_after_delay() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut scope = scheduler.scope();
        let id = scope.after(Duration::from_millis(1000), TimerEvent::OtpSent);

        time::sleep(Duration::from_millis(999)).await;
        assert!(drain(&mut rx).is_empty());

        time::sleep(Duration::from_millis(2)).await;
        let fired = drain(&mut rx);
        assert_eq!(fired, vec![Fired { id, event: TimerEvent::OtpSent }]);

        assert!(scope.claim(id));
        // Claimed one-shots are released
        assert!(!scope.claim(id));
        assert!(scope.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_timer_stays_claimable() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut scope = scheduler.scope();
        let id = scope.every(Duration::from_secs(1), TimerEvent::ResendTick);

        time::sleep(Duration::from_millis(3500)).await;
        let fired = drain(&mut rx);
        assert_eq!(fired.len(), 3);
        for event in fired {
            assert!(scope.claim(event.id));
        }
        assert!(scope.is_pending(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut scope = scheduler.scope();
        let id = scope.after(Duration::from_millis(500), TimerEvent::ToastExpired);
        assert!(scope.cancel(id));
        assert!(!scope.cancel(id));

        time::sleep(Duration::from_secs(1)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scope_aborts_timers() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut scope = scheduler.scope();
        scope.after(Duration::from_millis(500), TimerEvent::ProcessingFinished);
        scope.every(Duration::from_millis(100), TimerEvent::ProcessingStep);
        drop(scope);

        time::sleep(Duration::from_secs(1)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_foreign_ids_are_not_claimed() {
        let (scheduler, _rx) = Scheduler::new();
        let mut first = scheduler.scope();
        let mut second = scheduler.scope();
        let id = first.after(Duration::from_millis(10), TimerEvent::OtpSent);
        assert!(!second.claim(id));
        assert!(first.claim(id));
    }
}
