// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::arbiter::{ActivationArbiter, ActivationChange, CandidateState};
use crate::model::ids::DecoratorId;

#[derive(Debug)]
struct SharedInner {
    arbiter: Mutex<ActivationArbiter>,
    rescheduled: Notify,
}

/// A cloneable handle that serializes access to one [`ActivationArbiter`].
///
/// One handle per diagram. Delayed activations are driven by a tokio timer task started with
/// [`SharedArbiter::spawn_timer_driver`]; the clock is tokio's, so paused-time tests work.
#[derive(Debug, Clone)]
pub struct SharedArbiter {
    inner: Arc<SharedInner>,
}

impl SharedArbiter {
    pub fn new(arbiter: ActivationArbiter) -> Self {
        Self {
            inner: Arc::new(SharedInner { arbiter: Mutex::new(arbiter), rescheduled: Notify::new() }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ActivationArbiter> {
        self.inner.arbiter.lock().expect("activation arbiter lock poisoned")
    }

    pub fn active(&self) -> Option<DecoratorId> {
        self.lock().active()
    }

    pub fn state_of(&self, candidate: DecoratorId) -> CandidateState {
        self.lock().state_of(candidate)
    }

    pub fn ready_to_activate(&self, candidate: DecoratorId) -> ActivationChange {
        let change = self.lock().ready_to_activate(candidate);
        self.inner.rescheduled.notify_one();
        change
    }

    pub fn ready_to_delayed_activate(&self, candidate: DecoratorId) -> ActivationChange {
        let now = Instant::now().into_std();
        let change = self.lock().ready_to_delayed_activate(candidate, now);
        self.inner.rescheduled.notify_one();
        change
    }

    pub fn ready_to_deactivate(&self, candidate: DecoratorId) -> ActivationChange {
        let change = self.lock().ready_to_deactivate(candidate);
        self.inner.rescheduled.notify_one();
        change
    }

    pub fn forget(&self, candidate: DecoratorId) -> ActivationChange {
        let change = self.lock().forget(candidate);
        self.inner.rescheduled.notify_one();
        change
    }

    /// Runs `f` with exclusive access to the arbiter.
    pub fn with<R>(&self, f: impl FnOnce(&mut ActivationArbiter) -> R) -> R {
        let result = f(&mut self.lock());
        self.inner.rescheduled.notify_one();
        result
    }

    /// Spawns the task that fires delayed activations when they come due.
    ///
    /// Changes applied by the timer are sent on `changes`; the task ends when the receiver is
    /// dropped. Must be called from within a tokio runtime.
    pub fn spawn_timer_driver(
        &self,
        changes: mpsc::UnboundedSender<ActivationChange>,
    ) -> JoinHandle<()> {
        let shared = self.clone();
        tokio::spawn(async move { shared.run_timers(changes).await })
    }

    async fn run_timers(self, changes: mpsc::UnboundedSender<ActivationChange>) {
        loop {
            let deadline = self.lock().next_deadline();
            match deadline {
                Some(due) => {
                    tokio::select! {
                        _ = tokio::time::sleep_until(Instant::from_std(due)) => {}
                        _ = self.inner.rescheduled.notified() => continue,
                        _ = changes.closed() => return,
                    }
                }
                None => {
                    tokio::select! {
                        _ = self.inner.rescheduled.notified() => continue,
                        _ = changes.closed() => return,
                    }
                }
            }

            let now = Instant::now().into_std();
            let fired = self.lock().fire_due(now);
            for change in fired {
                if changes.send(change).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::SharedArbiter;
    use crate::hover::arbiter::{ActivationArbiter, ActivationChange, CandidateState};
    use crate::model::ids::DecoratorId;

    const DELAY: Duration = Duration::from_millis(300);
    const A: DecoratorId = DecoratorId::new(1);
    const B: DecoratorId = DecoratorId::new(2);

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_delayed_activation() {
        let shared = SharedArbiter::new(ActivationArbiter::new(DELAY));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let driver = shared.spawn_timer_driver(tx);

        shared.ready_to_activate(A);
        shared.ready_to_delayed_activate(B);
        assert_eq!(shared.state_of(B), CandidateState::PendingDelayedActivate);

        let change = rx.recv().await.expect("timer change");
        assert_eq!(change, ActivationChange { deactivated: Some(A), activated: Some(B) });
        assert_eq!(shared.active(), Some(B));

        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_activation_never_fires() {
        let shared = SharedArbiter::new(ActivationArbiter::new(DELAY));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let driver = shared.spawn_timer_driver(tx);

        shared.ready_to_delayed_activate(A);
        settle().await;
        tokio::time::advance(Duration::from_millis(100)).await;
        shared.ready_to_activate(B);

        tokio::time::advance(DELAY * 2).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(shared.active(), Some(B));
        assert_eq!(shared.state_of(A), CandidateState::Inactive);

        driver.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn driver_stops_when_receiver_is_dropped() {
        let shared = SharedArbiter::new(ActivationArbiter::new(DELAY));
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = shared.spawn_timer_driver(tx);

        drop(rx);
        driver.await.expect("driver exits cleanly");
    }

    #[test]
    fn handles_share_one_arbiter() {
        let a = SharedArbiter::new(ActivationArbiter::new(DELAY));
        let b = a.clone();
        a.ready_to_activate(A);
        assert_eq!(b.active(), Some(A));
        assert!(b.ready_to_deactivate(B).is_empty());
        assert_eq!(b.with(|arbiter| arbiter.active()), Some(A));
    }
}
