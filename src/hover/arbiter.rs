// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catchbox and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use crate::config::DesignerConfig;
use crate::model::ids::DecoratorId;

/// Where a candidate stands with the arbiter.
///
/// Immediate activation has no observable pending phase: it is applied inside the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateState {
    Inactive,
    PendingDelayedActivate,
    Active,
}

/// The visible effect of one arbiter transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationChange {
    pub deactivated: Option<DecoratorId>,
    pub activated: Option<DecoratorId>,
}

impl ActivationChange {
    pub fn is_empty(&self) -> bool {
        self.deactivated.is_none() && self.activated.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingActivation {
    candidate: DecoratorId,
    due: Instant,
    seq: u64,
}

/// Decides which decorator currently shows its hover affordances.
///
/// At most one candidate is active. The arbiter only remembers *which* candidate won; it never
/// owns the decorators. Every method takes `&mut self`, so transitions cannot interleave; share
/// it across threads through [`super::SharedArbiter`].
#[derive(Debug, Clone)]
pub struct ActivationArbiter {
    active: Option<DecoratorId>,
    pending: Vec<PendingActivation>,
    delay: Duration,
    next_seq: u64,
}

impl Default for ActivationArbiter {
    fn default() -> Self {
        Self::from_config(&DesignerConfig::default())
    }
}

impl ActivationArbiter {
    pub fn new(delay: Duration) -> Self {
        Self { active: None, pending: Vec::new(), delay, next_seq: 0 }
    }

    pub fn from_config(config: &DesignerConfig) -> Self {
        Self::new(config.activation_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn active(&self) -> Option<DecoratorId> {
        self.active
    }

    pub fn is_active(&self, candidate: DecoratorId) -> bool {
        self.active == Some(candidate)
    }

    pub fn state_of(&self, candidate: DecoratorId) -> CandidateState {
        if self.is_active(candidate) {
            CandidateState::Active
        } else if self.pending.iter().any(|p| p.candidate == candidate) {
            CandidateState::PendingDelayedActivate
        } else {
            CandidateState::Inactive
        }
    }

    /// Earliest instant at which [`Self::fire_due`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Activates `candidate` now, deactivating whichever candidate was active before.
    ///
    /// Supersedes every pending delayed activation.
    pub fn ready_to_activate(&mut self, candidate: DecoratorId) -> ActivationChange {
        if !self.pending.is_empty() {
            tracing::trace!(
                candidate = %candidate,
                cancelled = self.pending.len(),
                "immediate activation supersedes pending activations"
            );
            self.pending.clear();
        }
        self.activate(candidate)
    }

    /// Schedules `candidate` to become active once the configured delay has elapsed.
    ///
    /// Re-arming an already pending candidate restarts its delay.
    pub fn ready_to_delayed_activate(
        &mut self,
        candidate: DecoratorId,
        now: Instant,
    ) -> ActivationChange {
        self.cancel_pending(candidate);
        if self.is_active(candidate) {
            return ActivationChange::default();
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let due = now + self.delay;
        self.pending.push(PendingActivation { candidate, due, seq });
        tracing::trace!(candidate = %candidate, delay = ?self.delay, "delayed activation scheduled");
        ActivationChange::default()
    }

    /// Deactivates `candidate` if it is the active one; stale requests are ignored.
    ///
    /// Always cancels a pending delayed activation of `candidate`.
    pub fn ready_to_deactivate(&mut self, candidate: DecoratorId) -> ActivationChange {
        self.cancel_pending(candidate);
        if !self.is_active(candidate) {
            tracing::trace!(candidate = %candidate, active = ?self.active, "stale deactivation ignored");
            return ActivationChange::default();
        }

        self.active = None;
        tracing::debug!(candidate = %candidate, "deactivated");
        ActivationChange { deactivated: Some(candidate), activated: None }
    }

    /// Applies every delayed activation due at `now`, earliest first.
    ///
    /// Each entry is looked up again right before it is applied, so entries cancelled after the
    /// timer was armed never fire.
    pub fn fire_due(&mut self, now: Instant) -> Vec<ActivationChange> {
        let mut changes = Vec::new();
        while let Some(idx) = self.earliest_due(now) {
            let pending = self.pending.remove(idx);
            let change = self.activate(pending.candidate);
            if !change.is_empty() {
                changes.push(change);
            }
        }
        changes
    }

    /// Drops every trace of `candidate`, e.g. when its decorator is unmounted.
    pub fn forget(&mut self, candidate: DecoratorId) -> ActivationChange {
        self.cancel_pending(candidate);
        if self.is_active(candidate) {
            self.active = None;
            return ActivationChange { deactivated: Some(candidate), activated: None };
        }
        ActivationChange::default()
    }

    fn earliest_due(&self, now: Instant) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(idx, _)| idx)
    }

    fn cancel_pending(&mut self, candidate: DecoratorId) {
        let before = self.pending.len();
        self.pending.retain(|p| p.candidate != candidate);
        if self.pending.len() != before {
            tracing::trace!(candidate = %candidate, "pending activation cancelled");
        }
    }

    fn activate(&mut self, candidate: DecoratorId) -> ActivationChange {
        if self.is_active(candidate) {
            return ActivationChange::default();
        }

        let deactivated = self.active.replace(candidate);
        tracing::debug!(candidate = %candidate, previous = ?deactivated, "activated");
        ActivationChange { deactivated, activated: Some(candidate) }
    }
}
