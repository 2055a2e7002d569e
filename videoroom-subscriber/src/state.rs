//! Subscription state machine.
//!
//! A subscriber moves through
//! `Idle -> Joining -> Negotiating -> Starting -> Attached` on join and
//! `Attached -> Configuring -> Attached` on modify. Only one flow may run at a
//! time; a second call while a flow is in progress is rejected instead of
//! interleaving writes to the session.
//!
//! The phase is held in a short critical section that is never kept across an
//! `.await`. A [`FlowGuard`] owns the in-progress flow and puts the phase back
//! where it started if the flow fails or its future is dropped.

use parking_lot::Mutex;

use crate::error::{Result, SubscriberError};
use crate::types::{FeedId, Identifier, RoomId};

/// Phase of a subscriber.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum SubscriptionState {
    /// No session, nothing in flight
    Idle,
    /// Join request sent, waiting for the attach acknowledgment
    Joining,
    /// Applying the offer and producing the answer
    Negotiating,
    /// Start request sent with the answer, waiting for its acknowledgment
    Starting,
    /// Session confirmed, media flowing
    Attached,
    /// Configure request sent, waiting for its acknowledgment
    Configuring,
}

impl SubscriptionState {
    /// Whether a join or modify flow is currently running.
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle | Self::Attached)
    }
}

/// Confirmed subscription to one remote feed.
///
/// Values here have all been acknowledged by the gateway; nothing is written
/// before the corresponding request succeeds.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubscriptionSession {
    /// Room the feed lives in
    pub room_id: RoomId,
    /// Publisher feed being received
    pub feed_id: FeedId,
    /// Room PIN presented on every request
    pub room_secret: Option<String>,
    /// Caller's private publisher ID presented on join and configure
    pub private_feed_id: Option<Identifier>,
    /// Inbound audio requested
    pub audio_enabled: bool,
    /// Inbound video requested
    pub video_enabled: bool,
}

impl SubscriptionSession {
    /// Copy of this session with new media directions.
    pub fn with_directions(&self, audio: bool, video: bool) -> Self {
        Self {
            audio_enabled: audio,
            video_enabled: video,
            ..self.clone()
        }
    }
}

#[derive(Debug)]
struct Inner {
    state: SubscriptionState,
    session: Option<SubscriptionSession>,
}

/// Single-writer holder of the phase and confirmed session.
#[derive(Debug)]
pub(crate) struct StateCell {
    inner: Mutex<Inner>,
}

impl StateCell {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: SubscriptionState::Idle,
                session: None,
            }),
        }
    }

    pub(crate) fn state(&self) -> SubscriptionState {
        self.inner.lock().state
    }

    pub(crate) fn session(&self) -> Option<SubscriptionSession> {
        self.inner.lock().session.clone()
    }

    /// Start a join flow. Only allowed from `Idle`.
    pub(crate) fn begin_join(&self) -> Result<FlowGuard<'_>> {
        let mut inner = self.inner.lock();
        match inner.state {
            SubscriptionState::Idle => {
                inner.state = SubscriptionState::Joining;
                Ok(FlowGuard::new(self, SubscriptionState::Idle))
            }
            SubscriptionState::Attached => Err(SubscriberError::AlreadyAttached),
            state => Err(SubscriberError::Busy { state }),
        }
    }

    /// Start a modify flow. Only allowed from `Attached`.
    ///
    /// `directions` computes the requested `(audio, video)` from the confirmed
    /// session while the flow is being claimed, so no other flow can commit
    /// between the read and the transition. It is not called when the flow is
    /// refused. Returns the session as confirmed at that moment together with
    /// the computed directions.
    pub(crate) fn begin_modify_with<F>(
        &self,
        directions: F,
    ) -> Result<(FlowGuard<'_>, SubscriptionSession, (bool, bool))>
    where
        F: FnOnce(&SubscriptionSession) -> (bool, bool),
    {
        let mut inner = self.inner.lock();
        match (inner.state, inner.session.clone()) {
            (SubscriptionState::Attached, Some(session)) => {
                let requested = directions(&session);
                inner.state = SubscriptionState::Configuring;
                Ok((
                    FlowGuard::new(self, SubscriptionState::Attached),
                    session,
                    requested,
                ))
            }
            (SubscriptionState::Idle, _) | (SubscriptionState::Attached, None) => {
                Err(SubscriberError::NotAttached)
            }
            (state, _) => Err(SubscriberError::Busy { state }),
        }
    }
}

/// Ownership of the in-progress flow.
///
/// Dropping the guard without [`commit`](FlowGuard::commit) restores the phase
/// the flow started from and leaves the session untouched.
#[must_use = "dropping the guard aborts the flow"]
pub(crate) struct FlowGuard<'a> {
    cell: &'a StateCell,
    restore: SubscriptionState,
    committed: bool,
}

impl<'a> FlowGuard<'a> {
    fn new(cell: &'a StateCell, restore: SubscriptionState) -> Self {
        Self {
            cell,
            restore,
            committed: false,
        }
    }

    /// Move the running flow to its next phase.
    pub(crate) fn advance(&self, state: SubscriptionState) {
        self.cell.inner.lock().state = state;
    }

    /// Publish the confirmed session and return to `Attached`.
    pub(crate) fn commit(mut self, session: SubscriptionSession) {
        let mut inner = self.cell.inner.lock();
        inner.session = Some(session);
        inner.state = SubscriptionState::Attached;
        self.committed = true;
    }
}

impl Drop for FlowGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.cell.inner.lock().state = self.restore;
        }
    }
}
