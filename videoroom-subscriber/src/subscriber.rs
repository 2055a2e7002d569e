//! Subscription controller.
//!
//! [`VideoRoomSubscriber`] drives the subscriber side of a VideoRoom session:
//!
//! 1. `join` request, answered by an `attached` event carrying the offer
//! 2. offer applied as remote description, answer created and applied locally
//! 3. `start` request carrying the answer, answered by `started: ok`
//!
//! Later `configure` requests toggle inbound audio/video on the established
//! transport without renegotiating it.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::SubscriberConfig;
use crate::error::{Result, SubscriberError};
use crate::filter::DescriptorFilter;
use crate::messages::{TransactionPayload, TransactionResponse, VideoRoomRequest};
use crate::negotiator::{AnswerOptions, TransportNegotiator};
use crate::signaling::SignalingExchange;
use crate::state::{StateCell, SubscriptionSession, SubscriptionState};
use crate::types::{FeedId, JoinOptions, RoomId, SessionDescription};

/// Subscriber of a single remote feed in a video room.
///
/// Built with [`SubscriberBuilder`](crate::SubscriberBuilder). All collaborators
/// are injected; the subscriber owns only its session state.
///
/// # Example
///
/// ```rust,ignore
/// use videoroom_subscriber::{JoinOptions, SubscriberBuilder};
///
/// let subscriber = SubscriberBuilder::new()
///     .with_signaling(signaling)
///     .with_negotiator(peer_connection)
///     .build()?;
///
/// subscriber
///     .join("room-7", "feed-42", JoinOptions::new().with_video(false))
///     .await?;
/// subscriber.enable_video().await?;
/// ```
pub struct VideoRoomSubscriber {
    signaling: Arc<dyn SignalingExchange>,
    negotiator: Arc<dyn TransportNegotiator>,
    filter: Option<Arc<dyn DescriptorFilter>>,
    config: SubscriberConfig,
    state: StateCell,
}

impl VideoRoomSubscriber {
    pub(crate) fn new(
        signaling: Arc<dyn SignalingExchange>,
        negotiator: Arc<dyn TransportNegotiator>,
        filter: Option<Arc<dyn DescriptorFilter>>,
        config: SubscriberConfig,
    ) -> Self {
        Self {
            signaling,
            negotiator,
            filter,
            config,
            state: StateCell::new(),
        }
    }

    /// Current phase of the subscriber.
    pub fn state(&self) -> SubscriptionState {
        self.state.state()
    }

    /// Snapshot of the confirmed session, `None` until a join succeeds.
    pub fn session(&self) -> Option<SubscriptionSession> {
        self.state.session()
    }

    /// Configuration this subscriber was built with.
    pub fn config(&self) -> &SubscriberConfig {
        &self.config
    }

    /// Join `room_id` and subscribe to `feed_id`.
    ///
    /// Returns the data payload of the `started` acknowledgment. The session
    /// is committed only after the whole handshake succeeds; on any error it
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// * `SubscriberError::AlreadyAttached` - a session is already established
    /// * `SubscriberError::Busy` - another flow is in progress
    /// * `SubscriberError::SignalingRejected` - join not acknowledged as `attached`
    /// * `SubscriberError::MissingNegotiationDescriptor` - no offer attached
    /// * `SubscriberError::Transport` - the negotiator failed
    /// * `SubscriberError::StartRejected` - start not acknowledged as `ok`.
    ///   Remote and local descriptions stay applied; the caller decides whether
    ///   to tear the transport down.
    /// * `SubscriberError::Exchange` - the signaling exchange failed
    pub async fn join(
        &self,
        room_id: impl Into<RoomId>,
        feed_id: impl Into<FeedId>,
        options: JoinOptions,
    ) -> Result<Value> {
        let room_id = room_id.into();
        let feed_id = feed_id.into();
        let flow = self.state.begin_join()?;

        info!(
            room = %room_id,
            feed = %feed_id,
            audio = options.audio,
            video = options.video,
            "Subscribing to feed"
        );

        let join = VideoRoomRequest::join(
            room_id.clone(),
            feed_id.clone(),
            options.audio,
            options.video,
            options.room_secret.clone(),
            options.private_feed_id.clone(),
        );
        let response = self
            .send(&join, None)
            .await
            .inspect_err(|e| log_failure(&join, e, "unknown error connecting to room"))?;

        let offer = self
            .attached_offer(&response)
            .inspect_err(|e| log_failure(&join, e, "unexpected join answer"))?;

        flow.advance(SubscriptionState::Negotiating);
        let answer = self
            .negotiate(offer)
            .await
            .inspect_err(|e| log_failure(&join, e, "transport negotiation failed"))?;

        flow.advance(SubscriptionState::Starting);
        let start = VideoRoomRequest::start(room_id.clone());
        let data = self
            .start(&start, answer)
            .await
            .inspect_err(|e| log_failure(&start, e, "unknown error sending answer"))?;

        flow.commit(SubscriptionSession {
            room_id,
            feed_id,
            room_secret: options.room_secret,
            private_feed_id: options.private_feed_id,
            audio_enabled: options.audio,
            video_enabled: options.video,
        });
        info!(?data, "Subscription started");

        Ok(data)
    }

    /// Change the inbound media directions of the established subscription.
    ///
    /// No renegotiation happens; the gateway applies the new directions on
    /// the existing transport. The session is updated only once the gateway
    /// confirms.
    ///
    /// # Errors
    ///
    /// * `SubscriberError::NotAttached` - no session has been established
    /// * `SubscriberError::Busy` - another flow is in progress
    /// * `SubscriberError::ConfigureRejected` - configure not acknowledged as `ok`
    /// * `SubscriberError::Exchange` - the signaling exchange failed
    pub async fn modify(&self, audio: bool, video: bool) -> Result<()> {
        self.configure(|_| (audio, video)).await
    }

    /// Resume inbound audio, keeping video as currently confirmed.
    pub async fn enable_audio(&self) -> Result<()> {
        self.configure(|s| (true, s.video_enabled)).await
    }

    /// Stop inbound audio, keeping video as currently confirmed.
    pub async fn disable_audio(&self) -> Result<()> {
        self.configure(|s| (false, s.video_enabled)).await
    }

    /// Resume inbound video, keeping audio as currently confirmed.
    pub async fn enable_video(&self) -> Result<()> {
        self.configure(|s| (s.audio_enabled, true)).await
    }

    /// Stop inbound video, keeping audio as currently confirmed.
    pub async fn disable_video(&self) -> Result<()> {
        self.configure(|s| (s.audio_enabled, false)).await
    }

    /// Run a configure flow with directions derived from the confirmed session.
    ///
    /// The directions are computed while the flow is claimed, so a toggle can
    /// never act on a session another flow is about to replace.
    async fn configure<F>(&self, directions: F) -> Result<()>
    where
        F: FnOnce(&SubscriptionSession) -> (bool, bool),
    {
        let (flow, session, (audio, video)) = self.state.begin_modify_with(directions)?;

        info!(
            room = %session.room_id,
            feed = %session.feed_id,
            audio,
            video,
            "Modifying subscription"
        );

        let configure = VideoRoomRequest::configure(
            session.room_id.clone(),
            session.feed_id.clone(),
            audio,
            video,
            session.room_secret.clone(),
            session.private_feed_id.clone(),
        );
        let response = self
            .send(&configure, None)
            .await
            .inspect_err(|e| log_failure(&configure, e, "unknown error connecting to room"))?;

        if response.data_str("configured") != Some("ok") {
            let err = SubscriberError::ConfigureRejected {
                data: response.data,
            };
            log_failure(&configure, &err, "configure answer is not \"ok\"");
            return Err(err);
        }

        flow.commit(session.with_directions(audio, video));
        info!(audio, video, "Subscription modified");

        Ok(())
    }

    async fn send(
        &self,
        request: &VideoRoomRequest,
        jsep: Option<SessionDescription>,
    ) -> Result<TransactionResponse> {
        let payload = match jsep {
            Some(jsep) => TransactionPayload::new(request).with_jsep(jsep),
            None => TransactionPayload::new(request),
        };

        debug!(
            request = request.name(),
            with_jsep = payload.jsep.is_some(),
            "Sending request"
        );

        let response = self
            .signaling
            .transaction(&self.config.request_kind, payload, &self.config.ack_kind)
            .await?;

        debug!(request = request.name(), data = ?response.data, "Received acknowledgment");
        Ok(response)
    }

    /// Validate the join acknowledgment and extract the (filtered) offer.
    fn attached_offer(&self, response: &TransactionResponse) -> Result<SessionDescription> {
        if response.data_str("videoroom") != Some("attached") {
            return Err(SubscriberError::SignalingRejected {
                data: response.data.clone(),
            });
        }

        let mut offer =
            response
                .jsep()
                .ok_or_else(|| SubscriberError::MissingNegotiationDescriptor {
                    data: response.data.clone(),
                })?;

        if self.config.filter_direct_candidates {
            if let Some(filter) = &self.filter {
                offer.sdp = filter.filter(&offer.sdp);
                debug!("Filtered direct candidates from offer");
            }
        }

        Ok(offer)
    }

    async fn negotiate(&self, offer: SessionDescription) -> Result<SessionDescription> {
        self.negotiator.set_remote_description(&offer).await?;
        debug!(sdp_type = ?offer.sdp_type, "Remote description set");

        let answer = self
            .negotiator
            .create_answer(AnswerOptions::receive_all())
            .await?;
        self.negotiator.set_local_description(&answer).await?;
        debug!(sdp_type = ?answer.sdp_type, "Local description set");

        Ok(answer)
    }

    async fn start(
        &self,
        request: &VideoRoomRequest,
        answer: SessionDescription,
    ) -> Result<Value> {
        let response = self.send(request, Some(answer)).await?;

        match response.data {
            Some(data) if data.get("started").and_then(Value::as_str) == Some("ok") => Ok(data),
            data => {
                warn!("Start rejected after descriptions were applied; transport left negotiated");
                Err(SubscriberError::StartRejected { data })
            }
        }
    }
}

fn log_failure(request: &VideoRoomRequest, err: &SubscriberError, context: &str) {
    error!(
        request = request.name(),
        body = %request.to_body(),
        error = %err,
        "VideoRoom, {}",
        context
    );
}
