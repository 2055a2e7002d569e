//! Wire messages exchanged with the VideoRoom plugin.
//!
//! Request bodies are serialized with the field names fixed by the gateway
//! protocol. Optional credentials are omitted from the body when absent.

use serde::Serialize;
use serde_json::Value;

use crate::types::{FeedId, Identifier, RoomId, SessionDescription};

/// Participant type announced on join and configure requests.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantType {
    Subscriber,
}

/// Request body sent to the VideoRoom plugin.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "request", rename_all = "lowercase")]
pub enum VideoRoomRequest {
    /// Attach as a subscriber of `feed` in `room`
    Join {
        ptype: ParticipantType,
        feed: FeedId,
        room: RoomId,
        offer_video: bool,
        offer_audio: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pin: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        private_id: Option<Identifier>,
    },

    /// Start receiving media; the answer travels alongside as `jsep`
    Start { room: RoomId },

    /// Change the directions of an attached subscription
    Configure {
        ptype: ParticipantType,
        feed: FeedId,
        room: RoomId,
        video: bool,
        audio: bool,
        offer_video: bool,
        offer_audio: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pin: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        private_id: Option<Identifier>,
    },
}

impl VideoRoomRequest {
    /// Build a subscriber join request.
    pub fn join(
        room: RoomId,
        feed: FeedId,
        audio: bool,
        video: bool,
        pin: Option<String>,
        private_id: Option<Identifier>,
    ) -> Self {
        Self::Join {
            ptype: ParticipantType::Subscriber,
            feed,
            room,
            offer_video: video,
            offer_audio: audio,
            pin,
            private_id,
        }
    }

    /// Build a start request.
    pub fn start(room: RoomId) -> Self {
        Self::Start { room }
    }

    /// Build a subscriber configure request.
    ///
    /// Directions are written twice: `audio`/`video` toggle what the subscriber
    /// receives, `offer_audio`/`offer_video` what the plugin offers it. Both
    /// must agree for the transport directions to match.
    pub fn configure(
        room: RoomId,
        feed: FeedId,
        audio: bool,
        video: bool,
        pin: Option<String>,
        private_id: Option<Identifier>,
    ) -> Self {
        Self::Configure {
            ptype: ParticipantType::Subscriber,
            feed,
            room,
            video,
            audio,
            offer_video: video,
            offer_audio: audio,
            pin,
            private_id,
        }
    }

    /// Name of the request as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Start { .. } => "start",
            Self::Configure { .. } => "configure",
        }
    }

    /// Serialize into a JSON body.
    pub fn to_body(&self) -> Value {
        // Every field is a string, bool or omitted Option, so this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Payload handed to the signaling exchange for one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPayload {
    /// Plugin request body
    pub body: Value,
    /// Negotiation descriptor carried alongside the body
    pub jsep: Option<SessionDescription>,
}

impl TransactionPayload {
    /// Payload with a body only.
    pub fn new(request: &VideoRoomRequest) -> Self {
        Self {
            body: request.to_body(),
            jsep: None,
        }
    }

    /// Attach a negotiation descriptor.
    pub fn with_jsep(mut self, jsep: SessionDescription) -> Self {
        self.jsep = Some(jsep);
        self
    }
}

/// Response correlated to a transaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionResponse {
    /// Semantic acknowledgment payload (plugin data)
    pub data: Option<Value>,
    /// Full response envelope
    pub json: Value,
}

impl TransactionResponse {
    /// Create a response from its data payload and envelope.
    pub fn new(data: Option<Value>, json: Value) -> Self {
        Self { data, json }
    }

    /// Read a string field of the data payload.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key)?.as_str()
    }

    /// Negotiation descriptor carried in the envelope, if present and well-formed.
    pub fn jsep(&self) -> Option<SessionDescription> {
        let jsep = self.json.get("jsep")?;
        serde_json::from_value(jsep.clone()).ok()
    }
}
