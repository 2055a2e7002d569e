//! Core types for the videoroom-subscriber crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room, feed or private ID as the gateway sees it.
///
/// The VideoRoom plugin takes integer IDs unless it runs with `string_ids`,
/// so numbers stay JSON numbers on the wire and strings stay strings.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(u64),
    Text(String),
}

impl Identifier {
    /// Numeric value, if this is a numeric ID.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(_) => None,
        }
    }

    /// String value, if this is a string ID.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(id) => Some(id),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Macro to generate common ID type implementations
macro_rules! impl_id_type {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<Identifier>) -> Self {
                Self(id.into())
            }

            pub fn id(&self) -> &Identifier {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Identifier> for $name {
            fn from(id: Identifier) -> Self {
                Self(id)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name::new(id)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::new(s)
            }
        }
    };
}

/// Identifier of a video room.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub Identifier);

impl_id_type!(RoomId);

/// Identifier of the publisher feed being subscribed to.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(pub Identifier);

impl_id_type!(FeedId);

/// Role of a session description in the offer/answer exchange.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpType {
    Offer,
    Answer,
    Pranswer,
    Rollback,
}

/// Negotiation descriptor exchanged with the gateway (the `jsep` object).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    /// Offer or answer
    #[serde(rename = "type")]
    pub sdp_type: SdpType,
    /// Media description text
    pub sdp: String,
}

impl SessionDescription {
    /// Create an offer description.
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self {
            sdp_type: SdpType::Offer,
            sdp: sdp.into(),
        }
    }

    /// Create an answer description.
    pub fn answer(sdp: impl Into<String>) -> Self {
        Self {
            sdp_type: SdpType::Answer,
            sdp: sdp.into(),
        }
    }
}

/// Options for joining a room as a subscriber.
///
/// Audio and video default to enabled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct JoinOptions {
    /// Room PIN, presented on every request that supports it
    pub room_secret: Option<String>,
    /// Private ID of the caller when it also publishes in the room
    pub private_feed_id: Option<Identifier>,
    /// Request inbound audio
    pub audio: bool,
    /// Request inbound video
    pub video: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            room_secret: None,
            private_feed_id: None,
            audio: true,
            video: true,
        }
    }
}

impl JoinOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room PIN.
    pub fn with_room_secret(mut self, secret: impl Into<String>) -> Self {
        self.room_secret = Some(secret.into());
        self
    }

    /// Set the caller's private publisher ID.
    pub fn with_private_feed_id(mut self, private_id: impl Into<Identifier>) -> Self {
        self.private_feed_id = Some(private_id.into());
        self
    }

    /// Set whether inbound audio is requested.
    pub fn with_audio(mut self, audio: bool) -> Self {
        self.audio = audio;
        self
    }

    /// Set whether inbound video is requested.
    pub fn with_video(mut self, video: bool) -> Self {
        self.video = video;
        self
    }
}
