//! Configuration types for the videoroom-subscriber crate.

/// Plugin the subscriber talks to.
///
/// Requests are plugin messages; [`SignalingExchange`](crate::SignalingExchange)
/// implementations attach their handle to this plugin before the first join.
pub const VIDEOROOM_PLUGIN: &str = "janus.plugin.videoroom";

/// Envelope kind of plugin requests.
pub const MESSAGE_REQUEST_KIND: &str = "message";

/// Envelope kind acknowledging plugin requests.
pub const EVENT_ACK_KIND: &str = "event";

/// Configuration for a [`VideoRoomSubscriber`](crate::VideoRoomSubscriber).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubscriberConfig {
    /// Envelope kind used for every request
    /// Default: "message"
    pub request_kind: String,

    /// Envelope kind expected as acknowledgment
    /// Default: "event"
    pub ack_kind: String,

    /// Pass inbound offers through the descriptor filter before applying them
    /// Default: false
    pub filter_direct_candidates: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            request_kind: MESSAGE_REQUEST_KIND.to_string(),
            ack_kind: EVENT_ACK_KIND.to_string(),
            filter_direct_candidates: false,
        }
    }
}

impl SubscriberConfig {
    /// Create a new SubscriberConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SubscriberConfig that forces media through a TURN relay
    pub fn relay_only() -> Self {
        Self {
            filter_direct_candidates: true,
            ..Default::default()
        }
    }

    /// Check the configuration for values the gateway cannot accept
    pub fn validate(&self) -> Result<(), String> {
        if self.request_kind.trim().is_empty() {
            return Err("request kind must not be empty".to_string());
        }
        if self.ack_kind.trim().is_empty() {
            return Err("acknowledgment kind must not be empty".to_string());
        }
        Ok(())
    }
}
