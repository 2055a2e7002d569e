//! Error types for the videoroom-subscriber crate.

use crate::state::SubscriptionState;
use serde_json::Value;

/// Errors that can occur while joining or modifying a subscription.
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    /// The join acknowledgment was missing or did not report `attached`
    #[error("VideoRoom join answer is not \"attached\": {data:?}")]
    SignalingRejected {
        /// Data payload of the acknowledgment, if any
        data: Option<Value>,
    },

    /// The attach acknowledgment carried no negotiation descriptor
    #[error("VideoRoom join answer does not contain a negotiation descriptor: {data:?}")]
    MissingNegotiationDescriptor {
        /// Data payload of the acknowledgment
        data: Option<Value>,
    },

    /// The start acknowledgment was missing or did not report `ok`
    #[error("VideoRoom could not start the stream: {data:?}")]
    StartRejected {
        /// Data payload of the acknowledgment, if any
        data: Option<Value>,
    },

    /// The configure acknowledgment was missing or did not report `ok`
    #[error("VideoRoom configure answer is not \"ok\": {data:?}")]
    ConfigureRejected {
        /// Data payload of the acknowledgment, if any
        data: Option<Value>,
    },

    /// The transport negotiator failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The signaling exchange failed
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    /// Another join or modify is still in flight on this subscriber
    #[error("Subscriber is busy: {state:?} in progress")]
    Busy {
        /// The phase of the in-flight operation
        state: SubscriptionState,
    },

    /// A modify was requested before any join succeeded
    #[error("Subscriber is not attached to a feed")]
    NotAttached,

    /// A join was requested on a subscriber that already holds a session
    #[error("Subscriber is already attached to a feed")]
    AlreadyAttached,

    /// Invalid configuration provided
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors surfaced by a [`TransportNegotiator`](crate::TransportNegotiator).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transport refused the operation
    #[error("Transport rejected operation: {0}")]
    Rejected(String),

    /// The supplied session description could not be applied
    #[error("Invalid session description: {0}")]
    InvalidDescription(String),

    /// The underlying connection has been closed
    #[error("Transport closed")]
    Closed,
}

/// Errors surfaced by a [`SignalingExchange`](crate::SignalingExchange).
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The request could not be delivered to the gateway
    #[error("Signaling delivery failed: {0}")]
    Delivery(String),

    /// No response matching the expected kind could be correlated
    #[error("Signaling correlation failed: {0}")]
    Correlation(String),

    /// The signaling channel has been closed
    #[error("Signaling channel closed")]
    Closed,
}

/// Convenience type alias for Results using SubscriberError.
pub type Result<T> = std::result::Result<T, SubscriberError>;
