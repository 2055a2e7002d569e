//! # videoroom-subscriber
//!
//! Subscriber-side negotiation for SFU video rooms (the gateway's VideoRoom
//! plugin).
//!
//! A [`VideoRoomSubscriber`] joins a room as the subscriber of one remote
//! feed and can later toggle inbound audio/video without renegotiating the
//! transport. It interleaves two asynchronous protocols that must stay in
//! step:
//!
//! - a request/response [`SignalingExchange`] with the gateway, and
//! - a local [`TransportNegotiator`] performing the offer/answer exchange.
//!
//! The answer is never sent before the gateway acknowledged the attach, and a
//! configure is never issued while another flow is in flight: concurrent calls
//! fail with [`SubscriberError::Busy`] instead of interleaving.
//!
//! Message framing, correlation, retries and timeouts belong to the
//! [`SignalingExchange`] implementation. Candidate filtering is delegated to a
//! [`DescriptorFilter`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use videoroom_subscriber::{JoinOptions, SubscriberBuilder};
//!
//! let subscriber = SubscriberBuilder::new()
//!     .with_signaling(Arc::new(my_gateway_handle))
//!     .with_negotiator(Arc::new(my_peer_connection))
//!     .build()?;
//!
//! let started = subscriber
//!     .join("room-7", "feed-42", JoinOptions::new().with_room_secret("1234"))
//!     .await?;
//!
//! subscriber.disable_video().await?;
//! ```

mod builder;
mod config;
mod error;
mod filter;
mod messages;
mod negotiator;
mod signaling;
mod state;
mod subscriber;
mod types;

pub mod logging;

pub use builder::SubscriberBuilder;
pub use config::*;
pub use error::*;
pub use filter::{DescriptorFilter, DirectCandidateFilter};
pub use messages::{ParticipantType, TransactionPayload, TransactionResponse, VideoRoomRequest};
pub use negotiator::{AnswerOptions, TransportNegotiator};
pub use signaling::SignalingExchange;
pub use state::{SubscriptionSession, SubscriptionState};
pub use subscriber::VideoRoomSubscriber;
pub use types::*;
