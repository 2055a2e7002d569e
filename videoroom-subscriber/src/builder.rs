//! Builder for creating and configuring a VideoRoomSubscriber.
//!
//! The `SubscriberBuilder` collects the collaborators a subscriber needs and
//! validates them when `build()` is called.
//!
//! # Example
//!
//! ```rust,ignore
//! use videoroom_subscriber::SubscriberBuilder;
//!
//! let subscriber = SubscriberBuilder::new()
//!     .with_signaling(signaling)
//!     .with_negotiator(peer_connection)
//!     .filter_direct_candidates(true)
//!     .build()?;
//! ```

use std::sync::Arc;

use crate::config::SubscriberConfig;
use crate::error::{Result, SubscriberError};
use crate::filter::{DescriptorFilter, DirectCandidateFilter};
use crate::negotiator::TransportNegotiator;
use crate::signaling::SignalingExchange;
use crate::subscriber::VideoRoomSubscriber;

/// Builder for creating a [`VideoRoomSubscriber`].
///
/// # Validation
///
/// `build()` fails with `SubscriberError::Configuration` when:
/// - no signaling exchange was provided
/// - no transport negotiator was provided
/// - the configuration has an empty envelope kind
///
/// When candidate filtering is enabled and no filter was supplied, the
/// [`DirectCandidateFilter`] is used.
#[derive(Default)]
pub struct SubscriberBuilder {
    signaling: Option<Arc<dyn SignalingExchange>>,
    negotiator: Option<Arc<dyn TransportNegotiator>>,
    filter: Option<Arc<dyn DescriptorFilter>>,
    config: SubscriberConfig,
}

impl SubscriberBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signaling exchange used for every request.
    pub fn with_signaling(mut self, signaling: Arc<dyn SignalingExchange>) -> Self {
        self.signaling = Some(signaling);
        self
    }

    /// Set the transport negotiator performing the offer/answer exchange.
    pub fn with_negotiator(mut self, negotiator: Arc<dyn TransportNegotiator>) -> Self {
        self.negotiator = Some(negotiator);
        self
    }

    /// Set a custom descriptor filter.
    ///
    /// The filter only runs when `filter_direct_candidates` is enabled.
    pub fn with_filter(mut self, filter: Arc<dyn DescriptorFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SubscriberConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable descriptor filtering of inbound offers.
    pub fn filter_direct_candidates(mut self, enabled: bool) -> Self {
        self.config.filter_direct_candidates = enabled;
        self
    }

    /// Build the subscriber.
    pub fn build(self) -> Result<VideoRoomSubscriber> {
        self.config.validate().map_err(SubscriberError::Configuration)?;

        let signaling = self.signaling.ok_or_else(|| {
            SubscriberError::Configuration("a signaling exchange is required".to_string())
        })?;
        let negotiator = self.negotiator.ok_or_else(|| {
            SubscriberError::Configuration("a transport negotiator is required".to_string())
        })?;

        let filter = match self.filter {
            Some(filter) => Some(filter),
            None if self.config.filter_direct_candidates => {
                Some(Arc::new(DirectCandidateFilter) as Arc<dyn DescriptorFilter>)
            }
            None => None,
        };

        Ok(VideoRoomSubscriber::new(signaling, negotiator, filter, self.config))
    }
}
