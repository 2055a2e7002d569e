//! Transport negotiation seam.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::SessionDescription;

/// Options for answer creation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AnswerOptions {
    pub offer_to_receive_audio: bool,
    pub offer_to_receive_video: bool,
}

impl AnswerOptions {
    /// Receive both audio and video.
    ///
    /// Subscribers always answer with both directions open; what actually
    /// flows is decided by the `audio`/`video` flags on the signaling side.
    pub fn receive_all() -> Self {
        Self {
            offer_to_receive_audio: true,
            offer_to_receive_video: true,
        }
    }
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self::receive_all()
    }
}

/// Local media transport performing the offer/answer exchange.
///
/// Each method is an independent asynchronous step; the subscriber awaits one
/// before starting the next.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportNegotiator: Send + Sync {
    /// Apply the gateway's offer as the remote description.
    async fn set_remote_description(
        &self,
        description: &SessionDescription,
    ) -> Result<(), TransportError>;

    /// Produce an answer to the applied remote description.
    async fn create_answer(
        &self,
        options: AnswerOptions,
    ) -> Result<SessionDescription, TransportError>;

    /// Apply the produced answer as the local description.
    async fn set_local_description(
        &self,
        description: &SessionDescription,
    ) -> Result<(), TransportError>;
}
