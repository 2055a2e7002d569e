//! Signaling exchange seam.
//!
//! The subscriber never frames, correlates or retries gateway messages itself.
//! It hands each request to a [`SignalingExchange`] and awaits the response the
//! exchange correlated to it.

use async_trait::async_trait;

use crate::error::ExchangeError;
use crate::messages::{TransactionPayload, TransactionResponse};

/// Request/response transport towards the room-management gateway.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`, the subscriber holds them behind an
/// `Arc` and may be shared across tasks.
#[async_trait]
pub trait SignalingExchange: Send + Sync {
    /// Send one request and wait for its correlated response.
    ///
    /// # Parameters
    ///
    /// - `request_kind`: envelope kind of the request (`"message"`)
    /// - `payload`: plugin body, plus an optional negotiation descriptor
    /// - `expected_kind`: envelope kind that acknowledges the request (`"event"`)
    ///
    /// # Errors
    ///
    /// Returns an [`ExchangeError`] when the request cannot be delivered or no
    /// matching response can be correlated. Timeouts and retries are the
    /// implementation's concern.
    async fn transaction(
        &self,
        request_kind: &str,
        payload: TransactionPayload,
        expected_kind: &str,
    ) -> Result<TransactionResponse, ExchangeError>;
}
