//! esdoc Client Library
//!
//! HTTP client for the document API of a search server: index a JSON
//! document under `index/type/id` and delete it again.

mod client;
pub mod transport;

pub use client::Client;
pub use esdoc_core::{BaseUrl, Config, Document, QueryParams, ResponseEnvelope};
pub use transport::{BoxError, ReqwestTransport, Transport, TransportRequest, TransportResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    InvalidUrl(#[from] esdoc_core::BaseUrlError),

    #[error(transparent)]
    InvalidSegment(#[from] esdoc_core::DotSegmentError),

    #[error("Failed to build HTTP client: {0}")]
    Config(#[source] BoxError),

    #[error("Failed to encode document: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] BoxError),

    /// Non-200 status; displays the status text as the server sent it
    #[error("{status_text}")]
    Http { status: u16, status_text: String },

    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("Response wasn't OK")]
    Rejected,
}

impl ClientError {
    /// Only network failures are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
