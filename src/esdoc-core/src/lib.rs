//! esdoc Core Library
//!
//! Shared pieces of the esdoc document client:
//! - Wire model for documents and the response envelope
//! - Document endpoint URL construction
//! - Client configuration

pub mod config;
pub mod endpoint;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use endpoint::{BaseUrl, BaseUrlError, DotSegmentError};
pub use models::*;
