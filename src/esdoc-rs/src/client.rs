use crate::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use crate::{ClientError, Result};
use esdoc_core::{BaseUrl, Config, QueryParams, ResponseEnvelope};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Document API client for a search server
///
/// Holds no mutable state; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    base_url: BaseUrl,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_url().as_str())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client connected to the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::from_config(config).map_err(ClientError::Config)?;
        Self::with_transport(&config.base_url, Arc::new(transport))
    }

    /// Create a client that sends through the given transport
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = BaseUrl::parse(base_url)?;
        info!(url = %base_url, "Created search client");
        Ok(Self {
            base_url,
            transport,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Store a document in the index.
    ///
    /// An empty `id` lets the server generate one. Returns the id the server
    /// reports for the stored document.
    pub async fn index<D>(
        &self,
        index: &str,
        doctype: &str,
        id: &str,
        document: &D,
        params: Option<&QueryParams>,
    ) -> Result<String>
    where
        D: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(document).map_err(ClientError::Encoding)?;
        let url = self.base_url.document_url(index, doctype, id, params)?;

        let envelope = self.send(Method::POST, url, Some(body)).await?;
        Ok(envelope.id)
    }

    /// Delete a document.
    ///
    /// Returns whether the server found a document to remove.
    pub async fn delete(
        &self,
        index: &str,
        doctype: &str,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Result<bool> {
        let url = self.base_url.document_url(index, doctype, id, params)?;

        let envelope = self.send(Method::DELETE, url, None).await?;
        Ok(envelope.found)
    }

    async fn send(
        &self,
        method: Method,
        url: url::Url,
        body: Option<Vec<u8>>,
    ) -> Result<ResponseEnvelope> {
        debug!(method = %method, url = %url, "Sending document request");

        let response = self
            .transport
            .execute(TransportRequest { method, url, body })
            .await
            .map_err(ClientError::Transport)?;

        debug!(status = response.status, "Received document response");
        handle_response(response)
    }
}

/// Status and body checks stay separate: a 200 can still carry `ok: false`.
fn handle_response(response: TransportResponse) -> Result<ResponseEnvelope> {
    if response.status != 200 {
        return Err(ClientError::Http {
            status: response.status,
            status_text: response.status_text,
        });
    }

    let envelope = ResponseEnvelope::decode(&response.body).map_err(ClientError::Decoding)?;
    if !envelope.ok {
        return Err(ClientError::Rejected);
    }

    Ok(envelope)
}
