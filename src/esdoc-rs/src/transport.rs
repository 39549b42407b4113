use async_trait::async_trait;
use esdoc_core::Config;
use hyper::ext::ReasonPhrase;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, StatusCode};
use url::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One outgoing request. A present body is sent as JSON.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Vec<u8>>,
}

/// A fully read response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Status code and the reason phrase the server sent, e.g.
    /// "404 IndexMissingException"
    pub status_text: String,
    pub body: Vec<u8>,
}

/// Transport trait for sending a single HTTP exchange
///
/// Implementations must read the response body to the end before returning
/// so the connection is released on every outcome.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;
}

/// Default transport over a pooled reqwest client
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, BoxError> {
        let client = match &config.user_agent {
            Some(user_agent) => HttpClient::builder().user_agent(user_agent).build()?,
            None => HttpClient::new(),
        };
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        let mut builder = self.client.request(request.method, request.url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_text = status_line(status, response.extensions().get::<ReasonPhrase>());
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            body: body.to_vec(),
        })
    }
}

/// hyper only records the reason phrase when it differs from the canonical one
fn status_line(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    let reason = match reason {
        Some(phrase) => Some(String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
        None => status.canonical_reason().map(str::to_string),
    };
    match reason {
        Some(reason) if !reason.is_empty() => format!("{} {}", status.as_u16(), reason),
        _ => status.as_u16().to_string(),
    }
}
