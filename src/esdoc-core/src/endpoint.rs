//! Document endpoint URLs
//!
//! Every document operation addresses `{base}/{index}/{type}/{id}?{params}`.
//! Each path segment is escaped on its own, so reserved characters in a name
//! never change the shape of the path.

use url::Url;

use crate::models::QueryParams;

#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("Invalid base URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    CannotBeABase(String),
}

/// `.` and `..` are resolved away by URL normalization even when
/// percent-encoded, so they cannot name an index, type or id.
#[derive(Debug, thiserror::Error)]
#[error("Path segment {0:?} cannot be addressed in a URL")]
pub struct DotSegmentError(pub String);

/// Root URL of a search server, validated to accept path segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, BaseUrlError> {
        let url = Url::parse(input)?;
        if url.cannot_be_a_base() {
            return Err(BaseUrlError::CannotBeABase(input.to_string()));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Build the URL for one document.
    ///
    /// An empty `id` produces an empty trailing segment, which asks the server
    /// to assign one. Parameters are form-encoded in key order; absent or
    /// empty parameters leave the query string off.
    pub fn document_url(
        &self,
        index: &str,
        doctype: &str,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Result<Url, DotSegmentError> {
        for segment in [index, doctype, id] {
            if matches!(segment, "." | "..") {
                return Err(DotSegmentError(segment.to_string()));
            }
        }

        let mut url = self.0.clone();

        // cannot_be_a_base was rejected in parse
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([index, doctype, id]);
        }

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
