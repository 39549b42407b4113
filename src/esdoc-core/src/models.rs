use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Document is a JSON object owned by the caller
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Query parameters appended to a document URL, encoded in key order
pub type QueryParams = BTreeMap<String, String>;

/// ResponseEnvelope is the fixed-shape body returned by the document API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ok: bool,
    #[serde(rename = "_index", default, deserialize_with = "null_as_default")]
    pub index: String,
    #[serde(rename = "_type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub found: bool,
    #[serde(rename = "_source", default, deserialize_with = "null_as_default")]
    pub source: Document,
}

impl ResponseEnvelope {
    /// Decode the first JSON value in `body`.
    ///
    /// Anything after that value is ignored, and a literal `null` yields the
    /// zero envelope. An empty body is an error.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(envelope) => Ok(envelope?.unwrap_or_default()),
            None => Err(serde_json::Error::custom("EOF while parsing response envelope")),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
