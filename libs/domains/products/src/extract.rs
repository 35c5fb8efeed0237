//! Request extractors that reject with product errors

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::ProductError;

/// Integer product id from the `{id}` path segment.
///
/// Anything `i64::from_str` rejects becomes [`ProductError::InvalidId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Missing product id path parameter");
                ProductError::InvalidId
            })?;

        raw.parse::<i64>().map(ProductId).map_err(|e| {
            tracing::debug!(raw_id = %raw, error = %e, "Invalid product id");
            ProductError::InvalidId
        })
    }
}

/// JSON body, decoded the way lenient JSON decoders do:
///
/// - the `Content-Type` header is not checked;
/// - only the first JSON value is read, anything after it is ignored;
/// - top-level keys match field names case-insensitively (`"NAME"` fills
///   `name`; when spellings collide the later one wins).
///
/// Any decode failure becomes [`ProductError::InvalidPayload`].
#[derive(Debug, Clone)]
pub struct ProductJson<T>(pub T);

impl<T, S> FromRequest<S> for ProductJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ProductError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            ProductError::InvalidPayload
        })?;

        decode_first_value(&bytes).map(ProductJson).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode request body");
            ProductError::InvalidPayload
        })
    }
}

fn decode_first_value<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let Entries(entries) = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Entries>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("empty body")))?;

    let mut fields = Map::new();
    for (key, value) in entries {
        fields.insert(key.to_lowercase(), value);
    }
    serde_json::from_value(Value::Object(fields))
}

/// Entries of a top-level JSON object, in document order.
struct Entries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
