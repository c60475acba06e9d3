//! Request input resolution.
//!
//! The `hba1c` value is taken from a JSON body first and from the query
//! string second. A body that is missing, unreadable, not JSON, or not a JSON
//! object is ignored, so a malformed body never masks the query parameter.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use hba1c_classifier_sdk::{FIELD_NAME, Hba1cInput};
use serde_json::value::RawValue;

use super::dto::input_from_raw;

/// Top-level members of a JSON object body, kept unparsed until needed.
pub type JsonObject = HashMap<String, Box<RawValue>>;

/// The `hba1c` input resolved from a request, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput(pub Option<Hba1cInput>);

impl<S> FromRequest<S> for ResolvedInput
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(parse_query).unwrap_or_default();

        let body = if is_json_content_type(req.headers()) {
            match Bytes::from_request(req, state).await {
                Ok(bytes) => parse_json_object(&bytes),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "ignoring unreadable request body");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self(resolve(body.as_ref(), &query)))
    }
}

/// Pick the input: body key first, then the first matching query parameter.
///
/// A body key holding `null` resolves to absent without consulting the query.
#[must_use]
pub fn resolve(body: Option<&JsonObject>, query: &[(String, String)]) -> Option<Hba1cInput> {
    if let Some(value) = body.and_then(|b| b.get(FIELD_NAME)) {
        return input_from_raw(value);
    }

    query
        .iter()
        .find(|(key, _)| key == FIELD_NAME)
        .map(|(_, value)| Hba1cInput::Text(value.clone()))
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(raw).unwrap_or_default()
}

fn parse_json_object(bytes: &[u8]) -> Option<JsonObject> {
    match serde_json::from_slice::<JsonObject>(bytes) {
        Ok(map) => Some(map),
        Err(e) => {
            if !bytes.is_empty() {
                tracing::debug!(error = %e, "ignoring JSON body that is not an object");
            }
            None
        }
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
