//! Dog API envelope decoding.
//!
//! Every endpoint wraps its payload as `{"status": .., "message": ..}`:
//! `"success"` carries the payload in `message`, `"error"` carries a
//! human-readable message there. Any other status is a protocol error.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use kennel_core::Breeds;

use crate::api::ApiError;

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    message: Value,
}

fn decode_envelope(text: &str) -> Result<Value, ApiError> {
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))?;

    match envelope.status.as_str() {
        "success" => Ok(envelope.message),
        "error" => {
            let message = match envelope.message {
                Value::String(message) => message,
                other => other.to_string(),
            };
            Err(ApiError::Service(message))
        }
        other => Err(ApiError::Decode(format!("unknown status \"{other}\""))),
    }
}

/// Decodes the `breeds/list/all` payload into a taxonomy.
pub fn decode_listing(text: &str) -> Result<Breeds, ApiError> {
    let message = decode_envelope(text)?;
    let listing: BTreeMap<String, Vec<String>> =
        serde_json::from_value(message).map_err(|err| ApiError::Decode(err.to_string()))?;

    Ok(Breeds::from_entries(listing))
}

/// Decodes a `breed/{..}/images` payload into a list of picture URLs.
pub fn decode_images(text: &str) -> Result<Vec<String>, ApiError> {
    let message = decode_envelope(text)?;
    serde_json::from_value(message).map_err(|err| ApiError::Decode(err.to_string()))
}
