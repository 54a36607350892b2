//! Contract of the external gift API.
//!
//! The transport itself lives in the app; this module only knows how to
//! build the request URL and how to turn a status and body into a [`Gift`].

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{GiftError, Result};
use crate::gift::Gift;

/// URL of the record for `slug`, with the slug escaped as one path segment.
pub fn gift_endpoint(config: &ClientConfig, slug: &str) -> String {
    format!(
        "{}/gifts/{}",
        config.api_base.trim_end_matches('/'),
        urlencoding::encode(slug)
    )
}

/// Interprets a finished HTTP exchange.
///
/// Non-2xx statuses fail without looking at the body. A 2xx body must be a
/// JSON object.
pub fn decode_response(status: u16, body: &str) -> Result<Gift> {
    if !(200..300).contains(&status) {
        return Err(GiftError::Status(status));
    }

    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(GiftError::Decode("expected a JSON object".to_string()));
    }

    Ok(serde_json::from_value(value)?)
}
