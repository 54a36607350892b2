//! Browser transport for the gift API.

use giftview_core::{decode_response, gift_endpoint, ClientConfig, Gift, GiftError, Result};
use gloo::net::http::Request;

/// Fetches and decodes the gift for `slug`.
///
/// A request that never completes is [`GiftError::Network`]. Once a response
/// exists, failures are [`GiftError::Status`] or [`GiftError::Decode`].
pub async fn fetch_gift(config: &ClientConfig, slug: &str) -> Result<Gift> {
    let url = gift_endpoint(config, slug);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(GiftError::unreachable)?;

    let status = response.status();
    if !response.ok() {
        return Err(GiftError::Status(status));
    }

    let body = response
        .text()
        .await
        .map_err(GiftError::unreadable_body)?;

    decode_response(status, &body)
}
