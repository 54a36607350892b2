//! Client configuration context.
//!
//! `App` provides a [`ClientConfig`]; pages read it with [`use_client_config`].

use dioxus::prelude::*;
use giftview_core::ClientConfig;

/// Hook to access the API configuration from context.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
