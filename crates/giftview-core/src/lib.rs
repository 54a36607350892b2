//! Gift viewer core library
//!
//! Everything the gift page needs that does not touch the DOM: the payload
//! model and its display formatting, the API contract, and the state machines
//! behind the page and the lazy image.
//!
//! ## Quick Start
//!
//! ```
//! use giftview_core::{decode_response, GiftPageModel, PageState};
//!
//! let mut page = GiftPageModel::new();
//! let ticket = page.begin("abc123");
//!
//! let outcome = decode_response(200, r#"{"title":"Desk Lamp","price":"1.5 TON"}"#);
//! page.settle(&ticket, outcome);
//!
//! match page.state() {
//!     PageState::Ready(gift) => assert_eq!(gift.buy_label(), "Buy \u{2014} 1.5 TON"),
//!     other => panic!("unexpected state: {other:?}"),
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gift;
pub mod image;
pub mod page;

// Re-exports
pub use api::{decode_response, gift_endpoint};
pub use config::ClientConfig;
pub use error::{GiftError, Result};
pub use gift::{format_rarity, Attribute, Gift};
pub use image::ImageState;
pub use page::{FetchTicket, GiftPageModel, PageState};
