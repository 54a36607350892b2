//! Page components for the gift viewer.

mod fallback;
mod gift;

pub use fallback::Fallback;
pub use gift::GiftPage;
