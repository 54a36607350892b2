//! UI components for the gift viewer.

mod lazy_image;
mod purchase_modal;

pub use lazy_image::LazyImage;
pub use purchase_modal::PurchaseModal;
