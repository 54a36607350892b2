//! Visual theme for the gift viewer.

mod styles;

pub use styles::GLOBAL_STYLES;
