//! Lazy Image
//!
//! Remote image with loading and error placeholders. The `img` element is
//! mounted immediately (hidden, browser-lazy) and its load/error events drive
//! an [`ImageState`].

use dioxus::prelude::*;
use giftview_core::ImageState;

/// Display a remote image once the browser has fetched it
///
/// Give each source its own `key` so a new `src` starts from `Pending`.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     LazyImage {
///         key: "{gift.image_url}",
///         src: gift.image_url.clone(),
///         alt: gift.title.clone(),
///     }
/// }
/// ```
#[component]
pub fn LazyImage(
    /// Image URL
    src: String,
    /// Alt text for accessibility
    alt: String,
) -> Element {
    let mut state = use_signal(ImageState::default);
    let failed_src = src.clone();

    let current = state();
    let img_class = current.img_class();
    let placeholder_class = current.placeholder_class();

    rsx! {
        div { class: "lazy-image",
            if let Some(text) = current.placeholder() {
                div { class: "{placeholder_class}",
                    span { class: "lazy-image__text", "{text}" }
                }
            }
            img {
                class: "{img_class}",
                src: "{src}",
                alt: "{alt}",
                "loading": "lazy",
                onload: move |_| {
                    state.write().mark_loaded();
                },
                onerror: move |_| {
                    if state.write().mark_failed() {
                        tracing::warn!("Image failed to load: {}", failed_src);
                    }
                },
            }
        }
    }
}
