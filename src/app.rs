use dioxus::prelude::*;
use giftview_core::ClientConfig;

use crate::pages::{Fallback, GiftPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/gift/:slug` - Detail page for one gift
/// - anything else - "Open a gift link" placeholder
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/gift/:slug")]
    GiftPage { slug: String },
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, client configuration, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(ClientConfig::default);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
