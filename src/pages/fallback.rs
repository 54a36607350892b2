use dioxus::prelude::*;

/// Shown for every path that is not a gift link.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    use_hook(move || tracing::debug!("No page for /{}", segments.join("/")));

    rsx! {
        div { class: "screen-message", "Open a gift link" }
    }
}
