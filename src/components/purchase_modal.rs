//! Purchase Modal Component
//!
//! Confirmation shown after "Buy". The transaction is simulated; closing the
//! modal is the only thing it does.

use dioxus::prelude::*;

/// Purchase confirmation modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if show_modal() {
///         PurchaseModal { on_close: move |_| show_modal.set(false) }
///     }
/// }
/// ```
#[component]
pub fn PurchaseModal(
    /// Called on backdrop click and on "Close"
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-root",
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }

            div { class: "purchase-modal animate-fade",
                h3 { class: "modal-title", "Thank you" }
                p { class: "modal-description", "Transaction initiated (simulated)" }
                button {
                    class: "btn-close",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
