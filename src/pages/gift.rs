//! Gift page - detail view for one gift, addressed by slug.
//!
//! Fetches on mount and again whenever the slug changes. All page state lives
//! in a [`GiftPageModel`], which rejects responses for a superseded slug.

use dioxus::prelude::*;
use giftview_core::{Gift, GiftPageModel, PageState};

use crate::components::{LazyImage, PurchaseModal};
use crate::context::use_client_config;
use crate::transport::fetch_gift;

/// Gift page component.
#[component]
pub fn GiftPage(slug: ReadOnlySignal<String>) -> Element {
    let config = use_client_config();
    let mut model = use_signal(GiftPageModel::new);

    // Refetch whenever the route hands us a new slug
    use_effect(move || {
        let ticket = model.write().begin(slug());
        let config = config.clone();
        spawn(async move {
            let outcome = fetch_gift(&config, ticket.slug()).await;
            model.write().settle(&ticket, outcome);
        });
    });

    let state = model.read().state().clone();
    let modal_open = model.read().modal_open();

    match state {
        PageState::Loading => rsx! {
            div { class: "screen-message", "Loading..." }
        },
        PageState::NotFound => rsx! {
            div { class: "screen-message", "Gift not found" }
        },
        PageState::Ready(gift) => rsx! {
            GiftDetails {
                gift,
                on_buy: move |_| model.write().open_modal(),
            }
            if modal_open {
                PurchaseModal { on_close: move |_| model.write().close_modal() }
            }
        },
    }
}

/// Header, image and attribute block for a loaded gift.
#[component]
fn GiftDetails(gift: Gift, on_buy: EventHandler<()>) -> Element {
    rsx! {
        div { class: "gift-page",
            header { class: "gift-header",
                h1 { class: "gift-title", "{gift.title}" }
                // Wallet integration is out of scope; the button is decorative
                button { class: "btn-outline", "Connect Wallet" }
            }

            main { class: "gift-main",
                div { class: "gift-card",
                    div { class: "gift-card__image",
                        LazyImage {
                            key: "{gift.image_url}",
                            src: gift.image_url.clone(),
                            alt: gift.title.clone(),
                        }
                    }
                    div { class: "gift-card__info",
                        h2 { class: "gift-model", "{gift.model_name}" }
                        div { class: "gift-attributes",
                            for attribute in gift.attributes() {
                                div { key: "{attribute.label}", class: "gift-attribute",
                                    "{attribute.line()}"
                                }
                            }
                        }
                        button {
                            class: "btn-buy",
                            onclick: move |_| on_buy.call(()),
                            "{gift.buy_label()}"
                        }
                    }
                }
            }
        }
    }
}
