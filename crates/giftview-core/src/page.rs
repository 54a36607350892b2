//! Gift page state machine.
//!
//! Every fetch is issued through [`GiftPageModel::begin`], which hands out a
//! [`FetchTicket`]. Only the ticket from the latest `begin` can settle the
//! page; completions carrying an older ticket are dropped, so a slow response
//! for a previous slug never overwrites the current one.

use crate::error::Result;
use crate::gift::Gift;

/// What the page shows. Exactly one variant is rendered at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch settled without a payload
    NotFound,
    /// Fetch settled with a payload
    Ready(Gift),
}

/// Tag identifying one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    slug: String,
}

impl FetchTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Page-level state for one mounted gift page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GiftPageModel {
    slug: Option<String>,
    generation: u64,
    state: PageState,
    modal_open: bool,
}

impl GiftPageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `slug`, resetting all page state.
    ///
    /// Any ticket handed out before this call becomes stale.
    pub fn begin(&mut self, slug: impl Into<String>) -> FetchTicket {
        let slug = slug.into();
        self.generation += 1;
        self.state = PageState::Loading;
        self.modal_open = false;
        self.slug = Some(slug.clone());

        tracing::debug!(slug = %slug, generation = self.generation, "Fetching gift");

        FetchTicket {
            generation: self.generation,
            slug,
        }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` without touching state when the ticket is stale or the
    /// fetch already settled.
    pub fn settle(&mut self, ticket: &FetchTicket, outcome: Result<Gift>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                slug = %ticket.slug,
                generation = ticket.generation,
                current = self.generation,
                "Dropping stale gift response"
            );
            return false;
        }
        if !self.is_loading() {
            return false;
        }

        self.state = match outcome {
            Ok(gift) => {
                tracing::info!(slug = %ticket.slug, "Loaded gift '{}'", gift.title);
                PageState::Ready(gift)
            }
            Err(err) => {
                tracing::warn!(slug = %ticket.slug, "Failed to load gift: {}", err);
                PageState::NotFound
            }
        };
        true
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PageState::Loading)
    }

    pub fn gift(&self) -> Option<&Gift> {
        match &self.state {
            PageState::Ready(gift) => Some(gift),
            _ => None,
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// "Buy" click. The button only exists once a gift is shown.
    pub fn open_modal(&mut self) {
        if self.gift().is_some() {
            self.modal_open = true;
        }
    }

    /// Backdrop or "Close" click.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GiftError;

    fn gift(title: &str) -> Gift {
        Gift {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_loading() {
        let model = GiftPageModel::new();
        assert!(model.is_loading());
        assert!(model.gift().is_none());
        assert!(!model.modal_open());
    }

    #[test]
    fn success_settles_ready() {
        let mut model = GiftPageModel::new();
        let ticket = model.begin("abc123");
        assert_eq!(ticket.slug(), "abc123");

        assert!(model.settle(&ticket, Ok(gift("Desk Lamp"))));
        assert_eq!(model.state(), &PageState::Ready(gift("Desk Lamp")));
    }

    #[test]
    fn every_failure_kind_settles_not_found() {
        for err in [
            GiftError::Network("offline".into()),
            GiftError::Status(404),
            GiftError::Decode("bad json".into()),
        ] {
            let mut model = GiftPageModel::new();
            let ticket = model.begin("x");
            assert!(model.settle(&ticket, Err(err)));
            assert_eq!(model.state(), &PageState::NotFound);
            assert!(model.gift().is_none());
        }
    }

    #[test]
    fn ticket_settles_once() {
        let mut model = GiftPageModel::new();
        let ticket = model.begin("x");
        assert!(model.settle(&ticket, Err(GiftError::Status(404))));
        assert!(!model.settle(&ticket, Ok(gift("late"))));
        assert_eq!(model.state(), &PageState::NotFound);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut model = GiftPageModel::new();
        let first = model.begin("a");
        let second = model.begin("b");
        assert_eq!(second.generation(), first.generation() + 1);

        assert!(!model.settle(&first, Ok(gift("A"))));
        assert!(model.is_loading());

        assert!(model.settle(&second, Ok(gift("B"))));
        assert!(!model.settle(&first, Err(GiftError::Status(500))));
        assert_eq!(model.gift().map(|g| g.title.as_str()), Some("B"));
        assert_eq!(model.slug(), Some("b"));
    }

    #[test]
    fn modal_toggles_only_on_explicit_actions() {
        let mut model = GiftPageModel::new();
        let ticket = model.begin("x");

        model.open_modal();
        assert!(!model.modal_open(), "no buy button while loading");

        model.settle(&ticket, Ok(gift("X")));
        model.open_modal();
        assert!(model.modal_open());
        model.close_modal();
        assert!(!model.modal_open());
    }

    #[test]
    fn new_slug_resets_modal() {
        let mut model = GiftPageModel::new();
        let ticket = model.begin("a");
        model.settle(&ticket, Ok(gift("A")));
        model.open_modal();

        model.begin("b");
        assert!(!model.modal_open());
        assert!(model.is_loading());
    }
}
