//! Lazy image state machine.

/// Display state of one image instance.
///
/// `Loaded` and `Failed` are terminal: the browser fires at most one
/// completion per source, and a new source gets a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageState {
    /// Handles the `load` event. Returns whether the state changed.
    pub fn mark_loaded(&mut self) -> bool {
        self.transition(ImageState::Loaded)
    }

    /// Handles the `error` event. Returns whether the state changed.
    pub fn mark_failed(&mut self) -> bool {
        self.transition(ImageState::Failed)
    }

    fn transition(&mut self, next: ImageState) -> bool {
        if *self != ImageState::Pending {
            return false;
        }
        *self = next;
        true
    }

    /// Whether the `img` element itself is shown
    pub fn image_visible(self) -> bool {
        self == ImageState::Loaded
    }

    /// CSS class of the `img` element; hidden until loaded.
    pub fn img_class(self) -> &'static str {
        if self.image_visible() {
            "lazy-image__img"
        } else {
            "lazy-image__img hidden"
        }
    }

    /// CSS class of the placeholder; only the loading placeholder pulses.
    pub fn placeholder_class(self) -> &'static str {
        match self {
            ImageState::Pending => "lazy-image__placeholder animate-pulse",
            _ => "lazy-image__placeholder",
        }
    }

    /// Placeholder text shown over the hidden image, if any.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ImageState::Pending => Some("Loading image..."),
            ImageState::Failed => Some("Image not available"),
            ImageState::Loaded => None,
        }
    }
}
