//! Carousel pagination state machine.
//!
//! Navigation moves one card at a time; button enablement follows the
//! invariants `previous enabled iff current_index > 0` and `next enabled iff
//! current_index < total_items - visible_count`. Scrolling is a best-effort
//! visual effect routed through an optional [`ScrollSink`]; when no sink is
//! attached the indices and flags still update.

use crate::breakpoints::visible_card_count;
use std::fmt;

/// Fire-and-forget scroll collaborator. Implementations animate the focused
/// card into view; a stale in-flight animation may simply be superseded by
/// the next target.
pub trait ScrollSink {
    fn scroll_to_card(&mut self, index: usize);
}

/// State for a card carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the focused card, always within `[0, total_items - 1]`.
    pub current_index: usize,
    /// Total number of cards.
    pub total_items: usize,
    /// Number of cards visible at the current viewport width.
    pub visible_count: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl CarouselState {
    pub fn new(total_items: usize, viewport_width: f32) -> Self {
        let visible_count = visible_card_count(viewport_width, total_items);
        let mut state = CarouselState {
            current_index: 0,
            total_items,
            visible_count,
            prev_enabled: false,
            next_enabled: false,
        };
        state.recompute_flags();
        state
    }

    /// Derive both button flags from the invariants. Used at init and on
    /// resize; navigation updates flags incrementally like the buttons do.
    pub fn recompute_flags(&mut self) {
        self.prev_enabled = self.current_index > 0;
        self.next_enabled =
            self.current_index < self.total_items.saturating_sub(self.visible_count);
    }

    pub fn can_advance(&self) -> bool {
        self.current_index + 1 < self.total_items
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }
}

/// Carousel controller: pagination state plus the optional scroll sink.
pub struct Carousel {
    pub state: CarouselState,
    scroller: Option<Box<dyn ScrollSink>>,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("has_scroller", &self.scroller.is_some())
            .finish()
    }
}

impl Carousel {
    pub fn new(total_items: usize, viewport_width: f32) -> Self {
        Carousel {
            state: CarouselState::new(total_items, viewport_width),
            scroller: None,
        }
    }

    /// Attach the scroll collaborator. Without one, navigation degrades to
    /// updating indices and flags only.
    pub fn set_scroll_sink(&mut self, sink: Box<dyn ScrollSink>) {
        self.scroller = Some(sink);
    }

    /// Move focus one card forward. Out-of-range requests are silent
    /// idempotent no-ops.
    pub fn advance(&mut self, viewport_width: f32) {
        if !self.state.can_advance() {
            return;
        }
        self.state.prev_enabled = true;
        self.state.current_index += 1;
        self.scroll_to_current();
        self.state.visible_count = visible_card_count(viewport_width, self.state.total_items);
        self.state.next_enabled = self.state.current_index
            < self.state.total_items.saturating_sub(self.state.visible_count);
    }

    /// Move focus one card back. Out-of-range requests are silent idempotent
    /// no-ops.
    pub fn retreat(&mut self, viewport_width: f32) {
        if !self.state.can_retreat() {
            return;
        }
        self.state.next_enabled = true;
        self.state.current_index -= 1;
        self.scroll_to_current();
        self.state.visible_count = visible_card_count(viewport_width, self.state.total_items);
        self.state.prev_enabled = self.state.current_index > 0;
    }

    /// Reconcile with a new viewport: re-scroll to the focused card and
    /// derive both flags from scratch. Button state before the resize is not
    /// trusted; the focused index is kept as-is (it stays in range by
    /// construction).
    pub fn on_resize(&mut self, viewport_width: f32) {
        self.scroll_to_current();
        self.state.visible_count = visible_card_count(viewport_width, self.state.total_items);
        self.state.recompute_flags();
    }

    fn scroll_to_current(&mut self) {
        match &mut self.scroller {
            Some(sink) => sink.scroll_to_card(self.state.current_index),
            None => log::debug!(
                "no scroll sink attached; skipping scroll to card {}",
                self.state.current_index
            ),
        }
    }
}
