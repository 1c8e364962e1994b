//! Command messages produced by the host's thin event adapter.
//!
//! UI events (clicks, resizes) are translated into these explicit commands
//! and dispatched through [`crate::block::Block::update`], keeping the state
//! machines host-agnostic.

use canopy_model::CategoryId;

/// Carousel navigation commands. The adapter samples the viewport width at
/// event time, the way a click handler would read it from the window.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    Previous { viewport_width: f32 },
    Next { viewport_width: f32 },
}

/// Filter commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    Select(CategoryId),
}

/// Listing sort commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMessage {
    SortAscending,
    SortDescending,
}

/// Top-level block command.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Carousel(CarouselMessage),
    Filter(FilterMessage),
    Listing(ListingMessage),
    ViewportResized { width: f32 },
}
