//! Canopy block behavior engine.
//!
//! This crate attaches behavior to already-constructed card blocks: a
//! responsive carousel with paged navigation, a category filter that stays
//! consistent across a desktop list and a duplicated mobile list, a bridge
//! that keeps an external map's markers in sync with the filter selection,
//! and the smaller listing/statistics variants.
//!
//! The engine is host-agnostic: rendering, script loading, and the mapping
//! SDK are external collaborators reached through traits and an injected
//! shared context. Everything here runs on a single-threaded event model;
//! handlers run to completion before the next event is dispatched.

pub mod block;
pub mod breakpoints;
pub mod carousel;
pub mod cards;
pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod map_bridge;
pub mod messages;
pub mod registry;
pub mod reveal;
pub mod theme;
pub mod update;

pub use block::{Block, BlockSpec, BlockVariant};
pub use breakpoints::visible_card_count;
pub use carousel::{Carousel, CarouselState, ScrollSink};
pub use cards::{Card, RawCard, RawRegion, Region, RegionRole};
pub use error::BlockError;
pub use filter::{ControlSet, FilterControl, FilterState, RenderTarget};
pub use listing::{ListingState, SortDirection};
pub use map_bridge::{MapContext, MarkerFilterBridge, MarkerRuntime, SharedMapContext};
pub use messages::{CarouselMessage, FilterMessage, ListingMessage, Message};
pub use registry::CategoryRegistry;
pub use reveal::{RevealAnimator, RevealState};
pub use theme::Theme;
