//! Shared data models for the Canopy block engine.
//!
//! This crate holds the types that cross the boundary between the block
//! behavior engine and its external collaborators: category identifiers and
//! descriptors, geographic primitives used by the marker bridge, marker
//! descriptors, and the display locale.

pub mod category;
pub mod geo;
pub mod locale;
pub mod marker;

pub use category::{Category, CategoryDescriptor, CategoryId};
pub use geo::{LatLng, LatLngBounds};
pub use locale::Locale;
pub use marker::{MarkerDescriptor, MarkerId};
