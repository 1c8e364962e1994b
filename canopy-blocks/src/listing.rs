//! Listing variant: ascending/descending card-body reordering.
//!
//! The authored body order is snapshotted once at decoration; sorting replays
//! the snapshot (or its reverse) into the bodies and keeps exactly one of the
//! two sort buttons disabled after the first click.

/// Current body order of a listing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// State for the listing sort toggle.
#[derive(Debug, Clone)]
pub struct ListingState {
    ascending: Vec<String>,
    pub bodies: Vec<String>,
    pub direction: SortDirection,
    pub asc_button_disabled: bool,
    pub desc_button_disabled: bool,
}

impl ListingState {
    /// Snapshot the authored (ascending) body order. Neither button starts
    /// disabled; the authored order is already ascending.
    pub fn new(bodies: Vec<String>) -> Self {
        ListingState {
            ascending: bodies.clone(),
            bodies,
            direction: SortDirection::Ascending,
            asc_button_disabled: false,
            desc_button_disabled: false,
        }
    }

    pub fn sort_descending(&mut self) {
        self.bodies = self.ascending.iter().rev().cloned().collect();
        self.direction = SortDirection::Descending;
        self.desc_button_disabled = true;
        self.asc_button_disabled = false;
    }

    pub fn sort_ascending(&mut self) {
        self.bodies = self.ascending.clone();
        self.direction = SortDirection::Ascending;
        self.asc_button_disabled = true;
        self.desc_button_disabled = false;
    }
}
