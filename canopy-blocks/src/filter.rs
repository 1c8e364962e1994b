//! Category filter state and multi-view synchronization.
//!
//! There is one logical control per filtering card; render targets (desktop
//! list, mobile duplicate) are projections over the same controls. The active
//! flag lives on the logical control, so two targets can never disagree, and
//! selecting from either target updates both. Each selection also drives the
//! marker bridge.

use crate::map_bridge::MarkerFilterBridge;
use canopy_model::CategoryId;

/// Where a control set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Desktop,
    Mobile,
}

/// A logical filter control bound to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub category_id: CategoryId,
    /// Index of the card this control decorates.
    pub card_index: usize,
    /// The single active visual marker; held by at most one control.
    pub active: bool,
}

/// Current filter selection, the single source of truth all views agree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category_id: CategoryId,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_category_id: CategoryId::all(),
        }
    }
}

/// Binding of a render target to a subset of the logical controls.
#[derive(Debug, Clone)]
struct TargetBinding {
    target: RenderTarget,
    control_indices: Vec<usize>,
}

/// The logical control set with its render targets, selection state, and
/// marker bridge. Mutated only by discrete user selections.
#[derive(Debug)]
pub struct ControlSet {
    state: FilterState,
    controls: Vec<FilterControl>,
    targets: Vec<TargetBinding>,
    bridge: MarkerFilterBridge,
}

impl ControlSet {
    pub fn new(bridge: MarkerFilterBridge) -> Self {
        ControlSet {
            state: FilterState::default(),
            controls: Vec::new(),
            targets: Vec::new(),
            bridge,
        }
    }

    /// Register a logical control. The default ("all") control starts out
    /// active; everything else starts inactive. Returns the control's index
    /// for target binding.
    pub fn push_control(&mut self, category_id: CategoryId, card_index: usize) -> usize {
        let active = category_id == self.state.selected_category_id;
        self.controls.push(FilterControl {
            category_id,
            card_index,
            active,
        });
        self.controls.len() - 1
    }

    /// Bind a render target to a subset of the controls.
    pub fn bind_target(&mut self, target: RenderTarget, control_indices: Vec<usize>) {
        self.targets.push(TargetBinding {
            target,
            control_indices,
        });
    }

    pub fn selected(&self) -> &CategoryId {
        &self.state.selected_category_id
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Controls projected into one render target.
    pub fn target_controls(&self, target: RenderTarget) -> Vec<&FilterControl> {
        self.targets
            .iter()
            .filter(|binding| binding.target == target)
            .flat_map(|binding| binding.control_indices.iter())
            .filter_map(|index| self.controls.get(*index))
            .collect()
    }

    /// Number of logical controls carrying the active flag. The invariant is
    /// that this is exactly 1 after a selection matching a control, 0 when
    /// nothing matches.
    pub fn active_count(&self) -> usize {
        self.controls.iter().filter(|c| c.active).count()
    }

    pub fn active_control(&self) -> Option<&FilterControl> {
        self.controls.iter().find(|c| c.active)
    }

    /// Select a category: update the selection, move the active flag, drive
    /// the marker bridge. Runs to completion before the next event, so the
    /// caller never observes partial visual state.
    pub fn select(&mut self, category_id: CategoryId) {
        self.state.selected_category_id = category_id.clone();

        for control in &mut self.controls {
            control.active = control.category_id == category_id;
        }

        self.bridge.apply(&category_id);
    }
}
