//! Bridge between the filter selection and the external map state.
//!
//! The map context is an explicitly injected shared handle rather than
//! ambient globals; the filter UI can render before the map finishes its
//! asynchronous initialization, so every call is gated on a readiness check
//! and skipped quietly when the context is not there yet. The next selection
//! retries implicitly.

use canopy_model::{CategoryId, LatLngBounds, MarkerDescriptor, MarkerId};
use parking_lot::RwLock;
use std::sync::Arc;

/// A marker plus the map-side state the bridge is allowed to mutate. Marker
/// identity (position, tags) is owned by the mapping collaborator and never
/// touched.
#[derive(Debug, Clone)]
pub struct MarkerRuntime {
    pub descriptor: MarkerDescriptor,
    pub visible: bool,
    pub popup_open: bool,
}

impl MarkerRuntime {
    pub fn new(descriptor: MarkerDescriptor) -> Self {
        MarkerRuntime {
            descriptor,
            visible: true,
            popup_open: false,
        }
    }
}

/// Map-side state mutated only through [`MarkerFilterBridge`].
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    pub markers: Vec<MarkerRuntime>,
    /// Marker ids in the current cluster grouping, rebuilt per selection.
    pub cluster: Vec<MarkerId>,
    /// Bounds accumulator for the current selection.
    pub bounds: LatLngBounds,
    /// Bounds the viewport was last fitted to.
    pub fitted_viewport: Option<LatLngBounds>,
}

impl MapContext {
    pub fn with_markers(descriptors: Vec<MarkerDescriptor>) -> Self {
        let markers: Vec<MarkerRuntime> = descriptors.into_iter().map(MarkerRuntime::new).collect();
        let cluster = markers.iter().map(|m| m.descriptor.id).collect();
        let mut bounds = LatLngBounds::new();
        for marker in &markers {
            bounds.extend(marker.descriptor.position);
        }
        MapContext {
            markers,
            cluster,
            bounds,
            fitted_viewport: None,
        }
    }

    pub fn open_popup(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.descriptor.id == id) {
            marker.popup_open = true;
        }
    }

    pub fn visible_markers(&self) -> impl Iterator<Item = &MarkerRuntime> {
        self.markers.iter().filter(|m| m.visible)
    }

    pub fn open_popup_count(&self) -> usize {
        self.markers.iter().filter(|m| m.popup_open).count()
    }
}

/// Shared handle to the map context. Starts out not-ready; the mapping
/// collaborator installs the context once the map has loaded.
#[derive(Debug, Clone, Default)]
pub struct SharedMapContext(Arc<RwLock<Option<MapContext>>>);

impl SharedMapContext {
    /// A handle with no context installed yet.
    pub fn not_ready() -> Self {
        SharedMapContext(Arc::new(RwLock::new(None)))
    }

    pub fn ready(context: MapContext) -> Self {
        SharedMapContext(Arc::new(RwLock::new(Some(context))))
    }

    /// Install the context once the map finishes loading.
    pub fn install(&self, context: MapContext) {
        *self.0.write() = Some(context);
    }

    pub fn is_ready(&self) -> bool {
        self.0.read().is_some()
    }

    /// Read access for inspection; `None` while the map is still loading.
    pub fn with<R>(&self, f: impl FnOnce(&MapContext) -> R) -> Option<R> {
        self.0.read().as_ref().map(f)
    }

    /// Write access for collaborators that own marker interaction state
    /// (popup opening lives map-side, not in the filter engine).
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut MapContext) -> R) -> Option<R> {
        self.0.write().as_mut().map(f)
    }
}

/// Applies a filter selection to the shared map context.
#[derive(Debug, Clone)]
pub struct MarkerFilterBridge {
    context: SharedMapContext,
}

impl MarkerFilterBridge {
    pub fn new(context: SharedMapContext) -> Self {
        MarkerFilterBridge { context }
    }

    pub fn context(&self) -> &SharedMapContext {
        &self.context
    }

    /// Re-evaluate every marker against `selection`: matching markers are
    /// shown, clustered, and extend the bounds; the rest are hidden. Open
    /// popups are closed and the viewport refitted. A full O(n) pass per
    /// selection, no diffing.
    ///
    /// Degrades to a no-op while the map context is not ready.
    pub fn apply(&self, selection: &CategoryId) {
        let mut guard = self.context.0.write();
        let Some(context) = guard.as_mut() else {
            log::debug!("map context not ready; skipping filter '{selection}'");
            return;
        };

        context.bounds = LatLngBounds::new();
        context.cluster.clear();

        for marker in &mut context.markers {
            if marker.popup_open {
                marker.popup_open = false;
            }
        }

        let MapContext {
            markers,
            cluster,
            bounds,
            ..
        } = &mut *context;

        for marker in markers.iter_mut() {
            if marker.descriptor.matches_category(selection) {
                marker.visible = true;
                cluster.push(marker.descriptor.id);
                bounds.extend(marker.descriptor.position);
            } else {
                marker.visible = false;
            }
        }

        context.fitted_viewport = Some(context.bounds);
        log::debug!(
            "filter '{}': {} of {} markers visible",
            selection,
            context.cluster.len(),
            context.markers.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_model::LatLng;

    fn context() -> MapContext {
        MapContext::with_markers(vec![
            MarkerDescriptor::new(LatLng::new(46.0, 6.0), "category_3 category_4 "),
            MarkerDescriptor::new(LatLng::new(47.0, 7.0), "category_5 "),
        ])
    }

    #[test]
    fn matching_markers_are_shown_and_clustered() {
        let shared = SharedMapContext::ready(context());
        let bridge = MarkerFilterBridge::new(shared.clone());

        bridge.apply(&CategoryId::new("category_4"));

        shared
            .with(|ctx| {
                assert!(ctx.markers[0].visible);
                assert!(!ctx.markers[1].visible);
                assert_eq!(ctx.cluster, vec![ctx.markers[0].descriptor.id]);
                assert!(ctx.bounds.contains(LatLng::new(46.0, 6.0)));
                assert!(!ctx.bounds.contains(LatLng::new(47.0, 7.0)));
            })
            .unwrap();
    }

    #[test]
    fn select_all_restores_full_visibility() {
        let shared = SharedMapContext::ready(context());
        let bridge = MarkerFilterBridge::new(shared.clone());

        bridge.apply(&CategoryId::new("category_5"));
        bridge.apply(&CategoryId::all());

        shared
            .with(|ctx| {
                assert_eq!(ctx.visible_markers().count(), 2);
                assert_eq!(ctx.cluster.len(), 2);
                assert!(ctx.bounds.contains(LatLng::new(46.0, 6.0)));
                assert!(ctx.bounds.contains(LatLng::new(47.0, 7.0)));
            })
            .unwrap();
    }

    #[test]
    fn open_popups_close_on_every_pass() {
        let shared = SharedMapContext::ready(context());
        let first_id = shared.with(|ctx| ctx.markers[0].descriptor.id).unwrap();
        shared.with_mut(|ctx| ctx.open_popup(first_id)).unwrap();

        let bridge = MarkerFilterBridge::new(shared.clone());
        bridge.apply(&CategoryId::all());

        assert_eq!(shared.with(|ctx| ctx.open_popup_count()).unwrap(), 0);
    }

    #[test]
    fn not_ready_context_is_a_silent_no_op() {
        let shared = SharedMapContext::not_ready();
        let bridge = MarkerFilterBridge::new(shared.clone());
        bridge.apply(&CategoryId::all());
        assert!(!shared.is_ready());
    }

    #[test]
    fn viewport_refits_to_the_accumulated_bounds() {
        let shared = SharedMapContext::ready(context());
        let bridge = MarkerFilterBridge::new(shared.clone());

        bridge.apply(&CategoryId::new("category_5"));
        let fitted = shared.with(|ctx| ctx.fitted_viewport).unwrap().unwrap();
        assert_eq!(fitted.south_west(), Some(LatLng::new(47.0, 7.0)));
        assert_eq!(fitted.north_east(), Some(LatLng::new(47.0, 7.0)));
    }
}
