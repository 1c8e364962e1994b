//! Block decoration: the integration point that turns raw card rows into a
//! behaving block for one of the variants.

use crate::carousel::{Carousel, ScrollSink};
use crate::cards::{Card, RawCard};
use crate::filter::{ControlSet, RenderTarget};
use crate::listing::ListingState;
use crate::map_bridge::{MarkerFilterBridge, SharedMapContext};
use crate::registry::CategoryRegistry;
use crate::reveal::{self, RevealAnimator};
use crate::theme::Theme;
use canopy_model::Locale;

/// Classification of a card block, decided by the authoring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockVariant {
    /// Plain card list, no attached behavior.
    Plain,
    /// Category filter cards synchronized with the map markers.
    MapCategory,
    /// Responsive carousel; `statistics` adds the palette and a different
    /// reveal anchor.
    IconsGrid { statistics: bool },
    /// Sortable listing.
    Listing,
}

/// Input to [`Block::decorate`].
#[derive(Debug, Clone)]
pub struct BlockSpec {
    pub rows: Vec<RawCard>,
    pub variant: BlockVariant,
    pub locale: Locale,
    pub theme: Theme,
    /// Viewport width at decoration time.
    pub viewport_width: f32,
}

/// A decorated block: the card view models plus whichever behavior state the
/// variant calls for. Discarded wholesale when the block is re-decorated.
#[derive(Debug)]
pub struct Block {
    pub variant: BlockVariant,
    pub cards: Vec<Card>,
    pub carousel: Option<Carousel>,
    pub filter: Option<ControlSet>,
    pub listing: Option<ListingState>,
    /// Palette tokens per card body (statistics variant only).
    pub card_colors: Vec<&'static str>,
    /// Cards duplicated into the mobile navigation list (map-category only).
    pub mobile_card_indices: Vec<usize>,
    locale: Locale,
}

impl Block {
    /// Attach behavior to already-constructed cards. Never fails: cards that
    /// do not fit a variant's expectations simply do not participate.
    pub fn decorate(spec: BlockSpec, map: SharedMapContext) -> Self {
        let cards: Vec<Card> = spec
            .rows
            .iter()
            .enumerate()
            .map(|(index, raw)| Card::from_raw(index, raw))
            .collect();

        let mut block = Block {
            variant: spec.variant,
            cards,
            carousel: None,
            filter: None,
            listing: None,
            card_colors: Vec::new(),
            mobile_card_indices: Vec::new(),
            locale: spec.locale,
        };

        match spec.variant {
            BlockVariant::Plain => {}
            BlockVariant::MapCategory => block.decorate_map_category(map),
            BlockVariant::IconsGrid { statistics } => {
                block.carousel = Some(Carousel::new(block.cards.len(), spec.viewport_width));
                if statistics {
                    block.card_colors = spec.theme.card_colors(block.cards.len());
                }
            }
            BlockVariant::Listing => {
                let bodies: Vec<String> = block
                    .cards
                    .iter()
                    .flat_map(|card| card.body_regions.iter())
                    .map(|region| region.text.clone())
                    .collect();
                block.listing = Some(ListingState::new(bodies));
            }
        }

        block
    }

    /// Build the logical filter controls and their two render targets.
    ///
    /// A card participates when it has at least two body regions: the first
    /// holds the category icon, the second the label. The select-all card is
    /// recognized by its localized label instead of an icon. The mobile
    /// target duplicates the select-all card and the category heading card.
    fn decorate_map_category(&mut self, map: SharedMapContext) {
        let registry = CategoryRegistry::new(self.locale);
        let mut controls = ControlSet::new(MarkerFilterBridge::new(map));
        let mut desktop_indices = Vec::new();
        let mut mobile_indices = Vec::new();

        for card in &self.cards {
            let Some((icon_region, text_region)) = card
                .body_regions
                .first()
                .zip(card.body_regions.get(1))
            else {
                continue;
            };

            let label = text_region.text.trim();
            let descriptor = if label == self.locale.select_all_label() {
                registry.resolve(label)
            } else {
                icon_region
                    .icon_name
                    .as_deref()
                    .and_then(|icon| registry.resolve(icon))
            };

            let Some(descriptor) = descriptor else {
                // Unknown token: the card does not participate in filtering
                continue;
            };

            let is_default = descriptor.is_default;
            let control = controls.push_control(descriptor.category_id, card.index);
            desktop_indices.push(control);
            if is_default {
                mobile_indices.push(control);
            }
        }

        controls.bind_target(RenderTarget::Desktop, desktop_indices);
        controls.bind_target(RenderTarget::Mobile, mobile_indices);

        self.mobile_card_indices = self
            .cards
            .iter()
            .filter(|card| {
                let text = card.text();
                text == self.locale.select_all_label()
                    || text == self.locale.category_heading_label()
            })
            .map(|card| card.index)
            .collect();

        self.filter = Some(controls);
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub(crate) fn statistics(&self) -> bool {
        matches!(self.variant, BlockVariant::IconsGrid { statistics: true })
    }

    /// Attach the scroll collaborator for the carousel variant.
    pub fn set_scroll_sink(&mut self, sink: Box<dyn ScrollSink>) {
        match &mut self.carousel {
            Some(carousel) => carousel.set_scroll_sink(sink),
            None => log::debug!("scroll sink attached to a block without a carousel"),
        }
    }

    /// Arm the reveal effect through the external animation collaborator.
    /// Called by the host once decoration settles.
    pub fn enable_reveal(&mut self, animator: &mut dyn RevealAnimator) {
        let statistics = self.statistics();
        reveal::enable_reveal(&mut self.cards, statistics, animator);
    }
}
