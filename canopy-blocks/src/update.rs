//! Message dispatch: translates adapter commands into state-machine calls.

use crate::block::Block;
use crate::messages::{CarouselMessage, FilterMessage, ListingMessage, Message};
use crate::reveal;

impl Block {
    /// Handle one command. Runs to completion; the event model guarantees no
    /// interleaving, so each call is atomic with respect to the next.
    /// Commands that do not apply to this block's variant are ignored.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Carousel(msg) => self.on_carousel(msg),
            Message::Filter(FilterMessage::Select(category_id)) => {
                match &mut self.filter {
                    Some(filter) => filter.select(category_id),
                    None => log::debug!("filter command on a block without filter controls"),
                }
            }
            Message::Listing(msg) => {
                if let Some(listing) = &mut self.listing {
                    match msg {
                        ListingMessage::SortAscending => listing.sort_ascending(),
                        ListingMessage::SortDescending => listing.sort_descending(),
                    }
                }
            }
            Message::ViewportResized { width } => self.on_resize(width),
        }
    }

    fn on_carousel(&mut self, message: CarouselMessage) {
        let statistics = self.statistics();
        let Some(carousel) = &mut self.carousel else {
            log::debug!("carousel command on a block without a carousel");
            return;
        };

        // Reveal is disarmed before any repositioning, even for a no-op
        // navigation at the edge
        reveal::disable_reveal(&mut self.cards, statistics);

        match message {
            CarouselMessage::Next { viewport_width } => carousel.advance(viewport_width),
            CarouselMessage::Previous { viewport_width } => carousel.retreat(viewport_width),
        }
    }

    fn on_resize(&mut self, width: f32) {
        let statistics = self.statistics();
        if let Some(carousel) = &mut self.carousel {
            reveal::disable_reveal(&mut self.cards, statistics);
            carousel.on_resize(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockSpec, BlockVariant};
    use crate::cards::{RawCard, RawRegion};
    use crate::map_bridge::SharedMapContext;
    use crate::reveal::{RevealAnimator, RevealState};
    use crate::theme::Theme;
    use canopy_model::Locale;

    struct NoopAnimator;

    impl RevealAnimator for NoopAnimator {
        fn apply_fade_up(&mut self, _card_index: usize) {}
    }

    fn carousel_block(cards: usize, viewport_width: f32) -> Block {
        let rows: Vec<RawCard> = (0..cards)
            .map(|_| RawCard::new(vec![RawRegion::icon("awareness"), RawRegion::text("t")]))
            .collect();
        Block::decorate(
            BlockSpec {
                rows,
                variant: BlockVariant::IconsGrid { statistics: false },
                locale: Locale::English,
                theme: Theme::Arbres,
                viewport_width,
            },
            SharedMapContext::not_ready(),
        )
    }

    #[test]
    fn navigation_disarms_reveal_before_moving() {
        let mut block = carousel_block(4, 500.0);
        block.enable_reveal(&mut NoopAnimator);
        assert!(block.cards.iter().all(|c| c.reveal == RevealState::Enabled));

        block.update(Message::Carousel(CarouselMessage::Next {
            viewport_width: 500.0,
        }));
        assert!(block.cards.iter().all(|c| c.reveal == RevealState::Disabled));
        assert_eq!(block.carousel.as_ref().unwrap().state.current_index, 1);
    }

    #[test]
    fn reveal_is_disarmed_even_when_navigation_is_a_no_op() {
        let mut block = carousel_block(4, 500.0);
        block.enable_reveal(&mut NoopAnimator);

        // Retreat at index 0: index unchanged, reveal still disarmed
        block.update(Message::Carousel(CarouselMessage::Previous {
            viewport_width: 500.0,
        }));
        assert_eq!(block.carousel.as_ref().unwrap().state.current_index, 0);
        assert!(block.cards.iter().all(|c| c.reveal == RevealState::Disabled));
    }

    #[test]
    fn carousel_commands_on_other_variants_are_ignored() {
        let mut block = Block::decorate(
            BlockSpec {
                rows: vec![RawCard::new(vec![RawRegion::text("x")])],
                variant: BlockVariant::Plain,
                locale: Locale::English,
                theme: Theme::Arbres,
                viewport_width: 500.0,
            },
            SharedMapContext::not_ready(),
        );
        block.update(Message::Carousel(CarouselMessage::Next {
            viewport_width: 500.0,
        }));
        assert!(block.carousel.is_none());
    }

    #[test]
    fn resize_reaches_the_carousel() {
        let mut block = carousel_block(4, 1300.0);
        assert_eq!(block.carousel.as_ref().unwrap().state.visible_count, 4);

        block.update(Message::ViewportResized { width: 400.0 });
        assert_eq!(block.carousel.as_ref().unwrap().state.visible_count, 1);
    }
}
