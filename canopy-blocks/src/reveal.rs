//! Reveal ("fade up") effect gating.
//!
//! The engine only owns the on/off state: the effect is disabled before any
//! carousel repositioning so cards do not animate mid-scroll. Applying the
//! actual transition is the animation collaborator's job.

use crate::cards::Card;

/// Whether the deferred fade-up transition is armed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    Enabled,
    #[default]
    Disabled,
}

/// External animation collaborator that applies the fade-up transition to a
/// card's anchor region.
pub trait RevealAnimator {
    fn apply_fade_up(&mut self, card_index: usize);
}

/// Disarm the reveal effect on every card ahead of repositioning. Cards
/// without a structural anchor are skipped, not an error.
pub fn disable_reveal(cards: &mut [Card], statistics: bool) {
    for card in cards.iter_mut() {
        if card.reveal_anchor(statistics).is_none() {
            continue;
        }
        card.reveal = RevealState::Disabled;
    }
}

/// Arm the reveal effect and hand each anchored card to the animator.
pub fn enable_reveal(cards: &mut [Card], statistics: bool, animator: &mut dyn RevealAnimator) {
    for card in cards.iter_mut() {
        if card.reveal_anchor(statistics).is_none() {
            continue;
        }
        card.reveal = RevealState::Enabled;
        animator.apply_fade_up(card.index);
    }
}
