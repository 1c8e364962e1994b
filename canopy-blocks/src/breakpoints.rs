//! Viewport breakpoint resolution for the card carousel.

/// Number of cards visible at once for a given viewport width.
///
/// Inclusive lower bounds: `<600 -> 1`, `[600, 900) -> 2`, `[900, 1200) -> 3`,
/// `>=1200` shows every card (the carousel is effectively disabled). The
/// result never exceeds `total_cards`. Pure and callable at any time,
/// including mid-animation.
pub fn visible_card_count(viewport_width: f32, total_cards: usize) -> usize {
    let by_breakpoint = if viewport_width < 600.0 {
        1
    } else if viewport_width < 900.0 {
        2
    } else if viewport_width < 1200.0 {
        3
    } else {
        total_cards
    };

    by_breakpoint.min(total_cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        assert_eq!(visible_card_count(599.0, 10), 1);
        assert_eq!(visible_card_count(600.0, 10), 2);
        assert_eq!(visible_card_count(899.0, 10), 2);
        assert_eq!(visible_card_count(900.0, 10), 3);
        assert_eq!(visible_card_count(1199.0, 10), 3);
        assert_eq!(visible_card_count(1200.0, 10), 10);
    }

    #[test]
    fn never_exceeds_total_cards() {
        assert_eq!(visible_card_count(1000.0, 2), 2);
        assert_eq!(visible_card_count(1300.0, 4), 4);
        assert_eq!(visible_card_count(700.0, 1), 1);
        assert_eq!(visible_card_count(500.0, 0), 0);
    }

    #[test]
    fn monotonic_across_boundary_widths() {
        let widths = [0.0, 599.0, 600.0, 899.0, 900.0, 1199.0, 1200.0, 2560.0];
        for n in [0usize, 1, 3, 7, 20] {
            let counts: Vec<_> = widths
                .iter()
                .map(|w| visible_card_count(*w, n))
                .collect();
            let mut sorted = counts.clone();
            sorted.sort_unstable();
            assert_eq!(counts, sorted, "non-monotonic for n={n}");
            assert!(counts.iter().all(|c| *c <= n));
        }
    }
}
