//! Theme palettes for the statistics carousel variant.

use serde::{Deserialize, Serialize};

/// Hosting site theme; decides which carousel card palette applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Arbres,
    Biencommun,
}

impl Theme {
    /// CSS custom-property tokens cycled across statistics card bodies.
    pub fn carousel_palette(&self) -> [&'static str; 4] {
        match self {
            Theme::Arbres => [
                "var(--arbres-carousel-card-1)",
                "var(--arbres-carousel-card-2)",
                "var(--arbres-carousel-card-3)",
                "var(--arbres-carousel-card-4)",
            ],
            Theme::Biencommun => [
                "var(--biencommun-carousel-card-1)",
                "var(--biencommun-carousel-card-2)",
                "var(--biencommun-carousel-card-3)",
                "var(--biencommun-carousel-card-4)",
            ],
        }
    }

    /// Background color tokens for `count` card bodies, cycling through the
    /// palette.
    pub fn card_colors(&self, count: usize) -> Vec<&'static str> {
        let palette = self.carousel_palette();
        (0..count).map(|i| palette[i % palette.len()]).collect()
    }
}
