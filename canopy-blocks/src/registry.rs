//! Category token registry.
//!
//! Built once at decoration time for the active display locale and read-only
//! afterward. Lookup is a direct mapping; an unknown token means the card
//! simply does not participate in filtering.

use canopy_model::{Category, CategoryDescriptor, Locale};

/// Maps raw card tokens (icon names or the localized select-all label) to
/// category descriptors.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    locale: Locale,
}

impl CategoryRegistry {
    pub fn new(locale: Locale) -> Self {
        CategoryRegistry { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a token. `None` is not an error: the caller excludes the card
    /// from filter participation.
    pub fn resolve(&self, token: &str) -> Option<CategoryDescriptor> {
        Category::from_token(token.trim(), self.locale).map(|category| category.descriptor())
    }
}
