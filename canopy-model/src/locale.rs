use std::fmt;

/// Display locale for label lookups. Supplied by the hosting page (first URL
/// path segment); the block engine treats it as a read-only input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    pub fn from_path_segment(segment: &str) -> Self {
        match segment {
            "fr" => Locale::French,
            _ => Locale::English,
        }
    }

    /// Label of the "select everything" filter card in this locale.
    pub fn select_all_label(&self) -> &'static str {
        match self {
            Locale::English => "View all",
            Locale::French => "Tous",
        }
    }

    /// Heading label of the category section, used to pick which cards are
    /// duplicated into the mobile navigation list.
    pub fn category_heading_label(&self) -> &'static str {
        match self {
            Locale::English => "CATEGORIES",
            Locale::French => "AXES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::French => write!(f, "fr"),
        }
    }
}
