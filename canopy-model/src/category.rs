use crate::locale::Locale;
use std::fmt;

/// Identifier for a filter category as carried on marker tags and filter
/// controls. The wire values are fixed by the marker data (`all`,
/// `category_3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryId(String);

impl CategoryId {
    /// The id of the default "select everything" category.
    pub const ALL: &'static str = "all";

    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn all() -> Self {
        CategoryId(Self::ALL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id selects every marker.
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptor resolved from a category token at decoration time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryDescriptor {
    pub category_id: CategoryId,
    /// True for the "select everything" entry that starts out active.
    pub is_default: bool,
}

/// The fixed set of filter categories known to the block engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Conservation,
    Awareness,
    Preservation,
    OverseasDevelopment,
    FoodAid,
    SportCulture,
    Educators,
    Craftsmanship,
}

impl Category {
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[
            All,
            Conservation,
            Awareness,
            Preservation,
            OverseasDevelopment,
            FoodAid,
            SportCulture,
            Educators,
            Craftsmanship,
        ]
    }

    /// The wire id used on marker tags and filter controls.
    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Conservation => "category_3",
            Category::Awareness => "category_4",
            Category::Preservation => "category_5",
            Category::Craftsmanship => "category_9",
            Category::OverseasDevelopment => "category_10",
            Category::Educators => "category_11",
            Category::FoodAid => "category_12",
            Category::SportCulture => "category_13",
        }
    }

    /// The icon name carried on cards for this category, if it has one.
    /// The select-all entry is identified by its localized label instead.
    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Conservation => Some("conservation"),
            Category::Awareness => Some("awareness"),
            Category::Preservation => Some("preservation"),
            Category::OverseasDevelopment => Some("OD"),
            Category::FoodAid => Some("food_aid"),
            Category::SportCulture => Some("sport_culture"),
            Category::Educators => Some("educators"),
            Category::Craftsmanship => Some("craftsmanship"),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Category::All)
    }

    pub fn category_id(&self) -> CategoryId {
        CategoryId::new(self.id())
    }

    pub fn descriptor(&self) -> CategoryDescriptor {
        CategoryDescriptor {
            category_id: self.category_id(),
            is_default: self.is_default(),
        }
    }

    /// Resolve a raw card token (icon name or localized select-all label).
    pub fn from_token(token: &str, locale: Locale) -> Option<Category> {
        if token == locale.select_all_label() {
            return Some(Category::All);
        }
        Category::all()
            .iter()
            .copied()
            .find(|category| category.icon_name() == Some(token))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
