use crate::category::CategoryId;
use crate::geo::LatLng;
use uuid::Uuid;

/// Strongly typed ID for map markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerId(pub Uuid);

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerId {
    pub fn new() -> Self {
        MarkerId(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A map marker as handed over by the mapping collaborator.
///
/// `category_tags` is a space-separated token string (for example
/// `"category_3 category_4 "`), kept in its original shape: the filter match
/// is substring containment, exactly like the upstream marker data expects.
/// The block engine never mutates marker identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerDescriptor {
    pub id: MarkerId,
    pub position: LatLng,
    pub category_tags: String,
}

impl MarkerDescriptor {
    pub fn new(position: LatLng, category_tags: impl Into<String>) -> Self {
        MarkerDescriptor {
            id: MarkerId::new(),
            position,
            category_tags: category_tags.into(),
        }
    }

    /// Whether this marker matches the given selection. The all-category
    /// matches every marker; anything else is a substring test against the
    /// tag string.
    pub fn matches_category(&self, selection: &CategoryId) -> bool {
        selection.is_all() || self.category_tags.contains(selection.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(tags: &str) -> MarkerDescriptor {
        MarkerDescriptor::new(LatLng::new(46.5, 6.6), tags)
    }

    #[test]
    fn all_matches_everything() {
        assert!(marker("category_3 ").matches_category(&CategoryId::all()));
        assert!(marker("").matches_category(&CategoryId::all()));
    }

    #[test]
    fn tag_match_is_substring_containment() {
        let m = marker("category_3 category_4 ");
        assert!(m.matches_category(&CategoryId::new("category_3")));
        assert!(m.matches_category(&CategoryId::new("category_4")));
        assert!(!m.matches_category(&CategoryId::new("category_5")));
    }
}
