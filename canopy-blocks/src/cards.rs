//! Card view models with tagged role assignment.
//!
//! Roles are assigned once at decoration time: a sub-region holding a single
//! child that is a picture becomes the image region, everything else is a
//! body region. Consumers read the typed view model instead of re-querying
//! structure at use time.

use crate::reveal::RevealState;

/// Raw sub-region of a card row as handed over by the rendering collaborator.
#[derive(Debug, Clone, Default)]
pub struct RawRegion {
    pub text: String,
    /// Icon name carried on the region's image, if any.
    pub icon_name: Option<String>,
    pub has_picture: bool,
    pub child_count: usize,
}

impl RawRegion {
    pub fn text(text: impl Into<String>) -> Self {
        RawRegion {
            text: text.into(),
            child_count: 1,
            ..Default::default()
        }
    }

    pub fn icon(icon_name: impl Into<String>) -> Self {
        RawRegion {
            icon_name: Some(icon_name.into()),
            child_count: 1,
            ..Default::default()
        }
    }

    pub fn picture() -> Self {
        RawRegion {
            has_picture: true,
            child_count: 1,
            ..Default::default()
        }
    }
}

/// Raw card row before role assignment.
#[derive(Debug, Clone, Default)]
pub struct RawCard {
    pub regions: Vec<RawRegion>,
}

impl RawCard {
    pub fn new(regions: Vec<RawRegion>) -> Self {
        RawCard { regions }
    }
}

/// Role assigned to a card sub-region at decoration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRole {
    Image,
    Body,
}

/// A card sub-region with its assigned role.
#[derive(Debug, Clone)]
pub struct Region {
    pub role: RegionRole,
    pub text: String,
    pub icon_name: Option<String>,
}

/// A decorated card: stable index in the ordered sequence plus the typed
/// view model produced by role assignment. Immutable once laid out, apart
/// from the reveal-effect state toggled around carousel repositioning.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub image_region: Option<Region>,
    pub body_regions: Vec<Region>,
    pub reveal: RevealState,
}

impl Card {
    /// Assign roles to a raw row. A region with exactly one child that is a
    /// picture becomes the image region; everything else is a body region.
    pub fn from_raw(index: usize, raw: &RawCard) -> Self {
        let mut image_region = None;
        let mut body_regions = Vec::new();

        for region in &raw.regions {
            if region.child_count == 1 && region.has_picture {
                image_region = Some(Region {
                    role: RegionRole::Image,
                    text: region.text.clone(),
                    icon_name: region.icon_name.clone(),
                });
            } else {
                body_regions.push(Region {
                    role: RegionRole::Body,
                    text: region.text.clone(),
                    icon_name: region.icon_name.clone(),
                });
            }
        }

        Card {
            index,
            image_region,
            body_regions,
            reveal: RevealState::Disabled,
        }
    }

    /// Combined text content of the card, trimmed.
    pub fn text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(region) = &self.image_region {
            parts.push(region.text.trim());
        }
        for region in &self.body_regions {
            parts.push(region.text.trim());
        }
        parts.retain(|part| !part.is_empty());
        parts.join(" ")
    }

    /// The structural anchor the reveal effect attaches to, if present.
    /// Statistics cards animate the first body region; icon cards animate
    /// the body region carrying an icon.
    pub fn reveal_anchor(&self, statistics: bool) -> Option<&Region> {
        if statistics {
            self.body_regions.first()
        } else {
            self.body_regions
                .iter()
                .find(|region| region.icon_name.is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_picture_child_becomes_image_region() {
        let raw = RawCard::new(vec![RawRegion::picture(), RawRegion::text("hello")]);
        let card = Card::from_raw(0, &raw);
        assert!(card.image_region.is_some());
        assert_eq!(card.body_regions.len(), 1);
        assert_eq!(card.body_regions[0].role, RegionRole::Body);
    }

    #[test]
    fn multi_child_region_is_body_even_with_picture() {
        let region = RawRegion {
            has_picture: true,
            child_count: 2,
            ..Default::default()
        };
        let card = Card::from_raw(0, &RawCard::new(vec![region]));
        assert!(card.image_region.is_none());
        assert_eq!(card.body_regions.len(), 1);
    }

    #[test]
    fn text_joins_trimmed_regions() {
        let raw = RawCard::new(vec![
            RawRegion::text("  View all  "),
            RawRegion::text(""),
        ]);
        let card = Card::from_raw(0, &raw);
        assert_eq!(card.text(), "View all");
    }

    #[test]
    fn reveal_anchor_depends_on_variant() {
        let icon_card = Card::from_raw(
            0,
            &RawCard::new(vec![RawRegion::icon("conservation"), RawRegion::text("x")]),
        );
        assert!(icon_card.reveal_anchor(false).is_some());
        assert!(icon_card.reveal_anchor(true).is_some());

        let bare = Card::from_raw(1, &RawCard::new(vec![]));
        assert!(bare.reveal_anchor(false).is_none());
        assert!(bare.reveal_anchor(true).is_none());
    }
}
