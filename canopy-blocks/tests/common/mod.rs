//! Shared helpers for the integration tests.
#![allow(dead_code)]

use canopy_blocks::{Block, BlockSpec, BlockVariant, RawCard, RawRegion, SharedMapContext, Theme};
use canopy_model::{LatLng, Locale, MarkerDescriptor};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging once for the whole test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn icon_rows(count: usize) -> Vec<RawCard> {
    (0..count)
        .map(|i| {
            RawCard::new(vec![
                RawRegion::icon("awareness"),
                RawRegion::text(format!("card {i}")),
            ])
        })
        .collect()
}

pub fn filter_rows() -> Vec<RawCard> {
    vec![
        RawCard::new(vec![RawRegion::text(""), RawRegion::text("View all")]),
        RawCard::new(vec![
            RawRegion::icon("conservation"),
            RawRegion::text("Conservation"),
        ]),
        RawCard::new(vec![
            RawRegion::icon("awareness"),
            RawRegion::text("Awareness"),
        ]),
        RawCard::new(vec![
            RawRegion::icon("preservation"),
            RawRegion::text("Preservation"),
        ]),
        RawCard::new(vec![RawRegion::text("CATEGORIES")]),
    ]
}

pub fn markers() -> Vec<MarkerDescriptor> {
    vec![
        MarkerDescriptor::new(LatLng::new(46.2, 6.1), "category_3 category_4 "),
        MarkerDescriptor::new(LatLng::new(46.5, 6.6), "category_5 "),
        MarkerDescriptor::new(LatLng::new(47.0, 7.4), "category_3 "),
    ]
}

pub fn decorate(rows: Vec<RawCard>, variant: BlockVariant, viewport_width: f32) -> Block {
    decorate_with_map(rows, variant, viewport_width, SharedMapContext::not_ready())
}

pub fn decorate_with_map(
    rows: Vec<RawCard>,
    variant: BlockVariant,
    viewport_width: f32,
    map: SharedMapContext,
) -> Block {
    init_logging();
    Block::decorate(
        BlockSpec {
            rows,
            variant,
            locale: Locale::English,
            theme: Theme::Arbres,
            viewport_width,
        },
        map,
    )
}
