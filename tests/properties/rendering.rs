//! Property tests for the simulated panel and its bitmap output.

use proptest::prelude::*;

use oledmenu::config::DisplayConfig;
use oledmenu::domain::ports::NoopEventSink;
use oledmenu::infrastructure::display::bmp::{self, BmpHeader};
use oledmenu::infrastructure::OledRenderer;
use oledmenu::{build_system, CallbackRegistry, Input, MenuSpec};

fn any_label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~]{0,200}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The bitmap always has the configured size, whatever the labels.
    #[test]
    fn property_bitmap_has_configured_dimensions(
        labels in proptest::collection::vec(any_label(), 0..12),
        width in 1u32..=160,
        height in 1u32..=80,
        viewport in 1usize..=8,
        moves in 0usize..12,
    ) {
        let mut spec = MenuSpec::new("Root");
        for label in labels {
            spec = spec.child(MenuSpec::new(label));
        }
        let mut system = build_system(&spec, &CallbackRegistry::strict()).unwrap();
        for _ in 0..moves {
            system.handle(Input::MoveDown, &NoopEventSink);
        }

        let config = DisplayConfig {
            width,
            height,
            viewport,
            ..DisplayConfig::default()
        };
        let mut renderer = OledRenderer::in_memory(&config).unwrap();
        let fb = renderer.draw(&system.view()).unwrap();

        prop_assert_eq!(fb.pixels().len(), (width * height) as usize);

        let encoded = bmp::encode(fb);
        let header = BmpHeader::parse(&encoded).unwrap();
        prop_assert_eq!(header.width, width as i32);
        prop_assert_eq!(header.height, height as i32);
        prop_assert_eq!(header.bits_per_pixel, 8);
        prop_assert_eq!(header.pixel_offset as usize, bmp::PIXEL_OFFSET);
        prop_assert_eq!(header.file_size as usize, encoded.len());
        prop_assert_eq!(
            encoded.len(),
            bmp::PIXEL_OFFSET + bmp::row_stride(width) * height as usize
        );
    }

    /// PROPERTY: Only the first `viewport` rows ever light pixels.
    #[test]
    fn property_rows_beyond_viewport_stay_dark(
        count in 1usize..10,
        viewport in 1usize..4,
    ) {
        let mut spec = MenuSpec::new("Root");
        for i in 0..count {
            spec = spec.child(MenuSpec::new(format!("Item{}", i)));
        }
        let system = build_system(&spec, &CallbackRegistry::strict()).unwrap();

        let config = DisplayConfig {
            height: 64,
            viewport,
            ..DisplayConfig::default()
        };
        let mut renderer = OledRenderer::in_memory(&config).unwrap();
        let fb = renderer.draw(&system.view()).unwrap();

        let drawn_rows = viewport.min(count) as u32 * config.line_height;
        for y in drawn_rows..fb.height() {
            prop_assert!(fb.row(y).iter().all(|&p| p == 0), "row {} should be dark", y);
        }
    }
}
