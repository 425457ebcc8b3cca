use artqr::core::models::{EcLevel, Fill, QrRequest};
use artqr::export::pdf;
use artqr::render::{self, compose, mask};
use image::Rgba;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const URL: &str = "https://artbeaurescence.sn";

/// url = "https://artbeaurescence.sn", level H, 640px, no logo: a 640x640
/// opaque-on-transparent mask with no halo or logo pixels present.
#[test]
fn test_reference_scenario() {
    let mask = mask::render_mask(URL, EcLevel::H, 640, 4).unwrap();
    assert_eq!(mask.dimensions(), (640, 640));

    let mut opaque = 0usize;
    let mut transparent = 0usize;
    for pixel in mask.pixels() {
        match pixel {
            Rgba([0, 0, 0, 255]) => opaque += 1,
            Rgba([_, _, _, 0]) => transparent += 1,
            other => panic!("unexpected pixel {other:?} - halo/logo pixels must not appear"),
        }
    }
    assert!(opaque > 0);
    assert!(transparent > 0);
}

#[test]
fn test_generation_succeeds_at_h_2000() {
    let request = QrRequest::new(URL, EcLevel::H, 2000, 4);
    let image = render::render(&request).unwrap();
    assert_eq!(image.dimensions(), (2000, 2000));
}

#[test]
fn test_composite_opacity_matches_mask_everywhere() {
    let mask = mask::render_mask(URL, EcLevel::Q, 300, 4).unwrap();
    let fill = Fill::Gradient {
        top: Rgba([29, 43, 100, 255]),
        bottom: Rgba([248, 205, 218, 255]),
    };
    let out = compose::composite(&mask, &fill);
    for (x, y, pixel) in out.enumerate_pixels() {
        assert_eq!(pixel[3], mask.get_pixel(x, y)[3], "alpha diverged at ({x},{y})");
    }
}

#[test]
fn test_logo_load_failure_never_aborts() {
    let request = QrRequest::new(URL, EcLevel::Q, 256, 4)
        .with_logo(Some("missing/logo.png".into()));
    let branded = render::render(&request).unwrap();
    let plain = render::render(&request.clone().with_logo(None)).unwrap();
    assert_eq!(branded.as_raw(), plain.as_raw());
}

#[test]
fn test_pdf_page_geometry() {
    assert_eq!(pdf::PAGE_WIDTH_MM, 210.0);
    assert_eq!(pdf::PAGE_HEIGHT_MM, 297.0);
    assert_eq!(pdf::IMAGE_WIDTH_MM, 160.0);
    assert_eq!(pdf::margins(), (25.0, 68.5));
}

#[test]
fn test_pdf_export_of_rendered_image() {
    let request = QrRequest::new(URL, EcLevel::M, 200, 4);
    let image = render::render(&request).unwrap();
    let bytes = pdf::pdf_bytes(&image, Rgba([255, 255, 255, 255])).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_mask_has_exact_dimensions_and_is_deterministic(
        size in 64u32..400,
        quiet_zone in 0u32..8,
        level in prop_oneof![
            Just(EcLevel::L),
            Just(EcLevel::M),
            Just(EcLevel::Q),
            Just(EcLevel::H),
        ],
    ) {
        let first = mask::render_mask(URL, level, size, quiet_zone).unwrap();
        prop_assert_eq!(first.dimensions(), (size, size));

        let second = mask::render_mask(URL, level, size, quiet_zone).unwrap();
        prop_assert_eq!(first.as_raw(), second.as_raw());
    }
}
