//! Test rectangles, image views and row banding
//!
//! Covers window geometry in non-zero origins, canonical to pixel
//! conversion, and the row splitting used to hand disjoint bands of a
//! destination to separate workers.

use chanoffset_core::{
    BitDepth, Components, DynImage, Error, Image, ImageView, ImageViewMut, Rect, RectD,
    RenderScale, Sample,
};

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_rect_negative_origin() {
    let r = Rect::new(-3, -2, 5, 4).unwrap();
    assert_eq!((r.width(), r.height(), r.area()), (8, 6, 48));
    assert!(r.contains_point(-3, -2));
    assert!(!r.contains_point(5, 0));
    assert!(r.contains_rect(&Rect::new(0, 0, 5, 4).unwrap()));
    assert!(!r.contains_rect(&Rect::new(0, 0, 6, 4).unwrap()));
}

#[test]
fn test_rect_intersection_and_overlap() {
    let a = Rect::new(0, 0, 10, 10).unwrap();
    let b = Rect::new(5, -5, 15, 5).unwrap();
    assert_eq!(a.intersection(&b), Some(Rect::new(5, 0, 10, 5).unwrap()));
    assert!(a.overlaps(&b));

    // Touching edges share no pixel
    let c = Rect::new(10, 0, 20, 10).unwrap();
    assert_eq!(a.intersection(&c), None);
    assert!(!a.overlaps(&c));

    let empty = Rect::new(3, 3, 3, 8).unwrap();
    assert!(empty.is_empty());
    assert!(!a.overlaps(&empty));
}

// ============================================================================
// RectD::to_pixel_enclosing
// ============================================================================

#[test]
fn test_enclosing_rounds_outwards() {
    let r = RectD::new(0.5, 1.25, 9.5, 7.75);
    assert_eq!(
        r.to_pixel_enclosing(RenderScale::default(), 1.0),
        Rect::new(0, 1, 10, 8).unwrap()
    );
}

#[test]
fn test_enclosing_applies_scale_and_aspect() {
    let r = RectD::new(10.0, 10.0, 30.0, 20.0);
    assert_eq!(
        r.to_pixel_enclosing(RenderScale::new(0.5, 0.25), 1.0),
        Rect::new(5, 2, 15, 5).unwrap()
    );
    // Aspect ratio only affects x
    assert_eq!(
        r.to_pixel_enclosing(RenderScale::default(), 2.0),
        Rect::new(5, 10, 15, 20).unwrap()
    );
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_strided_view_skips_padding() {
    // 2x2 RGB with one padding sample per row
    let data = [1u8, 2, 3, 4, 5, 6, 99, 7, 8, 9, 10, 11, 12, 99];
    let view = ImageView::with_stride(&data, Rect::new(10, 20, 12, 22).unwrap(), Components::Rgb, 7)
        .unwrap();
    assert_eq!(view.pixel(11, 20), Some(&[4, 5, 6][..]));
    assert_eq!(view.pixel(10, 21), Some(&[7, 8, 9][..]));
    assert_eq!(view.row(21), Some(&[7, 8, 9, 10, 11, 12][..]));
    assert_eq!(view.pixel(12, 20), None);

    let short = ImageView::with_stride(&data, Rect::from_size(2, 2), Components::Rgb, 5);
    assert!(matches!(short, Err(Error::InvalidStride { stride: 5, min: 6 })));
}

#[test]
fn test_row_span_limits() {
    let mut img = Image::<u16>::new(Rect::new(-2, 0, 2, 2).unwrap(), Components::Alpha).unwrap();
    let mut view = img.view_mut();
    assert_eq!(view.row_span_mut(1, -1, 1).map(|s| s.len()), Some(2));
    assert_eq!(view.row_span_mut(1, 0, 0).map(|s| s.len()), Some(0));
    assert!(view.row_span_mut(1, -3, 1).is_none());
    assert!(view.row_span_mut(2, -1, 1).is_none());
    assert!(view.row_span_mut(0, 1, 0).is_none());
}

// ============================================================================
// Row bands
// ============================================================================

#[test]
fn test_row_bands_cover_every_row_once() {
    let bounds = Rect::new(0, -3, 3, 8).unwrap();
    let mut img = Image::<f32>::new(bounds, Components::Rgba).unwrap();
    let bands = img.view_mut().into_row_bands(4);

    let rows: Vec<(i32, i32)> = bands.iter().map(|b| (b.bounds().y1, b.bounds().y2)).collect();
    assert_eq!(rows, vec![(-3, 1), (1, 5), (5, 8)]);

    for mut band in bands {
        let y1 = band.bounds().y1;
        for y in y1..band.bounds().y2 {
            for x in 0..3 {
                band.pixel_mut(x, y).unwrap()[0] = y as f32;
            }
        }
    }
    for y in bounds.y1..bounds.y2 {
        assert_eq!(img.pixel(2, y).unwrap()[0], y as f32);
    }
}

#[test]
fn test_split_at_row_clamps() {
    let mut img = Image::<u8>::from_size(2, 4, Components::Rgb).unwrap();
    let (top, bottom) = img.view_mut().split_at_row(-10);
    assert!(top.bounds().is_empty());
    assert_eq!(bottom.bounds(), Rect::from_size(2, 4));

    let (top, bottom) = img.view_mut().split_at_row(99);
    assert_eq!(top.bounds(), Rect::from_size(2, 4));
    assert!(bottom.bounds().is_empty());

    assert!(ImageViewMut::new(&mut [0u8; 0], Rect::from_size(0, 0), Components::Alpha)
        .unwrap()
        .into_row_bands(0)
        .is_empty());
}

// ============================================================================
// Encodings
// ============================================================================

#[test]
fn test_sample_packing() {
    assert_eq!(u8::from_f32(255.9), 255);
    assert_eq!(u8::from_f32(-3.0), 0);
    assert_eq!(u8::from_f32(127.99), 127);
    assert_eq!(u16::from_f32(65536.0), 65535);
    assert_eq!(f32::from_f32(-0.25), -0.25);
    assert_eq!(BitDepth::UShort.max_value(), u16::MAX_VALUE);
    assert_eq!(BitDepth::from_bits(32).unwrap(), BitDepth::Float);
    assert!(matches!(BitDepth::from_bits(12), Err(Error::UnsupportedDepth(12))));
    assert!(matches!(Components::from_count(2), Err(Error::UnsupportedComponents(2))));
}

#[test]
fn test_dyn_image_reports_layout() {
    let img = DynImage::from(Image::<u16>::from_size(3, 2, Components::Rgb).unwrap());
    assert_eq!(img.depth(), BitDepth::UShort);
    assert_eq!(img.components(), Components::Rgb);
    assert_eq!(img.view().bounds(), Rect::from_size(3, 2));
}
