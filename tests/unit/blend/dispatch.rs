use super::*;

fn bitmap_of(format: PixelFormat, width: u32, height: u32, pixel: &[u8]) -> Bitmap {
    let data = pixel.repeat((width * height) as usize);
    Bitmap::from_vec(data, width, height, width as usize * pixel.len(), format).unwrap()
}

#[test]
fn facade_resolves_the_worked_pair() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &[0xff, 0xff]);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &[0, 0, 0]);
    let r = Rect::new(0, 0, 2, 2);
    blend_image(&mut dst, &src, &r, &r, 255).unwrap();
    assert!(dst.data().iter().all(|&b| b == 255));
}

#[test]
fn unregistered_pair_is_unsupported_not_invalid() {
    // Bgr565 has a codec but no registered pair.
    let src = bitmap_of(PixelFormat::Bgr565, 1, 1, &[0, 0]);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 1, 1, &[0, 0, 0]);
    let r = Rect::new(0, 0, 1, 1);
    let err = blend_image(&mut dst, &src, &r, &r, 255).unwrap_err();
    assert!(matches!(
        err,
        PixoverError::UnsupportedFormatPair {
            src: PixelFormat::Bgr565,
            dst: PixelFormat::Bgr888,
        }
    ));
}

#[test]
fn pair_lookup_misses_before_argument_validation() {
    // Even with an out-of-bounds rect, an unknown pair reports the pair.
    let src = bitmap_of(PixelFormat::Bgr565, 1, 1, &[0, 0]);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 1, 1, &[0, 0, 0]);
    let err = blend_image(&mut dst, &src, &Rect::new(9, 9, 9, 9), &Rect::new(0, 0, 1, 1), 255)
        .unwrap_err();
    assert!(matches!(err, PixoverError::UnsupportedFormatPair { .. }));
}

#[test]
fn registry_and_support_queries_agree() {
    assert!(is_pair_supported(PixelFormat::Rgb565, PixelFormat::Bgr888));
    assert!(!is_pair_supported(PixelFormat::Bgr565, PixelFormat::Bgr888));

    let pairs: Vec<_> = supported_pairs().collect();
    assert_eq!(pairs.len(), REGISTRY.len());
    for (src, dst) in pairs {
        assert!(is_pair_supported(src, dst));
    }
}

#[test]
fn every_registered_routine_accepts_matching_bitmaps() {
    for (src_fmt, dst_fmt) in supported_pairs() {
        let src_px = vec![0u8; src_fmt.bytes_per_pixel()];
        let dst_px = vec![0u8; dst_fmt.bytes_per_pixel()];
        let src = bitmap_of(src_fmt, 2, 2, &src_px);
        let mut dst = bitmap_of(dst_fmt, 2, 2, &dst_px);
        let r = Rect::new(0, 0, 2, 2);
        blend_image(&mut dst, &src, &r, &r, 200)
            .unwrap_or_else(|e| panic!("{src_fmt:?} onto {dst_fmt:?} failed: {e}"));
    }
}
