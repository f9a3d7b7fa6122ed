use super::*;
use crate::pixel::format::PixelFormat;

fn bitmap_of(format: PixelFormat, width: u32, height: u32, pixel: &[u8]) -> Bitmap {
    let data = pixel.repeat((width * height) as usize);
    Bitmap::from_vec(data, width, height, width as usize * pixel.len(), format).unwrap()
}

const WHITE_565: [u8; 2] = [0xff, 0xff];
const BLACK_BGR: [u8; 3] = [0, 0, 0];

#[test]
fn worked_pair_paints_white_over_black() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &WHITE_565);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &BLACK_BGR);
    let r = Rect::new(0, 0, 2, 2);
    blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, 255).unwrap();
    assert!(dst.data().iter().all(|&b| b == 255));
}

#[test]
fn alpha_above_opaque_threshold_matches_copy_path() {
    let src = bitmap_of(PixelFormat::Rgb565, 3, 3, &[0x1f, 0x84]);
    let r = Rect::new(0, 0, 3, 3);

    let mut copied = bitmap_of(PixelFormat::Bgr888, 3, 3, &[10, 20, 30]);
    kernel::blend_without_alpha::<Rgb565, Bgr888>(&mut copied, &src, &r, &r);

    for alpha in [0xf9, 0xfe, 0xff] {
        let mut dst = bitmap_of(PixelFormat::Bgr888, 3, 3, &[10, 20, 30]);
        blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, alpha).unwrap();
        assert_eq!(dst.data(), copied.data(), "alpha {alpha} took the blend path");
    }
}

#[test]
fn alpha_at_or_below_low_threshold_is_a_noop() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &WHITE_565);
    let r = Rect::new(0, 0, 2, 2);
    for alpha in [0u8, 1, 5, 8] {
        let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &[10, 20, 30]);
        let before = dst.data().to_vec();
        blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, alpha).unwrap();
        assert_eq!(dst.data(), &before[..], "alpha {alpha} touched the destination");
    }
}

#[test]
fn alpha_just_above_low_threshold_blends() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &WHITE_565);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &BLACK_BGR);
    let r = Rect::new(0, 0, 2, 2);
    blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, 9).unwrap();
    assert!(dst.data().iter().all(|&b| b > 0 && b < 32));
}

#[test]
fn wrong_source_format_is_invalid_argument() {
    // A 4-byte RGBA source handed to the 3-byte/2-byte specialized routine.
    let src = bitmap_of(PixelFormat::Rgba8888, 2, 2, &[1, 2, 3, 4]);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &BLACK_BGR);
    let r = Rect::new(0, 0, 2, 2);
    let err = blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, 255).unwrap_err();
    assert!(matches!(err, PixoverError::InvalidArgument(_)));
}

#[test]
fn wrong_destination_format_is_invalid_argument() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &WHITE_565);
    let mut dst = bitmap_of(PixelFormat::Rgb888, 2, 2, &BLACK_BGR);
    let r = Rect::new(0, 0, 2, 2);
    let err = blend_image_bgr888_rgb565(&mut dst, &src, &r, &r, 255).unwrap_err();
    assert!(matches!(err, PixoverError::InvalidArgument(_)));
}

#[test]
fn out_of_bounds_rect_fails_before_any_write() {
    let src = bitmap_of(PixelFormat::Rgb565, 2, 2, &WHITE_565);
    let mut dst = bitmap_of(PixelFormat::Bgr888, 2, 2, &BLACK_BGR);
    let before = dst.data().to_vec();

    let err = blend_image_bgr888_rgb565(
        &mut dst,
        &src,
        &Rect::new(1, 0, 2, 2),
        &Rect::new(0, 0, 2, 2),
        255,
    )
    .unwrap_err();
    assert!(matches!(err, PixoverError::InvalidArgument(_)));

    let err = blend_image_bgr888_rgb565(
        &mut dst,
        &src,
        &Rect::new(0, 0, 2, 2),
        &Rect::new(0, 1, 2, 2),
        255,
    )
    .unwrap_err();
    assert!(matches!(err, PixoverError::InvalidArgument(_)));

    assert_eq!(dst.data(), &before[..]);
}

#[test]
fn threshold_constants_hold_contract_values() {
    assert_eq!(ALPHA_FULLY_OPAQUE, 0xf8);
    assert_eq!(ALPHA_IMPERCEPTIBLE, 8);
}

#[test]
fn blend_into_alpha_destination_composites_alpha() {
    let src = bitmap_of(PixelFormat::Rgb565, 1, 1, &WHITE_565);
    let mut dst = bitmap_of(PixelFormat::Bgra8888, 1, 1, &[0, 0, 0, 0]);
    let r = Rect::new(0, 0, 1, 1);
    blend_image_bgra8888_rgb565(&mut dst, &src, &r, &r, 128).unwrap();
    // Opaque source at coverage 128 over transparent dst.
    assert_eq!(dst.data()[3], 128);
}
