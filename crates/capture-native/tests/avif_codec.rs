//! Encode/decode through a linked libavif (`--features link`)

#![cfg(feature = "link")]

use capture_native::avif::{
    decode_rgba, encode_rgba, ensure_supported, library_version, AvifDecoder, EncoderSettings,
};
use capture_native::NativeError;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect()
}

#[test]
fn linked_library_passes_version_gate() {
    let version = library_version().unwrap();
    ensure_supported(&version).unwrap();
}

#[test]
fn lossless_encode_decodes_to_same_pixels() {
    let pixels = solid(16, 8, [200, 40, 10, 255]);
    let settings = EncoderSettings {
        quality: 100,
        quality_alpha: 100,
        speed: 10,
        ..Default::default()
    };
    let file = encode_rgba(16, 8, &pixels, &settings).unwrap();
    assert_eq!(&file[4..8], b"ftyp");

    let decoded = decode_rgba(&file).unwrap();
    assert_eq!((decoded.width, decoded.height), (16, 8));
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn decoder_exposes_image_view() {
    let file = encode_rgba(4, 4, &solid(4, 4, [0, 0, 255, 128]), &EncoderSettings::default()).unwrap();
    let mut decoder = AvifDecoder::new().unwrap();
    decoder.parse(&file).unwrap();
    let image = decoder.next_image().unwrap();
    assert_eq!(image.width(), 4);
    assert!(image.has_alpha());
    assert!(image.transforms().is_empty());
}

#[test]
fn garbage_is_a_codec_error() {
    let err = decode_rgba(b"definitely not an avif file").unwrap_err();
    assert!(matches!(err, NativeError::Codec { .. }));
}

#[test]
fn short_pixel_buffer_is_rejected() {
    let err = encode_rgba(4, 4, &[0u8; 10], &EncoderSettings::default()).unwrap_err();
    assert!(matches!(err, NativeError::InvalidDimensions(_)));
}
