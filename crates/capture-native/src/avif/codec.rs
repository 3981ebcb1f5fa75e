//! Owned libavif objects

use std::ffi::CStr;
use std::ptr::NonNull;
use std::sync::OnceLock;

use capture_native_sys::avif::*;
use tracing::debug;

use super::rgb::{RgbFormat, RgbImage};
use super::settings::{ChromaSubsampling, EncoderSettings};
use super::view::{DecoderView, EncoderOptions, ImageView};
use super::{check_result, ensure_supported, LibraryVersion};
use crate::error::{NativeError, Result};

/// Version string reported by the loaded libavif.
pub fn library_version() -> Result<LibraryVersion> {
    // SAFETY: avifVersion returns a static NUL-terminated string.
    let ptr = unsafe { avifVersion() };
    if ptr.is_null() {
        return Err(NativeError::NullPointer("avifVersion"));
    }
    let version = unsafe { CStr::from_ptr(ptr) }.to_string_lossy();
    version.parse()
}

/// Runs the version gate once per process.
fn verified_version() -> Result<LibraryVersion> {
    static VERSION: OnceLock<LibraryVersion> = OnceLock::new();
    if let Some(version) = VERSION.get() {
        return Ok(*version);
    }
    let version = library_version()?;
    ensure_supported(&version)?;
    Ok(*VERSION.get_or_init(|| version))
}

fn result_message(code: avifResult) -> String {
    // SAFETY: avifResultToString returns a static string for every code.
    let ptr = unsafe { avifResultToString(code) };
    if ptr.is_null() {
        return format!("unknown result {code}");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

fn check(operation: &'static str, code: avifResult) -> Result<()> {
    check_result(operation, code, || result_message(code))
}

/// An `avifImage` created by libavif and destroyed on drop.
#[derive(Debug)]
pub struct AvifImage {
    raw: NonNull<avifImage>,
}

impl AvifImage {
    /// Image without planes; they are allocated by the first conversion.
    pub fn new(width: u32, height: u32, depth: u32, chroma: ChromaSubsampling) -> Result<Self> {
        verified_version()?;
        if width == 0 || height == 0 {
            return Err(NativeError::InvalidDimensions(format!("{width}x{height} image")));
        }
        if !matches!(depth, 8 | 10 | 12) {
            return Err(NativeError::InvalidBitmap(format!("unsupported depth {depth}")));
        }
        let ptr = unsafe { avifImageCreate(width, height, depth, chroma.to_raw()) };
        NonNull::new(ptr)
            .map(|raw| Self { raw })
            .ok_or(NativeError::NullPointer("avifImageCreate"))
    }

    pub fn view(&self) -> ImageView<'_> {
        // SAFETY: libavif owns every pointer in the image.
        unsafe { ImageView::new(self.raw.as_ref()) }
    }

    pub fn as_ptr(&self) -> *const avifImage {
        self.raw.as_ptr()
    }

    pub fn set_cicp(
        &mut self,
        primaries: avifColorPrimaries,
        transfer: avifTransferCharacteristics,
        matrix: avifMatrixCoefficients,
    ) {
        let raw = unsafe { self.raw.as_mut() };
        raw.colorPrimaries = primaries;
        raw.transferCharacteristics = transfer;
        raw.matrixCoefficients = matrix;
    }

    pub fn set_full_range(&mut self, full: bool) {
        let raw = unsafe { self.raw.as_mut() };
        raw.yuvRange = if full { AVIF_RANGE_FULL } else { AVIF_RANGE_LIMITED };
    }

    /// Fills the YUV (and alpha) planes from `rgb`.
    pub fn convert_from_rgb(&mut self, rgb: &RgbImage<'_>) -> Result<()> {
        let view = self.view();
        if (rgb.width(), rgb.height()) != (view.width(), view.height()) {
            return Err(NativeError::InvalidDimensions(format!(
                "{}x{} pixels for a {}x{} image",
                rgb.width(),
                rgb.height(),
                view.width(),
                view.height()
            )));
        }
        let code = unsafe { avifImageRGBToYUV(self.raw.as_ptr(), rgb.as_ptr()) };
        check("avifImageRGBToYUV", code)
    }

    /// Writes the planes into `rgb`, which must be writable.
    pub fn convert_to_rgb(&self, rgb: &mut RgbImage<'_>) -> Result<()> {
        yuv_to_rgb(self.view(), rgb)
    }
}

impl Drop for AvifImage {
    fn drop(&mut self) {
        unsafe { avifImageDestroy(self.raw.as_ptr()) };
    }
}

fn yuv_to_rgb(image: ImageView<'_>, rgb: &mut RgbImage<'_>) -> Result<()> {
    if (rgb.width(), rgb.height()) != (image.width(), image.height()) {
        return Err(NativeError::InvalidDimensions(format!(
            "{}x{} buffer for a {}x{} image",
            rgb.width(),
            rgb.height(),
            image.width(),
            image.height()
        )));
    }
    let Some(dst) = rgb.as_mut_ptr() else {
        return Err(NativeError::InvalidBitmap(
            "destination buffer is read-only".to_string(),
        ));
    };
    let code = unsafe { avifImageYUVToRGB(image.raw(), dst) };
    check("avifImageYUVToRGB", code)
}

/// An `avifDecoder` that owns the bytes it reads from.
#[derive(Debug)]
pub struct AvifDecoder {
    raw: NonNull<avifDecoder>,
    input: Vec<u8>,
}

impl AvifDecoder {
    pub fn new() -> Result<Self> {
        verified_version()?;
        let ptr = unsafe { avifDecoderCreate() };
        NonNull::new(ptr)
            .map(|raw| Self {
                raw,
                input: Vec::new(),
            })
            .ok_or(NativeError::NullPointer("avifDecoderCreate"))
    }

    pub fn view(&mut self) -> DecoderView<'_> {
        // SAFETY: the decoder owns `image`.
        unsafe { DecoderView::new(self.raw.as_mut()) }
    }

    /// Reads container headers; call before [`AvifDecoder::next_image`].
    pub fn parse(&mut self, bytes: &[u8]) -> Result<()> {
        self.input = bytes.to_vec();
        let code = unsafe {
            avifDecoderSetIOMemory(self.raw.as_ptr(), self.input.as_ptr(), self.input.len())
        };
        check("avifDecoderSetIOMemory", code)?;
        let code = unsafe { avifDecoderParse(self.raw.as_ptr()) };
        check("avifDecoderParse", code)
    }

    /// Decodes the next frame; the view lives until the next call.
    pub fn next_image(&mut self) -> Result<ImageView<'_>> {
        let code = unsafe { avifDecoderNextImage(self.raw.as_ptr()) };
        check("avifDecoderNextImage", code)?;
        // SAFETY: after a successful call `image` is owned by the decoder.
        unsafe { ImageView::from_ptr(self.raw.as_ref().image) }
            .ok_or(NativeError::NullPointer("avifDecoder.image"))
    }
}

impl Drop for AvifDecoder {
    fn drop(&mut self) {
        unsafe { avifDecoderDestroy(self.raw.as_ptr()) };
    }
}

/// An `avifEncoder` destroyed on drop.
#[derive(Debug)]
pub struct AvifEncoder {
    raw: NonNull<avifEncoder>,
}

impl AvifEncoder {
    pub fn new() -> Result<Self> {
        verified_version()?;
        let ptr = unsafe { avifEncoderCreate() };
        NonNull::new(ptr)
            .map(|raw| Self { raw })
            .ok_or(NativeError::NullPointer("avifEncoderCreate"))
    }

    pub fn options(&mut self) -> EncoderOptions<'_> {
        EncoderOptions::new(unsafe { self.raw.as_mut() })
    }

    /// Encodes a single still image into an AVIF file.
    pub fn write(&mut self, image: &AvifImage) -> Result<Vec<u8>> {
        let mut output = avifRWData::default();
        let code = unsafe { avifEncoderWrite(self.raw.as_ptr(), image.as_ptr(), &mut output) };
        let result = check("avifEncoderWrite", code).map(|()| {
            if output.data.is_null() {
                Vec::new()
            } else {
                unsafe { std::slice::from_raw_parts(output.data, output.size) }.to_vec()
            }
        });
        unsafe { avifRWDataFree(&mut output) };
        result
    }
}

impl Drop for AvifEncoder {
    fn drop(&mut self) {
        unsafe { avifEncoderDestroy(self.raw.as_ptr()) };
    }
}

/// 8-bit RGBA pixels, rows tightly packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes the first frame of an AVIF file to RGBA.
pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage> {
    let mut decoder = AvifDecoder::new()?;
    decoder.parse(bytes)?;
    let image = decoder.next_image()?;
    let (width, height) = (image.width(), image.height());

    let builder = RgbImage::builder(width, height).format(RgbFormat::Rgba).depth(8);
    let row_bytes = builder.packed_row_bytes()?;
    let mut pixels = vec![0u8; row_bytes as usize * height as usize];
    let mut rgb = builder.build_mut(&mut pixels, row_bytes)?;
    yuv_to_rgb(image, &mut rgb)?;

    debug!(target: "capture_native::avif", width, height, input_len = bytes.len(), "decoded image");
    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}

/// Encodes tightly packed 8-bit RGBA as sRGB, full range.
pub fn encode_rgba(
    width: u32,
    height: u32,
    pixels: &[u8],
    settings: &EncoderSettings,
) -> Result<Vec<u8>> {
    let settings = settings.clamped();
    let mut image = AvifImage::new(width, height, 8, settings.chroma)?;
    let lossless = settings.quality == AVIF_QUALITY_LOSSLESS
        && settings.chroma == ChromaSubsampling::Yuv444;
    let matrix = if lossless {
        AVIF_MATRIX_COEFFICIENTS_IDENTITY
    } else {
        AVIF_MATRIX_COEFFICIENTS_BT601
    };
    image.set_cicp(
        AVIF_COLOR_PRIMARIES_BT709,
        AVIF_TRANSFER_CHARACTERISTICS_SRGB,
        matrix,
    );
    image.set_full_range(true);

    let builder = RgbImage::builder(width, height).format(RgbFormat::Rgba);
    let row_bytes = builder.packed_row_bytes()?;
    let rgb = builder.build(pixels, row_bytes)?;
    image.convert_from_rgb(&rgb)?;

    let mut encoder = AvifEncoder::new()?;
    encoder.options().apply(&settings)?;
    let bytes = encoder.write(&image)?;
    debug!(target: "capture_native::avif", width, height, output_len = bytes.len(), "encoded image");
    Ok(bytes)
}
