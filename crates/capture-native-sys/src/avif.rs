//! libavif structures (avif/avif.h, libavif 1.2+)
//!
//! IMPORTANT: `avifImage`, `avifDecoder` and `avifEncoder` are PARTIAL
//! mirrors. Each declares only the leading public fields that callers touch;
//! the native structs continue with more fields (internal data pointers,
//! diagnostics, newer settings) that are deliberately omitted here.
//!
//! Consequences:
//! - never construct or allocate these types in Rust; obtain pointers from
//!   `avifImageCreate`/`avifDecoderCreate`/`avifEncoderCreate`
//! - never copy them out by value from a native pointer
//! - never read or write past the last declared field
//!
//! The fully declared structs (`avifRWData`, `avifRGBImage`, the box
//! structs, `avifScalingMode`) may be owned and copied freely.

use std::ffi::c_void;

use bytemuck::Zeroable;

pub type avifBool = i32;
pub const AVIF_TRUE: avifBool = 1;
pub const AVIF_FALSE: avifBool = 0;

pub const AVIF_PLANE_COUNT_YUV: usize = 3;

pub const AVIF_SPEED_DEFAULT: i32 = -1;
pub const AVIF_SPEED_SLOWEST: i32 = 0;
pub const AVIF_SPEED_FASTEST: i32 = 10;

pub const AVIF_QUALITY_DEFAULT: i32 = -1;
pub const AVIF_QUALITY_LOSSLESS: i32 = 100;
pub const AVIF_QUALITY_WORST: i32 = 0;
pub const AVIF_QUALITY_BEST: i32 = 100;

pub const AVIF_QUANTIZER_LOSSLESS: i32 = 0;
pub const AVIF_QUANTIZER_BEST_QUALITY: i32 = 0;
pub const AVIF_QUANTIZER_WORST_QUALITY: i32 = 63;

pub const AVIF_REPETITION_COUNT_INFINITE: i32 = -1;
pub const AVIF_DEFAULT_IMAGE_SIZE_LIMIT: u32 = 16384 * 16384;
pub const AVIF_DEFAULT_IMAGE_DIMENSION_LIMIT: u32 = 32768;
pub const AVIF_DEFAULT_IMAGE_COUNT_LIMIT: u32 = 12 * 3600 * 60;

pub type avifResult = i32;
pub const AVIF_RESULT_OK: avifResult = 0;
pub const AVIF_RESULT_UNKNOWN_ERROR: avifResult = 1;
pub const AVIF_RESULT_INVALID_FTYP: avifResult = 2;
pub const AVIF_RESULT_NO_CONTENT: avifResult = 3;
pub const AVIF_RESULT_NO_YUV_FORMAT_SELECTED: avifResult = 4;
pub const AVIF_RESULT_REFORMAT_FAILED: avifResult = 5;
pub const AVIF_RESULT_UNSUPPORTED_DEPTH: avifResult = 6;
pub const AVIF_RESULT_ENCODE_COLOR_FAILED: avifResult = 7;
pub const AVIF_RESULT_ENCODE_ALPHA_FAILED: avifResult = 8;
pub const AVIF_RESULT_BMFF_PARSE_FAILED: avifResult = 9;
pub const AVIF_RESULT_MISSING_IMAGE_ITEM: avifResult = 10;
pub const AVIF_RESULT_DECODE_COLOR_FAILED: avifResult = 11;
pub const AVIF_RESULT_DECODE_ALPHA_FAILED: avifResult = 12;
pub const AVIF_RESULT_COLOR_ALPHA_SIZE_MISMATCH: avifResult = 13;
pub const AVIF_RESULT_ISPE_SIZE_MISMATCH: avifResult = 14;
pub const AVIF_RESULT_NO_CODEC_AVAILABLE: avifResult = 15;
pub const AVIF_RESULT_NO_IMAGES_REMAINING: avifResult = 16;
pub const AVIF_RESULT_INVALID_EXIF_PAYLOAD: avifResult = 17;
pub const AVIF_RESULT_INVALID_IMAGE_GRID: avifResult = 18;
pub const AVIF_RESULT_INVALID_CODEC_SPECIFIC_OPTION: avifResult = 19;
pub const AVIF_RESULT_TRUNCATED_DATA: avifResult = 20;
pub const AVIF_RESULT_IO_NOT_SET: avifResult = 21;
pub const AVIF_RESULT_IO_ERROR: avifResult = 22;
pub const AVIF_RESULT_WAITING_ON_IO: avifResult = 23;
pub const AVIF_RESULT_INVALID_ARGUMENT: avifResult = 24;
pub const AVIF_RESULT_NOT_IMPLEMENTED: avifResult = 25;
pub const AVIF_RESULT_OUT_OF_MEMORY: avifResult = 26;

pub type avifPixelFormat = i32;
pub const AVIF_PIXEL_FORMAT_NONE: avifPixelFormat = 0;
pub const AVIF_PIXEL_FORMAT_YUV444: avifPixelFormat = 1;
pub const AVIF_PIXEL_FORMAT_YUV422: avifPixelFormat = 2;
pub const AVIF_PIXEL_FORMAT_YUV420: avifPixelFormat = 3;
pub const AVIF_PIXEL_FORMAT_YUV400: avifPixelFormat = 4;

pub type avifRange = i32;
pub const AVIF_RANGE_LIMITED: avifRange = 0;
pub const AVIF_RANGE_FULL: avifRange = 1;

pub type avifChromaSamplePosition = i32;
pub const AVIF_CHROMA_SAMPLE_POSITION_UNKNOWN: avifChromaSamplePosition = 0;
pub const AVIF_CHROMA_SAMPLE_POSITION_VERTICAL: avifChromaSamplePosition = 1;
pub const AVIF_CHROMA_SAMPLE_POSITION_COLOCATED: avifChromaSamplePosition = 2;

pub type avifRGBFormat = i32;
pub const AVIF_RGB_FORMAT_RGB: avifRGBFormat = 0;
pub const AVIF_RGB_FORMAT_RGBA: avifRGBFormat = 1;
pub const AVIF_RGB_FORMAT_ARGB: avifRGBFormat = 2;
pub const AVIF_RGB_FORMAT_BGR: avifRGBFormat = 3;
pub const AVIF_RGB_FORMAT_BGRA: avifRGBFormat = 4;
pub const AVIF_RGB_FORMAT_ABGR: avifRGBFormat = 5;
pub const AVIF_RGB_FORMAT_RGB_565: avifRGBFormat = 6;

pub type avifChromaUpsampling = i32;
pub const AVIF_CHROMA_UPSAMPLING_AUTOMATIC: avifChromaUpsampling = 0;
pub const AVIF_CHROMA_UPSAMPLING_FASTEST: avifChromaUpsampling = 1;
pub const AVIF_CHROMA_UPSAMPLING_BEST_QUALITY: avifChromaUpsampling = 2;
pub const AVIF_CHROMA_UPSAMPLING_NEAREST: avifChromaUpsampling = 3;
pub const AVIF_CHROMA_UPSAMPLING_BILINEAR: avifChromaUpsampling = 4;

pub type avifChromaDownsampling = i32;
pub const AVIF_CHROMA_DOWNSAMPLING_AUTOMATIC: avifChromaDownsampling = 0;
pub const AVIF_CHROMA_DOWNSAMPLING_FASTEST: avifChromaDownsampling = 1;
pub const AVIF_CHROMA_DOWNSAMPLING_BEST_QUALITY: avifChromaDownsampling = 2;
pub const AVIF_CHROMA_DOWNSAMPLING_AVERAGE: avifChromaDownsampling = 3;
pub const AVIF_CHROMA_DOWNSAMPLING_SHARP_YUV: avifChromaDownsampling = 4;

// CICP code points are uint16_t in avif.h, not enums.
pub type avifColorPrimaries = u16;
pub const AVIF_COLOR_PRIMARIES_UNKNOWN: avifColorPrimaries = 0;
pub const AVIF_COLOR_PRIMARIES_BT709: avifColorPrimaries = 1;
pub const AVIF_COLOR_PRIMARIES_SRGB: avifColorPrimaries = 1;
pub const AVIF_COLOR_PRIMARIES_UNSPECIFIED: avifColorPrimaries = 2;
pub const AVIF_COLOR_PRIMARIES_BT601: avifColorPrimaries = 6;
pub const AVIF_COLOR_PRIMARIES_BT2020: avifColorPrimaries = 9;
pub const AVIF_COLOR_PRIMARIES_SMPTE432: avifColorPrimaries = 12;

pub type avifTransferCharacteristics = u16;
pub const AVIF_TRANSFER_CHARACTERISTICS_UNKNOWN: avifTransferCharacteristics = 0;
pub const AVIF_TRANSFER_CHARACTERISTICS_BT709: avifTransferCharacteristics = 1;
pub const AVIF_TRANSFER_CHARACTERISTICS_UNSPECIFIED: avifTransferCharacteristics = 2;
pub const AVIF_TRANSFER_CHARACTERISTICS_LINEAR: avifTransferCharacteristics = 8;
pub const AVIF_TRANSFER_CHARACTERISTICS_SRGB: avifTransferCharacteristics = 13;
pub const AVIF_TRANSFER_CHARACTERISTICS_PQ: avifTransferCharacteristics = 16;
pub const AVIF_TRANSFER_CHARACTERISTICS_HLG: avifTransferCharacteristics = 18;

pub type avifMatrixCoefficients = u16;
pub const AVIF_MATRIX_COEFFICIENTS_IDENTITY: avifMatrixCoefficients = 0;
pub const AVIF_MATRIX_COEFFICIENTS_BT709: avifMatrixCoefficients = 1;
pub const AVIF_MATRIX_COEFFICIENTS_UNSPECIFIED: avifMatrixCoefficients = 2;
pub const AVIF_MATRIX_COEFFICIENTS_BT601: avifMatrixCoefficients = 6;
pub const AVIF_MATRIX_COEFFICIENTS_BT2020_NCL: avifMatrixCoefficients = 9;

pub type avifTransformFlags = u32;
pub const AVIF_TRANSFORM_NONE: avifTransformFlags = 0;
pub const AVIF_TRANSFORM_PASP: avifTransformFlags = 1 << 0;
pub const AVIF_TRANSFORM_CLAP: avifTransformFlags = 1 << 1;
pub const AVIF_TRANSFORM_IROT: avifTransformFlags = 1 << 2;
pub const AVIF_TRANSFORM_IMIR: avifTransformFlags = 1 << 3;

pub type avifCodecChoice = i32;
pub const AVIF_CODEC_CHOICE_AUTO: avifCodecChoice = 0;
pub const AVIF_CODEC_CHOICE_AOM: avifCodecChoice = 1;
pub const AVIF_CODEC_CHOICE_DAV1D: avifCodecChoice = 2;
pub const AVIF_CODEC_CHOICE_LIBGAV1: avifCodecChoice = 3;
pub const AVIF_CODEC_CHOICE_RAV1E: avifCodecChoice = 4;
pub const AVIF_CODEC_CHOICE_SVT: avifCodecChoice = 5;
pub const AVIF_CODEC_CHOICE_AVM: avifCodecChoice = 6;

pub type avifDecoderSource = i32;
pub const AVIF_DECODER_SOURCE_AUTO: avifDecoderSource = 0;
pub const AVIF_DECODER_SOURCE_PRIMARY_ITEM: avifDecoderSource = 1;
pub const AVIF_DECODER_SOURCE_TRACKS: avifDecoderSource = 2;

pub type avifStrictFlags = u32;
pub const AVIF_STRICT_DISABLED: avifStrictFlags = 0;
pub const AVIF_STRICT_PIXI_REQUIRED: avifStrictFlags = 1 << 0;
pub const AVIF_STRICT_CLAP_VALID: avifStrictFlags = 1 << 1;
pub const AVIF_STRICT_ALPHA_ISPE_REQUIRED: avifStrictFlags = 1 << 2;
pub const AVIF_STRICT_ENABLED: avifStrictFlags =
    AVIF_STRICT_PIXI_REQUIRED | AVIF_STRICT_CLAP_VALID | AVIF_STRICT_ALPHA_ISPE_REQUIRED;

pub type avifAddImageFlags = u32;
pub const AVIF_ADD_IMAGE_FLAG_NONE: avifAddImageFlags = 0;
pub const AVIF_ADD_IMAGE_FLAG_FORCE_KEYFRAME: avifAddImageFlags = 1 << 0;
pub const AVIF_ADD_IMAGE_FLAG_SINGLE: avifAddImageFlags = 1 << 1;

/// Growable byte buffer. When produced by libavif, free with
/// `avifRWDataFree`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct avifRWData {
    pub data: *mut u8,
    pub size: usize,
}

impl Default for avifRWData {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

/// Complete mirror; safe to own. Fill it with `avifRGBImageSetDefaults`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct avifRGBImage {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub format: avifRGBFormat,
    pub chromaUpsampling: avifChromaUpsampling,
    pub chromaDownsampling: avifChromaDownsampling,
    pub avoidLibYUV: avifBool,
    pub ignoreAlpha: avifBool,
    pub alphaPremultiplied: avifBool,
    pub isFloat: avifBool,
    pub maxThreads: i32,
    pub pixels: *mut u8,
    pub rowBytes: u32,
}

impl Default for avifRGBImage {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

/// 'pasp' box
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifPixelAspectRatioBox {
    pub hSpacing: u32,
    pub vSpacing: u32,
}

/// 'clap' box, each value a numerator/denominator pair
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifCleanApertureBox {
    pub widthN: u32,
    pub widthD: u32,
    pub heightN: u32,
    pub heightD: u32,
    pub horizOffN: u32,
    pub horizOffD: u32,
    pub vertOffN: u32,
    pub vertOffD: u32,
}

/// 'irot' box; `angle` in [0, 3], counter-clockwise quarter turns
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifImageRotation {
    pub angle: u8,
}

/// 'imir' box; `axis` 0 exchanges top and bottom, 1 exchanges left and right
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifImageMirror {
    pub axis: u8,
}

/// 'clli' box; (0, 0) means unknown
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifContentLightLevelInformationBox {
    pub maxCLL: u16,
    pub maxPALL: u16,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifFraction {
    pub n: i32,
    pub d: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct avifScalingMode {
    pub horizontal: avifFraction,
    pub vertical: avifFraction,
}

/// PARTIAL MIRROR of `avifImage`, declared through `gainMap`.
///
/// Omitted trailing fields: everything libavif appends after the gain map
/// pointer in later releases. Allocate with `avifImageCreate`.
#[repr(C)]
#[derive(Debug, Zeroable)]
pub struct avifImage {
    pub width: u32,
    pub height: u32,
    /// 8, 10 or 12; planes are uint16_t when > 8
    pub depth: u32,
    pub yuvFormat: avifPixelFormat,
    pub yuvRange: avifRange,
    pub yuvChromaSamplePosition: avifChromaSamplePosition,
    pub yuvPlanes: [*mut u8; AVIF_PLANE_COUNT_YUV],
    pub yuvRowBytes: [u32; AVIF_PLANE_COUNT_YUV],
    pub imageOwnsYUVPlanes: avifBool,

    pub alphaPlane: *mut u8,
    pub alphaRowBytes: u32,
    pub imageOwnsAlphaPlane: avifBool,
    pub alphaPremultiplied: avifBool,

    pub icc: avifRWData,

    pub colorPrimaries: avifColorPrimaries,
    pub transferCharacteristics: avifTransferCharacteristics,
    pub matrixCoefficients: avifMatrixCoefficients,

    pub clli: avifContentLightLevelInformationBox,

    pub transformFlags: avifTransformFlags,
    pub pasp: avifPixelAspectRatioBox,
    pub clap: avifCleanApertureBox,
    pub irot: avifImageRotation,
    pub imir: avifImageMirror,

    pub exif: avifRWData,
    pub xmp: avifRWData,

    /// `avifImageItemProperty *`, opaque here
    pub properties: *mut c_void,
    pub numProperties: usize,

    /// `avifGainMap *`, opaque here
    pub gainMap: *mut c_void,
    // -- not declared: remaining native fields --
}

/// PARTIAL MIRROR of `avifDecoder`, declared through `image`.
///
/// Omitted trailing fields: imageIndex, imageCount, progressiveState,
/// imageTiming, timescale, duration, durationInTimescales, repetitionCount,
/// alphaPresent, ioStats, diag, io, data and anything newer. Allocate with
/// `avifDecoderCreate`.
#[repr(C)]
#[derive(Debug, Zeroable)]
pub struct avifDecoder {
    pub codecChoice: avifCodecChoice,
    pub maxThreads: i32,
    pub requestedSource: avifDecoderSource,
    pub allowProgressive: avifBool,
    pub allowIncremental: avifBool,
    pub ignoreExif: avifBool,
    pub ignoreXMP: avifBool,
    pub imageSizeLimit: u32,
    pub imageDimensionLimit: u32,
    pub imageCountLimit: u32,
    pub strictFlags: avifStrictFlags,

    // Outputs
    /// Current frame; owned by the decoder.
    pub image: *mut avifImage,
    // -- not declared: remaining native fields --
}

/// PARTIAL MIRROR of `avifEncoder`, declared through `scalingMode`.
///
/// Omitted trailing fields: ioStats, diag, data, csOptions, headerFormat,
/// qualityGainMap and anything newer. Allocate with `avifEncoderCreate`.
#[repr(C)]
#[derive(Debug, Zeroable)]
pub struct avifEncoder {
    pub codecChoice: avifCodecChoice,
    /// Values < 2 disable multithreading.
    pub maxThreads: i32,
    /// [AVIF_SPEED_SLOWEST, AVIF_SPEED_FASTEST] or AVIF_SPEED_DEFAULT
    pub speed: i32,
    pub keyframeInterval: i32,
    pub timescale: u64,
    pub repetitionCount: i32,
    pub extraLayerCount: u32,

    /// [0, 100], 100 = lossless
    pub quality: i32,
    pub qualityAlpha: i32,
    // Deprecated in favour of quality/qualityAlpha but still laid out.
    pub minQuantizer: i32,
    pub maxQuantizer: i32,
    pub minQuantizerAlpha: i32,
    pub maxQuantizerAlpha: i32,

    pub tileRowsLog2: i32,
    pub tileColsLog2: i32,
    /// When set, tileRowsLog2/tileColsLog2 are ignored.
    pub autoTiling: avifBool,

    pub scalingMode: avifScalingMode,
    // -- not declared: remaining native fields --
}

// Loud failure if a field edit changes a partial mirror's prefix length.
#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(std::mem::size_of::<avifImage>() == 224);
    assert!(std::mem::size_of::<avifDecoder>() == 56);
    assert!(std::mem::size_of::<avifEncoder>() == 88);
    assert!(std::mem::size_of::<avifRGBImage>() == 64);
    assert!(std::mem::size_of::<avifRWData>() == 16);
};

#[cfg(feature = "link")]
extern "C" {
    pub fn avifVersion() -> *const std::ffi::c_char;
    pub fn avifResultToString(result: avifResult) -> *const std::ffi::c_char;

    pub fn avifImageCreate(
        width: u32,
        height: u32,
        depth: u32,
        yuvFormat: avifPixelFormat,
    ) -> *mut avifImage;
    pub fn avifImageCreateEmpty() -> *mut avifImage;
    pub fn avifImageDestroy(image: *mut avifImage);

    pub fn avifRWDataFree(raw: *mut avifRWData);

    pub fn avifRGBImageSetDefaults(rgb: *mut avifRGBImage, image: *const avifImage);
    pub fn avifRGBImageAllocatePixels(rgb: *mut avifRGBImage) -> avifResult;
    pub fn avifRGBImageFreePixels(rgb: *mut avifRGBImage);
    pub fn avifImageYUVToRGB(image: *const avifImage, rgb: *mut avifRGBImage) -> avifResult;
    pub fn avifImageRGBToYUV(image: *mut avifImage, rgb: *const avifRGBImage) -> avifResult;

    pub fn avifDecoderCreate() -> *mut avifDecoder;
    pub fn avifDecoderDestroy(decoder: *mut avifDecoder);
    pub fn avifDecoderSetIOMemory(decoder: *mut avifDecoder, data: *const u8, size: usize) -> avifResult;
    pub fn avifDecoderParse(decoder: *mut avifDecoder) -> avifResult;
    pub fn avifDecoderNextImage(decoder: *mut avifDecoder) -> avifResult;
    pub fn avifDecoderReadMemory(
        decoder: *mut avifDecoder,
        image: *mut avifImage,
        data: *const u8,
        size: usize,
    ) -> avifResult;

    pub fn avifEncoderCreate() -> *mut avifEncoder;
    pub fn avifEncoderDestroy(encoder: *mut avifEncoder);
    pub fn avifEncoderWrite(
        encoder: *mut avifEncoder,
        image: *const avifImage,
        output: *mut avifRWData,
    ) -> avifResult;
}
