//! Borrowed views over libavif-allocated structs

use std::slice;

use capture_native_sys::avif::*;
use tracing::debug;

use super::settings::EncoderSettings;
use crate::error::{NativeError, Result};

/// Bytes of an `avifRWData`, empty when unset.
///
/// # Safety
///
/// `data.data` must be null or point to `data.size` readable bytes that
/// live for `'a`.
unsafe fn rw_bytes<'a>(data: &avifRWData) -> &'a [u8] {
    if data.data.is_null() || data.size == 0 {
        &[]
    } else {
        slice::from_raw_parts(data.data, data.size)
    }
}

fn flag(value: avifBool) -> bool {
    value != AVIF_FALSE
}

fn avif_bool(value: bool) -> avifBool {
    if value {
        AVIF_TRUE
    } else {
        AVIF_FALSE
    }
}

/// Which parts of the image `imir` exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    TopBottom,
    LeftRight,
}

/// One presentation transform carried by the image, in the order a
/// renderer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    PixelAspectRatio { h_spacing: u32, v_spacing: u32 },
    CleanAperture(avifCleanApertureBox),
    /// Counter-clockwise quarter turns, 0..=3
    Rotation { quarter_turns: u8 },
    Mirror(MirrorAxis),
}

impl Transform {
    /// Active transforms of `image`, ignoring boxes whose flag is clear.
    pub fn from_image(image: &avifImage) -> Vec<Transform> {
        let flags = image.transformFlags;
        let mut transforms = Vec::new();
        if flags & AVIF_TRANSFORM_PASP != 0 {
            transforms.push(Transform::PixelAspectRatio {
                h_spacing: image.pasp.hSpacing,
                v_spacing: image.pasp.vSpacing,
            });
        }
        if flags & AVIF_TRANSFORM_CLAP != 0 {
            transforms.push(Transform::CleanAperture(image.clap));
        }
        if flags & AVIF_TRANSFORM_IROT != 0 {
            transforms.push(Transform::Rotation {
                quarter_turns: image.irot.angle & 0b11,
            });
        }
        if flags & AVIF_TRANSFORM_IMIR != 0 {
            let axis = if image.imir.axis == 0 {
                MirrorAxis::TopBottom
            } else {
                MirrorAxis::LeftRight
            };
            transforms.push(Transform::Mirror(axis));
        }
        transforms
    }

    pub fn rotation_degrees(&self) -> Option<u32> {
        match self {
            Transform::Rotation { quarter_turns } => Some(u32::from(*quarter_turns) * 90),
            _ => None,
        }
    }
}

/// Read-only view of an `avifImage`.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    raw: &'a avifImage,
}

impl<'a> ImageView<'a> {
    /// # Safety
    ///
    /// Every pointer in the declared prefix (`icc`, `exif`, `xmp`, planes)
    /// must be null or valid for `'a`, as it is for images libavif owns.
    pub unsafe fn new(raw: &'a avifImage) -> Self {
        Self { raw }
    }

    /// # Safety
    ///
    /// As [`ImageView::new`]; `ptr` must be null or a live image.
    pub unsafe fn from_ptr(ptr: *const avifImage) -> Option<Self> {
        ptr.as_ref().map(|raw| Self { raw })
    }

    pub fn raw(&self) -> &'a avifImage {
        self.raw
    }

    pub fn width(&self) -> u32 {
        self.raw.width
    }

    pub fn height(&self) -> u32 {
        self.raw.height
    }

    pub fn depth(&self) -> u32 {
        self.raw.depth
    }

    pub fn yuv_format(&self) -> avifPixelFormat {
        self.raw.yuvFormat
    }

    pub fn is_full_range(&self) -> bool {
        self.raw.yuvRange == AVIF_RANGE_FULL
    }

    pub fn has_alpha(&self) -> bool {
        !self.raw.alphaPlane.is_null()
    }

    pub fn alpha_premultiplied(&self) -> bool {
        flag(self.raw.alphaPremultiplied)
    }

    /// `(primaries, transfer, matrix)` code points
    pub fn cicp(&self) -> (avifColorPrimaries, avifTransferCharacteristics, avifMatrixCoefficients) {
        (
            self.raw.colorPrimaries,
            self.raw.transferCharacteristics,
            self.raw.matrixCoefficients,
        )
    }

    /// `None` when the image carries no light level information.
    pub fn content_light_level(&self) -> Option<avifContentLightLevelInformationBox> {
        let clli = self.raw.clli;
        (clli.maxCLL != 0 || clli.maxPALL != 0).then_some(clli)
    }

    pub fn icc(&self) -> &'a [u8] {
        unsafe { rw_bytes(&self.raw.icc) }
    }

    pub fn exif(&self) -> &'a [u8] {
        unsafe { rw_bytes(&self.raw.exif) }
    }

    pub fn xmp(&self) -> &'a [u8] {
        unsafe { rw_bytes(&self.raw.xmp) }
    }

    pub fn transforms(&self) -> Vec<Transform> {
        Transform::from_image(self.raw)
    }

    pub fn has_gain_map(&self) -> bool {
        !self.raw.gainMap.is_null()
    }
}

/// Settings and current frame of an `avifDecoder`.
#[derive(Debug)]
pub struct DecoderView<'a> {
    raw: &'a mut avifDecoder,
}

impl<'a> DecoderView<'a> {
    /// # Safety
    ///
    /// `raw.image` must be null or a live image owned by the decoder.
    pub unsafe fn new(raw: &'a mut avifDecoder) -> Self {
        Self { raw }
    }

    pub fn codec_choice(&self) -> avifCodecChoice {
        self.raw.codecChoice
    }

    pub fn set_codec_choice(&mut self, choice: avifCodecChoice) {
        self.raw.codecChoice = choice;
    }

    pub fn max_threads(&self) -> i32 {
        self.raw.maxThreads
    }

    pub fn set_max_threads(&mut self, threads: i32) {
        self.raw.maxThreads = threads.max(1);
    }

    pub fn set_requested_source(&mut self, source: avifDecoderSource) {
        self.raw.requestedSource = source;
    }

    pub fn set_ignore_metadata(&mut self, exif: bool, xmp: bool) {
        self.raw.ignoreExif = avif_bool(exif);
        self.raw.ignoreXMP = avif_bool(xmp);
    }

    pub fn strict_flags(&self) -> avifStrictFlags {
        self.raw.strictFlags
    }

    pub fn set_strict_flags(&mut self, flags: avifStrictFlags) {
        self.raw.strictFlags = flags;
    }

    /// `size_limit` caps width * height; a `dimension_limit` of 0 disables
    /// the per-side check.
    pub fn set_limits(&mut self, size_limit: u32, dimension_limit: u32) -> Result<()> {
        if size_limit == 0 || size_limit > AVIF_DEFAULT_IMAGE_SIZE_LIMIT {
            return Err(NativeError::InvalidDimensions(format!(
                "image size limit {size_limit} outside 1..={AVIF_DEFAULT_IMAGE_SIZE_LIMIT}"
            )));
        }
        self.raw.imageSizeLimit = size_limit;
        self.raw.imageDimensionLimit = dimension_limit;
        Ok(())
    }

    pub fn image_size_limit(&self) -> u32 {
        self.raw.imageSizeLimit
    }

    pub fn image_dimension_limit(&self) -> u32 {
        self.raw.imageDimensionLimit
    }

    /// Current frame, once `avifDecoderNextImage` has produced one.
    pub fn image(&self) -> Option<ImageView<'_>> {
        // SAFETY: guaranteed by `DecoderView::new`.
        unsafe { ImageView::from_ptr(self.raw.image) }
    }
}

/// Mutable settings of an `avifEncoder`.
#[derive(Debug)]
pub struct EncoderOptions<'a> {
    raw: &'a mut avifEncoder,
}

impl<'a> EncoderOptions<'a> {
    /// Writes stay within the declared prefix, so any encoder reference is
    /// acceptable.
    pub fn new(raw: &'a mut avifEncoder) -> Self {
        Self { raw }
    }

    pub fn quality(&self) -> i32 {
        self.raw.quality
    }

    /// 0 (worst) to 100 (lossless).
    pub fn set_quality(&mut self, quality: i32) -> Result<()> {
        self.raw.quality = check_quality("quality", quality)?;
        Ok(())
    }

    pub fn quality_alpha(&self) -> i32 {
        self.raw.qualityAlpha
    }

    pub fn set_quality_alpha(&mut self, quality: i32) -> Result<()> {
        self.raw.qualityAlpha = check_quality("alpha quality", quality)?;
        Ok(())
    }

    pub fn speed(&self) -> i32 {
        self.raw.speed
    }

    /// `AVIF_SPEED_DEFAULT` or 0 (slowest) to 10 (fastest).
    pub fn set_speed(&mut self, speed: i32) -> Result<()> {
        if speed != AVIF_SPEED_DEFAULT && !(AVIF_SPEED_SLOWEST..=AVIF_SPEED_FASTEST).contains(&speed) {
            return Err(NativeError::Config(format!(
                "speed {speed} outside {AVIF_SPEED_SLOWEST}..={AVIF_SPEED_FASTEST}"
            )));
        }
        self.raw.speed = speed;
        Ok(())
    }

    pub fn max_threads(&self) -> i32 {
        self.raw.maxThreads
    }

    pub fn set_max_threads(&mut self, threads: i32) {
        self.raw.maxThreads = threads.max(1);
    }

    pub fn set_codec_choice(&mut self, choice: avifCodecChoice) {
        self.raw.codecChoice = choice;
    }

    pub fn keyframe_interval(&self) -> i32 {
        self.raw.keyframeInterval
    }

    /// 0 lets the codec choose.
    pub fn set_keyframe_interval(&mut self, interval: i32) {
        self.raw.keyframeInterval = interval.max(0);
    }

    pub fn set_timescale(&mut self, timescale: u64) {
        self.raw.timescale = timescale;
    }

    pub fn set_repetition_count(&mut self, count: i32) {
        self.raw.repetitionCount = count;
    }

    pub fn auto_tiling(&self) -> bool {
        flag(self.raw.autoTiling)
    }

    pub fn set_auto_tiling(&mut self, enabled: bool) {
        self.raw.autoTiling = avif_bool(enabled);
    }

    /// Manual tiling; each value is a log2 tile count in 0..=6 and is
    /// ignored while auto tiling is on.
    pub fn set_tiles_log2(&mut self, rows: i32, cols: i32) -> Result<()> {
        for (name, value) in [("tile rows", rows), ("tile columns", cols)] {
            if !(0..=6).contains(&value) {
                return Err(NativeError::Config(format!("{name} log2 {value} outside 0..=6")));
            }
        }
        self.raw.tileRowsLog2 = rows;
        self.raw.tileColsLog2 = cols;
        Ok(())
    }

    pub fn scaling_mode(&self) -> avifScalingMode {
        self.raw.scalingMode
    }

    pub fn set_scaling_mode(&mut self, mode: avifScalingMode) -> Result<()> {
        for fraction in [mode.horizontal, mode.vertical] {
            if fraction.d <= 0 || fraction.n <= 0 || fraction.n > fraction.d {
                return Err(NativeError::Config(format!(
                    "scaling fraction {}/{} must be in (0, 1]",
                    fraction.n, fraction.d
                )));
            }
        }
        self.raw.scalingMode = mode;
        Ok(())
    }

    /// Copies validated settings onto the encoder.
    pub fn apply(&mut self, settings: &EncoderSettings) -> Result<()> {
        let settings = settings.clamped();
        self.set_quality(settings.quality)?;
        self.set_quality_alpha(settings.quality_alpha)?;
        self.set_speed(settings.speed)?;
        self.set_max_threads(settings.max_threads);
        self.set_auto_tiling(settings.auto_tiling);
        self.set_keyframe_interval(settings.keyframe_interval);
        debug!(
            target: "capture_native::avif",
            quality = settings.quality,
            quality_alpha = settings.quality_alpha,
            speed = settings.speed,
            max_threads = settings.max_threads,
            auto_tiling = settings.auto_tiling,
            "applied encoder settings"
        );
        Ok(())
    }
}

fn check_quality(name: &str, quality: i32) -> Result<i32> {
    if (AVIF_QUALITY_WORST..=AVIF_QUALITY_BEST).contains(&quality) {
        Ok(quality)
    } else {
        Err(NativeError::Config(format!(
            "{name} {quality} outside {AVIF_QUALITY_WORST}..={AVIF_QUALITY_BEST}"
        )))
    }
}
