//! Interleaved pixel buffers handed to libavif's colour conversion

use std::marker::PhantomData;

use bytemuck::Zeroable;
use capture_native_sys::avif::*;

use crate::error::{NativeError, Result};

/// Channel order of an interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbFormat {
    Rgb,
    Rgba,
    Argb,
    Bgr,
    Bgra,
    Abgr,
    /// 16-bit packed, 8-bit depth only
    Rgb565,
}

impl RgbFormat {
    pub fn to_raw(self) -> avifRGBFormat {
        match self {
            RgbFormat::Rgb => AVIF_RGB_FORMAT_RGB,
            RgbFormat::Rgba => AVIF_RGB_FORMAT_RGBA,
            RgbFormat::Argb => AVIF_RGB_FORMAT_ARGB,
            RgbFormat::Bgr => AVIF_RGB_FORMAT_BGR,
            RgbFormat::Bgra => AVIF_RGB_FORMAT_BGRA,
            RgbFormat::Abgr => AVIF_RGB_FORMAT_ABGR,
            RgbFormat::Rgb565 => AVIF_RGB_FORMAT_RGB_565,
        }
    }

    pub fn from_raw(raw: avifRGBFormat) -> Option<Self> {
        Some(match raw {
            AVIF_RGB_FORMAT_RGB => RgbFormat::Rgb,
            AVIF_RGB_FORMAT_RGBA => RgbFormat::Rgba,
            AVIF_RGB_FORMAT_ARGB => RgbFormat::Argb,
            AVIF_RGB_FORMAT_BGR => RgbFormat::Bgr,
            AVIF_RGB_FORMAT_BGRA => RgbFormat::Bgra,
            AVIF_RGB_FORMAT_ABGR => RgbFormat::Abgr,
            AVIF_RGB_FORMAT_RGB_565 => RgbFormat::Rgb565,
            _ => return None,
        })
    }

    pub fn channel_count(self) -> u32 {
        match self {
            RgbFormat::Rgb | RgbFormat::Bgr => 3,
            RgbFormat::Rgba | RgbFormat::Argb | RgbFormat::Bgra | RgbFormat::Abgr => 4,
            RgbFormat::Rgb565 => 3,
        }
    }

    pub fn has_alpha(self) -> bool {
        self.channel_count() == 4
    }

    /// Bytes per pixel at `depth` bits per channel.
    pub fn pixel_size(self, depth: u32) -> u32 {
        match self {
            RgbFormat::Rgb565 => 2,
            _ if depth > 8 => self.channel_count() * 2,
            _ => self.channel_count(),
        }
    }
}

/// Builder for [`RgbImage`].
#[derive(Debug, Clone, Copy)]
pub struct RgbImageBuilder {
    raw: avifRGBImage,
}

impl RgbImageBuilder {
    pub fn depth(mut self, depth: u32) -> Self {
        self.raw.depth = depth;
        self
    }

    pub fn format(mut self, format: RgbFormat) -> Self {
        self.raw.format = format.to_raw();
        self
    }

    pub fn chroma_upsampling(mut self, upsampling: avifChromaUpsampling) -> Self {
        self.raw.chromaUpsampling = upsampling;
        self
    }

    pub fn chroma_downsampling(mut self, downsampling: avifChromaDownsampling) -> Self {
        self.raw.chromaDownsampling = downsampling;
        self
    }

    pub fn ignore_alpha(mut self, ignore: bool) -> Self {
        self.raw.ignoreAlpha = ignore as avifBool;
        self
    }

    pub fn alpha_premultiplied(mut self, premultiplied: bool) -> Self {
        self.raw.alphaPremultiplied = premultiplied as avifBool;
        self
    }

    pub fn max_threads(mut self, threads: i32) -> Self {
        self.raw.maxThreads = threads.max(1);
        self
    }

    /// Read-only source, e.g. for `avifImageRGBToYUV`.
    pub fn build(self, pixels: &[u8], row_bytes: u32) -> Result<RgbImage<'_>> {
        self.validate(pixels.len(), row_bytes)?;
        let mut raw = self.raw;
        raw.pixels = pixels.as_ptr().cast_mut();
        raw.rowBytes = row_bytes;
        Ok(RgbImage {
            raw,
            writable: false,
            _pixels: PhantomData,
        })
    }

    /// Writable destination, e.g. for `avifImageYUVToRGB`.
    pub fn build_mut(self, pixels: &mut [u8], row_bytes: u32) -> Result<RgbImage<'_>> {
        self.validate(pixels.len(), row_bytes)?;
        let mut raw = self.raw;
        raw.pixels = pixels.as_mut_ptr();
        raw.rowBytes = row_bytes;
        Ok(RgbImage {
            raw,
            writable: true,
            _pixels: PhantomData,
        })
    }

    /// Tightly packed row length for this configuration.
    pub fn packed_row_bytes(&self) -> Result<u32> {
        let format = self.rgb_format()?;
        self.raw
            .width
            .checked_mul(format.pixel_size(self.raw.depth))
            .ok_or_else(|| NativeError::InvalidDimensions(format!("{} px row", self.raw.width)))
    }

    fn rgb_format(&self) -> Result<RgbFormat> {
        RgbFormat::from_raw(self.raw.format).ok_or_else(|| {
            NativeError::InvalidBitmap(format!("unknown RGB format {}", self.raw.format))
        })
    }

    fn validate(&self, len: usize, row_bytes: u32) -> Result<()> {
        let (width, height, depth) = (self.raw.width, self.raw.height, self.raw.depth);
        if width == 0 || height == 0 {
            return Err(NativeError::InvalidDimensions(format!("{width}x{height} image")));
        }
        if !matches!(depth, 8 | 10 | 12 | 16) {
            return Err(NativeError::InvalidBitmap(format!("unsupported depth {depth}")));
        }
        if self.rgb_format()? == RgbFormat::Rgb565 && depth != 8 {
            return Err(NativeError::InvalidBitmap("RGB565 requires depth 8".to_string()));
        }

        let min_row = self.packed_row_bytes()?;
        if row_bytes < min_row {
            return Err(NativeError::InvalidDimensions(format!(
                "row bytes {row_bytes} shorter than {min_row} for {width} px"
            )));
        }
        let needed = u64::from(row_bytes) * u64::from(height - 1) + u64::from(min_row);
        if (len as u64) < needed {
            return Err(NativeError::InvalidDimensions(format!(
                "{len} byte buffer, {needed} needed for {width}x{height}"
            )));
        }
        Ok(())
    }
}

/// An `avifRGBImage` describing a borrowed pixel buffer.
#[derive(Debug)]
pub struct RgbImage<'a> {
    raw: avifRGBImage,
    writable: bool,
    _pixels: PhantomData<&'a mut [u8]>,
}

impl<'a> RgbImage<'a> {
    /// 8-bit BGRA with defaults matching `avifRGBImageSetDefaults`.
    pub fn builder(width: u32, height: u32) -> RgbImageBuilder {
        let mut raw: avifRGBImage = Zeroable::zeroed();
        raw.width = width;
        raw.height = height;
        raw.depth = 8;
        raw.format = AVIF_RGB_FORMAT_BGRA;
        raw.chromaUpsampling = AVIF_CHROMA_UPSAMPLING_AUTOMATIC;
        raw.chromaDownsampling = AVIF_CHROMA_DOWNSAMPLING_AUTOMATIC;
        raw.maxThreads = 1;
        RgbImageBuilder { raw }
    }

    pub fn raw(&self) -> &avifRGBImage {
        &self.raw
    }

    pub fn width(&self) -> u32 {
        self.raw.width
    }

    pub fn height(&self) -> u32 {
        self.raw.height
    }

    pub fn row_bytes(&self) -> u32 {
        self.raw.rowBytes
    }

    pub fn format(&self) -> Option<RgbFormat> {
        RgbFormat::from_raw(self.raw.format)
    }

    pub fn as_ptr(&self) -> *const avifRGBImage {
        &self.raw
    }

    /// `None` for images built over a shared buffer.
    pub fn as_mut_ptr(&mut self) -> Option<*mut avifRGBImage> {
        self.writable.then_some(&mut self.raw as *mut avifRGBImage)
    }
}
