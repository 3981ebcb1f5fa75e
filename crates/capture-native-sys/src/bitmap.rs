//! Bitmap file and DIB headers (wingdi.h)
//!
//! These are on-disk formats as much as API structures: the bytes produced by
//! `bytemuck::bytes_of` are exactly what a `.bmp` file or a `CF_DIBV5`
//! clipboard payload contains (little-endian targets only, which covers
//! every Windows target).

use bytemuck::{Pod, Zeroable};

use crate::size_of_u32;

/// `"BM"` read as a little-endian u16.
pub const BMP_SIGNATURE: u16 = 0x4D42;

pub const BI_RGB: u32 = 0;
pub const BI_RLE8: u32 = 1;
pub const BI_RLE4: u32 = 2;
pub const BI_BITFIELDS: u32 = 3;
pub const BI_JPEG: u32 = 4;
pub const BI_PNG: u32 = 5;

pub const DIB_RGB_COLORS: u32 = 0;
pub const DIB_PAL_COLORS: u32 = 1;

/// `'sRGB'`
pub const LCS_sRGB: u32 = 0x7352_4742;
/// `'Win '`
pub const LCS_WINDOWS_COLOR_SPACE: u32 = 0x5769_6E20;
pub const LCS_CALIBRATED_RGB: u32 = 0;

pub const LCS_GM_BUSINESS: u32 = 1;
pub const LCS_GM_GRAPHICS: u32 = 2;
pub const LCS_GM_IMAGES: u32 = 4;
pub const LCS_GM_ABS_COLORIMETRIC: u32 = 8;

/// 14-byte file header. The SDK declares it under `pack(2)`, which puts
/// `bfSize` at offset 2 instead of 4.
#[repr(C, packed(2))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BITMAPFILEHEADER {
    pub bfType: u16,
    pub bfSize: u32,
    pub bfReserved1: u16,
    pub bfReserved2: u16,
    pub bfOffBits: u32,
}

// SAFETY: packed(2) leaves no padding (2 + 4 + 2 + 2 + 4 = 14) and every
// field is a plain integer.
unsafe impl Zeroable for BITMAPFILEHEADER {}
unsafe impl Pod for BITMAPFILEHEADER {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct BITMAPINFOHEADER {
    pub biSize: u32,
    pub biWidth: i32,
    pub biHeight: i32,
    pub biPlanes: u16,
    pub biBitCount: u16,
    pub biCompression: u32,
    pub biSizeImage: u32,
    pub biXPelsPerMeter: i32,
    pub biYPelsPerMeter: i32,
    pub biClrUsed: u32,
    pub biClrImportant: u32,
}

impl Default for BITMAPINFOHEADER {
    fn default() -> Self {
        Self {
            biSize: size_of_u32::<Self>(),
            biPlanes: 1,
            ..Zeroable::zeroed()
        }
    }
}

/// 2.30 fixed-point colour coordinate.
pub type FXPT2DOT30 = i32;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct CIEXYZ {
    pub ciexyzX: FXPT2DOT30,
    pub ciexyzY: FXPT2DOT30,
    pub ciexyzZ: FXPT2DOT30,
}

impl CIEXYZ {
    /// All three coordinates set to `value`.
    pub const fn splat(value: FXPT2DOT30) -> Self {
        Self {
            ciexyzX: value,
            ciexyzY: value,
            ciexyzZ: value,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct CIEXYZTRIPLE {
    pub ciexyzRed: CIEXYZ,
    pub ciexyzGreen: CIEXYZ,
    pub ciexyzBlue: CIEXYZ,
}

/// 124-byte V5 header. Its first 40 bytes are a `BITMAPINFOHEADER`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct BITMAPV5HEADER {
    pub bV5Size: u32,
    pub bV5Width: i32,
    pub bV5Height: i32,
    pub bV5Planes: u16,
    pub bV5BitCount: u16,
    pub bV5Compression: u32,
    pub bV5SizeImage: u32,
    pub bV5XPelsPerMeter: i32,
    pub bV5YPelsPerMeter: i32,
    pub bV5ClrUsed: u32,
    pub bV5ClrImportant: u32,
    pub bV5RedMask: u32,
    pub bV5GreenMask: u32,
    pub bV5BlueMask: u32,
    pub bV5AlphaMask: u32,
    pub bV5CSType: u32,
    pub bV5Endpoints: CIEXYZTRIPLE,
    pub bV5GammaRed: u32,
    pub bV5GammaGreen: u32,
    pub bV5GammaBlue: u32,
    pub bV5Intent: u32,
    pub bV5ProfileData: u32,
    pub bV5ProfileSize: u32,
    pub bV5Reserved: u32,
}

impl Default for BITMAPV5HEADER {
    fn default() -> Self {
        Self {
            bV5Size: size_of_u32::<Self>(),
            bV5Planes: 1,
            ..Zeroable::zeroed()
        }
    }
}

impl BITMAPV5HEADER {
    /// The leading `BITMAPINFOHEADER` view of this header. `biSize` still
    /// reports 124 so readers know more fields follow.
    pub fn info_header(&self) -> BITMAPINFOHEADER {
        bytemuck::pod_read_unaligned(&bytemuck::bytes_of(self)[..std::mem::size_of::<BITMAPINFOHEADER>()])
    }
}
