//! Building and reading `.bmp` / packed-DIB payloads
//!
//! Captured frames are 32-bit BGRA. [`DibHeader`] produces the V5 header
//! GDI and the clipboard (`CF_DIBV5`) expect for them, and [`BitmapFile`]
//! frames a header and pixels as a standalone file.

use std::mem::size_of;

use bytemuck::{bytes_of, pod_read_unaligned};
use capture_native_sys::{
    BITMAPFILEHEADER, BITMAPINFOHEADER, BITMAPV5HEADER, BI_BITFIELDS, BI_RGB, BMP_SIGNATURE,
    CIEXYZ, CIEXYZTRIPLE, LCS_GM_IMAGES, LCS_sRGB,
};
use tracing::debug;

use crate::error::{NativeError, Result};
use crate::self_sized::SelfDescribing;

const FILE_HEADER_SIZE: usize = size_of::<BITMAPFILEHEADER>();
const INFO_HEADER_SIZE: usize = size_of::<BITMAPINFOHEADER>();
const V5_HEADER_SIZE: usize = size_of::<BITMAPV5HEADER>();

/// Three DWORD masks follow a 40-byte header when it uses `BI_BITFIELDS`.
const BITFIELD_MASKS_SIZE: u32 = 3 * 4;

const SUPPORTED_BIT_COUNTS: [u16; 6] = [1, 4, 8, 16, 24, 32];

/// Bytes per scanline; DIB rows are padded to a DWORD boundary.
pub fn row_stride(width: u32, bpp: u16) -> u64 {
    (u64::from(width) * u64::from(bpp)).div_ceil(32) * 4
}

/// Offset from the start of the info header to the first pixel.
pub fn offset_to_pixels(info: &BITMAPINFOHEADER) -> u32 {
    if info.biCompression == BI_BITFIELDS && info.biSize as usize == INFO_HEADER_SIZE {
        info.biSize + BITFIELD_MASKS_SIZE
    } else {
        info.biSize
    }
}

/// V5 header for an uncompressed sRGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DibHeader(BITMAPV5HEADER);

impl DibHeader {
    /// A negative `height` describes a top-down image.
    ///
    /// The channel masks are set for 8-bit BGRA (`0x00FF0000` red through
    /// `0xFF000000` alpha) and the rendering intent is `LCS_GM_IMAGES`.
    /// `bV5SizeImage` counts padded rows: `row_stride(width, bpp) * |height|`,
    /// not `width * |height| * bpp / 8`.
    pub fn new(width: i32, height: i32, bpp: u16) -> Result<Self> {
        if width <= 0 || height == 0 {
            return Err(NativeError::InvalidDimensions(format!(
                "{width}x{height} bitmap"
            )));
        }
        if !SUPPORTED_BIT_COUNTS.contains(&bpp) {
            return Err(NativeError::InvalidBitmap(format!(
                "unsupported bit count {bpp}"
            )));
        }

        let stride = row_stride(width as u32, bpp);
        let size_image = u32::try_from(stride * u64::from(height.unsigned_abs()))
            .map_err(|_| NativeError::InvalidDimensions(format!("{width}x{height} overflows")))?;

        let header = BITMAPV5HEADER {
            bV5Width: width,
            bV5Height: height,
            bV5BitCount: bpp,
            bV5Compression: BI_RGB,
            bV5SizeImage: size_image,
            bV5RedMask: 0xFF << 16,
            bV5GreenMask: 0xFF << 8,
            bV5BlueMask: 0xFF,
            bV5AlphaMask: 0xFF << 24,
            bV5CSType: LCS_sRGB,
            bV5Endpoints: CIEXYZTRIPLE {
                ciexyzRed: CIEXYZ::splat(0),
                ciexyzGreen: CIEXYZ::splat(0),
                ciexyzBlue: CIEXYZ::splat(0),
            },
            bV5Intent: LCS_GM_IMAGES,
            ..Default::default()
        };
        Ok(Self(header))
    }

    pub fn raw(&self) -> &BITMAPV5HEADER {
        &self.0
    }

    pub fn into_raw(self) -> BITMAPV5HEADER {
        self.0
    }

    pub fn width(&self) -> i32 {
        self.0.bV5Width
    }

    pub fn height(&self) -> i32 {
        self.0.bV5Height
    }

    pub fn is_top_down(&self) -> bool {
        self.0.bV5Height < 0
    }

    pub fn image_size(&self) -> u32 {
        self.0.bV5SizeImage
    }

    pub fn stride(&self) -> u64 {
        row_stride(self.0.bV5Width as u32, self.0.bV5BitCount)
    }

    pub fn offset_to_pixels(&self) -> u32 {
        offset_to_pixels(&self.0.info_header())
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytes_of(&self.0)
    }

    /// Header followed by pixels, as placed on the clipboard.
    pub fn packed_dib(&self, pixels: &[u8]) -> Result<Vec<u8>> {
        self.check_pixels(pixels)?;
        let mut out = Vec::with_capacity(V5_HEADER_SIZE + pixels.len());
        out.extend_from_slice(self.as_bytes());
        out.extend_from_slice(pixels);
        Ok(out)
    }

    fn check_pixels(&self, pixels: &[u8]) -> Result<()> {
        self.0.ensure_sized()?;
        if pixels.len() != self.image_size() as usize {
            return Err(NativeError::InvalidBitmap(format!(
                "expected {} pixel bytes, got {}",
                self.image_size(),
                pixels.len()
            )));
        }
        Ok(())
    }
}

/// A parsed `.bmp` file borrowing its pixel data.
#[derive(Debug, Clone, Copy)]
pub struct BitmapFile<'a> {
    pub file_header: BITMAPFILEHEADER,
    pub info_header: BITMAPINFOHEADER,
    pub pixels: &'a [u8],
}

impl<'a> BitmapFile<'a> {
    /// Serialize a complete `.bmp`: file header, V5 header, pixels.
    pub fn encode(width: i32, height: i32, bpp: u16, pixels: &[u8]) -> Result<Vec<u8>> {
        let header = DibHeader::new(width, height, bpp)?;
        header.check_pixels(pixels)?;

        let off_bits = (FILE_HEADER_SIZE + V5_HEADER_SIZE) as u32;
        let total = off_bits as usize + pixels.len();
        let file_size = u32::try_from(total)
            .map_err(|_| NativeError::InvalidDimensions(format!("{total} byte file")))?;

        let file_header = BITMAPFILEHEADER {
            bfType: BMP_SIGNATURE,
            bfSize: file_size,
            bfReserved1: 0,
            bfReserved2: 0,
            bfOffBits: off_bits,
        };

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(bytes_of(&file_header));
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(pixels);
        debug!(target: "capture_native::bitmap", width, height, bpp, bytes = out.len(), "encoded bitmap");
        Ok(out)
    }

    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let file_header = read_file_header(bytes)?;
        let info_header = read_info_header(bytes)?;

        let start = file_header.bfOffBits as usize;
        if start > bytes.len() {
            return Err(NativeError::InvalidBitmap(format!(
                "pixel offset {start} past end of {} byte file",
                bytes.len()
            )));
        }
        let mut pixels = &bytes[start..];
        if info_header.biSizeImage != 0 {
            let len = info_header.biSizeImage as usize;
            if len > pixels.len() {
                return Err(NativeError::InvalidBitmap(format!(
                    "{len} pixel bytes declared, {} present",
                    pixels.len()
                )));
            }
            pixels = &pixels[..len];
        }

        Ok(Self {
            file_header,
            info_header,
            pixels,
        })
    }
}

/// Reads and validates the 14-byte file header.
pub fn read_file_header(bytes: &[u8]) -> Result<BITMAPFILEHEADER> {
    if bytes.len() < FILE_HEADER_SIZE {
        return Err(NativeError::InvalidBitmap(format!(
            "{} bytes is shorter than a file header",
            bytes.len()
        )));
    }
    let header: BITMAPFILEHEADER = pod_read_unaligned(&bytes[..FILE_HEADER_SIZE]);
    let signature = header.bfType;
    if signature != BMP_SIGNATURE {
        return Err(NativeError::InvalidBitmap(format!(
            "bad signature 0x{signature:04X}"
        )));
    }
    Ok(header)
}

/// Reads the info header that follows the file header. Larger headers (V4,
/// V5) are returned through their common 40-byte prefix.
pub fn read_info_header(bytes: &[u8]) -> Result<BITMAPINFOHEADER> {
    let end = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    if bytes.len() < end {
        return Err(NativeError::InvalidBitmap(
            "truncated info header".to_string(),
        ));
    }
    let info: BITMAPINFOHEADER = pod_read_unaligned(&bytes[FILE_HEADER_SIZE..end]);
    if (info.biSize as usize) < INFO_HEADER_SIZE {
        return Err(NativeError::InvalidBitmap(format!(
            "info header size {} is too small",
            info.biSize
        )));
    }
    Ok(info)
}
