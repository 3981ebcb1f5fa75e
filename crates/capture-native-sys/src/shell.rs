//! Shell and image list structures (shellapi.h / commoncontrols.h)

use bytemuck::Zeroable;

use crate::geometry::RECT;
use crate::size_of_u32;
use crate::win_types::*;

pub const MAX_PATH: usize = 260;
/// Length of `SHFILEINFOW::szTypeName`.
pub const SHFILEINFO_NAMESIZE: usize = 80;

pub const SHGFI_LARGEICON: u32 = 0x0000_0000;
pub const SHGFI_SMALLICON: u32 = 0x0000_0001;
pub const SHGFI_OPENICON: u32 = 0x0000_0002;
pub const SHGFI_USEFILEATTRIBUTES: u32 = 0x0000_0010;
pub const SHGFI_ICON: u32 = 0x0000_0100;
pub const SHGFI_DISPLAYNAME: u32 = 0x0000_0200;
pub const SHGFI_TYPENAME: u32 = 0x0000_0400;
pub const SHGFI_SYSICONINDEX: u32 = 0x0000_4000;

pub const SHIL_LARGE: i32 = 0;
pub const SHIL_SMALL: i32 = 1;
pub const SHIL_EXTRALARGE: i32 = 2;
pub const SHIL_SYSSMALL: i32 = 3;
pub const SHIL_JUMBO: i32 = 4;

pub const ILD_NORMAL: u32 = 0x0000_0000;
pub const ILD_TRANSPARENT: u32 = 0x0000_0001;
pub const ILD_MASK: u32 = 0x0000_0010;
pub const ILD_IMAGE: u32 = 0x0000_0020;
pub const ILD_PRESERVEALPHA: u32 = 0x0000_1000;

pub const ILS_NORMAL: u32 = 0x0000_0000;

pub const CLR_NONE: u32 = 0xFFFF_FFFF;
pub const CLR_DEFAULT: u32 = 0xFF00_0000;

// IShellItemImageFactory::GetImage flags
pub const SIIGBF_RESIZETOFIT: u32 = 0x0000_0000;
pub const SIIGBF_BIGGERSIZEOK: u32 = 0x0000_0001;
pub const SIIGBF_MEMORYONLY: u32 = 0x0000_0002;
pub const SIIGBF_ICONONLY: u32 = 0x0000_0004;
pub const SIIGBF_THUMBNAILONLY: u32 = 0x0000_0008;
pub const SIIGBF_INCACHEONLY: u32 = 0x0000_0010;
pub const SIIGBF_CROPTOSQUARE: u32 = 0x0000_0020;
pub const SIIGBF_WIDETHUMBNAILS: u32 = 0x0000_0040;
pub const SIIGBF_ICONBACKGROUND: u32 = 0x0000_0080;
pub const SIIGBF_SCALEUP: u32 = 0x0000_0100;

/// Decodes a NUL-terminated UTF-16 buffer, replacing invalid units.
pub fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// `SHGetFileInfoW` output. `hIcon` is owned by the caller when
/// `SHGFI_ICON` was requested and must be released with `DestroyIcon`.
#[repr(C)]
#[derive(Clone, Copy, Zeroable)]
pub struct SHFILEINFOW {
    pub hIcon: HICON,
    pub iIcon: i32,
    pub dwAttributes: u32,
    pub szDisplayName: [u16; MAX_PATH],
    pub szTypeName: [u16; SHFILEINFO_NAMESIZE],
}

impl Default for SHFILEINFOW {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

impl SHFILEINFOW {
    pub fn display_name(&self) -> String {
        wide_to_string(&self.szDisplayName)
    }

    pub fn type_name(&self) -> String {
        wide_to_string(&self.szTypeName)
    }
}

impl std::fmt::Debug for SHFILEINFOW {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SHFILEINFOW")
            .field("hIcon", &self.hIcon)
            .field("iIcon", &self.iIcon)
            .field("dwAttributes", &self.dwAttributes)
            .field("szDisplayName", &self.display_name())
            .field("szTypeName", &self.type_name())
            .finish()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct IMAGELISTDRAWPARAMS {
    pub cbSize: u32,
    pub himl: HIMAGELIST,
    pub i: i32,
    pub hdcDst: HDC,
    pub x: i32,
    pub y: i32,
    pub cx: i32,
    pub cy: i32,
    /// x offset from the upper left of the bitmap
    pub xBitmap: i32,
    /// y offset from the upper left of the bitmap
    pub yBitmap: i32,
    pub rgbBk: COLORREF,
    pub rgbFg: COLORREF,
    pub fStyle: u32,
    pub dwRop: u32,
    pub fState: u32,
    pub Frame: u32,
    pub crEffect: COLORREF,
}

impl Default for IMAGELISTDRAWPARAMS {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

/// `IImageList::GetImageInfo` output. The bitmaps belong to the image list.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct IMAGEINFO {
    pub hbmImage: HBITMAP,
    pub hbmMask: HBITMAP,
    pub Unused1: i32,
    pub Unused2: i32,
    pub rcImage: RECT,
}

impl Default for IMAGEINFO {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}
