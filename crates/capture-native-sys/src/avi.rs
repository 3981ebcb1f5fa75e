//! Video for Windows AVI file structures (vfw.h)

use bytemuck::Zeroable;

use crate::geometry::RECT;

/// `mmioFOURCC`: four ASCII characters packed little-endian.
pub const fn mmio_fourcc(code: [u8; 4]) -> u32 {
    u32::from_le_bytes(code)
}

pub const streamtypeVIDEO: u32 = mmio_fourcc(*b"vids");
pub const streamtypeAUDIO: u32 = mmio_fourcc(*b"auds");
pub const streamtypeMIDI: u32 = mmio_fourcc(*b"mids");
pub const streamtypeTEXT: u32 = mmio_fourcc(*b"txts");

pub const AVISTREAMINFO_DISABLED: u32 = 0x0000_0001;
pub const AVISTREAMINFO_FORMATCHANGES: u32 = 0x0001_0000;

pub const AVICOMPRESSF_INTERLEAVE: u32 = 0x0000_0001;
pub const AVICOMPRESSF_DATARATE: u32 = 0x0000_0002;
pub const AVICOMPRESSF_KEYFRAMES: u32 = 0x0000_0004;
pub const AVICOMPRESSF_VALID: u32 = 0x0000_0008;

/// Wide-character stream description (`AVISTREAMINFOW`). All members are
/// naturally aligned, so the 204-byte layout is the same for every pointer
/// width.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct AVISTREAMINFOW {
    pub fccType: u32,
    pub fccHandler: u32,
    pub dwFlags: u32,
    pub dwCaps: u32,
    pub wPriority: u16,
    pub wLanguage: u16,
    pub dwScale: u32,
    pub dwRate: u32,
    pub dwStart: u32,
    pub dwLength: u32,
    pub dwInitialFrames: u32,
    pub dwSuggestedBufferSize: u32,
    pub dwQuality: u32,
    pub dwSampleSize: u32,
    pub rcFrame: RECT,
    pub dwEditCount: u32,
    pub dwFormatChangeCount: u32,
    pub szName: [u16; 64],
}

impl Default for AVISTREAMINFOW {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

impl AVISTREAMINFOW {
    /// Stores `name` as a NUL-terminated UTF-16 string, truncating to fit
    /// without splitting a surrogate pair.
    pub fn set_name(&mut self, name: &str) {
        const CAPACITY: usize = 63;
        self.szName = [0; 64];
        let mut len = 0;
        for (slot, unit) in self.szName[..CAPACITY].iter_mut().zip(name.encode_utf16()) {
            *slot = unit;
            len += 1;
        }
        if len == CAPACITY && (0xD800..=0xDBFF).contains(&self.szName[CAPACITY - 1]) {
            self.szName[CAPACITY - 1] = 0;
        }
    }

    pub fn name(&self) -> String {
        crate::shell::wide_to_string(&self.szName)
    }
}

/// Compression settings handed to `AVISaveOptions`/`AVIMakeCompressedStream`.
///
/// `lpFormat` and `lpParms` are real pointers, so from `lpFormat` onwards the
/// offsets differ between 32-bit (44 bytes total) and 64-bit (56 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct AVICOMPRESSOPTIONS {
    pub fccType: u32,
    pub fccHandler: u32,
    pub dwKeyFrameEvery: u32,
    pub dwQuality: u32,
    pub dwBytesPerSecond: u32,
    pub dwFlags: u32,
    pub lpFormat: *mut std::ffi::c_void,
    pub cbFormat: u32,
    pub lpParms: *mut std::ffi::c_void,
    pub cbParms: u32,
    pub dwInterleaveEvery: u32,
}

impl Default for AVICOMPRESSOPTIONS {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}
