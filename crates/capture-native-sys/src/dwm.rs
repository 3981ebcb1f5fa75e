//! Desktop Window Manager structures (dwmapi.h)

use bytemuck::Zeroable;

use crate::geometry::RECT;
use crate::win_types::*;

pub const DWM_BB_ENABLE: u32 = 0x0000_0001;
pub const DWM_BB_BLURREGION: u32 = 0x0000_0002;
pub const DWM_BB_TRANSITIONONMAXIMIZED: u32 = 0x0000_0004;

pub const DWM_TNP_RECTDESTINATION: u32 = 0x0000_0001;
pub const DWM_TNP_RECTSOURCE: u32 = 0x0000_0002;
pub const DWM_TNP_OPACITY: u32 = 0x0000_0004;
pub const DWM_TNP_VISIBLE: u32 = 0x0000_0008;
pub const DWM_TNP_SOURCECLIENTAREAONLY: u32 = 0x0000_0010;

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct DWM_BLURBEHIND {
    pub dwFlags: u32,
    pub fEnable: BOOL,
    pub hRgnBlur: HRGN,
    pub fTransitionOnMaximized: BOOL,
}

impl Default for DWM_BLURBEHIND {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

/// `DwmUpdateThumbnailProperties` payload. `opacity` is a single byte
/// followed by three bytes of padding before the two BOOLs.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct DWM_THUMBNAIL_PROPERTIES {
    pub dwFlags: u32,
    pub rcDestination: RECT,
    pub rcSource: RECT,
    pub opacity: u8,
    pub fVisible: BOOL,
    pub fSourceClientAreaOnly: BOOL,
}
