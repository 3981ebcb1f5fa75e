//! Window, cursor and taskbar structures (winuser.h / shellapi.h / timeapi.h)
//!
//! Structures with a leading `cbSize`/`length` field are versioned by their
//! size: the caller fills it before handing the struct to the OS. Their
//! `Default` impls do that.

use bytemuck::Zeroable;

use crate::geometry::{POINT, RECT};
use crate::size_of_u32;
use crate::win_types::*;

// ShowWindow commands, also stored in WINDOWPLACEMENT::showCmd
pub const SW_HIDE: u32 = 0;
pub const SW_SHOWNORMAL: u32 = 1;
pub const SW_SHOWMINIMIZED: u32 = 2;
pub const SW_SHOWMAXIMIZED: u32 = 3;
pub const SW_SHOWNOACTIVATE: u32 = 4;
pub const SW_SHOW: u32 = 5;
pub const SW_MINIMIZE: u32 = 6;
pub const SW_SHOWMINNOACTIVE: u32 = 7;
pub const SW_SHOWNA: u32 = 8;
pub const SW_RESTORE: u32 = 9;
pub const SW_SHOWDEFAULT: u32 = 10;
pub const SW_FORCEMINIMIZE: u32 = 11;

pub const WPF_SETMINPOSITION: u32 = 0x0001;
pub const WPF_RESTORETOMAXIMIZED: u32 = 0x0002;
pub const WPF_ASYNCWINDOWPLACEMENT: u32 = 0x0004;

pub const WS_ACTIVECAPTION: u32 = 0x0001;

pub const FLASHW_STOP: u32 = 0;
pub const FLASHW_CAPTION: u32 = 0x0000_0001;
pub const FLASHW_TRAY: u32 = 0x0000_0002;
pub const FLASHW_ALL: u32 = FLASHW_CAPTION | FLASHW_TRAY;
pub const FLASHW_TIMER: u32 = 0x0000_0004;
pub const FLASHW_TIMERNOFG: u32 = 0x0000_000C;

pub const SB_HORZ: i32 = 0;
pub const SB_VERT: i32 = 1;
pub const SB_CTL: i32 = 2;
pub const SB_BOTH: i32 = 3;

pub const SIF_RANGE: u32 = 0x0001;
pub const SIF_PAGE: u32 = 0x0002;
pub const SIF_POS: u32 = 0x0004;
pub const SIF_DISABLENOSCROLL: u32 = 0x0008;
pub const SIF_TRACKPOS: u32 = 0x0010;
pub const SIF_ALL: u32 = SIF_RANGE | SIF_PAGE | SIF_POS | SIF_TRACKPOS;

pub const ABM_NEW: u32 = 0x0000_0000;
pub const ABM_REMOVE: u32 = 0x0000_0001;
pub const ABM_QUERYPOS: u32 = 0x0000_0002;
pub const ABM_SETPOS: u32 = 0x0000_0003;
pub const ABM_GETSTATE: u32 = 0x0000_0004;
pub const ABM_GETTASKBARPOS: u32 = 0x0000_0005;
pub const ABM_ACTIVATE: u32 = 0x0000_0006;
pub const ABM_GETAUTOHIDEBAR: u32 = 0x0000_0007;
pub const ABM_SETAUTOHIDEBAR: u32 = 0x0000_0008;

pub const ABE_LEFT: u32 = 0;
pub const ABE_TOP: u32 = 1;
pub const ABE_RIGHT: u32 = 2;
pub const ABE_BOTTOM: u32 = 3;

pub const ABS_AUTOHIDE: u32 = 0x0000_0001;
pub const ABS_ALWAYSONTOP: u32 = 0x0000_0002;

pub const CURSOR_SHOWING: u32 = 0x0000_0001;
pub const CURSOR_SUPPRESSED: u32 = 0x0000_0002;

pub const AC_SRC_OVER: u8 = 0x00;
pub const AC_SRC_ALPHA: u8 = 0x01;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct WINDOWINFO {
    pub cbSize: u32,
    pub rcWindow: RECT,
    pub rcClient: RECT,
    pub dwStyle: u32,
    pub dwExStyle: u32,
    pub dwWindowStatus: u32,
    pub cxWindowBorders: u32,
    pub cyWindowBorders: u32,
    pub atomWindowType: ATOM,
    pub wCreatorVersion: u16,
}

impl Default for WINDOWINFO {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct WINDOWPLACEMENT {
    pub length: u32,
    pub flags: u32,
    pub showCmd: u32,
    pub ptMinPosition: POINT,
    pub ptMaxPosition: POINT,
    pub rcNormalPosition: RECT,
}

impl Default for WINDOWPLACEMENT {
    fn default() -> Self {
        Self {
            length: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct BLENDFUNCTION {
    pub BlendOp: u8,
    pub BlendFlags: u8,
    pub SourceConstantAlpha: u8,
    pub AlphaFormat: u8,
}

impl BLENDFUNCTION {
    /// Blend for `UpdateLayeredWindow` with a premultiplied per-pixel alpha
    /// source scaled by `alpha`.
    pub const fn per_pixel_alpha(alpha: u8) -> Self {
        Self {
            BlendOp: AC_SRC_OVER,
            BlendFlags: 0,
            SourceConstantAlpha: alpha,
            AlphaFormat: AC_SRC_ALPHA,
        }
    }
}

/// `SHAppBarMessage` payload. `cbSize` is a DWORD followed by a
/// pointer-aligned window handle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct APPBARDATA {
    pub cbSize: u32,
    pub hWnd: HWND,
    pub uCallbackMessage: u32,
    pub uEdge: u32,
    pub rc: RECT,
    pub lParam: LPARAM,
}

impl Default for APPBARDATA {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct CURSORINFO {
    pub cbSize: u32,
    pub flags: u32,
    pub hCursor: HCURSOR,
    pub ptScreenPos: POINT,
}

impl Default for CURSORINFO {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

impl CURSORINFO {
    pub const fn is_showing(&self) -> bool {
        self.flags & CURSOR_SHOWING != 0
    }
}

/// Returned by `GetIconInfo`. Both bitmaps belong to the caller and must be
/// deleted with `DeleteObject`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct ICONINFO {
    pub fIcon: BOOL,
    pub xHotspot: u32,
    pub yHotspot: u32,
    pub hbmMask: HBITMAP,
    pub hbmColor: HBITMAP,
}

impl Default for ICONINFO {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct FLASHWINFO {
    pub cbSize: u32,
    pub hwnd: HWND,
    pub dwFlags: u32,
    pub uCount: u32,
    pub dwTimeout: u32,
}

impl Default for FLASHWINFO {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SCROLLINFO {
    pub cbSize: u32,
    pub fMask: u32,
    pub nMin: i32,
    pub nMax: i32,
    pub nPage: u32,
    pub nPos: i32,
    pub nTrackPos: i32,
}

impl Default for SCROLLINFO {
    fn default() -> Self {
        Self {
            cbSize: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

/// `timeGetDevCaps` result.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct TIMECAPS {
    pub wPeriodMin: u32,
    pub wPeriodMax: u32,
}
