//! `SendInput` records (winuser.h)
//!
//! `INPUT` is a tagged union: `type` selects which member of `u` is live.
//! The union starts at pointer alignment because `MOUSEINPUT` and
//! `KEYBDINPUT` end in a `ULONG_PTR`.

use bytemuck::Zeroable;

use crate::win_types::ULONG_PTR;

pub const INPUT_MOUSE: u32 = 0;
pub const INPUT_KEYBOARD: u32 = 1;
pub const INPUT_HARDWARE: u32 = 2;

pub const MOUSEEVENTF_MOVE: u32 = 0x0001;
pub const MOUSEEVENTF_LEFTDOWN: u32 = 0x0002;
pub const MOUSEEVENTF_LEFTUP: u32 = 0x0004;
pub const MOUSEEVENTF_RIGHTDOWN: u32 = 0x0008;
pub const MOUSEEVENTF_RIGHTUP: u32 = 0x0010;
pub const MOUSEEVENTF_MIDDLEDOWN: u32 = 0x0020;
pub const MOUSEEVENTF_MIDDLEUP: u32 = 0x0040;
pub const MOUSEEVENTF_XDOWN: u32 = 0x0080;
pub const MOUSEEVENTF_XUP: u32 = 0x0100;
pub const MOUSEEVENTF_WHEEL: u32 = 0x0800;
pub const MOUSEEVENTF_HWHEEL: u32 = 0x1000;
pub const MOUSEEVENTF_MOVE_NOCOALESCE: u32 = 0x2000;
pub const MOUSEEVENTF_VIRTUALDESK: u32 = 0x4000;
pub const MOUSEEVENTF_ABSOLUTE: u32 = 0x8000;

pub const KEYEVENTF_EXTENDEDKEY: u32 = 0x0001;
pub const KEYEVENTF_KEYUP: u32 = 0x0002;
pub const KEYEVENTF_UNICODE: u32 = 0x0004;
pub const KEYEVENTF_SCANCODE: u32 = 0x0008;

pub const XBUTTON1: u32 = 0x0001;
pub const XBUTTON2: u32 = 0x0002;

pub const WHEEL_DELTA: i32 = 120;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct MOUSEINPUT {
    pub dx: i32,
    pub dy: i32,
    pub mouseData: u32,
    pub dwFlags: u32,
    pub time: u32,
    pub dwExtraInfo: ULONG_PTR,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct KEYBDINPUT {
    pub wVk: u16,
    pub wScan: u16,
    pub dwFlags: u32,
    pub time: u32,
    pub dwExtraInfo: ULONG_PTR,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct HARDWAREINPUT {
    pub uMsg: u32,
    pub wParamL: u16,
    pub wParamH: u16,
}

/// Overlapping payloads of [`INPUT`].
#[repr(C)]
#[derive(Clone, Copy)]
pub union INPUT_0 {
    pub mi: MOUSEINPUT,
    pub ki: KEYBDINPUT,
    pub hi: HARDWAREINPUT,
}

// SAFETY: every member is plain integers, so all-zero is a valid value of
// each interpretation.
unsafe impl Zeroable for INPUT_0 {}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct INPUT {
    pub r#type: u32,
    pub u: INPUT_0,
}

unsafe impl Zeroable for INPUT {}

impl Default for INPUT {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

impl std::fmt::Debug for INPUT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only the member selected by `type` is meaningful.
        let mut s = f.debug_struct("INPUT");
        s.field("type", &self.r#type);
        unsafe {
            match self.r#type {
                INPUT_MOUSE => s.field("mi", &self.u.mi),
                INPUT_KEYBOARD => s.field("ki", &self.u.ki),
                INPUT_HARDWARE => s.field("hi", &self.u.hi),
                _ => s.field("u", &"<unknown>"),
            };
        }
        s.finish()
    }
}
