//! Primitive Win32 type aliases
//!
//! Handles are opaque pointers; their width follows the target.

use std::ffi::c_void;

pub type BOOL = i32;
pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type LONG = i32;
pub type UINT = u32;
pub type ATOM = u16;
pub type COLORREF = u32;
pub type HRESULT = i32;

pub type LPARAM = isize;
pub type WPARAM = usize;
pub type ULONG_PTR = usize;

pub type HANDLE = *mut c_void;
pub type HWND = HANDLE;
pub type HDC = HANDLE;
pub type HBITMAP = HANDLE;
pub type HICON = HANDLE;
pub type HCURSOR = HICON;
pub type HRGN = HANDLE;
pub type HIMAGELIST = HANDLE;
pub type HINSTANCE = HANDLE;

pub type PWSTR = *mut u16;
pub type PCWSTR = *const u16;

pub const FALSE: BOOL = 0;
pub const TRUE: BOOL = 1;

pub const S_OK: HRESULT = 0;
pub const S_FALSE: HRESULT = 1;
pub const E_NOTIMPL: HRESULT = 0x8000_4001_u32 as i32;
pub const E_NOINTERFACE: HRESULT = 0x8000_4002_u32 as i32;
pub const E_POINTER: HRESULT = 0x8000_4003_u32 as i32;
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as i32;
pub const E_INVALIDARG: HRESULT = 0x8007_0057_u32 as i32;

/// `SUCCEEDED(hr)`
#[inline]
pub const fn succeeded(hr: HRESULT) -> bool {
    hr >= 0
}

/// COM interface identifier.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl GUID {
    /// Build a GUID from its canonical 128-bit value, e.g.
    /// `0x46EB5926_582E_4017_9FDF_E8998DAA0950`.
    pub const fn from_u128(uuid: u128) -> Self {
        Self {
            data1: (uuid >> 96) as u32,
            data2: ((uuid >> 80) & 0xffff) as u16,
            data3: ((uuid >> 64) & 0xffff) as u16,
            data4: (uuid as u64).to_be_bytes(),
        }
    }
}

pub type IID = GUID;
pub type REFIID = *const GUID;
