//! Win32 calls over the shared layouts
//!
//! Each function fills one of the `capture_native_sys` mirrors through the
//! matching `windows-sys` import. The mirrors are passed by pointer cast,
//! which the size asserts below keep honest.

use std::ffi::OsStr;
use std::iter;
use std::mem::size_of;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use capture_native_sys::{
    ABM_GETTASKBARPOS, APPBARDATA, CURSORINFO, FLASHWINFO, HANDLE, HWND, INPUT,
    PROCESS_INFORMATION, RECT, SCROLLINFO, STARTF_USESHOWWINDOW, STARTUPINFOW, WINDOWINFO,
    WINDOWPLACEMENT,
};
use tracing::{debug, info};
use windows_sys::Win32::Foundation::{CloseHandle, GetLastError};
use windows_sys::Win32::System::Threading::{self as threading, CreateProcessW};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{self as kbm, SendInput};
use windows_sys::Win32::UI::Shell::{self as shell, SHAppBarMessage};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    self as wam, FlashWindowEx, GetCursorInfo, GetScrollInfo, GetWindowInfo, GetWindowPlacement,
};

use crate::error::{NativeError, Result};
use crate::input::InputBatch;
use crate::process::{command_line, ProcessHandles};
use crate::self_sized::SelfDescribing;

macro_rules! same_size {
    ($($ours:ty => $theirs:ty),* $(,)?) => {
        $( const _: () = assert!(size_of::<$ours>() == size_of::<$theirs>()); )*
    };
}

same_size! {
    WINDOWINFO => wam::WINDOWINFO,
    WINDOWPLACEMENT => wam::WINDOWPLACEMENT,
    CURSORINFO => wam::CURSORINFO,
    SCROLLINFO => wam::SCROLLINFO,
    FLASHWINFO => wam::FLASHWINFO,
    APPBARDATA => shell::APPBARDATA,
    INPUT => kbm::INPUT,
    STARTUPINFOW => threading::STARTUPINFOW,
    PROCESS_INFORMATION => threading::PROCESS_INFORMATION,
}

fn last_error(call: &'static str) -> NativeError {
    NativeError::Os {
        call,
        code: unsafe { GetLastError() },
    }
}

fn check_bool(call: &'static str, ok: i32) -> Result<()> {
    if ok != 0 {
        Ok(())
    } else {
        Err(last_error(call))
    }
}

pub fn window_info(hwnd: HWND) -> Result<WINDOWINFO> {
    let mut info = WINDOWINFO::default();
    info.ensure_sized()?;
    let ok = unsafe { GetWindowInfo(hwnd as _, ptr::addr_of_mut!(info).cast()) };
    check_bool("GetWindowInfo", ok)?;
    Ok(info)
}

pub fn window_placement(hwnd: HWND) -> Result<WINDOWPLACEMENT> {
    let mut placement = WINDOWPLACEMENT::default();
    placement.ensure_sized()?;
    let ok = unsafe { GetWindowPlacement(hwnd as _, ptr::addr_of_mut!(placement).cast()) };
    check_bool("GetWindowPlacement", ok)?;
    Ok(placement)
}

pub fn cursor_info() -> Result<CURSORINFO> {
    let mut info = CURSORINFO::default();
    info.ensure_sized()?;
    let ok = unsafe { GetCursorInfo(ptr::addr_of_mut!(info).cast()) };
    check_bool("GetCursorInfo", ok)?;
    Ok(info)
}

/// `bar` is one of the `SB_*` values, `mask` a set of `SIF_*` flags.
pub fn scroll_info(hwnd: HWND, bar: i32, mask: u32) -> Result<SCROLLINFO> {
    let mut info = SCROLLINFO {
        fMask: mask,
        ..SCROLLINFO::default()
    };
    info.ensure_sized()?;
    let ok = unsafe { GetScrollInfo(hwnd as _, bar as _, ptr::addr_of_mut!(info).cast()) };
    check_bool("GetScrollInfo", ok)?;
    Ok(info)
}

/// Returns whether the window was active before the call.
pub fn flash_window(hwnd: HWND, flags: u32, count: u32, timeout_ms: u32) -> Result<bool> {
    let info = FLASHWINFO {
        hwnd,
        dwFlags: flags,
        uCount: count,
        dwTimeout: timeout_ms,
        ..FLASHWINFO::default()
    };
    info.ensure_sized()?;
    let was_active = unsafe { FlashWindowEx(ptr::addr_of!(info).cast()) };
    Ok(was_active != 0)
}

/// Screen edge (`ABE_*`) and bounds of the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarPosition {
    pub edge: u32,
    pub bounds: RECT,
}

pub fn taskbar_position() -> Result<TaskbarPosition> {
    let mut data = APPBARDATA::default();
    data.ensure_sized()?;
    let ok = unsafe { SHAppBarMessage(ABM_GETTASKBARPOS, ptr::addr_of_mut!(data).cast()) };
    if ok == 0 {
        return Err(last_error("SHAppBarMessage"));
    }
    Ok(TaskbarPosition {
        edge: data.uEdge,
        bounds: data.rc,
    })
}

/// Injects every event in `batch`, failing unless all were accepted.
pub fn send_input(batch: &InputBatch) -> Result<u32> {
    let raw = batch.to_raw();
    if raw.is_empty() {
        return Ok(0);
    }
    let count = u32::try_from(raw.len())
        .map_err(|_| NativeError::InvalidDimensions(format!("{} input events", raw.len())))?;
    let sent = unsafe { SendInput(count, raw.as_ptr().cast(), size_of::<INPUT>() as i32) };
    debug!(target: "capture_native::input", count, sent, "sent input");
    if sent != count {
        return Err(last_error("SendInput"));
    }
    Ok(sent)
}

/// Options for [`create_process`].
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions<'a> {
    /// `SW_*` value for the first window
    pub show_window: Option<u32>,
    /// `CREATE_*` flags
    pub creation_flags: u32,
    pub inherit_handles: bool,
    pub current_dir: Option<&'a Path>,
}

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(iter::once(0)).collect()
}

unsafe fn close_handle(handle: HANDLE) -> bool {
    CloseHandle(handle as _) != 0
}

/// Starts `program` with `args` via `CreateProcessW`.
pub fn create_process<S: AsRef<str>>(
    program: &str,
    args: &[S],
    options: &LaunchOptions<'_>,
) -> Result<ProcessHandles> {
    let mut cmd = command_line(program, args)?;
    let dir = options.current_dir.map(|d| to_wide(d.as_os_str()));

    let mut startup = STARTUPINFOW::default();
    if let Some(show) = options.show_window {
        startup.dwFlags |= STARTF_USESHOWWINDOW;
        startup.wShowWindow = show as u16;
    }
    startup.ensure_sized()?;

    let mut info = PROCESS_INFORMATION::default();
    let ok = unsafe {
        CreateProcessW(
            ptr::null(),
            cmd.as_mut_ptr(),
            ptr::null(),
            ptr::null(),
            options.inherit_handles as i32,
            options.creation_flags,
            ptr::null(),
            dir.as_ref().map_or(ptr::null(), |d| d.as_ptr()),
            ptr::addr_of!(startup).cast(),
            ptr::addr_of_mut!(info).cast(),
        )
    };
    check_bool("CreateProcessW", ok)?;

    info!(target: "capture_native::process", pid = info.dwProcessId, program, "process started");
    // SAFETY: CreateProcessW hands both handles to the caller.
    Ok(unsafe { ProcessHandles::from_raw(info, close_handle) })
}
