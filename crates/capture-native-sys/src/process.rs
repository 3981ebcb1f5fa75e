//! Process creation structures (processthreadsapi.h / minwinbase.h)
//!
//! `PROCESS_INFORMATION` hands two open handles to the caller; closing them
//! is the caller's job.

use bytemuck::Zeroable;

use crate::size_of_u32;
use crate::win_types::*;

pub const STARTF_USESHOWWINDOW: u32 = 0x0000_0001;
pub const STARTF_USESIZE: u32 = 0x0000_0002;
pub const STARTF_USEPOSITION: u32 = 0x0000_0004;
pub const STARTF_FORCEOFFFEEDBACK: u32 = 0x0000_0080;
pub const STARTF_USESTDHANDLES: u32 = 0x0000_0100;

pub const CREATE_SUSPENDED: u32 = 0x0000_0004;
pub const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;
pub const CREATE_UNICODE_ENVIRONMENT: u32 = 0x0000_0400;
pub const CREATE_NO_WINDOW: u32 = 0x0800_0000;

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SECURITY_ATTRIBUTES {
    pub nLength: u32,
    pub lpSecurityDescriptor: *mut std::ffi::c_void,
    pub bInheritHandle: BOOL,
}

impl Default for SECURITY_ATTRIBUTES {
    fn default() -> Self {
        Self {
            nLength: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

/// Wide-character startup parameters. The three string fields are borrowed
/// `PWSTR`s; the struct never owns them.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct STARTUPINFOW {
    pub cb: u32,
    pub lpReserved: PWSTR,
    pub lpDesktop: PWSTR,
    pub lpTitle: PWSTR,
    pub dwX: u32,
    pub dwY: u32,
    pub dwXSize: u32,
    pub dwYSize: u32,
    pub dwXCountChars: u32,
    pub dwYCountChars: u32,
    pub dwFillAttribute: u32,
    pub dwFlags: u32,
    pub wShowWindow: u16,
    pub cbReserved2: u16,
    pub lpReserved2: *mut u8,
    pub hStdInput: HANDLE,
    pub hStdOutput: HANDLE,
    pub hStdError: HANDLE,
}

impl Default for STARTUPINFOW {
    fn default() -> Self {
        Self {
            cb: size_of_u32::<Self>(),
            ..Zeroable::zeroed()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct PROCESS_INFORMATION {
    pub hProcess: HANDLE,
    pub hThread: HANDLE,
    pub dwProcessId: u32,
    pub dwThreadId: u32,
}

impl Default for PROCESS_INFORMATION {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}
