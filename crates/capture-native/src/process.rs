//! Ownership of the handles returned by process creation

use std::mem::ManuallyDrop;

use capture_native_sys::{HANDLE, PROCESS_INFORMATION};
use tracing::{debug, warn};

use crate::error::{NativeError, Result};

/// Closes one handle, returning `false` on failure.
pub type CloseHandleFn = unsafe fn(HANDLE) -> bool;

/// Process and primary-thread handles, closed on drop.
#[derive(Debug)]
pub struct ProcessHandles {
    info: PROCESS_INFORMATION,
    close: CloseHandleFn,
}

impl ProcessHandles {
    /// # Safety
    ///
    /// `info.hProcess` and `info.hThread` must each be null or a handle the
    /// caller owns that `close` may release exactly once.
    pub unsafe fn from_raw(info: PROCESS_INFORMATION, close: CloseHandleFn) -> Self {
        Self { info, close }
    }

    pub fn pid(&self) -> u32 {
        self.info.dwProcessId
    }

    pub fn tid(&self) -> u32 {
        self.info.dwThreadId
    }

    pub fn process(&self) -> HANDLE {
        self.info.hProcess
    }

    pub fn thread(&self) -> HANDLE {
        self.info.hThread
    }

    /// Releases the thread handle early; the process handle stays open.
    pub fn close_thread(&mut self) {
        let thread = std::mem::replace(&mut self.info.hThread, std::ptr::null_mut());
        self.close_one("thread", thread);
    }

    /// Gives both handles back without closing them.
    pub fn into_raw(self) -> PROCESS_INFORMATION {
        let this = ManuallyDrop::new(self);
        this.info
    }

    fn close_one(&self, which: &'static str, handle: HANDLE) {
        if handle.is_null() {
            return;
        }
        // SAFETY: ownership established in `from_raw`; each handle is
        // nulled or dropped after this call.
        if !unsafe { (self.close)(handle) } {
            warn!(target: "capture_native::process", pid = self.info.dwProcessId, which, "failed to close handle");
        }
    }
}

impl Drop for ProcessHandles {
    fn drop(&mut self) {
        debug!(target: "capture_native::process", pid = self.info.dwProcessId, "closing process handles");
        self.close_one("thread", self.info.hThread);
        self.close_one("process", self.info.hProcess);
    }
}

/// Joins `program` and `args` into a NUL-terminated UTF-16 command line,
/// quoted so the C runtime's argument parser splits it back unchanged.
///
/// Fails with `NativeError::Config` if any part contains a NUL, which
/// would end the string early.
pub fn command_line<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Vec<u16>> {
    let mut line = String::new();
    quote_into(&mut line, check_no_nul(program)?);
    for arg in args {
        line.push(' ');
        quote_into(&mut line, check_no_nul(arg.as_ref())?);
    }
    Ok(line.encode_utf16().chain(std::iter::once(0)).collect())
}

fn check_no_nul(part: &str) -> Result<&str> {
    if part.contains('\0') {
        return Err(NativeError::Config(format!(
            "command line argument {part:?} contains a NUL"
        )));
    }
    Ok(part)
}

fn quote_into(out: &mut String, arg: &str) {
    let needs_quotes = arg.is_empty() || arg.contains([' ', '\t', '\n', '\u{0b}', '"']);
    if !needs_quotes {
        out.push_str(arg);
        return;
    }

    out.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                // Escape the pending run and the quote itself.
                out.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    // Trailing backslashes precede the closing quote.
    out.extend(std::iter::repeat('\\').take(backslashes * 2));
    out.push('"');
}
