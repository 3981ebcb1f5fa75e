//! Error types for capture-native

use thiserror::Error;

use capture_native_sys::HRESULT;

/// Errors raised by the safe layer
#[derive(Error, Debug)]
pub enum NativeError {
    /// `INPUT::type` held a value other than mouse, keyboard or hardware
    #[error("Unknown INPUT type: {0}")]
    UnknownInputType(u32),

    /// A COM method returned a failure code
    #[error("{context} failed with HRESULT 0x{hr:08X}")]
    Hresult { context: &'static str, hr: u32 },

    /// A native call returned or was handed a null pointer
    #[error("Null pointer: {0}")]
    NullPointer(&'static str),

    /// A self-describing structure carried the wrong size field
    #[error("{type_name} declares {declared} bytes but is {actual} bytes")]
    LayoutMismatch {
        type_name: &'static str,
        declared: u32,
        actual: u32,
    },

    /// The loaded libavif does not match the declared layouts
    #[error("Unsupported libavif version {0} (expected 1.2 or a later 1.x)")]
    UnsupportedLibraryVersion(String),

    /// Width, height or row stride out of range
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Bytes that do not form a valid bitmap
    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    /// libavif returned a non-OK result
    #[error("libavif {operation} failed: {message} ({code})")]
    Codec {
        operation: &'static str,
        code: i32,
        message: String,
    },

    /// Win32 call failed; holds `GetLastError()`
    #[error("{call} failed with OS error {code}")]
    Os { call: &'static str, code: u32 },

    /// Encoder settings could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NativeError {
    /// Build an `Hresult` error, keeping the code's bit pattern.
    pub fn hresult(context: &'static str, hr: HRESULT) -> Self {
        Self::Hresult {
            context,
            hr: hr as u32,
        }
    }
}

impl From<serde_json::Error> for NativeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for capture-native operations
pub type Result<T> = std::result::Result<T, NativeError>;

/// Maps a failing `HRESULT` to an error; `S_OK` and other success codes
/// pass through.
pub fn hresult_to_result(context: &'static str, hr: HRESULT) -> Result<()> {
    if capture_native_sys::succeeded(hr) {
        Ok(())
    } else {
        Err(NativeError::hresult(context, hr))
    }
}
