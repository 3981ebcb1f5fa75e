//! # Capture Native
//!
//! Safe layer over `capture-native-sys` for screen capture tooling.
//!
//! ## Features
//!
//! - Tagged-union input events and batches for `SendInput`
//! - Reference-counted COM pointers for the shell image interfaces
//! - DIB headers and BMP files for captured frames
//! - libavif views, encoder settings and (with `link`) an owned codec
//! - Process handle ownership and, on Windows, the Win32 calls themselves

pub mod avif;
pub mod bitmap;
pub mod com;
pub mod error;
pub mod input;
pub mod logging;
pub mod process;
pub mod self_sized;

#[cfg(windows)]
pub mod win32;

pub use bitmap::{BitmapFile, DibHeader};
pub use com::{ComPtr, Interface};
pub use error::{hresult_to_result, NativeError, Result};
pub use input::{Input, InputBatch, MouseButton};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use process::ProcessHandles;
pub use self_sized::SelfDescribing;

/// Re-export of the raw layouts.
pub use capture_native_sys as sys;
