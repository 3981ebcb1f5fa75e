//! Raw ABI layouts for Win32 and libavif
//!
//! This crate declares binary-compatible mirrors of native structures used by
//! screen capture tooling: window/GDI/DWM/shell/process structures from the
//! Windows SDK, the COM method tables of a few shell interfaces, and the
//! libavif structs needed to decode and encode AVIF images.
//!
//! Nothing here has behaviour beyond small geometry helpers and
//! constructors that pre-fill self-describing size fields. Every struct is
//! `#[repr(C)]` (or `packed` where the SDK packs it) and uses real pointer
//! types, so offsets follow the target's pointer width automatically.
//!
//! # Safety
//!
//! The layouts are only as correct as the headers they were checked against:
//! Windows SDK 10.0 and libavif 1.2+ (1.x). Several libavif structs are partial
//! mirrors (see [`avif`]); never allocate those yourself or read past the
//! declared prefix.
//!
//! The layouts compile on every target so they can be tested anywhere. The
//! libavif extern block is only declared with the `link` feature.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod avi;
pub mod avif;
pub mod bitmap;
pub mod com;
pub mod dwm;
pub mod geometry;
pub mod input;
pub mod process;
pub mod shell;
pub mod win_types;
pub mod window;

pub use avi::*;
pub use bitmap::*;
pub use com::*;
pub use dwm::*;
pub use geometry::*;
pub use input::*;
pub use process::*;
pub use shell::*;
pub use win_types::*;
pub use window::*;

/// Byte size of `T` as the `u32` that Win32 size fields expect.
#[inline]
pub const fn size_of_u32<T>() -> u32 {
    std::mem::size_of::<T>() as u32
}
