//! Structures that carry their own byte size
//!
//! Win32 rejects (or worse, half-fills) a self-describing structure whose
//! size field is wrong. Every helper in this crate calls
//! [`SelfDescribing::ensure_sized`] before handing one to the OS.

use capture_native_sys::{
    size_of_u32, APPBARDATA, BITMAPINFOHEADER, BITMAPV5HEADER, CURSORINFO, FLASHWINFO,
    IMAGELISTDRAWPARAMS, SCROLLINFO, SECURITY_ATTRIBUTES, STARTUPINFOW, WINDOWINFO,
    WINDOWPLACEMENT,
};

use crate::error::{NativeError, Result};

pub trait SelfDescribing: Sized {
    const TYPE_NAME: &'static str;

    /// Value of the embedded size field.
    fn declared_size(&self) -> u32;

    fn set_declared_size(&mut self, size: u32);

    /// Overwrite the size field with the real size.
    fn fix_size(&mut self) {
        self.set_declared_size(size_of_u32::<Self>());
    }

    fn ensure_sized(&self) -> Result<()> {
        let actual = size_of_u32::<Self>();
        let declared = self.declared_size();
        if declared == actual {
            Ok(())
        } else {
            Err(NativeError::LayoutMismatch {
                type_name: Self::TYPE_NAME,
                declared,
                actual,
            })
        }
    }
}

macro_rules! self_describing {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl SelfDescribing for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn declared_size(&self) -> u32 {
                    self.$field
                }

                #[inline]
                fn set_declared_size(&mut self, size: u32) {
                    self.$field = size;
                }
            }
        )*
    };
}

self_describing! {
    WINDOWINFO => cbSize,
    WINDOWPLACEMENT => length,
    APPBARDATA => cbSize,
    FLASHWINFO => cbSize,
    SCROLLINFO => cbSize,
    CURSORINFO => cbSize,
    SECURITY_ATTRIBUTES => nLength,
    STARTUPINFOW => cb,
    IMAGELISTDRAWPARAMS => cbSize,
    BITMAPINFOHEADER => biSize,
    BITMAPV5HEADER => bV5Size,
}
