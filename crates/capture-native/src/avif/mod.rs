//! Safe access to libavif
//!
//! The structs in `capture_native_sys::avif` are partial mirrors, so this
//! module never copies them and only touches declared fields:
//!
//! - [`ImageView`], [`DecoderView`] and [`EncoderOptions`] borrow a struct
//!   libavif allocated and expose its prefix fields
//! - [`RgbImage`] describes a caller-owned interleaved pixel buffer
//! - [`EncoderSettings`] is the serializable encoder configuration
//!
//! With the `link` feature, [`AvifDecoder`], [`AvifEncoder`] and
//! [`AvifImage`] own native objects and [`decode_rgba`] / [`encode_rgba`]
//! cover the common whole-image paths. Every entry point there first runs
//! the version gate in [`ensure_supported`], because the declared layouts
//! only hold for libavif 1.2 and later 1.x releases.

mod rgb;
mod settings;
mod view;

#[cfg(feature = "link")]
mod codec;

pub use rgb::{RgbFormat, RgbImage, RgbImageBuilder};
pub use settings::{ChromaSubsampling, EncoderSettings};
pub use view::{DecoderView, EncoderOptions, ImageView, MirrorAxis, Transform};

#[cfg(feature = "link")]
pub use codec::{
    decode_rgba, encode_rgba, library_version, AvifDecoder, AvifEncoder, AvifImage, DecodedImage,
};

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{NativeError, Result};

/// Major version whose layouts `capture_native_sys::avif` declares.
pub const SUPPORTED_MAJOR_VERSION: u32 = 1;

/// Oldest release whose `avifImage` extends through `gainMap`; 1.0 ends
/// before `properties` and 1.1 before a stable `gainMap`.
pub const MINIMUM_VERSION: LibraryVersion = LibraryVersion::new(1, 2, 0);

/// A parsed `avifVersion()` string such as `"1.1.1"` or `"1.0.4-dev"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LibraryVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for LibraryVersion {
    type Err = NativeError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || NativeError::UnsupportedLibraryVersion(s.to_string());

        // Drop any pre-release or build suffix.
        let core = s
            .trim()
            .split(|c: char| c == '-' || c == '+' || c == ' ')
            .next()
            .unwrap_or_default();

        let mut parts = core.split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| bad())?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => p.parse().map_err(|_| bad())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Refuses any libavif whose struct layouts may differ from the declared
/// mirrors: another major version, or a 1.x older than [`MINIMUM_VERSION`].
pub fn ensure_supported(version: &LibraryVersion) -> Result<()> {
    if version.major == SUPPORTED_MAJOR_VERSION && *version >= MINIMUM_VERSION {
        info!(target: "capture_native::avif", %version, "libavif version accepted");
        Ok(())
    } else {
        warn!(target: "capture_native::avif", %version, "libavif version rejected");
        Err(NativeError::UnsupportedLibraryVersion(version.to_string()))
    }
}

/// Maps an `avifResult` to `Ok` or `NativeError::Codec`.
pub(crate) fn check_result(
    operation: &'static str,
    code: capture_native_sys::avif::avifResult,
    message: impl FnOnce() -> String,
) -> Result<()> {
    if code == capture_native_sys::avif::AVIF_RESULT_OK {
        Ok(())
    } else {
        Err(NativeError::Codec {
            operation,
            code,
            message: message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capture_native_sys::avif::{AVIF_RESULT_OK, AVIF_RESULT_TRUNCATED_DATA};

    #[test]
    fn test_parse_versions() {
        assert_eq!("1.1.1".parse::<LibraryVersion>().unwrap(), LibraryVersion::new(1, 1, 1));
        assert_eq!("1.0.4-dev".parse::<LibraryVersion>().unwrap(), LibraryVersion::new(1, 0, 4));
        assert_eq!("2".parse::<LibraryVersion>().unwrap(), LibraryVersion::new(2, 0, 0));
        assert!("".parse::<LibraryVersion>().is_err());
        assert!("one.two".parse::<LibraryVersion>().is_err());
        assert!("1.2.3.4".parse::<LibraryVersion>().is_err());
    }

    #[test]
    fn test_version_gate() {
        assert!(ensure_supported(&LibraryVersion::new(1, 2, 0)).is_ok());
        assert!(ensure_supported(&LibraryVersion::new(1, 3, 0)).is_ok());

        let err = ensure_supported(&LibraryVersion::new(0, 11, 1)).unwrap_err();
        assert!(matches!(err, NativeError::UnsupportedLibraryVersion(ref v) if v == "0.11.1"));
        assert!(ensure_supported(&LibraryVersion::new(2, 0, 0)).is_err());
    }

    #[test]
    fn test_version_gate_rejects_short_image_layouts() {
        // 1.0 and 1.1 allocate an avifImage shorter than the declared prefix.
        for version in ["1.0.0", "1.0.4", "1.1.0", "1.1.1"] {
            let version: LibraryVersion = version.parse().unwrap();
            let err = ensure_supported(&version).unwrap_err();
            assert!(matches!(err, NativeError::UnsupportedLibraryVersion(_)));
        }
        assert!(ensure_supported(&"1.2.0-dev".parse().unwrap()).is_ok());
    }

    #[test]
    fn test_check_result() {
        assert!(check_result("avifDecoderParse", AVIF_RESULT_OK, String::new).is_ok());
        let err = check_result("avifDecoderParse", AVIF_RESULT_TRUNCATED_DATA, || {
            "Truncated data".to_string()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "libavif avifDecoderParse failed: Truncated data (20)");
    }
}
