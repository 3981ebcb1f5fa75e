//! Encoder configuration persisted as JSON

use std::path::Path;

use capture_native_sys::avif::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NativeError, Result};

/// YUV layout written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaSubsampling {
    #[default]
    Yuv444,
    Yuv422,
    Yuv420,
    /// Monochrome
    Yuv400,
}

impl ChromaSubsampling {
    pub fn to_raw(self) -> avifPixelFormat {
        match self {
            ChromaSubsampling::Yuv444 => AVIF_PIXEL_FORMAT_YUV444,
            ChromaSubsampling::Yuv422 => AVIF_PIXEL_FORMAT_YUV422,
            ChromaSubsampling::Yuv420 => AVIF_PIXEL_FORMAT_YUV420,
            ChromaSubsampling::Yuv400 => AVIF_PIXEL_FORMAT_YUV400,
        }
    }
}

/// Settings for [`EncoderOptions::apply`](super::EncoderOptions::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderSettings {
    /// Colour quality, 0 to 100 where 100 is lossless (default: 80)
    #[serde(default = "default_quality")]
    pub quality: i32,
    /// Alpha quality, 0 to 100 (default: 100)
    #[serde(default = "default_quality_alpha")]
    pub quality_alpha: i32,
    /// 0 (slowest) to 10 (fastest), or -1 for the codec default (default: 6)
    #[serde(default = "default_speed")]
    pub speed: i32,
    /// Worker threads for the codec (default: available parallelism)
    #[serde(default = "default_max_threads")]
    pub max_threads: i32,
    #[serde(default = "default_true")]
    pub auto_tiling: bool,
    /// Frames between forced keyframes, 0 for codec choice (default: 0)
    #[serde(default)]
    pub keyframe_interval: i32,
    #[serde(default)]
    pub chroma: ChromaSubsampling,
}

fn default_quality() -> i32 {
    80
}

fn default_quality_alpha() -> i32 {
    100
}

fn default_speed() -> i32 {
    6
}

fn default_max_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| i32::try_from(n.get()).unwrap_or(i32::MAX))
        .unwrap_or(1)
}

fn default_true() -> bool {
    true
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            quality_alpha: default_quality_alpha(),
            speed: default_speed(),
            max_threads: default_max_threads(),
            auto_tiling: true,
            keyframe_interval: 0,
            chroma: ChromaSubsampling::default(),
        }
    }
}

impl EncoderSettings {
    /// Copy with every field pulled into the range libavif accepts.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.quality = clamp_field("quality", self.quality, AVIF_QUALITY_WORST, AVIF_QUALITY_BEST);
        out.quality_alpha = clamp_field(
            "quality_alpha",
            self.quality_alpha,
            AVIF_QUALITY_WORST,
            AVIF_QUALITY_BEST,
        );
        if self.speed != AVIF_SPEED_DEFAULT {
            out.speed = clamp_field("speed", self.speed, AVIF_SPEED_SLOWEST, AVIF_SPEED_FASTEST);
        }
        out.max_threads = clamp_field("max_threads", self.max_threads, 1, i32::MAX);
        out.keyframe_interval =
            clamp_field("keyframe_interval", self.keyframe_interval, 0, i32::MAX);
        out
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults when `path` does not exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            NativeError::Config(format!("Invalid encoder settings {}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).map_err(|e| {
            NativeError::Config(format!("Failed to serialize encoder settings: {}", e))
        })?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

fn clamp_field(name: &'static str, value: i32, min: i32, max: i32) -> i32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(target: "capture_native::avif", field = name, value, clamped, "encoder setting out of range");
    }
    clamped
}
