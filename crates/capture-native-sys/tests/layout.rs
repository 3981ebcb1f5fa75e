//! Size and offset tables for every declared layout
//!
//! Reference values come from the Windows SDK headers and libavif 1.x
//! `avif.h`. Where a pointer-sized member shifts later fields, `pw(a, b)`
//! picks the 64-bit value `a` or the 32-bit value `b`.

use std::mem::{offset_of, size_of};

use capture_native_sys::avif::*;
use capture_native_sys::*;

const fn pw(bits64: usize, bits32: usize) -> usize {
    if cfg!(target_pointer_width = "64") {
        bits64
    } else {
        bits32
    }
}

macro_rules! assert_layout {
    ($ty:ty, size = $size:expr, { $($field:tt : $off:expr),* $(,)? }) => {{
        assert_eq!(size_of::<$ty>(), $size, concat!("size_of::<", stringify!($ty), ">"));
        $(
            assert_eq!(
                offset_of!($ty, $field),
                $off,
                concat!(stringify!($ty), "::", stringify!($field))
            );
        )*
    }};
}

#[test]
fn test_geometry_layouts() {
    assert_layout!(RECT, size = 16, { left: 0, top: 4, right: 8, bottom: 12 });
    assert_layout!(POINT, size = 8, { x: 0, y: 4 });
    assert_layout!(SIZE, size = 8, { cx: 0, cy: 4 });
    assert_layout!(MARGINS, size = 16, {
        cxLeftWidth: 0, cxRightWidth: 4, cyTopHeight: 8, cyBottomHeight: 12,
    });
}

#[test]
fn test_window_layouts() {
    assert_layout!(WINDOWINFO, size = 60, {
        cbSize: 0,
        rcWindow: 4,
        rcClient: 20,
        dwStyle: 36,
        dwExStyle: 40,
        dwWindowStatus: 44,
        cxWindowBorders: 48,
        cyWindowBorders: 52,
        atomWindowType: 56,
        wCreatorVersion: 58,
    });
    assert_layout!(WINDOWPLACEMENT, size = 44, {
        length: 0,
        flags: 4,
        showCmd: 8,
        ptMinPosition: 12,
        ptMaxPosition: 20,
        rcNormalPosition: 28,
    });
    assert_layout!(APPBARDATA, size = pw(48, 36), {
        cbSize: 0,
        hWnd: pw(8, 4),
        uCallbackMessage: pw(16, 8),
        uEdge: pw(20, 12),
        rc: pw(24, 16),
        lParam: pw(40, 32),
    });
    assert_layout!(CURSORINFO, size = pw(24, 20), {
        cbSize: 0, flags: 4, hCursor: 8, ptScreenPos: pw(16, 12),
    });
    assert_layout!(ICONINFO, size = pw(32, 20), {
        fIcon: 0, xHotspot: 4, yHotspot: 8, hbmMask: pw(16, 12), hbmColor: pw(24, 16),
    });
    assert_layout!(FLASHWINFO, size = pw(32, 20), {
        cbSize: 0, hwnd: pw(8, 4), dwFlags: pw(16, 8), uCount: pw(20, 12), dwTimeout: pw(24, 16),
    });
    assert_layout!(SCROLLINFO, size = 28, {
        cbSize: 0, fMask: 4, nMin: 8, nMax: 12, nPage: 16, nPos: 20, nTrackPos: 24,
    });
    assert_layout!(BLENDFUNCTION, size = 4, {
        BlendOp: 0, BlendFlags: 1, SourceConstantAlpha: 2, AlphaFormat: 3,
    });
    assert_layout!(TIMECAPS, size = 8, { wPeriodMin: 0, wPeriodMax: 4 });
}

#[test]
fn test_dwm_layouts() {
    assert_layout!(DWM_BLURBEHIND, size = pw(24, 16), {
        dwFlags: 0, fEnable: 4, hRgnBlur: 8, fTransitionOnMaximized: pw(16, 12),
    });
    assert_layout!(DWM_THUMBNAIL_PROPERTIES, size = 48, {
        dwFlags: 0,
        rcDestination: 4,
        rcSource: 20,
        opacity: 36,
        fVisible: 40,
        fSourceClientAreaOnly: 44,
    });
}

#[test]
fn test_bitmap_layouts() {
    assert_layout!(BITMAPFILEHEADER, size = 14, {
        bfType: 0, bfSize: 2, bfReserved1: 6, bfReserved2: 8, bfOffBits: 10,
    });
    assert_layout!(BITMAPINFOHEADER, size = 40, {
        biSize: 0,
        biWidth: 4,
        biHeight: 8,
        biPlanes: 12,
        biBitCount: 14,
        biCompression: 16,
        biSizeImage: 20,
        biXPelsPerMeter: 24,
        biYPelsPerMeter: 28,
        biClrUsed: 32,
        biClrImportant: 36,
    });
    assert_layout!(CIEXYZ, size = 12, { ciexyzX: 0, ciexyzY: 4, ciexyzZ: 8 });
    assert_layout!(CIEXYZTRIPLE, size = 36, { ciexyzRed: 0, ciexyzGreen: 12, ciexyzBlue: 24 });
    assert_layout!(BITMAPV5HEADER, size = 124, {
        bV5Size: 0,
        bV5Width: 4,
        bV5Height: 8,
        bV5Planes: 12,
        bV5BitCount: 14,
        bV5Compression: 16,
        bV5SizeImage: 20,
        bV5XPelsPerMeter: 24,
        bV5YPelsPerMeter: 28,
        bV5ClrUsed: 32,
        bV5ClrImportant: 36,
        bV5RedMask: 40,
        bV5GreenMask: 44,
        bV5BlueMask: 48,
        bV5AlphaMask: 52,
        bV5CSType: 56,
        bV5Endpoints: 60,
        bV5GammaRed: 96,
        bV5GammaGreen: 100,
        bV5GammaBlue: 104,
        bV5Intent: 108,
        bV5ProfileData: 112,
        bV5ProfileSize: 116,
        bV5Reserved: 120,
    });
}

#[test]
fn test_input_layouts() {
    assert_layout!(MOUSEINPUT, size = pw(32, 24), {
        dx: 0, dy: 4, mouseData: 8, dwFlags: 12, time: 16, dwExtraInfo: pw(24, 20),
    });
    assert_layout!(KEYBDINPUT, size = pw(24, 16), {
        wVk: 0, wScan: 2, dwFlags: 4, time: 8, dwExtraInfo: pw(16, 12),
    });
    assert_layout!(HARDWAREINPUT, size = 8, { uMsg: 0, wParamL: 4, wParamH: 6 });
    assert_layout!(INPUT_0, size = pw(32, 24), { mi: 0, ki: 0, hi: 0 });
    assert_layout!(INPUT, size = pw(40, 28), { r#type: 0, u: pw(8, 4) });
}

#[test]
fn test_avi_layouts() {
    assert_layout!(AVISTREAMINFOW, size = 204, {
        fccType: 0,
        fccHandler: 4,
        dwFlags: 8,
        dwCaps: 12,
        wPriority: 16,
        wLanguage: 18,
        dwScale: 20,
        dwRate: 24,
        dwStart: 28,
        dwLength: 32,
        dwInitialFrames: 36,
        dwSuggestedBufferSize: 40,
        dwQuality: 44,
        dwSampleSize: 48,
        rcFrame: 52,
        dwEditCount: 68,
        dwFormatChangeCount: 72,
        szName: 76,
    });
    assert_layout!(AVICOMPRESSOPTIONS, size = pw(56, 44), {
        fccType: 0,
        fccHandler: 4,
        dwKeyFrameEvery: 8,
        dwQuality: 12,
        dwBytesPerSecond: 16,
        dwFlags: 20,
        lpFormat: 24,
        cbFormat: pw(32, 28),
        lpParms: pw(40, 32),
        cbParms: pw(48, 36),
        dwInterleaveEvery: pw(52, 40),
    });
}

#[test]
fn test_process_layouts() {
    assert_layout!(SECURITY_ATTRIBUTES, size = pw(24, 12), {
        nLength: 0, lpSecurityDescriptor: pw(8, 4), bInheritHandle: pw(16, 8),
    });
    assert_layout!(STARTUPINFOW, size = pw(104, 68), {
        cb: 0,
        lpReserved: pw(8, 4),
        lpDesktop: pw(16, 8),
        lpTitle: pw(24, 12),
        dwX: pw(32, 16),
        dwY: pw(36, 20),
        dwXSize: pw(40, 24),
        dwYSize: pw(44, 28),
        dwXCountChars: pw(48, 32),
        dwYCountChars: pw(52, 36),
        dwFillAttribute: pw(56, 40),
        dwFlags: pw(60, 44),
        wShowWindow: pw(64, 48),
        cbReserved2: pw(66, 50),
        lpReserved2: pw(72, 52),
        hStdInput: pw(80, 56),
        hStdOutput: pw(88, 60),
        hStdError: pw(96, 64),
    });
    assert_layout!(PROCESS_INFORMATION, size = pw(24, 16), {
        hProcess: 0, hThread: pw(8, 4), dwProcessId: pw(16, 8), dwThreadId: pw(20, 12),
    });
}

#[test]
fn test_shell_layouts() {
    assert_layout!(SHFILEINFOW, size = pw(696, 692), {
        hIcon: 0,
        iIcon: pw(8, 4),
        dwAttributes: pw(12, 8),
        szDisplayName: pw(16, 12),
        szTypeName: pw(536, 532),
    });
    assert_layout!(IMAGELISTDRAWPARAMS, size = pw(88, 68), {
        cbSize: 0,
        himl: pw(8, 4),
        i: pw(16, 8),
        hdcDst: pw(24, 12),
        x: pw(32, 16),
        y: pw(36, 20),
        cx: pw(40, 24),
        cy: pw(44, 28),
        xBitmap: pw(48, 32),
        yBitmap: pw(52, 36),
        rgbBk: pw(56, 40),
        rgbFg: pw(60, 44),
        fStyle: pw(64, 48),
        dwRop: pw(68, 52),
        fState: pw(72, 56),
        Frame: pw(76, 60),
        crEffect: pw(80, 64),
    });
    assert_layout!(IMAGEINFO, size = pw(40, 32), {
        hbmImage: 0, hbmMask: pw(8, 4), Unused1: pw(16, 8), Unused2: pw(20, 12), rcImage: pw(24, 16),
    });
}

#[test]
fn test_com_layouts() {
    assert_layout!(GUID, size = 16, { data1: 0, data2: 4, data3: 6, data4: 8 });
    assert_eq!(size_of::<IImageList>(), size_of::<usize>());
    assert_eq!(size_of::<IViewObject>(), size_of::<usize>());
    assert_eq!(size_of::<IShellItemImageFactory>(), size_of::<usize>());
}

#[test]
fn test_avif_full_mirrors() {
    assert_layout!(avifRWData, size = pw(16, 8), { data: 0, size: pw(8, 4) });
    assert_layout!(avifRGBImage, size = pw(64, 52), {
        width: 0,
        height: 4,
        depth: 8,
        format: 12,
        chromaUpsampling: 16,
        chromaDownsampling: 20,
        avoidLibYUV: 24,
        ignoreAlpha: 28,
        alphaPremultiplied: 32,
        isFloat: 36,
        maxThreads: 40,
        pixels: pw(48, 44),
        rowBytes: pw(56, 48),
    });
    assert_layout!(avifPixelAspectRatioBox, size = 8, { hSpacing: 0, vSpacing: 4 });
    assert_layout!(avifCleanApertureBox, size = 32, {
        widthN: 0, widthD: 4, heightN: 8, heightD: 12,
        horizOffN: 16, horizOffD: 20, vertOffN: 24, vertOffD: 28,
    });
    assert_layout!(avifImageRotation, size = 1, { angle: 0 });
    assert_layout!(avifImageMirror, size = 1, { axis: 0 });
    assert_layout!(avifContentLightLevelInformationBox, size = 4, { maxCLL: 0, maxPALL: 2 });
    assert_layout!(avifFraction, size = 8, { n: 0, d: 4 });
    assert_layout!(avifScalingMode, size = 16, { horizontal: 0, vertical: 8 });
}

#[test]
fn test_avif_image_prefix() {
    assert_layout!(avifImage, size = pw(224, 164), {
        width: 0,
        height: 4,
        depth: 8,
        yuvFormat: 12,
        yuvRange: 16,
        yuvChromaSamplePosition: 20,
        yuvPlanes: 24,
        yuvRowBytes: pw(48, 36),
        imageOwnsYUVPlanes: pw(60, 48),
        alphaPlane: pw(64, 52),
        alphaRowBytes: pw(72, 56),
        imageOwnsAlphaPlane: pw(76, 60),
        alphaPremultiplied: pw(80, 64),
        icc: pw(88, 68),
        colorPrimaries: pw(104, 76),
        transferCharacteristics: pw(106, 78),
        matrixCoefficients: pw(108, 80),
        clli: pw(110, 82),
        transformFlags: pw(116, 88),
        pasp: pw(120, 92),
        clap: pw(128, 100),
        irot: pw(160, 132),
        imir: pw(161, 133),
        exif: pw(168, 136),
        xmp: pw(184, 144),
        properties: pw(200, 152),
        numProperties: pw(208, 156),
        gainMap: pw(216, 160),
    });
}

#[test]
fn test_avif_decoder_prefix() {
    assert_layout!(avifDecoder, size = pw(56, 48), {
        codecChoice: 0,
        maxThreads: 4,
        requestedSource: 8,
        allowProgressive: 12,
        allowIncremental: 16,
        ignoreExif: 20,
        ignoreXMP: 24,
        imageSizeLimit: 28,
        imageDimensionLimit: 32,
        imageCountLimit: 36,
        strictFlags: 40,
        image: pw(48, 44),
    });
}

// u64 alignment inside structs differs between 32-bit ABIs, so only the
// 64-bit encoder prefix is pinned.
#[cfg(target_pointer_width = "64")]
#[test]
fn test_avif_encoder_prefix() {
    assert_layout!(avifEncoder, size = 88, {
        codecChoice: 0,
        maxThreads: 4,
        speed: 8,
        keyframeInterval: 12,
        timescale: 16,
        repetitionCount: 24,
        extraLayerCount: 28,
        quality: 32,
        qualityAlpha: 36,
        minQuantizer: 40,
        maxQuantizer: 44,
        minQuantizerAlpha: 48,
        maxQuantizerAlpha: 52,
        tileRowsLog2: 56,
        tileColsLog2: 60,
        autoTiling: 64,
        scalingMode: 68,
    });
}

#[test]
fn test_input_union_round_trip() {
    let mut input = INPUT {
        r#type: INPUT_KEYBOARD,
        ..Default::default()
    };
    input.u.ki = KEYBDINPUT {
        wVk: 0x41,
        wScan: 0x1E,
        dwFlags: KEYEVENTF_KEYUP,
        time: 7,
        dwExtraInfo: 99,
    };
    let ki = unsafe { input.u.ki };
    assert_eq!(ki.wVk, 0x41);
    assert_eq!(ki.wScan, 0x1E);
    assert_eq!(ki.dwFlags, KEYEVENTF_KEYUP);
    assert_eq!(ki.time, 7);
    assert_eq!(ki.dwExtraInfo, 99);

    input.r#type = INPUT_HARDWARE;
    input.u.hi = HARDWAREINPUT {
        uMsg: 0x0100,
        wParamL: 1,
        wParamH: 2,
    };
    let hi = unsafe { input.u.hi };
    assert_eq!((hi.uMsg, hi.wParamL, hi.wParamH), (0x0100, 1, 2));
}

#[test]
fn test_self_describing_defaults() {
    assert_eq!(WINDOWINFO::default().cbSize as usize, size_of::<WINDOWINFO>());
    assert_eq!(WINDOWPLACEMENT::default().length as usize, size_of::<WINDOWPLACEMENT>());
    assert_eq!(APPBARDATA::default().cbSize as usize, size_of::<APPBARDATA>());
    assert_eq!(CURSORINFO::default().cbSize as usize, size_of::<CURSORINFO>());
    assert_eq!(FLASHWINFO::default().cbSize as usize, size_of::<FLASHWINFO>());
    assert_eq!(SCROLLINFO::default().cbSize as usize, size_of::<SCROLLINFO>());
    assert_eq!(SECURITY_ATTRIBUTES::default().nLength as usize, size_of::<SECURITY_ATTRIBUTES>());
    assert_eq!(STARTUPINFOW::default().cb as usize, size_of::<STARTUPINFOW>());
    assert_eq!(IMAGELISTDRAWPARAMS::default().cbSize as usize, size_of::<IMAGELISTDRAWPARAMS>());
    assert_eq!(BITMAPINFOHEADER::default().biSize as usize, size_of::<BITMAPINFOHEADER>());
    assert_eq!(BITMAPV5HEADER::default().bV5Size as usize, size_of::<BITMAPV5HEADER>());
}
