//! COM method tables for the shell interfaces used during capture
//!
//! Dispatch is by vtable slot, so method order below must follow the IDL
//! exactly, IUnknown's three methods first. Only the layout lives here;
//! lifetime management is `capture_native::com::ComPtr`.

use std::ffi::c_void;

use crate::geometry::{POINT, RECT, SIZE};
use crate::shell::{IMAGEINFO, IMAGELISTDRAWPARAMS};
use crate::win_types::*;

pub const IID_IUnknown: GUID = GUID::from_u128(0x00000000_0000_0000_C000_000000000046);
pub const IID_IViewObject: GUID = GUID::from_u128(0x0000010D_0000_0000_C000_000000000046);
pub const IID_IImageList: GUID = GUID::from_u128(0x46EB5926_582E_4017_9FDF_E8998DAA0950);
pub const IID_IShellItemImageFactory: GUID =
    GUID::from_u128(0xBCC18B79_BA16_442F_80C4_8A59C30C463B);

pub const DVASPECT_CONTENT: u32 = 1;
pub const DVASPECT_THUMBNAIL: u32 = 2;
pub const DVASPECT_ICON: u32 = 4;
pub const DVASPECT_DOCPRINT: u32 = 8;

/// `RECTL` has the same layout as `RECT`.
pub type RECTL = RECT;

#[repr(C)]
pub struct IUnknown {
    pub lpVtbl: *const IUnknownVtbl,
}

#[repr(C)]
pub struct IUnknownVtbl {
    pub QueryInterface:
        unsafe extern "system" fn(this: *mut IUnknown, riid: REFIID, ppv: *mut *mut c_void) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(this: *mut IUnknown) -> u32,
    pub Release: unsafe extern "system" fn(this: *mut IUnknown) -> u32,
}

/// `pfnContinue` callback of `IViewObject::Draw`.
pub type ContinueProc = Option<unsafe extern "system" fn(dwContinue: ULONG_PTR) -> BOOL>;

#[repr(C)]
pub struct IViewObject {
    pub lpVtbl: *const IViewObjectVtbl,
}

#[repr(C)]
pub struct IViewObjectVtbl {
    pub base__: IUnknownVtbl,
    pub Draw: unsafe extern "system" fn(
        this: *mut IViewObject,
        dwDrawAspect: u32,
        lindex: i32,
        pvAspect: *mut c_void,
        ptd: *const c_void,
        hdcTargetDev: HDC,
        hdcDraw: HDC,
        lprcBounds: *const RECTL,
        lprcWBounds: *const RECTL,
        pfnContinue: ContinueProc,
        dwContinue: ULONG_PTR,
    ) -> HRESULT,
    pub GetColorSet: unsafe extern "system" fn(
        this: *mut IViewObject,
        dwDrawAspect: u32,
        lindex: i32,
        pvAspect: *mut c_void,
        ptd: *const c_void,
        hicTargetDev: HDC,
        ppColorSet: *mut *mut c_void,
    ) -> HRESULT,
    pub Freeze: unsafe extern "system" fn(
        this: *mut IViewObject,
        dwDrawAspect: u32,
        lindex: i32,
        pvAspect: *mut c_void,
        pdwFreeze: *mut u32,
    ) -> HRESULT,
    pub Unfreeze: unsafe extern "system" fn(this: *mut IViewObject, dwFreeze: u32) -> HRESULT,
    pub SetAdvise: unsafe extern "system" fn(
        this: *mut IViewObject,
        aspects: u32,
        advf: u32,
        pAdvSink: *mut c_void,
    ) -> HRESULT,
    pub GetAdvise: unsafe extern "system" fn(
        this: *mut IViewObject,
        pAspects: *mut u32,
        pAdvf: *mut u32,
        ppAdvSink: *mut *mut c_void,
    ) -> HRESULT,
}

#[repr(C)]
pub struct IImageList {
    pub lpVtbl: *const IImageListVtbl,
}

#[repr(C)]
pub struct IImageListVtbl {
    pub base__: IUnknownVtbl,
    pub Add: unsafe extern "system" fn(
        this: *mut IImageList,
        hbmImage: HBITMAP,
        hbmMask: HBITMAP,
        pi: *mut i32,
    ) -> HRESULT,
    pub ReplaceIcon:
        unsafe extern "system" fn(this: *mut IImageList, i: i32, hicon: HICON, pi: *mut i32) -> HRESULT,
    pub SetOverlayImage:
        unsafe extern "system" fn(this: *mut IImageList, iImage: i32, iOverlay: i32) -> HRESULT,
    pub Replace: unsafe extern "system" fn(
        this: *mut IImageList,
        i: i32,
        hbmImage: HBITMAP,
        hbmMask: HBITMAP,
    ) -> HRESULT,
    pub AddMasked: unsafe extern "system" fn(
        this: *mut IImageList,
        hbmImage: HBITMAP,
        crMask: COLORREF,
        pi: *mut i32,
    ) -> HRESULT,
    pub Draw:
        unsafe extern "system" fn(this: *mut IImageList, pimldp: *mut IMAGELISTDRAWPARAMS) -> HRESULT,
    pub Remove: unsafe extern "system" fn(this: *mut IImageList, i: i32) -> HRESULT,
    pub GetIcon:
        unsafe extern "system" fn(this: *mut IImageList, i: i32, flags: u32, picon: *mut HICON) -> HRESULT,
    pub GetImageInfo:
        unsafe extern "system" fn(this: *mut IImageList, i: i32, pImageInfo: *mut IMAGEINFO) -> HRESULT,
    pub Copy: unsafe extern "system" fn(
        this: *mut IImageList,
        iDst: i32,
        punkSrc: *mut IUnknown,
        iSrc: i32,
        uFlags: u32,
    ) -> HRESULT,
    pub Merge: unsafe extern "system" fn(
        this: *mut IImageList,
        i1: i32,
        punk2: *mut IUnknown,
        i2: i32,
        dx: i32,
        dy: i32,
        riid: REFIID,
        ppv: *mut *mut c_void,
    ) -> HRESULT,
    pub Clone:
        unsafe extern "system" fn(this: *mut IImageList, riid: REFIID, ppv: *mut *mut c_void) -> HRESULT,
    pub GetImageRect:
        unsafe extern "system" fn(this: *mut IImageList, i: i32, prc: *mut RECT) -> HRESULT,
    pub GetIconSize:
        unsafe extern "system" fn(this: *mut IImageList, cx: *mut i32, cy: *mut i32) -> HRESULT,
    pub SetIconSize: unsafe extern "system" fn(this: *mut IImageList, cx: i32, cy: i32) -> HRESULT,
    pub GetImageCount: unsafe extern "system" fn(this: *mut IImageList, pi: *mut i32) -> HRESULT,
    pub SetImageCount: unsafe extern "system" fn(this: *mut IImageList, uNewCount: u32) -> HRESULT,
    pub SetBkColor: unsafe extern "system" fn(
        this: *mut IImageList,
        clrBk: COLORREF,
        pclr: *mut COLORREF,
    ) -> HRESULT,
    pub GetBkColor: unsafe extern "system" fn(this: *mut IImageList, pclr: *mut COLORREF) -> HRESULT,
    pub BeginDrag: unsafe extern "system" fn(
        this: *mut IImageList,
        iTrack: i32,
        dxHotspot: i32,
        dyHotspot: i32,
    ) -> HRESULT,
    pub EndDrag: unsafe extern "system" fn(this: *mut IImageList) -> HRESULT,
    pub DragEnter:
        unsafe extern "system" fn(this: *mut IImageList, hwndLock: HWND, x: i32, y: i32) -> HRESULT,
    pub DragLeave: unsafe extern "system" fn(this: *mut IImageList, hwndLock: HWND) -> HRESULT,
    pub DragMove: unsafe extern "system" fn(this: *mut IImageList, x: i32, y: i32) -> HRESULT,
    pub SetDragCursorImage: unsafe extern "system" fn(
        this: *mut IImageList,
        punk: *mut IUnknown,
        iDrag: i32,
        dxHotspot: i32,
        dyHotspot: i32,
    ) -> HRESULT,
    pub DragShowNolock: unsafe extern "system" fn(this: *mut IImageList, fShow: BOOL) -> HRESULT,
    pub GetDragImage: unsafe extern "system" fn(
        this: *mut IImageList,
        ppt: *mut POINT,
        pptHotspot: *mut POINT,
        riid: REFIID,
        ppv: *mut *mut c_void,
    ) -> HRESULT,
    pub GetItemFlags:
        unsafe extern "system" fn(this: *mut IImageList, i: i32, dwFlags: *mut u32) -> HRESULT,
    pub GetOverlayImage:
        unsafe extern "system" fn(this: *mut IImageList, iOverlay: i32, piIndex: *mut i32) -> HRESULT,
}

#[repr(C)]
pub struct IShellItemImageFactory {
    pub lpVtbl: *const IShellItemImageFactoryVtbl,
}

#[repr(C)]
pub struct IShellItemImageFactoryVtbl {
    pub base__: IUnknownVtbl,
    /// `size` is passed by value; `phbm` receives a bitmap the caller must
    /// free with `DeleteObject`.
    pub GetImage: unsafe extern "system" fn(
        this: *mut IShellItemImageFactory,
        size: SIZE,
        flags: u32,
        phbm: *mut HBITMAP,
    ) -> HRESULT,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT: usize = std::mem::size_of::<usize>();

    #[test]
    fn test_iid_bytes() {
        assert_eq!(IID_IImageList.data1, 0x46EB5926);
        assert_eq!(IID_IImageList.data2, 0x582E);
        assert_eq!(IID_IImageList.data3, 0x4017);
        assert_eq!(IID_IImageList.data4, [0x9F, 0xDF, 0xE8, 0x99, 0x8D, 0xAA, 0x09, 0x50]);
        assert_eq!(IID_IUnknown.data4, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);
    }

    #[test]
    fn test_vtable_slot_counts() {
        assert_eq!(std::mem::size_of::<IUnknownVtbl>(), 3 * SLOT);
        assert_eq!(std::mem::size_of::<IViewObjectVtbl>(), (3 + 6) * SLOT);
        assert_eq!(std::mem::size_of::<IImageListVtbl>(), (3 + 29) * SLOT);
        assert_eq!(std::mem::size_of::<IShellItemImageFactoryVtbl>(), (3 + 1) * SLOT);
    }

    #[test]
    fn test_vtable_slot_order() {
        assert_eq!(std::mem::offset_of!(IViewObjectVtbl, Draw), 3 * SLOT);
        assert_eq!(std::mem::offset_of!(IImageListVtbl, Add), 3 * SLOT);
        assert_eq!(std::mem::offset_of!(IImageListVtbl, Draw), 8 * SLOT);
        assert_eq!(std::mem::offset_of!(IImageListVtbl, GetImageCount), 18 * SLOT);
        assert_eq!(std::mem::offset_of!(IImageListVtbl, GetOverlayImage), 31 * SLOT);
        assert_eq!(std::mem::offset_of!(IShellItemImageFactoryVtbl, GetImage), 3 * SLOT);
    }
}
