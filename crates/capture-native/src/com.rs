//! Reference-counted COM interface pointers
//!
//! [`ComPtr`] owns exactly one reference: cloning calls `AddRef`, dropping
//! calls `Release`. Typed helpers below wrap the few methods capture code
//! calls on image lists, shell item image factories and view objects.

use std::ffi::c_void;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};

use capture_native_sys::{
    DVASPECT_CONTENT, COLORREF, GUID, HBITMAP, HDC, HICON, IID_IImageList,
    IID_IShellItemImageFactory, IID_IUnknown, IID_IViewObject, IImageList, IImageListVtbl,
    IMAGEINFO, IMAGELISTDRAWPARAMS, IShellItemImageFactory, IShellItemImageFactoryVtbl,
    IUnknown, IUnknownVtbl, IViewObject, IViewObjectVtbl, RECT, SIZE,
};
use tracing::trace;

use crate::error::{NativeError, Result};
use crate::self_sized::SelfDescribing;

pub use crate::error::hresult_to_result;

/// A COM interface declared in `capture_native_sys::com`.
///
/// # Safety
///
/// `Self` must be a `#[repr(C)]` struct whose only field is a pointer to
/// `Self::Vtable`, and `Self::Vtable` must start with `IUnknownVtbl`.
pub unsafe trait Interface: Sized {
    const IID: GUID;
    type Vtable;
}

unsafe impl Interface for IUnknown {
    const IID: GUID = IID_IUnknown;
    type Vtable = IUnknownVtbl;
}

unsafe impl Interface for IImageList {
    const IID: GUID = IID_IImageList;
    type Vtable = IImageListVtbl;
}

unsafe impl Interface for IShellItemImageFactory {
    const IID: GUID = IID_IShellItemImageFactory;
    type Vtable = IShellItemImageFactoryVtbl;
}

unsafe impl Interface for IViewObject {
    const IID: GUID = IID_IViewObject;
    type Vtable = IViewObjectVtbl;
}

/// Owning pointer to a COM interface.
pub struct ComPtr<T: Interface> {
    ptr: NonNull<T>,
}

impl<T: Interface> ComPtr<T> {
    /// Takes ownership of one reference. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live interface pointer of type `T` whose
    /// reference the caller is handing over (e.g. an out-parameter of a
    /// creating call).
    pub unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub fn as_raw(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Gives up ownership without calling `Release`.
    pub fn into_raw(self) -> *mut T {
        let this = ManuallyDrop::new(self);
        this.ptr.as_ptr()
    }

    pub fn vtable(&self) -> &T::Vtable {
        // SAFETY: guaranteed by `Interface`.
        unsafe { &**self.ptr.as_ptr().cast::<*const T::Vtable>() }
    }

    fn unknown_vtable(&self) -> &IUnknownVtbl {
        // SAFETY: every vtable begins with the IUnknown slots.
        unsafe { &**self.ptr.as_ptr().cast::<*const IUnknownVtbl>() }
    }

    fn as_unknown(&self) -> *mut IUnknown {
        self.ptr.as_ptr().cast()
    }

    pub fn query_interface<U: Interface>(&self) -> Result<ComPtr<U>> {
        let iid = U::IID;
        let mut out: *mut c_void = ptr::null_mut();
        let hr = unsafe { (self.unknown_vtable().QueryInterface)(self.as_unknown(), &iid, &mut out) };
        hresult_to_result("QueryInterface", hr)?;
        // SAFETY: a successful QueryInterface hands back an AddRef'd pointer.
        unsafe { ComPtr::from_raw(out.cast::<U>()) }.ok_or(NativeError::NullPointer("QueryInterface"))
    }

    /// Upcast to `IUnknown`, taking a new reference.
    pub fn to_unknown(&self) -> ComPtr<IUnknown> {
        self.clone().cast_unchecked()
    }

    fn cast_unchecked<U: Interface>(self) -> ComPtr<U> {
        let raw = self.into_raw();
        ComPtr {
            // SAFETY: `raw` came from a NonNull.
            ptr: unsafe { NonNull::new_unchecked(raw.cast::<U>()) },
        }
    }
}

impl<T: Interface> Clone for ComPtr<T> {
    fn clone(&self) -> Self {
        unsafe { (self.unknown_vtable().AddRef)(self.as_unknown()) };
        Self { ptr: self.ptr }
    }
}

impl<T: Interface> Drop for ComPtr<T> {
    fn drop(&mut self) {
        let remaining = unsafe { (self.unknown_vtable().Release)(self.as_unknown()) };
        trace!(target: "capture_native::com", iid = ?T::IID, remaining, "released interface");
    }
}

impl<T: Interface> std::fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ComPtr").field(&self.ptr).finish()
    }
}

impl ComPtr<IImageList> {
    pub fn image_count(&self) -> Result<i32> {
        let mut count = 0;
        let hr = unsafe { (self.vtable().GetImageCount)(self.as_raw(), &mut count) };
        hresult_to_result("IImageList::GetImageCount", hr)?;
        Ok(count)
    }

    pub fn icon_size(&self) -> Result<SIZE> {
        let (mut cx, mut cy) = (0, 0);
        let hr = unsafe { (self.vtable().GetIconSize)(self.as_raw(), &mut cx, &mut cy) };
        hresult_to_result("IImageList::GetIconSize", hr)?;
        Ok(SIZE::new(cx, cy))
    }

    pub fn set_icon_size(&self, size: SIZE) -> Result<()> {
        let hr = unsafe { (self.vtable().SetIconSize)(self.as_raw(), size.cx, size.cy) };
        hresult_to_result("IImageList::SetIconSize", hr)
    }

    /// Returns a new icon the caller must free with `DestroyIcon`.
    pub fn get_icon(&self, index: i32, flags: u32) -> Result<HICON> {
        let mut icon: HICON = ptr::null_mut();
        let hr = unsafe { (self.vtable().GetIcon)(self.as_raw(), index, flags, &mut icon) };
        hresult_to_result("IImageList::GetIcon", hr)?;
        if icon.is_null() {
            return Err(NativeError::NullPointer("IImageList::GetIcon"));
        }
        Ok(icon)
    }

    /// The returned bitmaps stay owned by the image list.
    pub fn image_info(&self, index: i32) -> Result<IMAGEINFO> {
        let mut info = IMAGEINFO::default();
        let hr = unsafe { (self.vtable().GetImageInfo)(self.as_raw(), index, &mut info) };
        hresult_to_result("IImageList::GetImageInfo", hr)?;
        Ok(info)
    }

    pub fn image_rect(&self, index: i32) -> Result<RECT> {
        let mut rect = RECT::default();
        let hr = unsafe { (self.vtable().GetImageRect)(self.as_raw(), index, &mut rect) };
        hresult_to_result("IImageList::GetImageRect", hr)?;
        Ok(rect)
    }

    /// `-1` removes every image.
    pub fn remove(&self, index: i32) -> Result<()> {
        let hr = unsafe { (self.vtable().Remove)(self.as_raw(), index) };
        hresult_to_result("IImageList::Remove", hr)
    }

    pub fn bk_color(&self) -> Result<COLORREF> {
        let mut color = 0;
        let hr = unsafe { (self.vtable().GetBkColor)(self.as_raw(), &mut color) };
        hresult_to_result("IImageList::GetBkColor", hr)?;
        Ok(color)
    }

    pub fn draw(&self, params: &mut IMAGELISTDRAWPARAMS) -> Result<()> {
        params.ensure_sized()?;
        params.himl = self.as_raw().cast();
        let hr = unsafe { (self.vtable().Draw)(self.as_raw(), params) };
        hresult_to_result("IImageList::Draw", hr)
    }
}

impl ComPtr<IShellItemImageFactory> {
    /// Thumbnail or icon bitmap for the item. Free the result with
    /// `DeleteObject`.
    pub fn get_image(&self, size: SIZE, flags: u32) -> Result<HBITMAP> {
        let mut bitmap: HBITMAP = ptr::null_mut();
        let hr = unsafe { (self.vtable().GetImage)(self.as_raw(), size, flags, &mut bitmap) };
        hresult_to_result("IShellItemImageFactory::GetImage", hr)?;
        if bitmap.is_null() {
            return Err(NativeError::NullPointer("IShellItemImageFactory::GetImage"));
        }
        Ok(bitmap)
    }
}

impl ComPtr<IViewObject> {
    /// Renders the object's content aspect into `hdc` within `bounds`.
    pub fn draw(&self, hdc: HDC, bounds: &RECT) -> Result<()> {
        let hr = unsafe {
            (self.vtable().Draw)(
                self.as_raw(),
                DVASPECT_CONTENT,
                -1,
                ptr::null_mut(),
                ptr::null(),
                ptr::null_mut(),
                hdc,
                bounds,
                ptr::null(),
                None,
                0,
            )
        };
        hresult_to_result("IViewObject::Draw", hr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capture_native_sys::{
        ContinueProc, E_INVALIDARG, E_NOINTERFACE, E_NOTIMPL, ILD_TRANSPARENT, REFIID, S_OK,
    };
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// In-process stand-in for a COM object. `slots` backs the vtable; slots
    /// a test never calls point at `not_implemented`.
    #[repr(C)]
    struct FakeObject {
        lp_vtbl: *const usize,
        refs: AtomicU32,
        iid: GUID,
        slots: Vec<usize>,
    }

    impl FakeObject {
        fn new(iid: GUID, slot_count: usize, overrides: &[(usize, usize)]) -> Box<Self> {
            let mut slots = vec![not_implemented as usize; slot_count];
            slots[0] = fake_query_interface as usize;
            slots[1] = fake_add_ref as usize;
            slots[2] = fake_release as usize;
            for &(index, f) in overrides {
                slots[index] = f;
            }
            let mut object = Box::new(Self {
                lp_vtbl: ptr::null(),
                refs: AtomicU32::new(1),
                iid,
                slots,
            });
            object.lp_vtbl = object.slots.as_ptr();
            object
        }

        fn refs(&self) -> u32 {
            self.refs.load(Ordering::SeqCst)
        }

        fn as_ptr<T>(&mut self) -> *mut T {
            (self as *mut Self).cast()
        }
    }

    unsafe extern "system" fn not_implemented() -> i32 {
        E_NOTIMPL
    }

    unsafe extern "system" fn fake_query_interface(
        this: *mut IUnknown,
        riid: REFIID,
        ppv: *mut *mut c_void,
    ) -> i32 {
        let object = &*this.cast::<FakeObject>();
        if *riid == object.iid || *riid == IID_IUnknown {
            object.refs.fetch_add(1, Ordering::SeqCst);
            *ppv = this.cast();
            S_OK
        } else {
            *ppv = ptr::null_mut();
            E_NOINTERFACE
        }
    }

    unsafe extern "system" fn fake_add_ref(this: *mut IUnknown) -> u32 {
        (*this.cast::<FakeObject>()).refs.fetch_add(1, Ordering::SeqCst) + 1
    }

    unsafe extern "system" fn fake_release(this: *mut IUnknown) -> u32 {
        (*this.cast::<FakeObject>()).refs.fetch_sub(1, Ordering::SeqCst) - 1
    }

    unsafe extern "system" fn fake_image_count(_this: *mut IImageList, pi: *mut i32) -> i32 {
        *pi = 7;
        S_OK
    }

    unsafe extern "system" fn fake_icon_size(
        _this: *mut IImageList,
        cx: *mut i32,
        cy: *mut i32,
    ) -> i32 {
        *cx = 32;
        *cy = 16;
        S_OK
    }

    unsafe extern "system" fn fake_remove(_this: *mut IImageList, i: i32) -> i32 {
        if i < -1 {
            E_INVALIDARG
        } else {
            S_OK
        }
    }

    unsafe extern "system" fn fake_get_image(
        _this: *mut IShellItemImageFactory,
        size: SIZE,
        _flags: u32,
        phbm: *mut HBITMAP,
    ) -> i32 {
        if size.cx <= 0 || size.cy <= 0 {
            return E_INVALIDARG;
        }
        *phbm = 0x1234 as HBITMAP;
        S_OK
    }

    /// Arguments seen by the recording slots below.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Draw {
            cb_size: u32,
            himl: usize,
            index: i32,
            hdc: usize,
            style: u32,
        },
        GetIcon {
            index: i32,
            flags: u32,
        },
        SetIconSize(i32, i32),
        ViewDraw {
            aspect: u32,
            lindex: i32,
            aspect_ptr_null: bool,
            target_device_null: bool,
            target_hdc: usize,
            hdc: usize,
            bounds: RECT,
            wbounds_null: bool,
            has_continue: bool,
            continue_arg: usize,
        },
    }

    thread_local! {
        static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    }

    fn record(call: Call) {
        CALLS.with(|calls| calls.borrow_mut().push(call));
    }

    fn calls() -> Vec<Call> {
        CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
    }

    unsafe extern "system" fn fake_draw(
        _this: *mut IImageList,
        params: *mut IMAGELISTDRAWPARAMS,
    ) -> i32 {
        let params = &*params;
        record(Call::Draw {
            cb_size: params.cbSize,
            himl: params.himl as usize,
            index: params.i,
            hdc: params.hdcDst as usize,
            style: params.fStyle,
        });
        S_OK
    }

    unsafe extern "system" fn fake_get_icon(
        _this: *mut IImageList,
        i: i32,
        flags: u32,
        picon: *mut HICON,
    ) -> i32 {
        record(Call::GetIcon { index: i, flags });
        // Index 99 succeeds without producing an icon.
        *picon = if i == 99 {
            ptr::null_mut()
        } else {
            (0x5000 + i as usize) as HICON
        };
        S_OK
    }

    fn cell(i: i32) -> RECT {
        RECT::new(i * 16, 0, i * 16 + 16, 16)
    }

    unsafe extern "system" fn fake_image_info(
        _this: *mut IImageList,
        i: i32,
        info: *mut IMAGEINFO,
    ) -> i32 {
        if i < 0 {
            return E_INVALIDARG;
        }
        (*info).hbmImage = 0xB0 as HBITMAP;
        (*info).hbmMask = 0xB1 as HBITMAP;
        (*info).rcImage = cell(i);
        S_OK
    }

    unsafe extern "system" fn fake_image_rect(_this: *mut IImageList, i: i32, rect: *mut RECT) -> i32 {
        if i < 0 {
            return E_INVALIDARG;
        }
        *rect = cell(i);
        S_OK
    }

    unsafe extern "system" fn fake_set_icon_size(_this: *mut IImageList, cx: i32, cy: i32) -> i32 {
        record(Call::SetIconSize(cx, cy));
        S_OK
    }

    #[allow(clippy::too_many_arguments)]
    unsafe extern "system" fn fake_view_draw(
        _this: *mut IViewObject,
        aspect: u32,
        lindex: i32,
        pv_aspect: *mut c_void,
        ptd: *const c_void,
        hdc_target: HDC,
        hdc_draw: HDC,
        bounds: *const RECT,
        wbounds: *const RECT,
        continue_proc: ContinueProc,
        continue_arg: usize,
    ) -> i32 {
        if bounds.is_null() {
            return E_INVALIDARG;
        }
        record(Call::ViewDraw {
            aspect,
            lindex,
            aspect_ptr_null: pv_aspect.is_null(),
            target_device_null: ptd.is_null(),
            target_hdc: hdc_target as usize,
            hdc: hdc_draw as usize,
            bounds: *bounds,
            wbounds_null: wbounds.is_null(),
            has_continue: continue_proc.is_some(),
            continue_arg,
        });
        S_OK
    }

    const IMAGE_LIST_SLOTS: usize = 3 + 29;
    const DRAW: usize = 8;
    const REMOVE: usize = 9;
    const GET_ICON: usize = 10;
    const GET_IMAGE_INFO: usize = 11;
    const GET_IMAGE_RECT: usize = 15;
    const GET_ICON_SIZE: usize = 16;
    const SET_ICON_SIZE: usize = 17;
    const GET_IMAGE_COUNT: usize = 18;

    const VIEW_OBJECT_SLOTS: usize = 3 + 6;
    const VIEW_DRAW: usize = 3;

    fn fake_image_list() -> Box<FakeObject> {
        FakeObject::new(
            IID_IImageList,
            IMAGE_LIST_SLOTS,
            &[
                (DRAW, fake_draw as usize),
                (REMOVE, fake_remove as usize),
                (GET_ICON, fake_get_icon as usize),
                (GET_IMAGE_INFO, fake_image_info as usize),
                (GET_IMAGE_RECT, fake_image_rect as usize),
                (GET_ICON_SIZE, fake_icon_size as usize),
                (SET_ICON_SIZE, fake_set_icon_size as usize),
                (GET_IMAGE_COUNT, fake_image_count as usize),
            ],
        )
    }

    #[test]
    fn test_slot_indices_match_vtable() {
        use std::mem::offset_of;

        let slot = std::mem::size_of::<usize>();
        assert_eq!(offset_of!(IImageListVtbl, Draw), DRAW * slot);
        assert_eq!(offset_of!(IImageListVtbl, Remove), REMOVE * slot);
        assert_eq!(offset_of!(IImageListVtbl, GetIcon), GET_ICON * slot);
        assert_eq!(offset_of!(IImageListVtbl, GetImageInfo), GET_IMAGE_INFO * slot);
        assert_eq!(offset_of!(IImageListVtbl, GetImageRect), GET_IMAGE_RECT * slot);
        assert_eq!(offset_of!(IImageListVtbl, GetIconSize), GET_ICON_SIZE * slot);
        assert_eq!(offset_of!(IImageListVtbl, SetIconSize), SET_ICON_SIZE * slot);
        assert_eq!(offset_of!(IImageListVtbl, GetImageCount), GET_IMAGE_COUNT * slot);
        assert_eq!(
            std::mem::size_of::<IImageListVtbl>(),
            IMAGE_LIST_SLOTS * slot
        );
        assert_eq!(offset_of!(IViewObjectVtbl, Draw), VIEW_DRAW * slot);
        assert_eq!(
            std::mem::size_of::<IViewObjectVtbl>(),
            VIEW_OBJECT_SLOTS * slot
        );
    }

    #[test]
    fn test_clone_and_drop_balance_refs() {
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();
        assert_eq!(object.refs(), 1);

        let second = list.clone();
        assert_eq!(object.refs(), 2);
        drop(second);
        assert_eq!(object.refs(), 1);

        drop(list);
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn test_into_raw_keeps_reference() {
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();
        let raw = list.into_raw();
        assert_eq!(object.refs(), 1);
        drop(unsafe { ComPtr::from_raw(raw) });
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn test_null_is_none() {
        assert!(unsafe { ComPtr::<IImageList>::from_raw(ptr::null_mut()) }.is_none());
    }

    #[test]
    fn test_query_interface() {
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();

        let unknown = list.query_interface::<IUnknown>().unwrap();
        assert_eq!(object.refs(), 2);
        drop(unknown);

        let err = list.query_interface::<IViewObject>().unwrap_err();
        assert!(matches!(
            err,
            NativeError::Hresult { hr: 0x8000_4002, .. }
        ));
        assert_eq!(object.refs(), 1);

        let unknown = list.to_unknown();
        assert_eq!(object.refs(), 2);
        drop(unknown);
        drop(list);
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn test_image_list_helpers() {
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();
        assert_eq!(list.image_count().unwrap(), 7);
        assert_eq!(list.icon_size().unwrap(), SIZE::new(32, 16));
        assert!(list.remove(-1).is_ok());
        assert!(list.remove(-5).is_err());

        // Slot left as a stub reports E_NOTIMPL.
        let err = list.bk_color().unwrap_err();
        assert!(matches!(err, NativeError::Hresult { hr: 0x8000_4001, .. }));
    }

    #[test]
    fn test_image_factory_get_image() {
        let mut object = FakeObject::new(
            IID_IShellItemImageFactory,
            4,
            &[(3, fake_get_image as usize)],
        );
        let factory =
            unsafe { ComPtr::<IShellItemImageFactory>::from_raw(object.as_ptr()) }.unwrap();
        let bitmap = factory.get_image(SIZE::new(256, 256), 0).unwrap();
        assert_eq!(bitmap as usize, 0x1234);
        assert!(factory.get_image(SIZE::new(0, 256), 0).is_err());
        drop(factory);
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn test_image_list_draw_fills_list_handle() {
        calls();
        let mut object = fake_image_list();
        let address = &*object as *const FakeObject as usize;
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();

        let mut params = IMAGELISTDRAWPARAMS {
            i: 3,
            hdcDst: 0x77 as HDC,
            fStyle: ILD_TRANSPARENT,
            ..Default::default()
        };
        assert!(params.himl.is_null());
        list.draw(&mut params).unwrap();

        assert_eq!(params.himl as usize, address);
        assert_eq!(
            calls(),
            vec![Call::Draw {
                cb_size: std::mem::size_of::<IMAGELISTDRAWPARAMS>() as u32,
                himl: address,
                index: 3,
                hdc: 0x77,
                style: ILD_TRANSPARENT,
            }]
        );
    }

    #[test]
    fn test_image_list_draw_rejects_unsized_params() {
        calls();
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();

        let mut params = IMAGELISTDRAWPARAMS {
            cbSize: 0,
            ..Default::default()
        };
        let err = list.draw(&mut params).unwrap_err();
        assert!(matches!(
            err,
            NativeError::LayoutMismatch { declared: 0, .. }
        ));
        // Never reached the object.
        assert!(calls().is_empty());
        assert!(params.himl.is_null());
    }

    #[test]
    fn test_image_list_out_params() {
        calls();
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();

        let icon = list.get_icon(4, ILD_TRANSPARENT).unwrap();
        assert_eq!(icon as usize, 0x5004);
        assert!(matches!(
            list.get_icon(99, 0),
            Err(NativeError::NullPointer("IImageList::GetIcon"))
        ));
        assert_eq!(
            calls(),
            vec![
                Call::GetIcon { index: 4, flags: ILD_TRANSPARENT },
                Call::GetIcon { index: 99, flags: 0 },
            ]
        );

        let info = list.image_info(2).unwrap();
        assert_eq!(info.hbmImage as usize, 0xB0);
        assert_eq!(info.hbmMask as usize, 0xB1);
        assert_eq!(info.rcImage, RECT::new(32, 0, 48, 16));
        assert!(list.image_info(-2).is_err());

        assert_eq!(list.image_rect(1).unwrap(), RECT::new(16, 0, 32, 16));
        assert!(matches!(
            list.image_rect(-1),
            Err(NativeError::Hresult { hr: 0x8007_0057, .. })
        ));
    }

    #[test]
    fn test_image_list_set_icon_size_passes_extent() {
        calls();
        let mut object = fake_image_list();
        let list = unsafe { ComPtr::<IImageList>::from_raw(object.as_ptr()) }.unwrap();
        list.set_icon_size(SIZE::new(48, 24)).unwrap();
        assert_eq!(calls(), vec![Call::SetIconSize(48, 24)]);
    }

    #[test]
    fn test_view_object_draw_arguments() {
        calls();
        let mut object = FakeObject::new(
            IID_IViewObject,
            VIEW_OBJECT_SLOTS,
            &[(VIEW_DRAW, fake_view_draw as usize)],
        );
        let view = unsafe { ComPtr::<IViewObject>::from_raw(object.as_ptr()) }.unwrap();

        let bounds = RECT::new(5, 10, 205, 110);
        view.draw(0x99 as HDC, &bounds).unwrap();
        assert_eq!(
            calls(),
            vec![Call::ViewDraw {
                aspect: DVASPECT_CONTENT,
                lindex: -1,
                aspect_ptr_null: true,
                target_device_null: true,
                target_hdc: 0,
                hdc: 0x99,
                bounds,
                wbounds_null: true,
                has_continue: false,
                continue_arg: 0,
            }]
        );
        drop(view);
        assert_eq!(object.refs(), 0);
    }
}
