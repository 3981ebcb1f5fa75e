//! Geometry primitives shared by most Win32 structures

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Edge-based rectangle (`RECT`). `right`/`bottom` are exclusive.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct RECT {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RECT {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from an origin and a size. Edge arithmetic wraps like the
    /// 32-bit Win32 fields do.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.wrapping_add(width), y.wrapping_add(height))
    }

    pub const fn x(&self) -> i32 {
        self.left
    }

    /// Moves the left edge and keeps the width.
    pub fn set_x(&mut self, x: i32) {
        self.right = self.right.wrapping_sub(self.left.wrapping_sub(x));
        self.left = x;
    }

    pub const fn y(&self) -> i32 {
        self.top
    }

    /// Moves the top edge and keeps the height.
    pub fn set_y(&mut self, y: i32) {
        self.bottom = self.bottom.wrapping_sub(self.top.wrapping_sub(y));
        self.top = y;
    }

    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Keeps `left` and recomputes `right`.
    pub fn set_width(&mut self, width: i32) {
        self.right = self.left.wrapping_add(width);
    }

    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Keeps `top` and recomputes `bottom`.
    pub fn set_height(&mut self, height: i32) {
        self.bottom = self.top.wrapping_add(height);
    }

    pub const fn location(&self) -> POINT {
        POINT::new(self.left, self.top)
    }

    pub fn set_location(&mut self, location: POINT) {
        self.set_x(location.x);
        self.set_y(location.y);
    }

    pub const fn size(&self) -> SIZE {
        SIZE::new(self.width(), self.height())
    }

    pub fn set_size(&mut self, size: SIZE) {
        self.set_width(size.cx);
        self.set_height(size.cy);
    }

    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub const fn contains(&self, point: POINT) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

impl fmt::Display for RECT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Left={},Top={},Right={},Bottom={}}}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct POINT {
    pub x: i32,
    pub y: i32,
}

impl POINT {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct SIZE {
    pub cx: i32,
    pub cy: i32,
}

impl SIZE {
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }
}

impl fmt::Display for SIZE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cx, self.cy)
    }
}

/// Frame extension margins (`DwmExtendFrameIntoClientArea`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct MARGINS {
    pub cxLeftWidth: i32,
    pub cxRightWidth: i32,
    pub cyTopHeight: i32,
    pub cyBottomHeight: i32,
}

impl MARGINS {
    /// All four margins set to -1 ("sheet of glass").
    pub const fn sheet_of_glass() -> Self {
        Self {
            cxLeftWidth: -1,
            cxRightWidth: -1,
            cyTopHeight: -1,
            cyBottomHeight: -1,
        }
    }
}
