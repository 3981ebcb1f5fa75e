//! Synthetic input events
//!
//! [`Input`] is the checked form of the raw `INPUT` tagged union: the
//! discriminant and the live member can never disagree. Convert to `INPUT`
//! only at the `SendInput` boundary.

use capture_native_sys::{
    HARDWAREINPUT, INPUT, INPUT_HARDWARE, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT,
    KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_HWHEEL,
    MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
    MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL,
    MOUSEEVENTF_XDOWN, MOUSEEVENTF_XUP, MOUSEINPUT, XBUTTON1, XBUTTON2,
};

use crate::error::NativeError;

/// One `SendInput` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Mouse(MOUSEINPUT),
    Keyboard(KEYBDINPUT),
    Hardware(HARDWAREINPUT),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Browser back on most mice
    X1,
    /// Browser forward on most mice
    X2,
}

impl MouseButton {
    fn flags(self, down: bool) -> u32 {
        match (self, down) {
            (MouseButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
            (MouseButton::Left, false) => MOUSEEVENTF_LEFTUP,
            (MouseButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
            (MouseButton::Right, false) => MOUSEEVENTF_RIGHTUP,
            (MouseButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
            (MouseButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
            (MouseButton::X1 | MouseButton::X2, true) => MOUSEEVENTF_XDOWN,
            (MouseButton::X1 | MouseButton::X2, false) => MOUSEEVENTF_XUP,
        }
    }

    fn mouse_data(self) -> u32 {
        match self {
            MouseButton::X1 => XBUTTON1,
            MouseButton::X2 => XBUTTON2,
            _ => 0,
        }
    }
}

impl Input {
    pub fn key_down(vk: u16) -> Self {
        Input::Keyboard(KEYBDINPUT {
            wVk: vk,
            ..Default::default()
        })
    }

    pub fn key_up(vk: u16) -> Self {
        Input::Keyboard(KEYBDINPUT {
            wVk: vk,
            dwFlags: KEYEVENTF_KEYUP,
            ..Default::default()
        })
    }

    /// A UTF-16 code unit delivered as `WM_CHAR` regardless of layout.
    pub fn unicode_char(unit: u16, up: bool) -> Self {
        let mut flags = KEYEVENTF_UNICODE;
        if up {
            flags |= KEYEVENTF_KEYUP;
        }
        Input::Keyboard(KEYBDINPUT {
            wVk: 0,
            wScan: unit,
            dwFlags: flags,
            ..Default::default()
        })
    }

    /// Relative move in mickeys, or an absolute move in the normalized
    /// 0..=65535 screen space.
    pub fn mouse_move(dx: i32, dy: i32, absolute: bool) -> Self {
        let mut flags = MOUSEEVENTF_MOVE;
        if absolute {
            flags |= MOUSEEVENTF_ABSOLUTE;
        }
        Input::Mouse(MOUSEINPUT {
            dx,
            dy,
            dwFlags: flags,
            ..Default::default()
        })
    }

    pub fn mouse_button(button: MouseButton, down: bool) -> Self {
        Input::Mouse(MOUSEINPUT {
            mouseData: button.mouse_data(),
            dwFlags: button.flags(down),
            ..Default::default()
        })
    }

    /// Vertical wheel; positive scrolls away from the user. One notch is
    /// `WHEEL_DELTA`.
    pub fn wheel(delta: i32) -> Self {
        Input::Mouse(MOUSEINPUT {
            mouseData: delta as u32,
            dwFlags: MOUSEEVENTF_WHEEL,
            ..Default::default()
        })
    }

    pub fn hwheel(delta: i32) -> Self {
        Input::Mouse(MOUSEINPUT {
            mouseData: delta as u32,
            dwFlags: MOUSEEVENTF_HWHEEL,
            ..Default::default()
        })
    }

    /// The raw discriminant this record converts to.
    pub fn kind(&self) -> u32 {
        match self {
            Input::Mouse(_) => INPUT_MOUSE,
            Input::Keyboard(_) => INPUT_KEYBOARD,
            Input::Hardware(_) => INPUT_HARDWARE,
        }
    }
}

impl From<Input> for INPUT {
    fn from(input: Input) -> Self {
        let mut raw = INPUT {
            r#type: input.kind(),
            ..Default::default()
        };
        match input {
            Input::Mouse(mi) => raw.u.mi = mi,
            Input::Keyboard(ki) => raw.u.ki = ki,
            Input::Hardware(hi) => raw.u.hi = hi,
        }
        raw
    }
}

impl TryFrom<INPUT> for Input {
    type Error = NativeError;

    fn try_from(raw: INPUT) -> Result<Self, Self::Error> {
        // SAFETY: `type` names the live member.
        unsafe {
            match raw.r#type {
                INPUT_MOUSE => Ok(Input::Mouse(raw.u.mi)),
                INPUT_KEYBOARD => Ok(Input::Keyboard(raw.u.ki)),
                INPUT_HARDWARE => Ok(Input::Hardware(raw.u.hi)),
                other => Err(NativeError::UnknownInputType(other)),
            }
        }
    }
}

/// Ordered batch of inputs for one `SendInput` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    inputs: Vec<Input>,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: Input) -> &mut Self {
        self.inputs.push(input);
        self
    }

    /// Down then up for a virtual key.
    pub fn key_press(&mut self, vk: u16) -> &mut Self {
        self.push(Input::key_down(vk)).push(Input::key_up(vk))
    }

    /// Down and up for every UTF-16 unit of `text`. Surrogate pairs are sent
    /// as two consecutive units, which is what `SendInput` expects.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for unit in text.encode_utf16() {
            self.push(Input::unicode_char(unit, false))
                .push(Input::unicode_char(unit, true));
        }
        self
    }

    pub fn click(&mut self, button: MouseButton) -> &mut Self {
        self.push(Input::mouse_button(button, true))
            .push(Input::mouse_button(button, false))
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn to_raw(&self) -> Vec<INPUT> {
        self.inputs.iter().copied().map(INPUT::from).collect()
    }
}

impl Extend<Input> for InputBatch {
    fn extend<I: IntoIterator<Item = Input>>(&mut self, iter: I) {
        self.inputs.extend(iter);
    }
}

impl FromIterator<Input> for InputBatch {
    fn from_iter<I: IntoIterator<Item = Input>>(iter: I) -> Self {
        Self {
            inputs: iter.into_iter().collect(),
        }
    }
}
