//! Codes Module - Numeric key/button codes, named constants, resolution
//!
//! Keys are identified by a `u8` code (valid query range 1..=255, matching
//! the classic DOM `keyCode` values) and mouse buttons by a `u8` in 0..=2
//! (left, middle, right). This module provides:
//!
//! - [`key`] / [`button`] - Named constants (`key::ENTER`, `button::LEFT`)
//! - [`Key`] / [`Button`] - Tagged name-or-code inputs for the query API
//! - [`NameTable`] - The symbolic-name lookup built at tracker construction
//!
//! # Example
//!
//! ```ignore
//! use keytrack::{key, Key};
//!
//! assert_eq!(key::ENTER, 13);
//! let by_name: Key = "enter".into();
//! let by_code: Key = key::ENTER.into();
//! ```

use std::collections::HashMap;

use crate::error::{Error, Result};

// =============================================================================
// VALID RANGES
// =============================================================================

/// Smallest valid key code.
pub const KEY_CODE_MIN: u8 = 1;
/// Largest valid key code.
pub const KEY_CODE_MAX: u8 = 255;
/// Smallest valid button code.
pub const BUTTON_CODE_MIN: u8 = 0;
/// Largest valid button code.
pub const BUTTON_CODE_MAX: u8 = 2;
/// Number of tracked mouse buttons.
pub const BUTTON_COUNT: usize = 3;

// =============================================================================
// NAMED CONSTANTS
// =============================================================================

/// Named key codes.
pub mod key {
    pub const BACKSPACE: u8 = 8;
    pub const TAB: u8 = 9;
    pub const ENTER: u8 = 13;
    pub const SHIFT: u8 = 16;
    pub const CTRL: u8 = 17;
    pub const ALT: u8 = 18;
    pub const PAUSE_BREAK: u8 = 19;
    pub const CAPS_LOCK: u8 = 20;
    pub const ESC: u8 = 27;
    pub const SPACE: u8 = 32;
    pub const PAGE_UP: u8 = 33;
    pub const PAGE_DOWN: u8 = 34;
    pub const END: u8 = 35;
    pub const HOME: u8 = 36;
    pub const LEFT: u8 = 37;
    pub const UP: u8 = 38;
    pub const RIGHT: u8 = 39;
    pub const DOWN: u8 = 40;
    pub const INSERT: u8 = 45;
    pub const DELETE: u8 = 46;
    pub const DIGIT_0: u8 = 48;
    pub const DIGIT_1: u8 = 49;
    pub const DIGIT_2: u8 = 50;
    pub const DIGIT_3: u8 = 51;
    pub const DIGIT_4: u8 = 52;
    pub const DIGIT_5: u8 = 53;
    pub const DIGIT_6: u8 = 54;
    pub const DIGIT_7: u8 = 55;
    pub const DIGIT_8: u8 = 56;
    pub const DIGIT_9: u8 = 57;
    pub const A: u8 = 65;
    pub const B: u8 = 66;
    pub const C: u8 = 67;
    pub const D: u8 = 68;
    pub const E: u8 = 69;
    pub const F: u8 = 70;
    pub const G: u8 = 71;
    pub const H: u8 = 72;
    pub const I: u8 = 73;
    pub const J: u8 = 74;
    pub const K: u8 = 75;
    pub const L: u8 = 76;
    pub const M: u8 = 77;
    pub const N: u8 = 78;
    pub const O: u8 = 79;
    pub const P: u8 = 80;
    pub const Q: u8 = 81;
    pub const R: u8 = 82;
    pub const S: u8 = 83;
    pub const T: u8 = 84;
    pub const U: u8 = 85;
    pub const V: u8 = 86;
    pub const W: u8 = 87;
    pub const X: u8 = 88;
    pub const Y: u8 = 89;
    pub const Z: u8 = 90;
    pub const WINDOWS: u8 = 91;
    pub const MENU: u8 = 93;
    pub const NUMPAD_0: u8 = 96;
    pub const NUMPAD_1: u8 = 97;
    pub const NUMPAD_2: u8 = 98;
    pub const NUMPAD_3: u8 = 99;
    pub const NUMPAD_4: u8 = 100;
    pub const NUMPAD_5: u8 = 101;
    pub const NUMPAD_6: u8 = 102;
    pub const NUMPAD_7: u8 = 103;
    pub const NUMPAD_8: u8 = 104;
    pub const NUMPAD_9: u8 = 105;
    pub const NUMPAD_STAR: u8 = 106;
    pub const NUMPAD_PLUS: u8 = 107;
    pub const NUMPAD_MINUS: u8 = 109;
    pub const NUMPAD_PERIOD: u8 = 110;
    pub const NUMPAD_SLASH: u8 = 111;
    pub const F1: u8 = 112;
    pub const F2: u8 = 113;
    pub const F3: u8 = 114;
    pub const F4: u8 = 115;
    pub const F5: u8 = 116;
    pub const F6: u8 = 117;
    pub const F7: u8 = 118;
    pub const F8: u8 = 119;
    pub const F9: u8 = 120;
    pub const F10: u8 = 121;
    pub const F11: u8 = 122;
    pub const F12: u8 = 123;
    pub const NUM_LOCK: u8 = 144;
    pub const SCROLL_LOCK: u8 = 145;
    pub const COMPUTER: u8 = 182;
    pub const CALCULATOR: u8 = 183;
    pub const SEMICOLON: u8 = 186;
    pub const EQUALS: u8 = 187;
    pub const COMMA: u8 = 188;
    pub const DASH: u8 = 189;
    pub const PERIOD: u8 = 190;
    pub const FORWARD_SLASH: u8 = 191;
    pub const TICK: u8 = 192;
    pub const BRACKET_LEFT: u8 = 219;
    pub const BACK_SLASH: u8 = 220;
    pub const BRACKET_RIGHT: u8 = 221;
    pub const APOSTROPHE: u8 = 222;
}

/// Named button codes.
pub mod button {
    pub const LEFT: u8 = 0;
    pub const MIDDLE: u8 = 1;
    pub const RIGHT: u8 = 2;
}

// =============================================================================
// NAME TABLES
// =============================================================================

/// Human-readable key names and their codes.
const KEY_NAMES: &[(&str, u8)] = &[
    ("backspace", key::BACKSPACE),
    ("tab", key::TAB),
    ("enter", key::ENTER),
    ("shift", key::SHIFT),
    ("control", key::CTRL),
    ("alt", key::ALT),
    ("pausebreak", key::PAUSE_BREAK),
    ("caps lock", key::CAPS_LOCK),
    ("escape", key::ESC),
    ("space", key::SPACE),
    ("page up", key::PAGE_UP),
    ("page down", key::PAGE_DOWN),
    ("end", key::END),
    ("home", key::HOME),
    ("left", key::LEFT),
    ("up", key::UP),
    ("right", key::RIGHT),
    ("down", key::DOWN),
    ("insert", key::INSERT),
    ("delete", key::DELETE),
    ("0", key::DIGIT_0),
    ("1", key::DIGIT_1),
    ("2", key::DIGIT_2),
    ("3", key::DIGIT_3),
    ("4", key::DIGIT_4),
    ("5", key::DIGIT_5),
    ("6", key::DIGIT_6),
    ("7", key::DIGIT_7),
    ("8", key::DIGIT_8),
    ("9", key::DIGIT_9),
    ("a", key::A),
    ("b", key::B),
    ("c", key::C),
    ("d", key::D),
    ("e", key::E),
    ("f", key::F),
    ("g", key::G),
    ("h", key::H),
    ("i", key::I),
    ("j", key::J),
    ("k", key::K),
    ("l", key::L),
    ("m", key::M),
    ("n", key::N),
    ("o", key::O),
    ("p", key::P),
    ("q", key::Q),
    ("r", key::R),
    ("s", key::S),
    ("t", key::T),
    ("u", key::U),
    ("v", key::V),
    ("w", key::W),
    ("x", key::X),
    ("y", key::Y),
    ("z", key::Z),
    ("windows", key::WINDOWS),
    ("menu", key::MENU),
    ("numpad 0", key::NUMPAD_0),
    ("numpad 1", key::NUMPAD_1),
    ("numpad 2", key::NUMPAD_2),
    ("numpad 3", key::NUMPAD_3),
    ("numpad 4", key::NUMPAD_4),
    ("numpad 5", key::NUMPAD_5),
    ("numpad 6", key::NUMPAD_6),
    ("numpad 7", key::NUMPAD_7),
    ("numpad 8", key::NUMPAD_8),
    ("numpad 9", key::NUMPAD_9),
    ("numpad star", key::NUMPAD_STAR),
    ("numpad plus", key::NUMPAD_PLUS),
    ("numpad minus", key::NUMPAD_MINUS),
    ("numpad period", key::NUMPAD_PERIOD),
    ("numpad slash", key::NUMPAD_SLASH),
    ("f1", key::F1),
    ("f2", key::F2),
    ("f3", key::F3),
    ("f4", key::F4),
    ("f5", key::F5),
    ("f6", key::F6),
    ("f7", key::F7),
    ("f8", key::F8),
    ("f9", key::F9),
    ("f10", key::F10),
    ("f11", key::F11),
    ("f12", key::F12),
    ("number lock", key::NUM_LOCK),
    ("scroll lock", key::SCROLL_LOCK),
    ("computer", key::COMPUTER),
    ("calculator", key::CALCULATOR),
    ("semicolon", key::SEMICOLON),
    ("equals", key::EQUALS),
    ("comma", key::COMMA),
    ("dash", key::DASH),
    ("period", key::PERIOD),
    ("forward slash", key::FORWARD_SLASH),
    // "tick" and "grave" are aliases for the same physical key.
    ("tick", key::TICK),
    ("grave", key::TICK),
    ("bracket left", key::BRACKET_LEFT),
    ("back slash", key::BACK_SLASH),
    ("bracket right", key::BRACKET_RIGHT),
    ("apostrophe", key::APOSTROPHE),
];

/// Human-readable button names and their codes.
const BUTTON_NAMES: &[(&str, u8)] = &[
    ("left", button::LEFT),
    ("middle", button::MIDDLE),
    ("right", button::RIGHT),
];

// =============================================================================
// NAME-OR-CODE INPUTS
// =============================================================================

/// A key input for the query API: a symbolic name or a numeric code.
///
/// Built via `From` so call sites can pass `"enter"`, `key::ENTER`, or a
/// plain integer literal directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Symbolic name, resolved through the name table.
    Name(&'a str),
    /// Numeric code, range-checked against 1..=255.
    Code(i32),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl From<i32> for Key<'_> {
    fn from(code: i32) -> Self {
        Key::Code(code)
    }
}

impl From<u8> for Key<'_> {
    fn from(code: u8) -> Self {
        Key::Code(code as i32)
    }
}

/// A button input for the query API: a symbolic name or a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button<'a> {
    /// Symbolic name: "left", "middle", or "right".
    Name(&'a str),
    /// Numeric code, range-checked against 0..=2.
    Code(i32),
}

impl<'a> From<&'a str> for Button<'a> {
    fn from(name: &'a str) -> Self {
        Button::Name(name)
    }
}

impl From<i32> for Button<'_> {
    fn from(code: i32) -> Self {
        Button::Code(code)
    }
}

impl From<u8> for Button<'_> {
    fn from(code: u8) -> Self {
        Button::Code(code as i32)
    }
}

// =============================================================================
// NAME TABLE
// =============================================================================

/// Symbolic-name lookup for keys and buttons.
///
/// Populated once when the tracker is constructed and read-only afterwards.
#[derive(Debug)]
pub(crate) struct NameTable {
    keys: HashMap<&'static str, u8>,
    buttons: HashMap<&'static str, u8>,
}

impl NameTable {
    pub(crate) fn new() -> Self {
        Self {
            keys: KEY_NAMES.iter().copied().collect(),
            buttons: BUTTON_NAMES.iter().copied().collect(),
        }
    }

    /// Resolve a key input to its numeric code.
    pub(crate) fn resolve_key(&self, input: Key<'_>) -> Result<u8> {
        match input {
            Key::Name(name) => self
                .keys
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownName(name.to_string())),
            Key::Code(code) => in_range(code, KEY_CODE_MIN, KEY_CODE_MAX),
        }
    }

    /// Resolve a button input to its numeric code.
    pub(crate) fn resolve_button(&self, input: Button<'_>) -> Result<u8> {
        match input {
            Button::Name(name) => self
                .buttons
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownName(name.to_string())),
            Button::Code(code) => in_range(code, BUTTON_CODE_MIN, BUTTON_CODE_MAX),
        }
    }
}

fn in_range(code: i32, min: u8, max: u8) -> Result<u8> {
    if code < min as i32 || code > max as i32 {
        return Err(Error::OutOfRange { code, min, max });
    }
    Ok(code as u8)
}

// =============================================================================
// TESTS
// =============================================================================
