//! Tracker Module - Owned input state and the query API
//!
//! [`InputTracker`] owns all mutable input state: per-key and per-button
//! [`PressState`], the cursor position, and the suppress-defaults flag.
//! An external event source feeds it raw transitions (`key_down`,
//! `button_up`, `pointer_moved`, ...) and application code queries it
//! between ticks.
//!
//! # API
//!
//! - `key_down` / `key_up` / `button_down` / `button_up` - Event ingestion
//! - `pointer_moved` - Cursor motion ingestion
//! - `key_held` / `button_held` - Level queries (chords)
//! - `key_pressed` / `button_pressed` - Edge queries, consumed on read
//! - `resolve_key` / `resolve_button` - Name/code resolution
//! - `position` / `set_position` - Cursor position
//! - `suppress_defaults` / `set_suppress_defaults` - Default-action policy
//!
//! # Example
//!
//! ```
//! use keytrack::{key, InputTracker};
//!
//! let mut tracker = InputTracker::new();
//! tracker.key_down(key::LEFT);
//!
//! assert_eq!(tracker.key_held(["left"]), Ok(true));
//! assert_eq!(tracker.key_pressed(["left"]), Ok(true));
//! assert_eq!(tracker.key_pressed(["left"]), Ok(false)); // edge consumed
//! ```

use log::trace;

use crate::codes::{Button, Key, NameTable, BUTTON_COUNT};
use crate::error::Result;
use crate::state::PressState;

// =============================================================================
// TYPES
// =============================================================================

/// Last observed absolute cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// TRACKER
// =============================================================================

/// Input state tracker for keyboard keys, mouse buttons, and the cursor.
///
/// Construction is initialization: every key code 0..=255 and button code
/// 0..=2 has a defined [`PressState`] from the start, the name table is
/// populated, and the cursor sits at (0, 0) until the first motion event
/// or an explicit [`set_position`](Self::set_position).
///
/// The tracker is single-threaded and callback-driven: ingestion runs from
/// the event loop delivering input callbacks, queries from the same (or a
/// synchronized) loop. No operation blocks or performs I/O.
#[derive(Debug)]
pub struct InputTracker {
    keys: [PressState; 256],
    buttons: [PressState; BUTTON_COUNT],
    position: Position,
    suppress_defaults: bool,
    names: NameTable,
}

impl InputTracker {
    /// Create a tracker with all keys and buttons released and the cursor
    /// at (0, 0).
    pub fn new() -> Self {
        Self {
            keys: [PressState::new(); 256],
            buttons: [PressState::new(); BUTTON_COUNT],
            position: Position::default(),
            suppress_defaults: false,
            names: NameTable::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Event ingestion
    // -------------------------------------------------------------------------
    //
    // Each ingestion method returns the suppress-default signal: true when
    // the suppression flag is set, telling the event source to prevent the
    // platform's default handling of this event. The flag is last-write-wins
    // and takes effect on the next delivered event.

    /// Record a key-down transition.
    ///
    /// Never touches the edge flag, so a key re-triggered by OS auto-repeat
    /// does not re-fire a pressed edge.
    pub fn key_down(&mut self, code: u8) -> bool {
        trace!("key down: {code}");
        self.keys[code as usize].on_press();
        self.suppress_defaults
    }

    /// Record a key-up transition. Clears both the held and edge flags.
    pub fn key_up(&mut self, code: u8) -> bool {
        trace!("key up: {code}");
        self.keys[code as usize].on_release();
        self.suppress_defaults
    }

    /// Record a button-down transition. Codes above 2 are ignored.
    pub fn button_down(&mut self, code: u8) -> bool {
        trace!("button down: {code}");
        if let Some(state) = self.buttons.get_mut(code as usize) {
            state.on_press();
        }
        self.suppress_defaults
    }

    /// Record a button-up transition. Codes above 2 are ignored.
    pub fn button_up(&mut self, code: u8) -> bool {
        trace!("button up: {code}");
        if let Some(state) = self.buttons.get_mut(code as usize) {
            state.on_release();
        }
        self.suppress_defaults
    }

    /// Record cursor motion. Both coordinates update together.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.position = Position::new(x, y);
        self.suppress_defaults
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// Resolve a key name or code to its numeric code.
    ///
    /// Names are looked up in the name table ([`Error::UnknownName`] on a
    /// miss); codes are range-checked against 1..=255
    /// ([`Error::OutOfRange`] outside).
    ///
    /// [`Error::UnknownName`]: crate::Error::UnknownName
    /// [`Error::OutOfRange`]: crate::Error::OutOfRange
    pub fn resolve_key<'a>(&self, input: impl Into<Key<'a>>) -> Result<u8> {
        self.names.resolve_key(input.into())
    }

    /// Resolve a button name or code to its numeric code (valid range 0..=2).
    pub fn resolve_button<'a>(&self, input: impl Into<Button<'a>>) -> Result<u8> {
        self.names.resolve_button(input.into())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Check whether every supplied key is currently held.
    ///
    /// Accepts names, codes, or a mix (via [`Key`]); supplying at least one
    /// key is a precondition. Resolution failures propagate to the caller.
    pub fn key_held<'a, I>(&self, keys: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Key<'a>>,
    {
        let mut checked = 0usize;
        let mut all = true;
        for input in keys {
            let code = self.names.resolve_key(input.into())?;
            checked += 1;
            all &= self.keys[code as usize].held;
        }
        debug_assert!(checked > 0, "key_held requires at least one key");
        Ok(checked > 0 && all)
    }

    /// Check whether every supplied key fired its pressed edge this call.
    ///
    /// Each satisfied code's edge is consumed as it is checked and will not
    /// fire again until that key is released and re-pressed. Evaluation
    /// does not short-circuit: in a multi-key call, edges are consumed for
    /// the keys that satisfied the condition even when the overall result
    /// is false. Callers combining keys should be aware of this.
    pub fn key_pressed<'a, I>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Key<'a>>,
    {
        let mut checked = 0usize;
        let mut all = true;
        for input in keys {
            let code = self.names.resolve_key(input.into())?;
            checked += 1;
            all &= self.keys[code as usize].consume_edge();
        }
        debug_assert!(checked > 0, "key_pressed requires at least one key");
        Ok(checked > 0 && all)
    }

    /// Check whether every supplied button is currently held.
    pub fn button_held<'a, I>(&self, buttons: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Button<'a>>,
    {
        let mut checked = 0usize;
        let mut all = true;
        for input in buttons {
            let code = self.names.resolve_button(input.into())?;
            checked += 1;
            all &= self.buttons[code as usize].held;
        }
        debug_assert!(checked > 0, "button_held requires at least one button");
        Ok(checked > 0 && all)
    }

    /// Check whether every supplied button fired its pressed edge this call.
    ///
    /// Same edge-consumption behavior as [`key_pressed`](Self::key_pressed).
    pub fn button_pressed<'a, I>(&mut self, buttons: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Button<'a>>,
    {
        let mut checked = 0usize;
        let mut all = true;
        for input in buttons {
            let code = self.names.resolve_button(input.into())?;
            checked += 1;
            all &= self.buttons[code as usize].consume_edge();
        }
        debug_assert!(checked > 0, "button_pressed requires at least one button");
        Ok(checked > 0 && all)
    }

    // -------------------------------------------------------------------------
    // Cursor position
    // -------------------------------------------------------------------------

    /// Get the current cursor position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Set the cursor position explicitly, e.g. to establish a starting
    /// position before any motion event arrives.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Position::new(x, y);
    }

    // -------------------------------------------------------------------------
    // Default-action suppression
    // -------------------------------------------------------------------------

    /// Whether ingestion currently signals suppress-default to the event
    /// source.
    pub fn suppress_defaults(&self) -> bool {
        self.suppress_defaults
    }

    /// Toggle default-action suppression. Takes effect on the next event.
    pub fn set_suppress_defaults(&mut self, suppress: bool) {
        self.suppress_defaults = suppress;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
