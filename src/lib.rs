//! # keytrack
//!
//! Held/pressed input state tracking for keyboards and mice.
//!
//! An [`InputTracker`] owns all mutable input state: per-key and per-button
//! press state, the cursor position, and a suppress-defaults flag. An
//! external event source (for terminals, the [`term`] crossterm adapter)
//! feeds it raw down/up/motion transitions, and application code queries it
//! between ticks:
//!
//! - **held** is a level query: is the key down right now?
//! - **pressed** is an edge query: it fires exactly once per down-interval
//!   and is consumed on read, so OS auto-repeat never re-fires it.
//!
//! Keys are identified by `u8` codes in 1..=255 (classic DOM `keyCode`
//! values) or by symbolic names ("enter", "numpad 5"); the three mouse
//! buttons by 0..=2 or "left"/"middle"/"right". Queries accept chords:
//! every supplied key must satisfy the condition.
//!
//! ## Example
//!
//! ```
//! use keytrack::{key, InputTracker};
//!
//! let mut tracker = InputTracker::new();
//!
//! // Event source delivers transitions:
//! tracker.key_down(key::SHIFT);
//! tracker.key_down(key::A);
//!
//! // Application tick queries:
//! assert_eq!(tracker.key_held(["shift", "a"]), Ok(true));
//! assert_eq!(tracker.key_pressed([key::A]), Ok(true));
//! assert_eq!(tracker.key_pressed([key::A]), Ok(false)); // edge consumed
//! ```
//!
//! ## Modules
//!
//! - [`tracker`] - The owned tracker and its query API
//! - [`codes`] - Numeric codes, named constants, name-or-code inputs
//! - [`state`] - Per-key/button press state
//! - [`term`] - crossterm event adapter
//! - [`error`] - Resolution errors

pub mod codes;
pub mod error;
pub mod state;
pub mod term;
pub mod tracker;

// Re-export commonly used items
pub use codes::{button, key, Button, Key};
pub use error::{Error, Result};
pub use state::PressState;
pub use tracker::{InputTracker, Position};
