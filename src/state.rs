//! Press state for a single key or mouse button.
//!
//! `held` mirrors the physical down/up state as last observed. `reported`
//! is set once a "pressed" edge has been consumed for the current
//! down-interval, so the edge fires at most once per press.

/// State of a single key or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressState {
    /// Whether the key/button is currently held down.
    pub held: bool,
    /// Whether the pressed edge has been consumed for this down-interval.
    pub reported: bool,
}

impl PressState {
    /// Create a released, unreported state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a physical press.
    ///
    /// Leaves `reported` alone so a repeated down delivery (OS auto-repeat)
    /// cannot re-arm the pressed edge.
    pub fn on_press(&mut self) {
        self.held = true;
    }

    /// Record a physical release. Clears the edge flag.
    pub fn on_release(&mut self) {
        self.held = false;
        self.reported = false;
    }

    /// Consume the pressed edge.
    ///
    /// Returns true exactly once per down-interval: on the first call while
    /// held. Subsequent calls return false until the key is released and
    /// pressed again.
    pub fn consume_edge(&mut self) -> bool {
        if self.held && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PressState::new();
        assert!(!state.held);
        assert!(!state.reported);
    }

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut state = PressState::new();
        state.on_press();

        assert!(state.consume_edge());
        assert!(!state.consume_edge());

        state.on_release();
        state.on_press();
        assert!(state.consume_edge());
    }

    #[test]
    fn test_repeat_down_does_not_rearm_edge() {
        let mut state = PressState::new();
        state.on_press();
        assert!(state.consume_edge());

        // Auto-repeat delivers another down without a release.
        state.on_press();
        assert!(!state.consume_edge());
    }

    #[test]
    fn test_release_clears_edge_flag() {
        let mut state = PressState::new();
        state.on_press();
        assert!(state.consume_edge());

        state.on_release();
        assert!(!state.held);
        assert!(!state.reported);
    }

    #[test]
    fn test_edge_requires_held() {
        let mut state = PressState::new();
        assert!(!state.consume_edge());
        assert!(!state.reported);
    }
}
