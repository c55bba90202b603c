//! End-to-end scenarios for the input tracker: an event source delivering
//! transitions interleaved with application-tick queries.

use keytrack::{button, key, Error, InputTracker, Position};

#[test]
fn left_arrow_press_release_press_fires_edge_each_interval() {
    let mut tracker = InputTracker::new();

    tracker.key_down(key::LEFT); // 37
    assert_eq!(tracker.key_pressed([37]), Ok(true));
    assert_eq!(tracker.key_pressed([37]), Ok(false));

    tracker.key_up(key::LEFT);
    tracker.key_down(key::LEFT);
    assert_eq!(tracker.key_pressed([37]), Ok(true));
}

#[test]
fn game_loop_movement_and_action_keys() {
    let mut tracker = InputTracker::new();

    // Player holds W and taps space across several ticks.
    tracker.key_down(key::W);
    tracker.key_down(key::SPACE);

    // Tick 1: both held, jump edge fires once.
    assert_eq!(tracker.key_held(["w"]), Ok(true));
    assert_eq!(tracker.key_pressed(["space"]), Ok(true));

    // Tick 2: still held, edge stays consumed.
    assert_eq!(tracker.key_held(["w"]), Ok(true));
    assert_eq!(tracker.key_pressed(["space"]), Ok(false));

    // Space released between ticks; W auto-repeats.
    tracker.key_up(key::SPACE);
    tracker.key_down(key::W);

    // Tick 3: W held but no new edge, space no longer held.
    assert_eq!(tracker.key_pressed(["w"]), Ok(true)); // first consume for W
    assert_eq!(tracker.key_pressed(["w"]), Ok(false));
    assert_eq!(tracker.key_held(["space"]), Ok(false));
}

#[test]
fn mouse_drag_scenario() {
    let mut tracker = InputTracker::new();
    tracker.set_position(5.0, 5.0); // starting position, no motion event

    assert_eq!(tracker.position(), Position::new(5.0, 5.0));

    tracker.button_down(button::LEFT);
    tracker.pointer_moved(10.0, 20.0);

    assert_eq!(tracker.button_held(["left"]), Ok(true));
    assert_eq!(tracker.button_pressed(["left"]), Ok(true));
    assert_eq!(tracker.position(), Position::new(10.0, 20.0));

    tracker.pointer_moved(30.0, 40.0);
    tracker.button_up(button::LEFT);

    assert_eq!(tracker.button_held(["left"]), Ok(false));
    assert_eq!(tracker.position(), Position::new(30.0, 40.0));
}

#[test]
fn resolution_errors_surface_at_call_sites() {
    let tracker = InputTracker::new();

    assert_eq!(tracker.resolve_key("enter"), Ok(13));
    assert_eq!(tracker.resolve_key("a"), Ok(65));
    assert_eq!(
        tracker.resolve_key("bogus"),
        Err(Error::UnknownName("bogus".to_string()))
    );
    assert_eq!(
        tracker.resolve_key(256),
        Err(Error::OutOfRange { code: 256, min: 1, max: 255 })
    );
    assert_eq!(tracker.resolve_button("middle"), Ok(1));
    assert_eq!(
        tracker.resolve_button(3),
        Err(Error::OutOfRange { code: 3, min: 0, max: 2 })
    );
}

#[test]
fn chord_edge_consumption_is_observable_across_calls() {
    let mut tracker = InputTracker::new();
    tracker.key_down(key::CTRL);

    // The chord fails ("s" is up) but control's edge is consumed anyway.
    assert_eq!(tracker.key_pressed(["control", "s"]), Ok(false));

    tracker.key_down(key::S);

    // "s" fires, control's edge is already spent.
    assert_eq!(tracker.key_pressed(["control", "s"]), Ok(false));
    assert_eq!(tracker.key_held(["control", "s"]), Ok(true));

    // Fresh press of both fires the chord.
    tracker.key_up(key::CTRL);
    tracker.key_up(key::S);
    tracker.key_down(key::CTRL);
    tracker.key_down(key::S);
    assert_eq!(tracker.key_pressed(["control", "s"]), Ok(true));
}

#[test]
fn independent_trackers_do_not_share_state() {
    let mut a = InputTracker::new();
    let mut b = InputTracker::new();

    a.key_down(key::A);
    b.set_suppress_defaults(true);

    assert_eq!(a.key_held(["a"]), Ok(true));
    assert_eq!(b.key_held(["a"]), Ok(false));
    assert!(!a.key_down(key::B));
    assert!(b.key_down(key::B));
}
