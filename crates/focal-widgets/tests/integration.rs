//! Integration tests for focal-widgets.
//!
//! These drive a `FocusIndicator` only through its public API: framework
//! events, the host controls and the virtual clock.

use focal_core::{
    Color, DrawCommand, Event, MouseButton, Point, PointerId, PointerType, RecordingCanvas, Rect,
    TouchId, Widget,
};
use focal_widgets::{FocusConfig, FocusIndicator, FocusStarted, FocusState, LongTouch};
use std::cell::RefCell;
use std::rc::Rc;

const SCREEN: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 480.0,
    height: 800.0,
};

fn indicator() -> FocusIndicator {
    let mut focus = FocusIndicator::new();
    focus.layout(SCREEN);
    focus
}

fn finger(focus: &mut FocusIndicator, from: Point, to: Point, held_ms: u64) -> bool {
    focus.event(&Event::TouchStart {
        id: TouchId(7),
        position: from,
        pressure: 0.5,
    });
    focus.advance(held_ms);
    focus
        .event(&Event::TouchEnd {
            id: TouchId(7),
            position: to,
        })
        .is_consumed()
}

fn painted(focus: &FocusIndicator) -> Vec<DrawCommand> {
    let mut canvas = RecordingCanvas::new();
    focus.paint(&mut canvas);
    canvas.take_commands()
}

// =============================================================================
// Tap Tests
// =============================================================================

#[test]
fn test_tap_focuses_at_touch_point() {
    let mut focus = indicator();
    let at = Point::new(240.0, 400.0);
    assert!(finger(&mut focus, at, at, 80));

    assert_eq!(focus.state(), FocusState::Focusing);
    assert_eq!(focus.radius(), focus.config().max_radius);
    assert_eq!(focus.center(), at);
    assert!(focus.take_repaint());
    assert!(!focus.take_repaint());
}

#[test]
fn test_mouse_click_focuses() {
    let mut focus = indicator();
    let at = Point::new(100.0, 200.0);
    focus.event(&Event::MouseDown {
        position: at,
        button: MouseButton::Left,
    });
    focus.advance(50);
    let outcome = focus.event(&Event::MouseUp {
        position: at,
        button: MouseButton::Left,
    });

    assert_eq!(
        outcome.message::<FocusStarted>().map(|m| m.center),
        Some(Point::new(100.0, 200.0))
    );
    assert_eq!(focus.state(), FocusState::Focusing);
}

#[test]
fn test_primary_pointer_focuses() {
    let mut focus = indicator();
    let at = Point::new(300.0, 300.0);
    let down = Event::PointerDown {
        pointer_id: PointerId(3),
        pointer_type: PointerType::Pen,
        position: at,
        is_primary: true,
    };
    let up = Event::PointerUp {
        pointer_id: PointerId(3),
        pointer_type: PointerType::Pen,
        position: at,
        is_primary: true,
    };
    assert!(focus.event(&down).is_consumed());
    focus.advance(30);
    assert!(focus.event(&up).is_consumed());
    assert_eq!(focus.state(), FocusState::Focusing);
}

#[test]
fn test_secondary_pointer_is_ignored() {
    let mut focus = indicator();
    let down = Event::PointerDown {
        pointer_id: PointerId(4),
        pointer_type: PointerType::Touch,
        position: Point::new(10.0, 10.0),
        is_primary: false,
    };
    assert!(!focus.event(&down).is_consumed());
}

#[test]
fn test_touch_cancel_discards_gesture() {
    let mut focus = indicator();
    let at = Point::new(200.0, 200.0);
    focus.event(&Event::TouchStart {
        id: TouchId(1),
        position: at,
        pressure: 1.0,
    });
    focus.event(&Event::TouchCancel { id: TouchId(1) });
    focus.event(&Event::TouchEnd {
        id: TouchId(1),
        position: at,
    });
    assert_eq!(focus.state(), FocusState::Idle);
}

#[test]
fn test_tap_in_corner_keeps_ring_on_screen() {
    let mut focus = indicator();
    finger(&mut focus, Point::new(479.0, 0.0), Point::new(479.0, 0.0), 40);

    let ring = focus.circle().unwrap();
    let reach = ring.radius as f32 + ring.stroke_width;
    assert!(ring.center.x + reach <= SCREEN.right());
    assert!(ring.center.y - reach >= SCREEN.y);
}

// =============================================================================
// Long Press & Drag Tests
// =============================================================================

#[test]
fn test_long_press_reports_to_listener() {
    let mut focus = indicator();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    focus.set_on_long_touch(move |w| log.borrow_mut().push(w.state()));

    let at = Point::new(120.0, 640.0);
    focus.event(&Event::TouchStart {
        id: TouchId(0),
        position: at,
        pressure: 1.0,
    });
    focus.advance(600);
    let outcome = focus.event(&Event::TouchEnd {
        id: TouchId(0),
        position: at,
    });

    assert_eq!(*seen.borrow(), vec![FocusState::Idle]);
    assert_eq!(outcome.message::<LongTouch>().map(|m| m.position), Some(at));
    assert_eq!(focus.state(), FocusState::Idle);
    assert!(painted(&focus).is_empty());
}

#[test]
fn test_drag_is_not_a_tap() {
    let mut focus = indicator();
    let calls = Rc::new(RefCell::new(0));
    let count = Rc::clone(&calls);
    focus.set_on_long_touch(move |_| *count.borrow_mut() += 1);

    finger(
        &mut focus,
        Point::new(200.0, 200.0),
        Point::new(215.0, 200.0),
        80,
    );
    finger(
        &mut focus,
        Point::new(200.0, 200.0),
        Point::new(200.0, 215.0),
        900,
    );

    assert_eq!(focus.state(), FocusState::Idle);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_custom_thresholds() {
    let config = FocusConfig::new().long_press_ms(1_000).tap_slop(30.0);
    let mut focus = FocusIndicator::with_config(config).unwrap();
    focus.layout(SCREEN);

    finger(
        &mut focus,
        Point::new(200.0, 200.0),
        Point::new(220.0, 220.0),
        800,
    );
    assert_eq!(focus.state(), FocusState::Focusing);
}

// =============================================================================
// Result & Auto-dismiss Tests
// =============================================================================

#[test]
fn test_success_cycle_end_to_end() {
    let mut focus = indicator();
    let at = Point::new(240.0, 400.0);
    finger(&mut focus, at, at, 10);
    let t0 = focus.now_ms();

    focus.advance_to(t0 + 100);
    focus.report_success();
    assert_eq!(focus.state(), FocusState::Success);

    let mut radii = Vec::new();
    while focus.state() != FocusState::Idle {
        radii.push(focus.radius());
        match painted(&focus).as_slice() {
            [DrawCommand::Circle { stroke, .. }] => {
                assert_eq!(stroke.color, Color::GREEN);
            }
            other => panic!("expected one ring, got {other:?}"),
        }
        focus.advance(20);
        assert!(focus.now_ms() < t0 + 2_000, "never went idle");
    }

    assert!(radii.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(radii.last(), Some(&50));
    assert!(painted(&focus).is_empty());
    assert_eq!(focus.pending_timers(), 0);
}

#[test]
fn test_hold_is_not_cut_short() {
    let mut focus = indicator();
    let at = Point::new(240.0, 400.0);
    finger(&mut focus, at, at, 10);
    focus.advance(1_000);

    let reported = focus.now_ms();
    focus.report_failure();
    focus.advance_to(reported + 499);
    assert_eq!(focus.state(), FocusState::Failed);
    focus.advance_to(reported + 500);
    assert_eq!(focus.state(), FocusState::Idle);
}

#[test]
fn test_repeated_failure_rearms_single_reset() {
    let mut focus = indicator();
    let at = Point::new(240.0, 400.0);
    finger(&mut focus, at, at, 10);
    focus.advance(1_000);

    focus.report_failure();
    focus.advance(400);
    focus.report_failure();
    focus.advance(400);
    assert_eq!(focus.state(), FocusState::Failed);
    assert_eq!(focus.pending_timers(), 1);
    focus.advance(100);
    assert_eq!(focus.state(), FocusState::Idle);
}

#[test]
fn test_manual_reset_when_auto_dismiss_off() {
    let config = FocusConfig::new().auto_dismiss(false);
    let mut focus = FocusIndicator::with_config(config).unwrap();
    focus.layout(SCREEN);
    let at = Point::new(240.0, 400.0);
    finger(&mut focus, at, at, 10);
    focus.report_failure();
    focus.advance(60_000);
    assert_eq!(focus.state(), FocusState::Failed);

    focus.reset();
    assert_eq!(focus.state(), FocusState::Idle);
    assert!(finger(&mut focus, at, at, 10));
    assert_eq!(focus.state(), FocusState::Focusing);
}

// =============================================================================
// Enable / Teardown Tests
// =============================================================================

#[test]
fn test_disabled_blocks_taps_and_long_presses() {
    let mut focus = indicator();
    let calls = Rc::new(RefCell::new(0));
    let count = Rc::clone(&calls);
    focus.set_on_long_touch(move |_| *count.borrow_mut() += 1);
    focus.set_enabled(false);
    assert!(!focus.is_interactive());

    let at = Point::new(240.0, 400.0);
    assert!(!finger(&mut focus, at, at, 10));
    assert!(!finger(&mut focus, at, at, 700));
    assert_eq!(focus.state(), FocusState::Idle);
    assert_eq!(*calls.borrow(), 0);

    focus.set_enabled(true);
    assert!(finger(&mut focus, at, at, 700));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_detach_freezes_widget() {
    let mut focus = indicator();
    let at = Point::new(240.0, 400.0);
    finger(&mut focus, at, at, 10);
    focus.advance(40);
    let radius = focus.radius();

    focus.detach();
    focus.advance(5_000);
    assert_eq!(focus.radius(), radius);
    assert_eq!(focus.next_deadline(), None);
    assert!(!focus.is_interactive());
}

#[test]
fn test_instances_are_independent() {
    let mut a = indicator();
    let mut b = indicator();
    let at = Point::new(240.0, 400.0);
    finger(&mut a, at, at, 10);
    a.advance(200);

    assert_eq!(b.state(), FocusState::Idle);
    assert_eq!(b.now_ms(), 0);
    b.report_success();
    assert_eq!(b.state(), FocusState::Idle);
    assert_eq!(a.state(), FocusState::Focusing);
}
