use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_orrery::core::Demo;
use tui_orrery::input::{handle_key_event, should_quit};
use tui_orrery::types::{CameraOffset, PAN_STEP, SCENE_COUNT};

fn demo() -> Demo {
    Demo::new(StdRng::seed_from_u64(2024))
}

fn press(demo: &mut Demo, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => demo.apply(action),
        None => false,
    }
}

#[test]
fn keys_drive_camera_offset() {
    let mut d = demo();
    press(&mut d, KeyCode::Char('w'));
    press(&mut d, KeyCode::Char('w'));
    press(&mut d, KeyCode::Left);
    let offset = d.offset();
    assert!((offset.y - 2.0 * PAN_STEP).abs() < 1e-6);
    assert!((offset.x + PAN_STEP).abs() < 1e-6);

    // Target follows the pan.
    assert!((d.camera().target.x - offset.x).abs() < 1e-6);
    assert!((d.camera().target.y - offset.y).abs() < 1e-6);
}

#[test]
fn reset_after_any_input_is_zero() {
    let mut d = demo();
    for code in [
        KeyCode::Char('a'),
        KeyCode::Char('q'),
        KeyCode::Char('q'),
        KeyCode::Char('z'),
        KeyCode::Down,
        KeyCode::Char('x'),
        KeyCode::Char('x'),
    ] {
        press(&mut d, code);
    }
    assert!(!d.offset().is_zero());
    press(&mut d, KeyCode::Char('r'));
    assert_eq!(d.offset(), CameraOffset::ZERO);
}

#[test]
fn scene_keys_switch_and_update_title() {
    let mut d = demo();
    press(&mut d, KeyCode::Char('d'));
    assert!(press(&mut d, KeyCode::Char('2')));
    assert_eq!(d.title(), "Geometric Garden");
    assert!(d.offset().is_zero());

    assert!(press(&mut d, KeyCode::Char('3')));
    assert_eq!(d.title(), "Asteroid Field");
    assert!(press(&mut d, KeyCode::Char('1')));
    assert_eq!(d.title(), "Solar System");
}

#[test]
fn pressing_the_active_scene_key_changes_nothing() {
    let mut d = demo();
    press(&mut d, KeyCode::Char('e'));
    d.frame(0.3);
    let before_offset = d.offset();
    let before_camera = *d.camera();
    let before_scene = d.scene() as *const _;

    assert!(!press(&mut d, KeyCode::Char('1')));
    assert_eq!(d.offset(), before_offset);
    assert_eq!(*d.camera(), before_camera);
    assert_eq!(d.scene() as *const _, before_scene);
}

#[test]
fn unknown_scene_keys_are_ignored() {
    let mut d = demo();
    press(&mut d, KeyCode::Char('s'));
    let offset = d.offset();
    for c in ['4', '9'] {
        assert!(SCENE_COUNT < 4);
        assert!(!press(&mut d, KeyCode::Char(c)));
    }
    assert_eq!(d.active_index(), 0);
    assert_eq!(d.offset(), offset);
}

#[test]
fn quit_keys_never_reach_the_demo() {
    let esc = KeyEvent::from(KeyCode::Esc);
    assert!(should_quit(esc));
    assert_eq!(handle_key_event(esc), None);
}

#[test]
fn zero_delta_frame_keeps_time_and_spin() {
    let mut d = demo();
    d.frame(0.0);
    let nodes: Vec<_> = d.scene().nodes().iter().map(|n| n.transform).collect();
    d.frame(0.0);
    let again: Vec<_> = d.scene().nodes().iter().map(|n| n.transform).collect();
    assert_eq!(d.time(), 0.0);
    assert_eq!(nodes, again);
}

#[test]
fn zero_delta_frame_keeps_every_rotation_in_every_scene() {
    let mut d = demo();
    for index in 0..d.scene_count() {
        d.switch_scene(index);
        d.frame(0.7);
        let before: Vec<_> = d.scene().nodes().iter().map(|n| n.transform.rotation).collect();
        d.frame(0.0);
        let after: Vec<_> = d.scene().nodes().iter().map(|n| n.transform.rotation).collect();
        assert_eq!(before, after, "scene {index}");
    }
}

#[test]
fn first_frame_of_every_scene_matches_its_construction() {
    let mut d = demo();
    for index in 0..d.scene_count() {
        d.switch_scene(index);
        let built: Vec<_> = d.scene().nodes().iter().map(|n| n.transform).collect();
        d.frame(0.0);
        for (i, node) in d.scene().nodes().iter().enumerate() {
            let t = node.transform;
            assert!(
                t.translation.abs_diff_eq(built[i].translation, 1e-5),
                "scene {index} node {i}"
            );
            assert_eq!(t.rotation, built[i].rotation, "scene {index} node {i}");
            assert!(t.scale.abs_diff_eq(built[i].scale, 1e-6), "scene {index} node {i}");
        }
    }
}

#[test]
fn stalled_frame_is_not_clamped() {
    let mut a = demo();
    let mut b = demo();
    a.frame(30.0);
    for _ in 0..300 {
        b.frame(0.1);
    }
    assert!((a.time() - b.time()).abs() < 1e-3);
    // Orbit-driven camera position depends on time only.
    assert!((a.camera().eye - b.camera().eye).length() < 1e-2);
}
