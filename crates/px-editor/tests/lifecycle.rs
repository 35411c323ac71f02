//! Integration tests: mount / unmount lifecycle and listener hygiene.

mod common;

use common::{FakeHost, init_logging};
use pretty_assertions::assert_eq;
use px_core::EditorConfig;
use px_editor::{Editor, InputEvent, Listener, ListenerTarget, MountError};

fn mounted(width: f64, height: f64) -> Editor<FakeHost> {
    init_logging();
    let mut editor = Editor::new(EditorConfig::default(), FakeHost::new(width, height));
    editor.mount().unwrap();
    editor
}

#[test]
fn mount_registers_all_five_listeners() {
    let editor = mounted(640.0, 800.0);
    assert!(editor.is_mounted());
    assert_eq!(editor.host().listeners.len(), 5);
    for listener in Listener::ALL {
        assert!(editor.host().listeners.contains(&listener), "missing {listener}");
    }
}

#[test]
fn mount_runs_initial_resize_and_draw() {
    let editor = mounted(640.0, 800.0);
    let host = editor.host();
    assert_eq!(host.sizing_resets, 1);
    assert_eq!(editor.state().pixel_size, 10);
    assert_eq!(host.last_layout().map(|l| (l.width_px, l.height_px)), Some((480, 640)));
    assert!(!host.brush.ops.is_empty());
    assert!(!host.layer.ops.is_empty());
}

#[test]
fn unmount_removes_all_listeners() {
    let mut editor = mounted(640.0, 800.0);
    editor.unmount();
    assert!(!editor.is_mounted());
    assert!(editor.host().listeners.is_empty());
    assert_eq!(editor.host().unsubscribe_calls.len(), 5);
    assert!(editor.host().unsubscribe_calls.contains(&Listener::Resize));
}

#[test]
fn window_listener_is_released() {
    let mut editor = mounted(640.0, 800.0);
    editor.unmount();
    let leaked: Vec<_> = Listener::ALL
        .iter()
        .filter(|l| l.target() == ListenerTarget::Window)
        .filter(|l| editor.host().listeners.contains(*l))
        .collect();
    assert!(leaked.is_empty());
}

#[test]
fn events_after_unmount_do_not_mutate_state() {
    let mut editor = mounted(640.0, 800.0);
    editor.unmount();
    editor.host_mut().brush.clear_ops();
    editor.host_mut().layer.clear_ops();
    editor.host_mut().container = px_core::ContainerSize::new(100.0, 100.0);

    assert!(!editor.handle(InputEvent::from_pointer_move(15.0, 25.0)));
    assert!(!editor.handle(InputEvent::PointerDown));
    assert!(!editor.handle(InputEvent::Resize));

    let state = editor.state();
    assert_eq!(state.brush, None);
    assert!(!state.pointer_down);
    assert!(state.cells.is_empty());
    assert_eq!(state.pixel_size, 10);
    assert!(editor.host().brush.ops.is_empty());
    assert!(editor.host().layer.ops.is_empty());
}

#[test]
fn unmount_twice_is_harmless() {
    let mut editor = mounted(640.0, 800.0);
    editor.unmount();
    editor.unmount();
    assert_eq!(editor.host().unsubscribe_calls.len(), 5);
}

#[test]
fn mount_twice_is_rejected() {
    let mut editor = mounted(640.0, 800.0);
    assert!(matches!(editor.mount(), Err(MountError::AlreadyMounted)));
    assert_eq!(editor.host().subscribe_calls.len(), 5);
}

#[test]
fn failed_mount_rolls_back_registered_listeners() {
    init_logging();
    let mut host = FakeHost::new(640.0, 800.0);
    host.fail_on = Some(Listener::PointerLeave);
    let mut editor = Editor::new(EditorConfig::default(), host);

    let err = editor.mount().unwrap_err();
    assert!(matches!(err, MountError::Listener { listener: Listener::PointerLeave, .. }));
    assert!(!editor.is_mounted());
    assert!(editor.host().listeners.is_empty());
    assert_eq!(
        editor.host().unsubscribe_calls,
        vec![Listener::PointerMove, Listener::PointerUp, Listener::PointerDown]
    );
    assert_eq!(editor.host().sizing_resets, 0);
}

#[test]
fn remount_after_unmount() {
    let mut editor = mounted(640.0, 800.0);
    editor.unmount();
    editor.mount().unwrap();
    assert_eq!(editor.host().listeners.len(), 5);
    assert!(editor.handle(InputEvent::from_pointer_move(15.0, 25.0)));
}
