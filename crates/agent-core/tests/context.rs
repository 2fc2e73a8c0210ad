use std::cell::RefCell;
use std::rc::Rc;

use agent_core::{AgentContext, Color, ContextValue, EventId, Vec2, Vec3};

#[test]
fn roundtrip_every_tag() {
    let mut context = AgentContext::new();

    context.write("alerted", true);
    context.write("ammo", 17i32);
    context.write("health", 72.5f32);
    context.write("goal", Vec2::new(8.5, -3.25));
    context.write("home", Vec3::new(1.0, 2.0, 3.0));
    context.write("tint", Color::new(0.25, 0.5, 0.75, 0.125));

    assert!(context.read("alerted", false));
    assert_eq!(context.read("ammo", 0), 17);
    assert_eq!(context.read("health", 0.0), 72.5);
    assert_eq!(context.read("goal", Vec2::default()), Vec2::new(8.5, -3.25));
    assert_eq!(
        context.read("home", Vec3::default()),
        Vec3::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        context.read("tint", Color::default()),
        Color::new(0.25, 0.5, 0.75, 0.125)
    );
}

#[test]
fn unwritten_keys_read_as_default_for_every_tag() {
    let context = AgentContext::new();

    assert!(!context.read("missing", false));
    assert!(context.read("missing", true));
    assert_eq!(context.read("missing", -1i32), -1);
    assert_eq!(context.read("missing", 9.5f32), 9.5);
    assert_eq!(context.read("missing", Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
    assert_eq!(
        context.read("missing", Vec3::new(1.0, 1.0, 1.0)),
        Vec3::new(1.0, 1.0, 1.0)
    );
    assert_eq!(context.read("missing", Color::rgb(1.0, 0.0, 0.0)), Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn mismatched_tag_reads_as_default_not_stored_bits() {
    let mut context = AgentContext::new();
    context.write("ammo", 17i32);

    assert_eq!(context.read("ammo", -1.0f32), -1.0);
    assert!(!context.read("ammo", false));
    assert_eq!(context.try_read::<f32>("ammo"), None);
    assert_eq!(context.try_read::<i32>("ammo"), Some(17));
}

#[test]
fn try_read_distinguishes_absent_from_default() {
    let mut context = AgentContext::new();
    context.write("ammo", 0i32);

    assert_eq!(context.try_read::<i32>("ammo"), Some(0));
    assert_eq!(context.try_read::<i32>("shells"), None);
}

#[test]
fn last_write_wins_including_tag() {
    let mut context = AgentContext::new();

    context.write("target", Vec2::new(4.0, 4.0));
    context.write("target", 3i32);

    assert_eq!(context.try_read::<Vec2>("target"), None);
    assert_eq!(context.try_read::<i32>("target"), Some(3));
}

#[test]
fn remove_and_has_key() {
    let mut context = AgentContext::new();
    context.write("alerted", true);

    assert!(context.has_key("alerted"));
    context.remove("alerted");
    assert!(!context.has_key("alerted"));

    // Removing a missing key is fine.
    context.remove("alerted");
}

#[test]
fn reset_drops_every_entry() {
    let mut context = AgentContext::new();
    context.write("alerted", true);
    context.write("ammo", 17i32);
    context.write("goal", Vec2::new(1.0, 2.0));

    context.reset();

    assert!(!context.has_key("alerted"));
    assert!(!context.has_key("ammo"));
    assert!(!context.has_key("goal"));
}

#[test]
fn trigger_event_dispatches_synchronously() {
    let seen: Rc<RefCell<Vec<(EventId, Option<ContextValue>)>>> = Rc::default();

    let mut context = AgentContext::new();
    let sink = Rc::clone(&seen);
    context.on_event(move |id, payload| sink.borrow_mut().push((id, payload)));

    context.trigger_event(EventId("play_animation"), Some(ContextValue::Int(4)));
    // Observed before trigger_event returned.
    assert_eq!(
        seen.borrow().as_slice(),
        &[(EventId("play_animation"), Some(ContextValue::Int(4)))]
    );

    context.trigger_event(EventId("emit_sound"), None);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[1], (EventId("emit_sound"), None));
}

#[test]
fn trigger_event_without_handler_is_a_noop() {
    let mut context = AgentContext::new();
    context.trigger_event(EventId("ignored"), None);
}

#[test]
fn trigger_event_does_not_mutate_the_mapping() {
    let mut context = AgentContext::new();
    context.on_event(|_, _| {});
    context.trigger_event(EventId("noisy"), Some(ContextValue::Bool(true)));

    assert!(!context.has_key("noisy"));
}
