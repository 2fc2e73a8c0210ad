use agent_core::{ContextValue, EventId};
use agent_tools::{EventLog, EventRecord, EventSink, NullEventSink, VecEventSink};

#[test]
fn vec_sink_accumulates_in_order() {
    let mut sink = VecEventSink::default();
    sink.emit(EventRecord::new(EventId("first"), None));
    sink.emit(EventRecord::new(
        EventId("second"),
        Some(ContextValue::Int(7)),
    ));

    assert_eq!(sink.records.len(), 2);
    assert_eq!(sink.records[0].id, EventId("first"));
    assert_eq!(sink.records[1].payload, Some(ContextValue::Int(7)));
}

#[test]
fn null_sink_drops_everything() {
    let mut sink = NullEventSink;
    sink.emit(EventRecord::new(EventId("ignored"), None));
}

#[test]
fn log_ids_preserve_emission_order() {
    let mut log = EventLog::default();
    assert!(log.is_empty());

    log.push(EventRecord::new(EventId("a"), None));
    log.push(EventRecord::new(EventId("b"), Some(ContextValue::Bool(true))));
    log.push(EventRecord::new(EventId("a"), None));

    assert_eq!(log.len(), 3);
    assert_eq!(log.ids(), vec![EventId("a"), EventId("b"), EventId("a")]);
}

#[cfg(feature = "serde")]
#[test]
fn log_serializes_to_json() {
    let mut log = EventLog::default();
    log.push(EventRecord::new(
        EventId("play_animation"),
        Some(ContextValue::Int(4)),
    ));
    log.push(EventRecord::new(EventId("emit_sound"), None));

    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json["records"][0]["id"], "play_animation");
    assert_eq!(json["records"][1]["payload"], serde_json::Value::Null);
}
