use quasar::eval::{Accessors, EvalError, FieldType, FieldValue, Model};
use quasar::model::{Event, EventType, ProcessCacheEntry, SeclModel};

/// A value of the given kind that differs from the default of every field.
fn sample(kind: FieldType) -> FieldValue {
    match kind {
        FieldType::Integer => FieldValue::Int(7),
        FieldType::String => FieldValue::from("sample"),
        FieldType::Boolean => FieldValue::Bool(true),
    }
}

fn wrong_sample(kind: FieldType) -> FieldValue {
    match kind {
        FieldType::Integer => FieldValue::from("seven"),
        FieldType::String | FieldType::Boolean => FieldValue::Int(7),
    }
}

fn with_uids(uids: &[u32]) -> Event {
    let mut event = Event::new(EventType::Exec);
    event.process_context.ancestor = ProcessCacheEntry::lineage(uids.iter().map(|uid| {
        let mut entry = ProcessCacheEntry::default();
        entry.process_context.process.credentials.uid = *uid;
        entry
    }));
    event
}

#[test]
fn every_field_is_total() {
    let model = SeclModel::new();
    let event = Event::default();

    for field in event.get_fields() {
        let kind = event.get_field_type(field).unwrap();
        assert_eq!(model.get_evaluator(field, 0).unwrap().field_type(), kind);
        assert!(event.get_field_event_type(field).is_ok(), "{field}");

        let value = event.get_field_value(field).unwrap();
        assert_eq!(value.field_type(), kind, "{field}");
    }
}

#[test]
fn set_then_get() {
    for field in Event::default().get_fields() {
        let mut event = Event::default();
        let kind = event.get_field_type(field).unwrap();
        let value = sample(kind);

        event.set_field_value(field, value.clone()).unwrap();

        let expected = match (event.get_field_value(field).unwrap().is_list(), value) {
            (false, value) => value,
            (true, FieldValue::Int(value)) => FieldValue::IntList(vec![value]),
            (true, FieldValue::String(value)) => FieldValue::StringList(vec![value]),
            (true, other) => panic!("unexpected list of {other}"),
        };
        assert_eq!(event.get_field_value(field).unwrap(), expected, "{field}");
    }
}

#[test]
fn mismatched_set_keeps_previous_value() {
    for field in Event::default().get_fields() {
        let mut event = Event::default();
        let kind = event.get_field_type(field).unwrap();
        event.set_field_value(field, sample(kind)).unwrap();
        let before = event.clone();

        let result = event.set_field_value(field, wrong_sample(kind));
        assert!(
            matches!(result, Err(EvalError::ValueTypeMismatch(_))),
            "{field}: {result:?}"
        );
        assert_eq!(event, before, "{field}");
    }
}

#[test]
fn reads_are_deterministic() {
    let mut event = with_uids(&[0, 1000]);
    event.exec.args = vec!["/bin/true".to_string()];
    event.open.file.path = "/etc/passwd".to_string();

    for field in event.get_fields() {
        assert_eq!(
            event.get_field_value(field),
            event.get_field_value(field),
            "{field}"
        );
    }
}

#[test]
fn ancestor_values_for_any_depth() {
    for depth in 0..5u32 {
        let uids: Vec<u32> = (0..depth).collect();
        let event = with_uids(&uids);

        assert_eq!(
            event.get_field_value("process.ancestors.uid"),
            Ok(FieldValue::IntList(uids.iter().map(|uid| i64::from(*uid)).collect()))
        );
        assert_eq!(
            event.get_field_value("process.ancestors.comm"),
            Ok(FieldValue::StringList(vec![String::new(); depth as usize]))
        );
    }
}

#[test]
fn ancestor_uids() {
    let event = with_uids(&[0, 1000, 1000]);
    assert_eq!(
        event.get_field_value("process.ancestors.uid"),
        Ok(FieldValue::IntList(vec![0, 1000, 1000]))
    );
}

#[test]
fn exec_args() {
    let mut event = Event::new(EventType::Exec);
    for arg in ["/bin/ls", "-la", "/tmp"] {
        event.set_field_value("exec.args", arg.into()).unwrap();
    }

    assert_eq!(
        event.get_field_value("exec.args"),
        Ok(FieldValue::StringList(vec![
            "/bin/ls".to_string(),
            "-la".to_string(),
            "/tmp".to_string()
        ]))
    );
    assert_eq!(event.get_field_value("exec.envs"), Ok(FieldValue::StringList(vec![])));
}

#[test]
fn event_types_of_fields() {
    let event = Event::default();

    assert_eq!(event.get_field_event_type("process.pid"), Ok("*"));
    assert_eq!(event.get_field_event_type("container.id"), Ok("*"));
    assert_eq!(event.get_field_event_type("chmod.file.mode"), Ok("chmod"));
    assert_eq!(event.get_field_event_type("exec.args"), Ok("exec"));
    assert_eq!(
        event.get_field_event_type("process.nonexistent"),
        Err(EvalError::FieldNotFound("process.nonexistent".to_string()))
    );
}

#[test]
fn field_event_types_are_registered() {
    let types = SeclModel::new().get_event_types();
    let event = Event::default();

    for field in event.get_fields() {
        let event_type = event.get_field_event_type(field).unwrap();
        assert!(
            event_type == "*" || types.contains(&event_type),
            "{field}: {event_type}"
        );
    }
}

#[test]
fn flatten_to_record() {
    let mut event = with_uids(&[0, 1000]);
    event.event_type = Some(EventType::Open);
    event.process_context.pid = 31;
    event.open.file.path = "/etc/shadow".to_string();

    let record: serde_json::Map<String, serde_json::Value> = event
        .get_fields()
        .iter()
        .map(|field| {
            let value = event.get_field_value(field).unwrap();
            (field.to_string(), serde_json::to_value(value).unwrap())
        })
        .collect();

    assert_eq!(record.len(), 277);
    assert_eq!(record["process.pid"], serde_json::json!(31));
    assert_eq!(record["open.file.path"], serde_json::json!("/etc/shadow"));
    assert_eq!(record["process.ancestors.uid"], serde_json::json!([0, 1000]));
    assert_eq!(record["exec.args"], serde_json::json!([]));
    assert_eq!(record["exec.args_truncated"], serde_json::json!(false));
}

#[test]
fn event_round_trips_through_json() {
    let mut event = with_uids(&[0]);
    event.exec.args = vec!["sh".to_string()];

    let json = serde_json::to_string(&event).unwrap();
    let decoded: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, event);
}
