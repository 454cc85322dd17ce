use quasar_eval::{EvalError, Evaluator, Model, RegisterId, Result};
use strum::IntoEnumIterator;

use crate::{
    Event, EventType, FieldIterator, IteratorKind,
    fields::{self, FIELDS},
};

/// Registry of the runtime security schema.
///
/// The field table is compiled in, so the model holds no state: it can be
/// created anywhere and shared between any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeclModel;

impl SeclModel {
    pub fn new() -> Self {
        log::debug!(
            "model with {} fields, {} iterators, {} event types",
            FIELDS.len(),
            IteratorKind::ALL.len(),
            EventType::iter().count()
        );
        Self
    }
}

impl Model for SeclModel {
    type Event = Event;
    type Iterator<'e> = FieldIterator<'e>;

    fn get_evaluator(&self, field: &str, register: RegisterId) -> Result<Evaluator<Event>> {
        fields::evaluator(field, register)
    }

    fn get_iterator<'e>(&self, field: &str) -> Result<FieldIterator<'e>> {
        IteratorKind::from_prefix(field)
            .map(IteratorKind::iterator)
            .ok_or_else(|| EvalError::IteratorNotSupported(field.to_string()))
    }

    fn get_event_types(&self) -> Vec<&'static str> {
        EventType::iter().map(<&'static str>::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use quasar_eval::{Accessors, Context, ElementIterator, FieldType, FieldValue, Weight};

    use super::*;
    use crate::ProcessCacheEntry;

    #[test]
    fn evaluator_kinds_match_field_types() {
        let model = SeclModel::new();
        let event = Event::default();

        for field in event.get_fields() {
            let evaluator = model.get_evaluator(field, 1).unwrap();
            assert_eq!(evaluator.field(), *field);
            assert_eq!(
                evaluator.field_type(),
                event.get_field_type(field).unwrap(),
                "{field}"
            );
        }
    }

    #[test]
    fn weights() {
        let model = SeclModel::new();
        let weight = |field| model.get_evaluator(field, 0).unwrap().weight();

        assert_eq!(weight("process.pid"), Weight::Direct);
        assert_eq!(weight("exec.args_truncated"), Weight::Direct);
        assert_eq!(weight("open.file.path"), Weight::Resolved);
        assert_eq!(weight("process.user"), Weight::Resolved);
        assert_eq!(weight("exec.args"), Weight::Iterator);
        assert_eq!(weight("process.ancestors.pid"), Weight::Iterator);
    }

    #[test]
    fn iterator_prefixes() {
        let model = SeclModel::new();

        for prefix in ["exec.args", "exec.envs", "process.ancestors"] {
            assert_eq!(model.get_iterator(prefix).unwrap().kind().prefix(), prefix);
        }

        for prefix in ["open.file", "exec.args_truncated", "process.ancestors.uid", "nope"] {
            assert_eq!(
                model.get_iterator(prefix).unwrap_err(),
                EvalError::IteratorNotSupported(prefix.to_string())
            );
        }
    }

    #[test]
    fn event_types() {
        let types = SeclModel::new().get_event_types();
        assert_eq!(types.len(), 15);
        assert!(types.contains(&"chmod"));
        assert!(types.contains(&"removexattr"));
        assert!(!types.contains(&"*"));
    }

    #[test]
    fn register_binding() {
        let model = SeclModel::new();

        let mut parent = ProcessCacheEntry::default();
        parent.process_context.process.comm = "bash".to_string();
        let mut event = Event::new(EventType::Exec);
        event.process_context.ancestor = ProcessCacheEntry::lineage([parent]);

        let comm = model.get_evaluator("process.ancestors.comm", 2).unwrap();
        let mut iterator = model.get_iterator("process.ancestors").unwrap();
        let element = iterator.front(&event).unwrap();

        let ctx = Context::new(&event);
        // read through the wrong slot
        assert_eq!(
            comm.value(&ctx.with_register(0, element)),
            FieldValue::String(String::new())
        );
        assert_eq!(
            comm.value(&ctx.with_register(2, element)),
            FieldValue::String("bash".to_string())
        );
    }

    #[test]
    fn scalar_evaluators_ignore_register() {
        let model = SeclModel::new();
        let mut event = Event::new(EventType::Chmod);
        event.chmod.mode = 0o644;

        let mode = model
            .get_evaluator("chmod.file.destination.mode", 3)
            .unwrap();
        assert_eq!(mode.field_type(), FieldType::Integer);
        assert_eq!(mode.value(&Context::new(&event)), FieldValue::Int(0o644));
    }

    #[test]
    fn string_element_in_ancestor_evaluator_is_zero() {
        let model = SeclModel::new();
        let event = Event::default();

        let uid = model.get_evaluator("process.ancestors.uid", 0).unwrap();
        let ctx = Context::new(&event).with_register(0, crate::Element::Str("root"));
        assert_eq!(uid.value(&ctx), FieldValue::Int(0));
    }
}
