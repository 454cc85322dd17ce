use crate::{Evaluator, FieldType, FieldValue, RegisterId, Result};

/// Event type reported by fields that are valid for every kind of event.
pub const ANY_EVENT_TYPE: &str = "*";

/// Uniform, path based access to the attributes of an event.
///
/// Implementations expose a fixed schema: every path listed by
/// [get_fields](Accessors::get_fields) is accepted by every other method, any
/// other path fails with [FieldNotFound](crate::EvalError::FieldNotFound).
pub trait Accessors: Sized + 'static {
    /// Handle to the element an iterator is positioned on.
    type Element<'e>: Copy;

    /// All valid field paths, in declaration order.
    fn get_fields(&self) -> &'static [&'static str];

    /// Value of a field. Iterator-scoped fields are materialized by walking their
    /// iterator to the end and return a list.
    fn get_field_value(&self, field: &str) -> Result<FieldValue>;

    /// Name of the only event kind the field is meaningful for, or
    /// [ANY_EVENT_TYPE].
    fn get_field_event_type(&self, field: &str) -> Result<&'static str>;

    fn get_field_type(&self, field: &str) -> Result<FieldType>;

    /// Write a field, for synthesized or replayed events.
    ///
    /// The value is type checked before anything is modified: on error the event
    /// is left untouched. Sequence fields append one element.
    fn set_field_value(&mut self, field: &str, value: FieldValue) -> Result<()>;
}

/// Restartable walk over the elements of a repeated attribute.
///
/// An iterator starts unpositioned, is positioned on the first element by
/// [front](ElementIterator::front) and moves forward with
/// [next](ElementIterator::next) until it is exhausted. Exhaustion is final:
/// walk again with a fresh iterator.
pub trait ElementIterator<'e, S: Accessors> {
    fn front(&mut self, event: &'e S) -> Option<S::Element<'e>>;

    fn next(&mut self) -> Option<S::Element<'e>>;
}

/// Registry resolving field paths of a schema into evaluators and iterators.
///
/// A model is built once and only read afterwards, so it can be shared freely
/// between threads evaluating different events.
pub trait Model: Send + Sync {
    type Event: Accessors;
    type Iterator<'e>: ElementIterator<'e, Self::Event>;

    /// Evaluator for `field`. Iterator-scoped fields read the element bound to
    /// `register`, other fields ignore it.
    fn get_evaluator(&self, field: &str, register: RegisterId) -> Result<Evaluator<Self::Event>>;

    /// Fresh iterator over the repeated attribute named by `field`.
    fn get_iterator<'e>(&self, field: &str) -> Result<Self::Iterator<'e>>;

    fn get_event_types(&self) -> Vec<&'static str>;
}
