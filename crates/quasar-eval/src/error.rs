use thiserror::Error;

use crate::{FieldType, Operator};

pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors reported while resolving field paths or writing event data.
///
/// They surface when rules are loaded, so a rule referencing a bad path never runs.
/// Once an evaluator has been obtained, evaluating it can't fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Iterator not supported on field: {0}")]
    IteratorNotSupported(String),
    #[error("Value type mismatch on attribute: {0}")]
    ValueTypeMismatch(String),
    #[error("Error parsing value {0}")]
    FieldValueParseError(String),
    #[error("Operator {0} not allowed on type {1}")]
    OperatorNotAllowedOnType(Operator, FieldType),
}
