//! Operators available to turn an [Evaluator] into a leaf predicate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Accessors, BoolEvaluator, EvalError, Evaluator, FieldType, FieldValue, Result};

/// Enum of all possible operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum Operator {
    Relational(RelationalOperator),
    String(StringOperator),
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Operators intended to be used on strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum StringOperator {
    StartsWith,
    EndsWith,
    Contains,
}

impl StringOperator {
    pub fn apply<T: AsRef<str>>(&self, first: T, second: T) -> bool {
        match self {
            StringOperator::StartsWith => first.as_ref().starts_with(second.as_ref()),
            StringOperator::EndsWith => first.as_ref().ends_with(second.as_ref()),
            StringOperator::Contains => first.as_ref().contains(second.as_ref()),
        }
    }
}

/// Relational operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum RelationalOperator {
    Equals,
    NotEquals,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl RelationalOperator {
    pub fn apply<T: PartialEq + PartialOrd>(&self, first: T, second: T) -> bool {
        match self {
            RelationalOperator::Equals => first == second,
            RelationalOperator::NotEquals => first != second,
            RelationalOperator::Greater => first > second,
            RelationalOperator::Less => first < second,
            RelationalOperator::GreaterEqual => first >= second,
            RelationalOperator::LessEqual => first <= second,
        }
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<S: Accessors> Evaluator<S> {
    /// Compare the evaluated field against a rule literal.
    ///
    /// The literal is parsed into the kind of the field once, here. The returned
    /// predicate keeps the field name and weight of the evaluator.
    pub fn predicate(self, op: Operator, literal: &str) -> Result<BoolEvaluator<S>> {
        let field_type = self.field_type();
        let not_allowed = || EvalError::OperatorNotAllowedOnType(op, field_type);
        let literal = FieldValue::parse(field_type, literal)?;

        let field = self.field();
        let weight = self.weight();

        match (self, op, literal) {
            (Evaluator::Int(evaluator), Operator::Relational(rel), FieldValue::Int(value)) => {
                Ok(BoolEvaluator::new(field, weight, move |ctx| {
                    rel.apply(evaluator.eval(ctx), value)
                }))
            }
            (
                Evaluator::String(evaluator),
                Operator::Relational(rel),
                FieldValue::String(value),
            ) => Ok(BoolEvaluator::new(field, weight, move |ctx| {
                rel.apply(evaluator.eval(ctx), value.as_str())
            })),
            (Evaluator::String(evaluator), Operator::String(op), FieldValue::String(value)) => {
                Ok(BoolEvaluator::new(field, weight, move |ctx| {
                    op.apply(evaluator.eval(ctx), value.as_str())
                }))
            }
            (
                Evaluator::Bool(evaluator),
                Operator::Relational(
                    rel @ (RelationalOperator::Equals | RelationalOperator::NotEquals),
                ),
                FieldValue::Bool(value),
            ) => Ok(BoolEvaluator::new(field, weight, move |ctx| {
                rel.apply(evaluator.eval(ctx), value)
            })),
            _ => Err(not_allowed()),
        }
    }
}
