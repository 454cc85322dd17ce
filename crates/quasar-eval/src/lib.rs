//! quasar-eval is the schema independent core used to evaluate rules over
//! field-addressable events.
//!
//! A schema implements [Accessors] for its event type and [Model] for the
//! registry resolving field paths. A rule compiler then asks the model, once at
//! load time, for the typed [Evaluator] behind every path a rule references and
//! for the [ElementIterator] behind every quantified path. Unknown paths are
//! rejected there, so evaluating a compiled rule can't fail.
//!
//! Quantified fields are read through registers: the driver of an iterator binds
//! the current element into a [Context] and hands that context to the evaluators
//! of the quantified expression.
//!
//! ```ignore
//! let evaluator = model.get_evaluator("process.ancestors.uid", 0)?;
//! let mut iterator = model.get_iterator("process.ancestors")?;
//!
//! let ctx = Context::new(&event);
//! let mut element = iterator.front(&event);
//! while let Some(current) = element {
//!     let value = evaluator.value(&ctx.with_register(0, current));
//!     println!("{value}");
//!     element = iterator.next();
//! }
//! ```
//!
//! [Evaluator::collect] performs the same walk and gathers the values in a list.

mod accessors;
mod context;
mod error;
mod evaluator;
mod operators;
mod value;

#[cfg(test)]
mod test_schema;

pub use accessors::{ANY_EVENT_TYPE, Accessors, ElementIterator, Model};
pub use context::{Context, MAX_REGISTERS, RegisterId};
pub use error::{EvalError, Result};
pub use evaluator::{BoolEvaluator, Evaluator, IntEvaluator, StringEvaluator, Weight};
pub use operators::{Operator, RelationalOperator, StringOperator};
pub use value::{FieldType, FieldValue, Integer};
