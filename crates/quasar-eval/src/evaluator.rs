use serde::{Deserialize, Serialize};

use crate::{Accessors, Context, ElementIterator, FieldType, FieldValue, RegisterId};

/// Static cost class of an evaluator, used to order predicates so that cheap
/// checks short circuit expensive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// Plain read of a resident attribute: ids, modes, flags, return codes.
    Direct,
    /// Identity resolved at capture time: user and group names, paths.
    Resolved,
    /// Anything reached through an iterator.
    Iterator,
}

impl Weight {
    pub const fn value(self) -> u32 {
        match self {
            Weight::Direct => 5,
            Weight::Resolved => 50,
            Weight::Iterator => 2000,
        }
    }
}

macro_rules! typed_evaluator {
    ($name:ident, $lt:lifetime, $ret:ty, $doc:literal) => {
        #[doc = $doc]
        pub struct $name<S: Accessors> {
            field: &'static str,
            weight: Weight,
            eval_fn: Box<dyn for<$lt> Fn(&Context<$lt, S>) -> $ret + Send + Sync>,
        }

        impl<S: Accessors> $name<S> {
            pub fn new<F>(field: &'static str, weight: Weight, eval_fn: F) -> Self
            where
                F: for<$lt> Fn(&Context<$lt, S>) -> $ret + Send + Sync + 'static,
            {
                Self {
                    field,
                    weight,
                    eval_fn: Box::new(eval_fn),
                }
            }

            pub fn eval<$lt>(&self, ctx: &Context<$lt, S>) -> $ret {
                (self.eval_fn)(ctx)
            }

            pub fn field(&self) -> &'static str {
                self.field
            }

            pub fn weight(&self) -> Weight {
                self.weight
            }
        }

        impl<S: Accessors> std::fmt::Debug for $name<S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("field", &self.field)
                    .field("weight", &self.weight)
                    .finish_non_exhaustive()
            }
        }
    };
}

typed_evaluator!(IntEvaluator, 'e, i64, "Evaluator producing an integer.");
typed_evaluator!(
    StringEvaluator,
    'e,
    &'e str,
    "Evaluator producing a string borrowed from the event."
);
typed_evaluator!(BoolEvaluator, 'e, bool, "Evaluator producing a boolean.");

/// Typed, weighted extraction bound to one field path.
///
/// Evaluation itself can't fail: paths are validated when the evaluator is
/// built, and an unbound register reads as the zero value of the kind.
#[derive(Debug)]
pub enum Evaluator<S: Accessors> {
    Int(IntEvaluator<S>),
    String(StringEvaluator<S>),
    Bool(BoolEvaluator<S>),
}

impl<S: Accessors> Evaluator<S> {
    pub fn field(&self) -> &'static str {
        match self {
            Evaluator::Int(evaluator) => evaluator.field(),
            Evaluator::String(evaluator) => evaluator.field(),
            Evaluator::Bool(evaluator) => evaluator.field(),
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            Evaluator::Int(evaluator) => evaluator.weight(),
            Evaluator::String(evaluator) => evaluator.weight(),
            Evaluator::Bool(evaluator) => evaluator.weight(),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Evaluator::Int(_) => FieldType::Integer,
            Evaluator::String(_) => FieldType::String,
            Evaluator::Bool(_) => FieldType::Boolean,
        }
    }

    /// Evaluate against a context and box the result.
    pub fn value(&self, ctx: &Context<'_, S>) -> FieldValue {
        match self {
            Evaluator::Int(evaluator) => FieldValue::Int(evaluator.eval(ctx)),
            Evaluator::String(evaluator) => FieldValue::String(evaluator.eval(ctx).to_string()),
            Evaluator::Bool(evaluator) => FieldValue::Bool(evaluator.eval(ctx)),
        }
    }

    /// Drive `iterator` over `event` from the front until it is exhausted,
    /// binding every element to `register` and evaluating once per element.
    pub fn collect<'e, I>(&self, event: &'e S, iterator: I, register: RegisterId) -> FieldValue
    where
        I: ElementIterator<'e, S>,
    {
        let walk = Walk {
            ctx: Context::new(event),
            iterator,
            register,
            started: false,
        };

        match self {
            Evaluator::Int(evaluator) => {
                FieldValue::IntList(walk.map(|ctx| evaluator.eval(&ctx)).collect())
            }
            Evaluator::String(evaluator) => FieldValue::StringList(
                walk.map(|ctx| evaluator.eval(&ctx).to_string()).collect(),
            ),
            Evaluator::Bool(evaluator) => {
                FieldValue::BoolList(walk.map(|ctx| evaluator.eval(&ctx)).collect())
            }
        }
    }
}

/// Adapter yielding one context per element, with the element bound.
struct Walk<'e, S: Accessors, I> {
    ctx: Context<'e, S>,
    iterator: I,
    register: RegisterId,
    started: bool,
}

impl<'e, S: Accessors, I: ElementIterator<'e, S>> Iterator for Walk<'e, S, I> {
    type Item = Context<'e, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = if self.started {
            self.iterator.next()
        } else {
            self.started = true;
            self.iterator.front(self.ctx.event())
        };

        element.map(|element| self.ctx.with_register(self.register, element))
    }
}
