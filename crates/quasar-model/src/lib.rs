//! Event schema of the runtime security monitor.
//!
//! [Event] describes one captured kernel event together with the process and
//! container it comes from. Its attributes are addressed by dotted field paths
//! (`open.file.path`, `process.credentials.uid` exposed as `process.uid`, ...)
//! through the [Accessors](quasar_eval::Accessors) implementation, while
//! [SeclModel] resolves the same paths into evaluators and iterators for rule
//! compilation.
//!
//! Three attributes are repeated and can only be reached through an iterator:
//! `exec.args`, `exec.envs` and the `process.ancestors` chain.

mod event;
pub mod fields;
mod iterators;
mod model;

pub use event::*;
pub use iterators::{Element, FieldIterator, IteratorKind};
pub use model::SeclModel;
