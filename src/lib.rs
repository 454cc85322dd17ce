//! Quasar is the field evaluation core of a runtime security monitor.
//!
//! It is made of two crates, re-exported here:
//!
//! - [eval] is schema independent. It defines the typed, weighted
//!   [evaluators](eval::Evaluator), the register based protocol used to evaluate
//!   quantified fields, the [Accessors](eval::Accessors) contract every event
//!   implements and the [Model](eval::Model) registry a rule compiler queries.
//! - [model] is the runtime security schema: the [Event](model::Event) captured
//!   for every kernel event, its 277 field paths and the
//!   [SeclModel](model::SeclModel) registry resolving them.
//!
//! Example:
//!
//! ```
//! use quasar::eval::{Accessors, FieldValue, Model};
//! use quasar::model::{Event, EventType, SeclModel};
//!
//! let model = SeclModel::new();
//! let evaluator = model.get_evaluator("chmod.file.destination.mode", 0).unwrap();
//! assert_eq!(evaluator.field(), "chmod.file.destination.mode");
//!
//! let mut event = Event::new(EventType::Chmod);
//! event
//!     .set_field_value("chmod.file.destination.mode", FieldValue::Int(0o755))
//!     .unwrap();
//! assert_eq!(
//!     event.get_field_value("chmod.file.destination.mode"),
//!     Ok(FieldValue::Int(0o755))
//! );
//! ```

pub use quasar_eval as eval;
pub use quasar_model as model;

pub mod metadata {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Init logger. We log from info level and above.
/// If RUST_LOG is set, we assume the user wants to debug something
/// and use env_logger default behaviour.
pub fn init_logger(override_log_level: Option<log::LevelFilter>) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else {
        let level_filter = override_log_level.unwrap_or(log::LevelFilter::Info);

        env_logger::builder().filter_level(level_filter).init();
    }
}
