//! Evaluate quantified predicates over the ancestors and the arguments of an
//! exec event, then flatten the event into a path to value record.
use anyhow::Result;
use quasar::{
    eval::{
        Accessors, BoolEvaluator, Context, ElementIterator, Model, Operator, RelationalOperator,
        StringOperator,
    },
    model::{Event, EventType, ProcessCacheEntry, SeclModel},
};

fn ancestor(pid: u32, comm: &str, uid: u32) -> ProcessCacheEntry {
    let mut entry = ProcessCacheEntry::default();
    entry.process_context.pid = pid;
    entry.process_context.process.comm = comm.to_string();
    entry.process_context.process.credentials.uid = uid;
    entry
}

/// True if `predicate` holds for at least one element reached through `prefix`.
fn any(
    model: &SeclModel,
    event: &Event,
    prefix: &str,
    predicate: &BoolEvaluator<Event>,
) -> Result<bool> {
    let ctx = Context::new(event);
    let mut iterator = model.get_iterator(prefix)?;

    let mut element = iterator.front(event);
    while let Some(current) = element {
        if predicate.eval(&ctx.with_register(0, current)) {
            return Ok(true);
        }
        element = iterator.next();
    }
    Ok(false)
}

fn main() -> Result<()> {
    quasar::init_logger(None);

    let model = SeclModel::new();

    let mut event = Event::new(EventType::Exec);
    event.process_context.pid = 4242;
    event.exec.process.file.path = "/usr/bin/curl".to_string();
    event.exec.args = vec!["curl".into(), "-s".into(), "http://example.com/x.sh".into()];
    event.process_context.ancestor = ProcessCacheEntry::lineage([
        ancestor(4241, "bash", 1000),
        ancestor(812, "sshd", 0),
        ancestor(1, "systemd", 0),
    ]);

    let spawned_by_sshd = model
        .get_evaluator("process.ancestors.comm", 0)?
        .predicate(Operator::Relational(RelationalOperator::Equals), "sshd")?;
    let downloads_script = model
        .get_evaluator("exec.args", 0)?
        .predicate(Operator::String(StringOperator::EndsWith), ".sh")?;

    log::info!(
        "{event}: spawned by sshd = {}, downloads a script = {}",
        any(&model, &event, "process.ancestors", &spawned_by_sshd)?,
        any(&model, &event, "exec.args", &downloads_script)?,
    );

    for field in event
        .get_fields()
        .iter()
        .filter(|field| field.starts_with("exec."))
    {
        log::info!("{field} = {}", event.get_field_value(field)?);
    }
    log::info!(
        "process.ancestors.uid = {}",
        event.get_field_value("process.ancestors.uid")?
    );

    Ok(())
}
