//! Tiny schema used by the unit tests of this crate.

use crate::{
    Accessors, BoolEvaluator, ElementIterator, EvalError, Evaluator, FieldType, FieldValue,
    IntEvaluator, RegisterId, Result, StringEvaluator, Weight,
};

#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub name: String,
    pub pruned: bool,
    pub nodes: Vec<String>,
}

impl Tree {
    pub fn new(nodes: &[&str]) -> Self {
        Self {
            name: "tree".to_string(),
            pruned: false,
            nodes: nodes.iter().map(|node| node.to_string()).collect(),
        }
    }
}

/// Depth and label of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'e>(pub i64, pub &'e str);

#[derive(Debug, Default)]
pub struct NodeIterator<'e> {
    nodes: Option<&'e [String]>,
    position: usize,
}

impl<'e> NodeIterator<'e> {
    fn current(&self) -> Option<Node<'e>> {
        let nodes = self.nodes?;
        nodes
            .get(self.position)
            .map(|label| Node(self.position as i64, label.as_str()))
    }
}

impl<'e> ElementIterator<'e, Tree> for NodeIterator<'e> {
    fn front(&mut self, event: &'e Tree) -> Option<Node<'e>> {
        self.nodes = Some(&event.nodes);
        self.position = 0;
        self.current()
    }

    fn next(&mut self) -> Option<Node<'e>> {
        self.nodes?;
        self.position += 1;
        self.current()
    }
}

const FIELDS: &[&str] = &["tree.name", "tree.nodes.depth", "tree.nodes.label", "tree.pruned"];

pub fn evaluator(field: &str, register: RegisterId) -> Result<Evaluator<Tree>> {
    let evaluator = match field {
        "tree.name" => Evaluator::String(StringEvaluator::<Tree>::new(
            "tree.name",
            Weight::Resolved,
            |ctx| ctx.event().name.as_str(),
        )),
        "tree.pruned" => Evaluator::Bool(BoolEvaluator::<Tree>::new(
            "tree.pruned",
            Weight::Direct,
            |ctx| ctx.event().pruned,
        )),
        "tree.nodes.depth" => Evaluator::Int(IntEvaluator::<Tree>::new(
            "tree.nodes.depth",
            Weight::Iterator,
            move |ctx| ctx.register(register).map_or(0, |Node(depth, _)| depth),
        )),
        "tree.nodes.label" => Evaluator::String(StringEvaluator::<Tree>::new(
            "tree.nodes.label",
            Weight::Iterator,
            move |ctx| ctx.register(register).map_or("", |Node(_, label)| label),
        )),
        _ => return Err(EvalError::FieldNotFound(field.to_string())),
    };

    Ok(evaluator)
}

impl Accessors for Tree {
    type Element<'e> = Node<'e>;

    fn get_fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn get_field_value(&self, field: &str) -> Result<FieldValue> {
        let evaluator = evaluator(field, 0)?;
        if field.starts_with("tree.nodes.") {
            Ok(evaluator.collect(self, NodeIterator::default(), 0))
        } else {
            Ok(evaluator.value(&crate::Context::new(self)))
        }
    }

    fn get_field_event_type(&self, field: &str) -> Result<&'static str> {
        evaluator(field, 0).map(|_| "tree")
    }

    fn get_field_type(&self, field: &str) -> Result<FieldType> {
        evaluator(field, 0).map(|evaluator| evaluator.field_type())
    }

    fn set_field_value(&mut self, field: &str, value: FieldValue) -> Result<()> {
        match field {
            "tree.name" => self.name = value.into_string(&["name"])?,
            "tree.pruned" => self.pruned = value.into_bool(&["pruned"])?,
            "tree.nodes.label" => self.nodes.push(value.into_string(&["nodes"])?),
            "tree.nodes.depth" => return Err(EvalError::ValueTypeMismatch("nodes".to_string())),
            _ => return Err(EvalError::FieldNotFound(field.to_string())),
        }
        Ok(())
    }
}
