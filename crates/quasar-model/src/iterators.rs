use std::fmt;

use quasar_eval::ElementIterator;

use crate::{Event, ProcessCacheEntry};

/// Element an iterator is positioned on, borrowed from the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'e> {
    /// One argument or environment variable of an exec.
    Str(&'e str),
    /// One entry of the ancestor chain.
    Ancestor(&'e ProcessCacheEntry),
}

/// Repeated attributes of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorKind {
    ExecArgs,
    ExecEnvs,
    ProcessAncestors,
}

impl IteratorKind {
    pub const ALL: [IteratorKind; 3] = [
        IteratorKind::ExecArgs,
        IteratorKind::ExecEnvs,
        IteratorKind::ProcessAncestors,
    ];

    /// Field path prefix naming the attribute.
    pub fn prefix(self) -> &'static str {
        match self {
            IteratorKind::ExecArgs => "exec.args",
            IteratorKind::ExecEnvs => "exec.envs",
            IteratorKind::ProcessAncestors => "process.ancestors",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }

    /// A fresh, unstarted iterator.
    pub fn iterator<'e>(self) -> FieldIterator<'e> {
        FieldIterator {
            kind: self,
            state: State::NotStarted,
        }
    }
}

impl fmt::Display for IteratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'e> {
    NotStarted,
    Strings { values: &'e [String], position: usize },
    Ancestor(&'e ProcessCacheEntry),
    Exhausted,
}

/// Single pass iterator over one repeated attribute of one event.
///
/// [front](ElementIterator::front) positions it on the first element,
/// [next](ElementIterator::next) moves forward until it reports exhaustion.
/// An instance can't be rewound: calling `front` again exhausts it.
#[derive(Debug)]
pub struct FieldIterator<'e> {
    kind: IteratorKind,
    state: State<'e>,
}

impl<'e> FieldIterator<'e> {
    pub fn kind(&self) -> IteratorKind {
        self.kind
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    fn settle(&mut self) -> Option<Element<'e>> {
        let element = match self.state {
            State::NotStarted | State::Exhausted => None,
            State::Strings { values, position } => {
                values.get(position).map(|value| Element::Str(value.as_str()))
            }
            State::Ancestor(entry) => Some(Element::Ancestor(entry)),
        };

        if element.is_none() && !matches!(self.state, State::NotStarted) {
            self.state = State::Exhausted;
        }
        element
    }
}

fn ancestor_state(entry: Option<&ProcessCacheEntry>) -> State<'_> {
    entry.map_or(State::Exhausted, State::Ancestor)
}

impl<'e> ElementIterator<'e, Event> for FieldIterator<'e> {
    fn front(&mut self, event: &'e Event) -> Option<Element<'e>> {
        if !matches!(self.state, State::NotStarted) {
            log::warn!("{} iterator already started, use a new one", self.kind);
            self.state = State::Exhausted;
            return None;
        }

        self.state = match self.kind {
            IteratorKind::ExecArgs => State::Strings {
                values: &event.exec.args,
                position: 0,
            },
            IteratorKind::ExecEnvs => State::Strings {
                values: &event.exec.envs,
                position: 0,
            },
            IteratorKind::ProcessAncestors => ancestor_state(event.process_context.ancestor()),
        };

        self.settle()
    }

    fn next(&mut self) -> Option<Element<'e>> {
        self.state = match self.state {
            State::NotStarted => return None,
            State::Strings { values, position } => State::Strings {
                values,
                position: position + 1,
            },
            State::Ancestor(entry) => ancestor_state(entry.process_context.ancestor()),
            State::Exhausted => State::Exhausted,
        };

        self.settle()
    }
}
