use crate::Accessors;

/// Index of the register slot an iterator-scoped evaluator reads from.
pub type RegisterId = usize;

/// Number of register slots carried by a [Context].
pub const MAX_REGISTERS: usize = 4;

/// Evaluation context: the event under evaluation plus the register slots
/// bound by the enclosing quantifiers.
///
/// A context is an immutable `Copy` value. Binding an element produces a new
/// context instead of mutating a shared cell, so the element currently being
/// visited is handed explicitly to the evaluators that read it. Elements borrow
/// the event, not the iterator, so advancing an iterator can't invalidate a
/// value read from a previous context.
pub struct Context<'e, S: Accessors> {
    event: &'e S,
    registers: [Option<S::Element<'e>>; MAX_REGISTERS],
}

impl<'e, S: Accessors> Context<'e, S> {
    pub fn new(event: &'e S) -> Self {
        Self {
            event,
            registers: [None; MAX_REGISTERS],
        }
    }

    pub fn event(&self) -> &'e S {
        self.event
    }

    /// Element bound to `id`, or `None` for an unset or out of range slot.
    pub fn register(&self, id: RegisterId) -> Option<S::Element<'e>> {
        self.registers.get(id).copied().flatten()
    }

    /// Returns a copy of this context with `element` bound to register `id`.
    #[must_use]
    pub fn with_register(mut self, id: RegisterId, element: S::Element<'e>) -> Self {
        match self.registers.get_mut(id) {
            Some(slot) => *slot = Some(element),
            None => log::debug!("register {id} out of range, max is {MAX_REGISTERS}"),
        }
        self
    }
}

impl<S: Accessors> Clone for Context<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Accessors> Copy for Context<'_, S> {}
