use crate::event::Event;

/// Append-only buffer of events an aggregate has produced but nobody has
/// consumed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecorder<E> {
    pending: Vec<E>,
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<E: Event> EventRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    /// Drain everything recorded so far, oldest first.
    pub fn take(&mut self) -> Vec<E> {
        core::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
