//! Aggregate root trait for domain models that record what happened to them.

use crate::entity::Entity;

/// Aggregate root: the single entry point to a cluster of owned objects.
///
/// Mutations go through the root, which records a domain event for every
/// state change. Callers drain the recorded events once the change has been
/// handed to whatever persists or publishes it.
pub trait AggregateRoot: Entity {
    /// Domain event type recorded by this aggregate.
    type Event: Clone + core::fmt::Debug;

    /// Events recorded since the aggregate was built or last drained.
    fn pending_events(&self) -> &[Self::Event];

    /// Drain recorded events, leaving the aggregate with none pending.
    fn take_events(&mut self) -> Vec<Self::Event>;
}
