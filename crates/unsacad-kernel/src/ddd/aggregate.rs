//! Aggregate root base abstraction.

use super::{DomainEvent, Entity};
use std::fmt;

/// Ordered buffer of pending domain events, confined to one aggregate
/// instance.
///
/// The buffer is drained exactly once per unit of work, right after
/// persistence, so events are delivered at most once per produced
/// instance. Aggregates must not be shared across concurrent units of
/// work; the buffer carries no synchronization of its own.
#[derive(Default)]
pub struct DomainEvents {
    events: Vec<Box<dyn DomainEvent>>,
}

impl DomainEvents {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event. Append-only: recorded events cannot be reordered
    /// or replaced.
    pub fn record(&mut self, event: Box<dyn DomainEvent>) {
        self.events.push(event);
    }

    /// Atomically takes every pending event, leaving the buffer empty.
    ///
    /// The returned vector is owned by the caller; a second call returns
    /// an empty vector.
    pub fn pull(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.events)
    }

    /// Discards every pending event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Read-only view of the pending events.
    #[must_use]
    pub fn as_slice(&self) -> &[Box<dyn DomainEvent>] {
        &self.events
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Debug for DomainEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.events.iter().map(|e| e.event_name()))
            .finish()
    }
}

/// An entity that is the consistency boundary of its cluster and
/// accumulates domain events between creation and persistence.
pub trait AggregateRoot: Entity {
    /// Read access to the pending-event buffer.
    fn events(&self) -> &DomainEvents;

    /// Mutable access to the pending-event buffer.
    fn events_mut(&mut self) -> &mut DomainEvents;

    /// Read-only view of the pending events.
    fn domain_events(&self) -> &[Box<dyn DomainEvent>] {
        self.events().as_slice()
    }

    /// Takes every pending event; destructive exactly once.
    fn pull_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        self.events_mut().pull()
    }

    /// Discards every pending event.
    fn clear_events(&mut self) {
        self.events_mut().clear();
    }
}
