//! DDD base abstractions: entities, value objects, aggregates, events.

mod aggregate;
mod entity;
mod event;
mod repository;

pub use aggregate::*;
pub use entity::*;
pub use event::*;
pub use repository::*;
