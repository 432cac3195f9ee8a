//! `bookstore-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{FixedIdGenerator, IdGenerator, UuidIdGenerator};
pub use value_object::ValueObject;
