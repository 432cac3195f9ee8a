//! Catalog domain module.
//!
//! This crate contains the business rules for books on sale and their stock,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Event time comes from an injected `Clock`; ids from an injected `IdGenerator`.
//!
//! The crate only emits `tracing` events. Embedders install a subscriber, e.g.
//! by calling `bookstore_observability::init()` at startup.

pub mod book;
pub mod stock;

pub use book::{
    Book, BookCreated, BookDeleted, BookEvent, BookId, PriceChanged, Price, StockDecreased,
    StockIncreased, Title, TitleChanged,
};
pub use stock::{QuantityAvailable, Status, Stock, StockId};
