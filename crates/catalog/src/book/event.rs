use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookstore_events::Event;

use super::{BookId, Price, Title};
use crate::stock::{QuantityAvailable, Status, StockId};

/// Event: BookCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreated {
    pub book_id: BookId,
    pub title: Title,
    pub price: Price,
    pub stock_id: StockId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeleted {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockIncreased. `quantity` and `status` are the values after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockIncreased {
    pub book_id: BookId,
    pub amount: u32,
    pub quantity: QuantityAvailable,
    pub status: Status,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockDecreased. `quantity` and `status` are the values after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDecreased {
    pub book_id: BookId,
    pub amount: u32,
    pub quantity: QuantityAvailable,
    pub status: Status,
    pub occurred_at: DateTime<Utc>,
}

/// Event: TitleChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleChanged {
    pub book_id: BookId,
    pub title: Title,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PriceChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChanged {
    pub book_id: BookId,
    pub price: Price,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookEvent {
    BookCreated(BookCreated),
    BookDeleted(BookDeleted),
    StockIncreased(StockIncreased),
    StockDecreased(StockDecreased),
    TitleChanged(TitleChanged),
    PriceChanged(PriceChanged),
}

impl BookEvent {
    pub fn book_id(&self) -> &BookId {
        match self {
            BookEvent::BookCreated(e) => &e.book_id,
            BookEvent::BookDeleted(e) => &e.book_id,
            BookEvent::StockIncreased(e) => &e.book_id,
            BookEvent::StockDecreased(e) => &e.book_id,
            BookEvent::TitleChanged(e) => &e.book_id,
            BookEvent::PriceChanged(e) => &e.book_id,
        }
    }
}

impl Event for BookEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BookEvent::BookCreated(_) => "catalog.book.created",
            BookEvent::BookDeleted(_) => "catalog.book.deleted",
            BookEvent::StockIncreased(_) => "catalog.book.stock_increased",
            BookEvent::StockDecreased(_) => "catalog.book.stock_decreased",
            BookEvent::TitleChanged(_) => "catalog.book.title_changed",
            BookEvent::PriceChanged(_) => "catalog.book.price_changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BookEvent::BookCreated(e) => e.occurred_at,
            BookEvent::BookDeleted(e) => e.occurred_at,
            BookEvent::StockIncreased(e) => e.occurred_at,
            BookEvent::StockDecreased(e) => e.occurred_at,
            BookEvent::TitleChanged(e) => e.occurred_at,
            BookEvent::PriceChanged(e) => e.occurred_at,
        }
    }
}
