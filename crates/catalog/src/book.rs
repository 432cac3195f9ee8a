//! Book aggregate: identity, title and price of a book on sale, plus the
//! stock it exclusively owns.

mod event;
mod id;
mod price;
mod title;

pub use self::{
    event::{
        BookCreated, BookDeleted, BookEvent, PriceChanged, StockDecreased, StockIncreased,
        TitleChanged,
    },
    id::BookId,
    price::Price,
    title::Title,
};

use std::sync::Arc;

use bookstore_core::{
    AggregateRoot, Clock, DomainError, DomainResult, Entity, IdGenerator, SystemClock,
};
use bookstore_events::EventRecorder;

use crate::stock::Stock;

/// Aggregate root: Book.
///
/// Every stock change goes through the book, which forwards it to the owned
/// [`Stock`] and records a [`BookEvent`] stamped by the book's [`Clock`].
#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: Title,
    price: Price,
    stock: Stock,
    deleted: bool,
    events: EventRecorder<BookEvent>,
    clock: Arc<dyn Clock>,
}

impl Book {
    /// New book with empty stock, stamped with wall-clock time.
    pub fn create(id: BookId, title: Title, price: Price) -> Self {
        Self::created(Arc::new(SystemClock), id, title, price, Stock::create())
    }

    /// New book with empty stock whose id is drawn from `ids` and whose events
    /// are stamped by `clock`.
    pub fn create_with(
        ids: &dyn IdGenerator,
        clock: Arc<dyn Clock>,
        id: BookId,
        title: Title,
        price: Price,
    ) -> DomainResult<Self> {
        let stock = Stock::create_with(ids)?;
        Ok(Self::created(clock, id, title, price, stock))
    }

    /// Rebuild a persisted, live book around its existing stock. Records nothing.
    pub fn reconstruct(id: BookId, title: Title, price: Price, stock: Stock) -> Self {
        Self::restore(id, title, price, stock, false)
    }

    /// Rebuild a persisted book that was deleted before it was saved.
    pub fn reconstruct_deleted(id: BookId, title: Title, price: Price, stock: Stock) -> Self {
        Self::restore(id, title, price, stock, true)
    }

    /// Replace the time source used for events recorded from now on.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn restore(id: BookId, title: Title, price: Price, stock: Stock, deleted: bool) -> Self {
        Self {
            id,
            title,
            price,
            stock,
            deleted,
            events: EventRecorder::new(),
            clock: Arc::new(SystemClock),
        }
    }

    fn created(clock: Arc<dyn Clock>, id: BookId, title: Title, price: Price, stock: Stock) -> Self {
        let mut book = Self::reconstruct(id, title, price, stock).with_clock(clock);
        book.events.record(BookEvent::BookCreated(BookCreated {
            book_id: book.id.clone(),
            title: book.title.clone(),
            price: book.price.clone(),
            stock_id: book.stock.id().clone(),
            occurred_at: book.clock.now(),
        }));
        tracing::debug!(book_id = %book.id, stock_id = %book.stock.id(), "book created");
        book
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Mark the book deleted. Allowed at any stock level; repeated calls are no-ops.
    pub fn delete(&mut self) {
        if self.deleted {
            return;
        }
        self.deleted = true;
        self.events.record(BookEvent::BookDeleted(BookDeleted {
            book_id: self.id.clone(),
            occurred_at: self.clock.now(),
        }));
        tracing::debug!(
            book_id = %self.id,
            quantity = %self.stock.quantity(),
            "book deleted"
        );
    }

    /// Whether the book can be sold right now.
    pub fn is_saleable(&self) -> bool {
        !self.deleted && self.stock.is_available()
    }

    pub fn increase_stock(&mut self, amount: u32) -> DomainResult<()> {
        self.ensure_not_deleted()?;
        self.stock.increase_quantity(amount)?;
        self.events.record(BookEvent::StockIncreased(StockIncreased {
            book_id: self.id.clone(),
            amount,
            quantity: self.stock.quantity(),
            status: self.stock.status(),
            occurred_at: self.clock.now(),
        }));
        tracing::debug!(
            book_id = %self.id,
            amount,
            quantity = %self.stock.quantity(),
            status = ?self.stock.status(),
            "stock increased"
        );
        Ok(())
    }

    pub fn decrease_stock(&mut self, amount: u32) -> DomainResult<()> {
        self.ensure_not_deleted()?;
        self.stock.decrease_quantity(amount)?;
        self.events.record(BookEvent::StockDecreased(StockDecreased {
            book_id: self.id.clone(),
            amount,
            quantity: self.stock.quantity(),
            status: self.stock.status(),
            occurred_at: self.clock.now(),
        }));
        tracing::debug!(
            book_id = %self.id,
            amount,
            quantity = %self.stock.quantity(),
            status = ?self.stock.status(),
            "stock decreased"
        );
        Ok(())
    }

    pub fn change_title(&mut self, title: Title) -> DomainResult<()> {
        self.ensure_not_deleted()?;
        self.title = title;
        self.events.record(BookEvent::TitleChanged(TitleChanged {
            book_id: self.id.clone(),
            title: self.title.clone(),
            occurred_at: self.clock.now(),
        }));
        tracing::debug!(book_id = %self.id, title = %self.title, "title changed");
        Ok(())
    }

    pub fn change_price(&mut self, price: Price) -> DomainResult<()> {
        self.ensure_not_deleted()?;
        self.price = price;
        self.events.record(BookEvent::PriceChanged(PriceChanged {
            book_id: self.id.clone(),
            price: self.price.clone(),
            occurred_at: self.clock.now(),
        }));
        tracing::debug!(book_id = %self.id, price = %self.price, "price changed");
        Ok(())
    }

    fn ensure_not_deleted(&self) -> DomainResult<()> {
        if self.deleted {
            return Err(DomainError::conflict(format!("book {} is deleted", self.id)));
        }
        Ok(())
    }
}

// The clock is a collaborator, not state.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.price == other.price
            && self.stock == other.stock
            && self.deleted == other.deleted
            && self.events == other.events
    }
}

impl Eq for Book {}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Book {
    type Event = BookEvent;

    fn pending_events(&self) -> &[Self::Event] {
        self.events.pending()
    }

    fn take_events(&mut self) -> Vec<Self::Event> {
        self.events.take()
    }
}
