//! In-memory stores for service and router tests.

use async_trait::async_trait;
use std::sync::Mutex;

use contracts::domain::a001_design::aggregate::{Design, DesignId, ValidDesignDto};
use contracts::domain::a002_booking::aggregate::{Booking, BookingId};
use contracts::domain::common::AggregateRoot;
use contracts::enums::BookingStatus;

use crate::domain::a001_design::repository::DesignStore;
use crate::domain::a002_booking::repository::BookingStore;
use crate::shared::data::sequence::ReferenceSequence;

pub struct MemoryDesignStore {
    designs: Mutex<Vec<Design>>,
    sequence: ReferenceSequence,
}

impl Default for MemoryDesignStore {
    fn default() -> Self {
        Self {
            designs: Mutex::new(Vec::new()),
            sequence: ReferenceSequence::new(Design::id_prefix()),
        }
    }
}

#[async_trait]
impl DesignStore for MemoryDesignStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Design>> {
        Ok(self.designs.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &DesignId) -> anyhow::Result<Option<Design>> {
        Ok(self
            .designs
            .lock()
            .unwrap()
            .iter()
            .find(|d| &d.id == id)
            .cloned())
    }

    async fn create(&self, dto: ValidDesignDto) -> anyhow::Result<Design> {
        let code = self.sequence.allocate(|| async { Ok(Vec::new()) }).await?;
        let design = Design::new_for_insert(DesignId(code), dto);
        self.designs.lock().unwrap().push(design.clone());
        Ok(design)
    }
}

pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
    sequence: ReferenceSequence,
}

impl Default for MemoryBookingStore {
    fn default() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            sequence: ReferenceSequence::new(Booking::id_prefix()),
        }
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Booking>> {
        let mut all = self.bookings.lock().unwrap().clone();
        all.reverse();
        Ok(all)
    }

    async fn get_by_id(&self, id: &BookingId) -> anyhow::Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.id == id)
            .cloned())
    }

    async fn allocate_id(&self) -> anyhow::Result<BookingId> {
        let code = self.sequence.allocate(|| async { Ok(Vec::new()) }).await?;
        Ok(BookingId(code))
    }

    async fn create(&self, booking: &Booking) -> anyhow::Result<()> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>> {
        let mut bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter_mut().find(|b| &b.id == id).map(|b| {
            b.set_status(status);
            b.clone()
        }))
    }
}

/// Store whose every call fails, for the persistence error path
pub struct FailingBookingStore;

#[async_trait]
impl BookingStore for FailingBookingStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Booking>> {
        Err(anyhow::anyhow!("store offline"))
    }

    async fn get_by_id(&self, _id: &BookingId) -> anyhow::Result<Option<Booking>> {
        Err(anyhow::anyhow!("store offline"))
    }

    async fn allocate_id(&self) -> anyhow::Result<BookingId> {
        Err(anyhow::anyhow!("store offline"))
    }

    async fn create(&self, _booking: &Booking) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("store offline"))
    }

    async fn update_status(
        &self,
        _id: &BookingId,
        _status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>> {
        Err(anyhow::anyhow!("store offline"))
    }
}
