//! In-memory local repository implementation.
//!
//! Stores bookings and bays in HashMaps behind an `RwLock`, giving tests
//! and local development a fast, deterministic, isolated backend that
//! implements the same traits as the platform's document-store client.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::error::{ErrorContext, RepositoryError, RepositoryResult};
use super::repository::{BayRepository, BookingRepository, DateRange};
use crate::models::{Bay, Booking};

/// In-memory repository keyed by record id.
///
/// # Example
/// ```
/// use bayplan::db::LocalRepository;
///
/// let repo = LocalRepository::new();
/// // Seed with test data via insert_booking / insert_bay, then hand the
/// // repo to a ScheduleService.
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    bookings: HashMap<String, Booking>,
    bays: HashMap<String, Bay>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a booking.
    pub fn insert_booking(&self, booking: Booking) {
        let mut data = self.data.write().expect("local repository lock poisoned");
        data.bookings.insert(booking.id.clone(), booking);
    }

    /// Insert or replace a bay.
    pub fn insert_bay(&self, bay: Bay) {
        let mut data = self.data.write().expect("local repository lock poisoned");
        data.bays.insert(bay.id.clone(), bay);
    }

    /// Remove a booking by id.
    pub fn remove_booking(&self, id: &str) -> Option<Booking> {
        let mut data = self.data.write().expect("local repository lock poisoned");
        data.bookings.remove(id)
    }

    /// Fetch one booking by id.
    pub fn get_booking(&self, id: &str) -> RepositoryResult<Booking> {
        let data = self.data.read().expect("local repository lock poisoned");
        data.bookings
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("booking", id))
    }

    /// Number of stored bookings, across all centers.
    pub fn booking_count(&self) -> usize {
        let data = self.data.read().expect("local repository lock poisoned");
        data.bookings.len()
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn fetch_bookings(
        &self,
        center_id: &str,
        range: DateRange,
        bay_id: Option<&str>,
    ) -> RepositoryResult<Vec<Booking>> {
        if range.end < range.start {
            return Err(RepositoryError::ValidationError {
                message: "date range end precedes start".to_string(),
                context: ErrorContext::new("fetch_bookings")
                    .with_entity("booking")
                    .with_details(format!("{} > {}", range.start, range.end)),
            });
        }

        let data = self.data.read().expect("local repository lock poisoned");
        let mut bookings: Vec<Booking> = data
            .bookings
            .values()
            .filter(|b| b.service_center_id.as_deref() == Some(center_id))
            .filter(|b| b.scheduled_date.is_some_and(|d| range.contains(d)))
            .filter(|b| bay_id.is_none() || b.bay_id.as_deref() == bay_id)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep results stable.
        bookings.sort_by(|a, b| (a.scheduled_date, a.scheduled_time, &a.id)
            .cmp(&(b.scheduled_date, b.scheduled_time, &b.id)));
        Ok(bookings)
    }
}

#[async_trait]
impl BayRepository for LocalRepository {
    async fn fetch_active_bays(&self, center_id: &str) -> RepositoryResult<Vec<Bay>> {
        let data = self.data.read().expect("local repository lock poisoned");
        let mut bays: Vec<Bay> = data
            .bays
            .values()
            .filter(|b| b.service_center_id == center_id && b.active)
            .cloned()
            .collect();
        bays.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(bays)
    }
}
