//! Booking provider interface and in-process stub.
//!
//! Booking is fire-and-forget: invoked once after travel approval and
//! alternate selection, with no compensating transaction. A failure is
//! surfaced, not retried.

use crate::travel::search::FlightOption;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from booking providers.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Booking rejected: {0}")]
    Rejected(String),
}

/// Confirmation record for a booked reposition flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub action: String,
    pub flight: String,
    pub airline: String,
    pub departure: DateTime<Utc>,
}

/// Unified interface for booking providers.
#[async_trait]
pub trait BookingProvider: Send + Sync {
    async fn book(&self, option: &FlightOption) -> Result<BookingConfirmation, BookingError>;
}

/// In-process stub that confirms every booking.
#[derive(Debug, Default)]
pub struct StubBookingProvider;

impl StubBookingProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookingProvider for StubBookingProvider {
    async fn book(&self, option: &FlightOption) -> Result<BookingConfirmation, BookingError> {
        tracing::info!(
            flight = %option.flight_number,
            airline = %option.airline,
            "booking confirmed"
        );
        Ok(BookingConfirmation {
            action: "Booked".to_string(),
            flight: option.flight_number.clone(),
            airline: option.airline.clone(),
            departure: option.departure_time,
        })
    }
}
