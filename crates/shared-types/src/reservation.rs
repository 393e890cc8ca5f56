use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Body of `POST /api/reserve/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReservationRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "A signed-in user is required"))
    )]
    pub user: i64,
    pub parking_spot: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must be non-negative"))
    )]
    pub total_price: f64,
}

impl ReservationRequest {
    /// Build a reservation starting at `start` and lasting `hours` hours.
    pub fn starting_at(
        user: i64,
        spot_id: i64,
        price_per_hour: f64,
        start: DateTime<Utc>,
        hours: u32,
    ) -> Self {
        Self {
            user,
            parking_spot: spot_id,
            start_time: start,
            end_time: start + Duration::hours(i64::from(hours)),
            total_price: price_per_hour * f64::from(hours),
        }
    }

    pub fn booking(&self) -> Booking {
        Booking {
            spot_id: self.parking_spot,
            start_time: self.start_time,
            end_time: self.end_time,
            total_price: self.total_price,
        }
    }
}

/// Success body of `POST /api/reserve/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub message: String,
}

/// Failure body returned by the parking backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
}

/// A confirmed time-bounded claim on a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub spot_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: f64,
}

impl Booking {
    /// Whether this booking intersects any day of `window`.
    pub fn overlaps(&self, window: &DateWindow) -> bool {
        let booked_from = self.start_time.date_naive();
        let booked_until = self.end_time.date_naive();
        booked_from <= window.end && booked_until >= window.start
    }
}

/// Result of the `reserve_spot` server function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationReceipt {
    pub message: String,
    pub booking: Booking,
}

/// Inclusive range of calendar days used by the admin date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Returns `None` when `start` falls after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }
}
