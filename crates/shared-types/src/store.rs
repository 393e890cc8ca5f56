use crate::reservation::Booking;
use crate::spot::{street_facets, ParkingSpot, SpotStats};

/// In-memory spot collection owned by one mounted view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotStore {
    spots: Vec<ParkingSpot>,
    bookings: Vec<Booking>,
}

impl SpotStore {
    /// Build a store from a fetched collection. Later duplicates of an id are dropped.
    pub fn new(spots: Vec<ParkingSpot>) -> Self {
        let mut unique: Vec<ParkingSpot> = Vec::with_capacity(spots.len());
        for spot in spots {
            if !unique.iter().any(|s| s.id == spot.id) {
                unique.push(spot);
            }
        }
        Self {
            spots: unique,
            bookings: Vec::new(),
        }
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: i64) -> Option<&ParkingSpot> {
        self.spots.iter().find(|s| s.id == id)
    }

    pub fn first_id(&self) -> Option<i64> {
        self.spots.first().map(|s| s.id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Flip an available spot to reserved.
    ///
    /// Returns `false` if the spot is unknown or already reserved; a reserved
    /// spot is never made available again.
    pub fn mark_reserved(&mut self, id: i64) -> bool {
        match self.spots.iter_mut().find(|s| s.id == id) {
            Some(spot) if spot.is_available => {
                spot.is_available = false;
                true
            }
            _ => false,
        }
    }

    pub fn record_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Apply a confirmed reservation: mark the spot reserved and keep its booking.
    pub fn apply_booking(&mut self, booking: Booking) -> bool {
        let flipped = self.mark_reserved(booking.spot_id);
        self.record_booking(booking);
        flipped
    }

    pub fn stats(&self) -> SpotStats {
        SpotStats::from_spots(&self.spots)
    }

    pub fn facets(&self) -> Vec<String> {
        street_facets(&self.spots)
    }
}
