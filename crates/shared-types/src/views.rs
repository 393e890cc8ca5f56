use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reservation::{Booking, DateWindow};
use crate::spot::{street_facets, ParkingSpot};

/// Case-insensitive substring search over spot locations.
pub fn search_spots(spots: &[ParkingSpot], query: &str) -> Vec<ParkingSpot> {
    let query = query.to_lowercase();
    spots
        .iter()
        .filter(|s| query.is_empty() || s.location.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Street facets that [`search_spots`] would match, for search suggestions.
///
/// Facets stitched from non-adjacent tokens never appear verbatim in a
/// location and are left out.
pub fn search_suggestions(spots: &[ParkingSpot]) -> Vec<String> {
    street_facets(spots)
        .into_iter()
        .filter(|facet| !search_spots(spots, facet).is_empty())
        .collect()
}

/// Admin table ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    None,
    Availability,
    Location,
}

/// Sort options in the order the admin select lists them.
pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption::None,
    SortOption::Availability,
    SortOption::Location,
];

impl SortOption {
    /// Key used as the select option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::Availability => "availability",
            SortOption::Location => "location",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::None => "Default",
            SortOption::Availability => "Availability",
            SortOption::Location => "Location",
        }
    }

    /// Parse a select value, falling back to [`SortOption::None`].
    pub fn from_key(s: &str) -> Self {
        match s {
            "availability" => SortOption::Availability,
            "location" => SortOption::Location,
            _ => SortOption::None,
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, spots: &mut [ParkingSpot]) {
        match self {
            SortOption::None => {}
            SortOption::Availability => spots.sort_by(|a, b| b.is_available.cmp(&a.is_available)),
            SortOption::Location => spots.sort_by(|a, b| compare_locations(&a.location, &b.location)),
        }
    }
}

/// Case-insensitive ordering with a byte-wise tie-break.
pub fn compare_locations(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Admin view filter state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotFilter {
    /// Facet label or free substring; empty means no location filter.
    pub location: String,
    pub window: Option<DateWindow>,
    pub sort: SortOption,
}

impl SpotFilter {
    /// Whether `spot` passes the location criterion.
    pub fn matches_location(&self, spot: &ParkingSpot) -> bool {
        self.location.is_empty()
            || spot.location.contains(&self.location)
            || spot.street_facet().as_deref() == Some(self.location.as_str())
    }

    /// Whether `spot` is free for the whole window.
    ///
    /// A known booking overlapping the window rules the spot out. A reserved
    /// spot counts as free only when every reservation holding it is known
    /// and falls outside the window; the listing carries no times, so a spot
    /// reserved elsewhere is never reported free.
    pub fn is_free_in_window(&self, spot: &ParkingSpot, bookings: &[Booking]) -> bool {
        let Some(window) = &self.window else {
            return true;
        };
        let mut known = bookings.iter().filter(|b| b.spot_id == spot.id).peekable();
        if spot.is_available {
            return !known.any(|b| b.overlaps(window));
        }
        known.peek().is_some() && known.all(|b| !b.overlaps(window))
    }

    /// Filter then sort. The input slice is never reordered.
    pub fn apply(&self, spots: &[ParkingSpot], bookings: &[Booking]) -> Vec<ParkingSpot> {
        let mut result: Vec<ParkingSpot> = spots
            .iter()
            .filter(|s| self.matches_location(s))
            .filter(|s| self.is_free_in_window(s, bookings))
            .cloned()
            .collect();
        self.sort.sort(&mut result);
        result
    }
}
