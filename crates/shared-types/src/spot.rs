use serde::{Deserialize, Serialize};

/// Marker that precedes the street name in backend location strings,
/// e.g. `"100 Block of Forbes Ave"`.
pub const BLOCK_MARKER: &str = "Block of ";

/// A parking spot as returned by `GET /api/spots/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: i64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_hour: f64,
    pub is_available: bool,
}

impl ParkingSpot {
    /// Status label used by the admin table and admin map popups.
    pub fn status_label(&self) -> &'static str {
        if self.is_available {
            "Available"
        } else {
            "Reserved"
        }
    }

    /// Status label used by the user-facing map popups.
    pub fn occupancy_label(&self) -> &'static str {
        if self.is_available {
            "Available"
        } else {
            "Occupied"
        }
    }

    /// Street facet derived from this spot's location, if it has one.
    pub fn street_facet(&self) -> Option<String> {
        street_facet(&self.location)
    }
}

/// Availability counts for a spot collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotStats {
    pub total: usize,
    pub available: usize,
    pub reserved: usize,
}

impl SpotStats {
    pub fn from_spots(spots: &[ParkingSpot]) -> Self {
        let available = spots.iter().filter(|s| s.is_available).count();
        Self {
            total: spots.len(),
            available,
            reserved: spots.len() - available,
        }
    }
}

/// Derive the street facet label for a location string.
///
/// The facet is built from the first token after [`BLOCK_MARKER`] and the
/// last two whitespace-separated tokens of the location. When the marker
/// token already starts that tail (the usual `"<n> Block of <Street> <Suffix>"`
/// shape) the tail alone is the facet, so the label stays a substring of the
/// location.
///
/// Returns `None` when the marker is missing, nothing follows it, or fewer
/// than two tokens follow it (the tail would reach back into the marker).
pub fn street_facet(location: &str) -> Option<String> {
    let (_, after) = location.split_once(BLOCK_MARKER)?;
    let after_tokens: Vec<&str> = after.split_whitespace().collect();
    let street = *after_tokens.first()?;
    if after_tokens.len() < 2 {
        return None;
    }

    let tail = &after_tokens[after_tokens.len() - 2..];
    if after_tokens.len() == 2 {
        Some(tail.join(" "))
    } else {
        Some(format!("{} {}", street, tail.join(" ")))
    }
}

/// Unique street facets in first-seen order. Locations without a facet are skipped.
pub fn street_facets(spots: &[ParkingSpot]) -> Vec<String> {
    let mut facets: Vec<String> = Vec::new();
    for facet in spots.iter().filter_map(ParkingSpot::street_facet) {
        if !facets.contains(&facet) {
            facets.push(facet);
        }
    }
    facets
}

#[cfg(test)]
pub(crate) fn spot(id: i64, location: &str, is_available: bool, price_per_hour: f64) -> ParkingSpot {
    ParkingSpot {
        id,
        location: location.to_string(),
        latitude: 40.428 + id as f64 * 0.001,
        longitude: -79.922 - id as f64 * 0.001,
        price_per_hour,
        is_available,
    }
}
