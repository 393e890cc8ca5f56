use crate::spot::ParkingSpot;

/// Reservation dialog state for the user dashboard.
///
/// Only one reservation can be pending per view. While the flow is not
/// [`ReservationFlow::Idle`] every "Reserve" control is disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReservationFlow {
    #[default]
    Idle,
    /// Dialog open, waiting for the user to confirm. `error` holds the last
    /// failure message after a rejected submission.
    Confirming {
        spot: ParkingSpot,
        error: Option<String>,
    },
    /// Request in flight.
    Submitting { spot: ParkingSpot },
}

impl ReservationFlow {
    /// Open the confirmation dialog. Ignored unless idle and the spot is available.
    pub fn open(&mut self, spot: ParkingSpot) -> bool {
        if !self.can_reserve() || !spot.is_available {
            return false;
        }
        *self = ReservationFlow::Confirming { spot, error: None };
        true
    }

    /// Close the dialog without submitting. Ignored while a request is in flight.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, ReservationFlow::Confirming { .. }) {
            *self = ReservationFlow::Idle;
            true
        } else {
            false
        }
    }

    /// Move to `Submitting`, returning the spot to reserve.
    pub fn begin_submit(&mut self) -> Option<ParkingSpot> {
        match std::mem::take(self) {
            ReservationFlow::Confirming { spot, .. } => {
                *self = ReservationFlow::Submitting { spot: spot.clone() };
                Some(spot)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Submission accepted: close the dialog.
    pub fn succeed(&mut self) -> bool {
        if matches!(self, ReservationFlow::Submitting { .. }) {
            *self = ReservationFlow::Idle;
            true
        } else {
            false
        }
    }

    /// Submission rejected: reopen the dialog with the failure message.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        match std::mem::take(self) {
            ReservationFlow::Submitting { spot } => {
                *self = ReservationFlow::Confirming {
                    spot,
                    error: Some(message.into()),
                };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn can_reserve(&self) -> bool {
        matches!(self, ReservationFlow::Idle)
    }

    pub fn dialog_open(&self) -> bool {
        !self.can_reserve()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ReservationFlow::Submitting { .. })
    }

    pub fn spot(&self) -> Option<&ParkingSpot> {
        match self {
            ReservationFlow::Idle => None,
            ReservationFlow::Confirming { spot, .. } | ReservationFlow::Submitting { spot } => {
                Some(spot)
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReservationFlow::Confirming { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
