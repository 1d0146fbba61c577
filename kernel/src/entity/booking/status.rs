use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Closed status set of a booking.
///
/// `Canceled` is never produced by the confirmation operation; it exists for
/// bookings withdrawn outside the lifecycle and is grouped with `Rejected`
/// by the rejected-state filter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Canceled => "CANCELED",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = Report<KernelError>;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            "CANCELED" => Ok(BookingStatus::Canceled),
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("unknown booking status token: {token}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::BookingStatus;

    #[test]
    fn tokens_are_stable() {
        for status in [
            BookingStatus::Waiting,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Canceled,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn serializes_as_upper_case_token() {
        let json = serde_json::to_string(&BookingStatus::Waiting).unwrap();
        assert_eq!(json, "\"WAITING\"");
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(BookingStatus::from_str("PENDING").is_err());
    }
}
