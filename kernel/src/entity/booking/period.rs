use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::KernelError;

/// Half-open custody window `[start, end)`. `start < end` holds strictly for
/// every constructed value; equal or inverted bounds are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingPeriod {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl BookingPeriod {
    pub fn new(
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> error_stack::Result<Self, KernelError> {
        if start >= end {
            return Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "booking must start strictly before it ends (start: {start}, end: {end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &OffsetDateTime {
        &self.start
    }

    pub fn end(&self) -> &OffsetDateTime {
        &self.end
    }

    /// Whether the window straddles `at`, i.e. `start <= at < end`.
    pub fn contains(&self, at: OffsetDateTime) -> bool {
        self.start <= at && at < self.end
    }
}
