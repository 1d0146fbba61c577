use crate::database::Transaction;
use crate::entity::{Booking, BookingId, BookingStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError>;

    /// Compare-and-set on the status column. The store flips `id` from
    /// `expected` to `status` atomically and returns the updated record, or
    /// `None` when the current status no longer matches `expected` (a racing
    /// confirmation won, or the booking is gone).
    async fn update_status(
        &self,
        con: &mut Connection,
        id: &BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
}

pub trait DependOnBookingModifier<Connection: Transaction>: Sync + Send + 'static {
    type BookingModifier: BookingModifier<Connection>;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
