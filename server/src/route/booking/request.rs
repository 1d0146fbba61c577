use application::transfer::CreateBookingDto;
use kernel::interface::query::StateFilter;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    item_id: Uuid,
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl CreateBookingRequest {
    pub fn into_dto(self, booker_id: Uuid) -> CreateBookingDto {
        CreateBookingDto::new(booker_id, self.item_id, self.start, self.end)
    }
}

/// Missing `state` means `ALL`.
#[derive(Debug, Deserialize)]
pub struct StateQuery {
    #[serde(default)]
    state: StateFilter,
}

impl StateQuery {
    pub fn state(&self) -> StateFilter {
        self.state
    }
}

#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    approved: bool,
}

impl ApprovedQuery {
    pub fn approved(&self) -> bool {
        self.approved
    }
}
