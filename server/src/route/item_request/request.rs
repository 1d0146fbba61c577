use application::transfer::CreateItemRequestDto;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequestRequest {
    description: String,
}

impl CreateItemRequestRequest {
    pub fn into_dto(self, requester_id: Uuid) -> CreateItemRequestDto {
        CreateItemRequestDto::new(requester_id, self.description)
    }
}
