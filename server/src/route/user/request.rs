use application::transfer::{CreateUserDto, UpdateUserDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

impl CreateUserRequest {
    pub fn into_dto(self) -> CreateUserDto {
        CreateUserDto::new(self.name, self.email)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_dto(self, id: Uuid) -> UpdateUserDto {
        UpdateUserDto::new(id, self.name, self.email)
    }
}
