use uuid::Uuid;

use kernel::prelude::entity::User;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

impl CreateUserDto {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Absent or blank fields leave the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserDto {
    pub fn new(id: Uuid, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name, email }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: (*user.id()).into(),
            name: user.name().as_ref().to_string(),
            email: user.email().as_ref().to_string(),
        }
    }
}
