use error_stack::Report;
use tracing::{debug, info};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserEmail, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, UpdateUserDto, UserDto};

#[async_trait::async_trait]
pub trait CreateUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(dto.name),
            UserEmail::new(dto.email),
        );
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        info!("created user {}", user.id().as_ref());
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction + Send, T> CreateUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    async fn get_user(&self, id: Uuid) -> error_stack::Result<UserDto, KernelError> {
        debug!("fetching user {id}");
        let mut connection = self.database_connection().transact().await?;

        let user = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("user {id} not found"))
            })?;
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction + Send, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateUserService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    async fn update_user(&self, dto: UpdateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let mut user = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.id))
            })?;

        if let Some(name) = dto.name.filter(|name| !name.trim().is_empty()) {
            user.rename(UserName::new(name));
        }
        if let Some(email) = dto.email.filter(|email| !email.trim().is_empty()) {
            user.change_email(UserEmail::new(email));
        }
        self.user_modifier().update(&mut connection, &user).await?;
        connection.commit().await?;

        info!("updated user {}", dto.id);
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction + Send, T> UpdateUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteUserService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    async fn delete_user(&self, id: Uuid) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(id);
        self.user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("user {id} not found"))
            })?;
        self.user_modifier()
            .delete(&mut connection, &user_id)
            .await?;
        connection.commit().await?;

        info!("deleted user {id}");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}
