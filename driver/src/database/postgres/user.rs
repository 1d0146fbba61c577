use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserEmail, UserId, UserName};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::database::PostgresDatabase;
use crate::error::ConvertError;

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery<PgTransaction> for PostgresUserRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con, id).await
    }
}

impl DependOnUserQuery<PgTransaction> for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

#[async_trait::async_trait]
impl UserModifier<PgTransaction> for PostgresUserRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con, user).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::update(con, user).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::delete(con, id).await
    }
}

impl DependOnUserModifier<PgTransaction> for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.id),
            UserName::new(row.name),
            UserEmail::new(row.email),
        )
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name,
                email
            FROM
                users
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        Ok(row.map(User::from))
    }

    async fn create(con: &mut PgConnection, user: &User) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.name().as_ref())
        .bind(user.email().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, user: &User) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE users
            SET name = $2, email = $3
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.name().as_ref())
        .bind(user.email().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &UserId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }
}
