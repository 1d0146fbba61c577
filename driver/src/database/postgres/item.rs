use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{DependOnItemQuery, ItemQuery};
use kernel::interface::update::{DependOnItemModifier, ItemModifier};
use kernel::prelude::entity::{Item, ItemDescription, ItemId, ItemName, ItemRequestId, UserId};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::database::PostgresDatabase;
use crate::error::ConvertError;

pub struct PostgresItemRepository;

#[async_trait::async_trait]
impl ItemQuery<PgTransaction> for PostgresItemRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &ItemId,
    ) -> error_stack::Result<Option<Item>, KernelError> {
        PgItemInternal::find_by_id(con, id).await
    }

    async fn find_by_owner_id(
        &self,
        con: &mut PgTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        PgItemInternal::find_by_owner_id(con, owner_id).await
    }

    async fn search(
        &self,
        con: &mut PgTransaction,
        text: &str,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        PgItemInternal::search(con, text).await
    }

    async fn find_by_request_id(
        &self,
        con: &mut PgTransaction,
        request_id: &ItemRequestId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        PgItemInternal::find_by_request_id(con, request_id).await
    }
}

impl DependOnItemQuery<PgTransaction> for PostgresDatabase {
    type ItemQuery = PostgresItemRepository;
    fn item_query(&self) -> &Self::ItemQuery {
        &PostgresItemRepository
    }
}

#[async_trait::async_trait]
impl ItemModifier<PgTransaction> for PostgresItemRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        item: &Item,
    ) -> error_stack::Result<(), KernelError> {
        PgItemInternal::create(con, item).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        item: &Item,
    ) -> error_stack::Result<(), KernelError> {
        PgItemInternal::update(con, item).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &ItemId,
    ) -> error_stack::Result<(), KernelError> {
        PgItemInternal::delete(con, id).await
    }
}

impl DependOnItemModifier<PgTransaction> for PostgresDatabase {
    type ItemModifier = PostgresItemRepository;
    fn item_modifier(&self) -> &Self::ItemModifier {
        &PostgresItemRepository
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    description: String,
    available: bool,
    request_id: Option<Uuid>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(
            ItemId::new(row.id),
            UserId::new(row.owner_id),
            ItemName::new(row.name),
            ItemDescription::new(row.description),
            row.available,
            row.request_id.map(ItemRequestId::new),
        )
    }
}

pub(in crate::database) struct PgItemInternal;

impl PgItemInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ItemId,
    ) -> error_stack::Result<Option<Item>, KernelError> {
        let row = sqlx::query_as::<_, ItemRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                owner_id,
                name,
                description,
                available,
                request_id
            FROM
                items
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        Ok(row.map(Item::from))
    }

    async fn find_by_owner_id(
        con: &mut PgConnection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                owner_id,
                name,
                description,
                available,
                request_id
            FROM
                items
            WHERE
                owner_id = $1
            "#,
        )
        .bind(owner_id.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn search(
        con: &mut PgConnection,
        text: &str,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                owner_id,
                name,
                description,
                available,
                request_id
            FROM
                items
            WHERE
                available AND (name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(text)
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_request_id(
        con: &mut PgConnection,
        request_id: &ItemRequestId,
    ) -> error_stack::Result<Vec<Item>, KernelError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                owner_id,
                name,
                description,
                available,
                request_id
            FROM
                items
            WHERE
                request_id = $1
            "#,
        )
        .bind(request_id.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(con: &mut PgConnection, item: &Item) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO items (id, owner_id, name, description, available, request_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.owner_id().as_ref())
        .bind(item.name().as_ref())
        .bind(item.description().as_ref())
        .bind(item.available())
        .bind(item.request_id().map(|id| *id.as_ref()))
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, item: &Item) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE items
            SET name = $2, description = $3, available = $4
            WHERE id = $1
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.name().as_ref())
        .bind(item.description().as_ref())
        .bind(item.available())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &ItemId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM items
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
