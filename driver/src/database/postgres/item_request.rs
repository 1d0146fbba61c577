use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{DependOnItemRequestQuery, ItemRequestQuery};
use kernel::interface::update::{DependOnItemRequestModifier, ItemRequestModifier};
use kernel::prelude::entity::{
    CreatedAt, ItemRequest, ItemRequestId, RequestDescription, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::database::PostgresDatabase;
use crate::error::ConvertError;

pub struct PostgresItemRequestRepository;

#[async_trait::async_trait]
impl ItemRequestQuery<PgTransaction> for PostgresItemRequestRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &ItemRequestId,
    ) -> error_stack::Result<Option<ItemRequest>, KernelError> {
        PgItemRequestInternal::find_by_id(con, id).await
    }

    async fn find_by_requester_id(
        &self,
        con: &mut PgTransaction,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        PgItemRequestInternal::find_by_requester_id(con, requester_id).await
    }

    async fn find_all_except_requester(
        &self,
        con: &mut PgTransaction,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        PgItemRequestInternal::find_all_except_requester(con, requester_id).await
    }
}

impl DependOnItemRequestQuery<PgTransaction> for PostgresDatabase {
    type ItemRequestQuery = PostgresItemRequestRepository;
    fn item_request_query(&self) -> &Self::ItemRequestQuery {
        &PostgresItemRequestRepository
    }
}

#[async_trait::async_trait]
impl ItemRequestModifier<PgTransaction> for PostgresItemRequestRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        request: &ItemRequest,
    ) -> error_stack::Result<(), KernelError> {
        PgItemRequestInternal::create(con, request).await
    }
}

impl DependOnItemRequestModifier<PgTransaction> for PostgresDatabase {
    type ItemRequestModifier = PostgresItemRequestRepository;
    fn item_request_modifier(&self) -> &Self::ItemRequestModifier {
        &PostgresItemRequestRepository
    }
}

#[derive(sqlx::FromRow)]
struct ItemRequestRow {
    id: Uuid,
    requester_id: Uuid,
    description: String,
    created_at: OffsetDateTime,
}

impl From<ItemRequestRow> for ItemRequest {
    fn from(row: ItemRequestRow) -> Self {
        ItemRequest::new(
            ItemRequestId::new(row.id),
            UserId::new(row.requester_id),
            RequestDescription::new(row.description),
            CreatedAt::new(row.created_at),
        )
    }
}

pub(in crate::database) struct PgItemRequestInternal;

impl PgItemRequestInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ItemRequestId,
    ) -> error_stack::Result<Option<ItemRequest>, KernelError> {
        let row = sqlx::query_as::<_, ItemRequestRow>(
            // language=postgresql
            r#"
            SELECT
                id, requester_id, description, created_at
            FROM
                requests
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        Ok(row.map(ItemRequest::from))
    }

    async fn find_by_requester_id(
        con: &mut PgConnection,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        let rows = sqlx::query_as::<_, ItemRequestRow>(
            // language=postgresql
            r#"
            SELECT
                id, requester_id, description, created_at
            FROM
                requests
            WHERE
                requester_id = $1
            ORDER BY
                created_at DESC
            "#,
        )
        .bind(requester_id.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(ItemRequest::from).collect())
    }

    async fn find_all_except_requester(
        con: &mut PgConnection,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError> {
        let rows = sqlx::query_as::<_, ItemRequestRow>(
            // language=postgresql
            r#"
            SELECT
                id, requester_id, description, created_at
            FROM
                requests
            WHERE
                requester_id <> $1
            ORDER BY
                created_at DESC
            "#,
        )
        .bind(requester_id.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(ItemRequest::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        request: &ItemRequest,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO requests (id, requester_id, description, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(request.id().as_ref())
        .bind(request.requester_id().as_ref())
        .bind(request.description().as_ref())
        .bind(request.created_at().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }
}
