use error_stack::Report;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnItemQuery, DependOnItemRequestQuery, DependOnUserQuery, ItemQuery, ItemRequestQuery,
    UserQuery,
};
use kernel::interface::update::{DependOnItemRequestModifier, ItemRequestModifier};
use kernel::prelude::entity::{
    CreatedAt, ItemRequest, ItemRequestId, RequestDescription, UserId,
};
use kernel::KernelError;

use crate::transfer::{CreateItemRequestDto, ItemDto, ItemRequestDto};

#[async_trait::async_trait]
pub trait CreateItemRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemRequestModifier<Connection>
{
    async fn create_item_request(
        &self,
        dto: CreateItemRequestDto,
    ) -> error_stack::Result<ItemRequestDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let requester_id = UserId::new(dto.requester_id);
        self.user_query()
            .find_by_id(&mut connection, &requester_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.requester_id))
            })?;

        let request = ItemRequest::new(
            ItemRequestId::new(Uuid::new_v4()),
            requester_id,
            RequestDescription::new(dto.description),
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        self.item_request_modifier()
            .create(&mut connection, &request)
            .await?;
        connection.commit().await?;

        info!(
            "created item request {} for user {}",
            request.id().as_ref(),
            dto.requester_id
        );
        Ok(ItemRequestDto::from(request))
    }
}

impl<Connection: Transaction + Send, T> CreateItemRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemRequestModifier<Connection>
{
}

/// Request reads. The requester's own list and the single-request view carry
/// the items answering each request; the all-others list stays bare.
#[async_trait::async_trait]
pub trait GetItemRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnItemRequestQuery<Connection>
{
    async fn get_item_request(
        &self,
        actor_id: Uuid,
        request_id: Uuid,
    ) -> error_stack::Result<ItemRequestDto, KernelError> {
        debug!("fetching item request {request_id}");
        let mut connection = self.database_connection().transact().await?;

        self.user_query()
            .find_by_id(&mut connection, &UserId::new(actor_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {actor_id} not found"))
            })?;
        let request = self
            .item_request_query()
            .find_by_id(&mut connection, &ItemRequestId::new(request_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item request {request_id} not found"))
            })?;

        let items = self
            .item_query()
            .find_by_request_id(&mut connection, request.id())
            .await?;
        Ok(ItemRequestDto::new(
            request,
            items.into_iter().map(ItemDto::from).collect(),
        ))
    }

    async fn list_own_item_requests(
        &self,
        actor_id: Uuid,
    ) -> error_stack::Result<Vec<ItemRequestDto>, KernelError> {
        debug!("listing item requests of user {actor_id}");
        let mut connection = self.database_connection().transact().await?;

        let requester_id = UserId::new(actor_id);
        self.user_query()
            .find_by_id(&mut connection, &requester_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {actor_id} not found"))
            })?;
        let requests = self
            .item_request_query()
            .find_by_requester_id(&mut connection, &requester_id)
            .await?;

        let mut listed = Vec::with_capacity(requests.len());
        for request in requests {
            let items = self
                .item_query()
                .find_by_request_id(&mut connection, request.id())
                .await?;
            listed.push(ItemRequestDto::new(
                request,
                items.into_iter().map(ItemDto::from).collect(),
            ));
        }
        Ok(listed)
    }

    async fn list_other_item_requests(
        &self,
        actor_id: Uuid,
    ) -> error_stack::Result<Vec<ItemRequestDto>, KernelError> {
        debug!("listing item requests of everyone but user {actor_id}");
        let mut connection = self.database_connection().transact().await?;

        let requester_id = UserId::new(actor_id);
        self.user_query()
            .find_by_id(&mut connection, &requester_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {actor_id} not found"))
            })?;
        let requests = self
            .item_request_query()
            .find_all_except_requester(&mut connection, &requester_id)
            .await?;
        Ok(requests.into_iter().map(ItemRequestDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetItemRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnItemRequestQuery<Connection>
{
}
