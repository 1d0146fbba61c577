use error_stack::Report;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, CommentQuery, DependOnBookingQuery, DependOnCommentQuery, DependOnItemQuery,
    DependOnItemRequestQuery, DependOnUserQuery, ItemQuery, ItemRequestQuery, SortOrder, UserQuery,
};
use kernel::interface::update::{DependOnItemModifier, ItemModifier};
use kernel::prelude::entity::{Item, ItemDescription, ItemId, ItemName, ItemRequestId, UserId};
use kernel::KernelError;

use crate::transfer::{CommentDto, CreateItemDto, ItemDetailDto, ItemDto, UpdateItemDto};

/// A listing created against a request id answers that request; the link is
/// resolved before the write and never changes afterwards.
#[async_trait::async_trait]
pub trait CreateItemService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemRequestQuery<Connection>
    + DependOnItemModifier<Connection>
{
    async fn create_item(&self, dto: CreateItemDto) -> error_stack::Result<ItemDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let owner_id = UserId::new(dto.owner_id);
        self.user_query()
            .find_by_id(&mut connection, &owner_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.owner_id))
            })?;
        let request_id = match dto.request_id {
            Some(request_id) => {
                let id = ItemRequestId::new(request_id);
                self.item_request_query()
                    .find_by_id(&mut connection, &id)
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::NotFound).attach_printable(format!(
                            "item request {request_id} not found"
                        ))
                    })?;
                Some(id)
            }
            None => None,
        };

        let item = Item::new(
            ItemId::new(Uuid::new_v4()),
            owner_id,
            ItemName::new(dto.name),
            ItemDescription::new(dto.description),
            dto.available,
            request_id,
        );
        self.item_modifier().create(&mut connection, &item).await?;
        connection.commit().await?;

        info!("created item {} for user {}", item.id().as_ref(), dto.owner_id);
        Ok(ItemDto::from(item))
    }
}

impl<Connection: Transaction + Send, T> CreateItemService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemRequestQuery<Connection>
        + DependOnItemModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateItemService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnItemModifier<Connection>
{
    async fn update_item(&self, dto: UpdateItemDto) -> error_stack::Result<ItemDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let actor_id = UserId::new(dto.actor_id);
        self.user_query()
            .find_by_id(&mut connection, &actor_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.actor_id))
            })?;
        let mut item = self
            .item_query()
            .find_by_id(&mut connection, &ItemId::new(dto.item_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item {} not found", dto.item_id))
            })?;

        if item.owner_id() != &actor_id {
            return Err(Report::new(KernelError::Forbidden).attach_printable(format!(
                "user {} does not own item {}",
                dto.actor_id, dto.item_id
            )));
        }

        if let Some(name) = dto.name.filter(|name| !name.trim().is_empty()) {
            item.rename(ItemName::new(name));
        }
        if let Some(description) = dto
            .description
            .filter(|description| !description.trim().is_empty())
        {
            item.describe(ItemDescription::new(description));
        }
        if let Some(available) = dto.available {
            item.set_available(available);
        }
        self.item_modifier().update(&mut connection, &item).await?;
        connection.commit().await?;

        info!("updated item {}", dto.item_id);
        Ok(ItemDto::from(item))
    }
}

impl<Connection: Transaction + Send, T> UpdateItemService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnItemModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteItemService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnItemQuery<Connection>
    + DependOnItemModifier<Connection>
{
    async fn delete_item(&self, id: Uuid) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let item_id = ItemId::new(id);
        self.item_query()
            .find_by_id(&mut connection, &item_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("item {id} not found"))
            })?;
        self.item_modifier()
            .delete(&mut connection, &item_id)
            .await?;
        connection.commit().await?;

        info!("deleted item {id}");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteItemService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnItemQuery<Connection>
        + DependOnItemModifier<Connection>
{
}

/// Item reads: detail view (comments plus the two start-adjacent approved
/// booking timestamps), the owner's inventory, and the text search.
#[async_trait::async_trait]
pub trait GetItemService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnCommentQuery<Connection>
    + DependOnBookingQuery<Connection>
{
    async fn get_item_detail(&self, id: Uuid) -> error_stack::Result<ItemDetailDto, KernelError> {
        debug!("fetching item {id}");
        // One "now" for both adjacent-booking lookups, so they classify the
        // same booking set.
        let now = OffsetDateTime::now_utc();
        let mut connection = self.database_connection().transact().await?;

        let item_id = ItemId::new(id);
        let item = self
            .item_query()
            .find_by_id(&mut connection, &item_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("item {id} not found"))
            })?;
        let comments = self
            .comment_query()
            .find_by_item_id(&mut connection, &item_id)
            .await?;

        // The descending probe is surfaced as "last", the ascending one as
        // "next"; both deliberately select among approved bookings starting
        // after now.
        let last = self
            .booking_query()
            .find_first_approved_starting_after(&mut connection, &item_id, now, SortOrder::Descending)
            .await?;
        let next = self
            .booking_query()
            .find_first_approved_starting_after(&mut connection, &item_id, now, SortOrder::Ascending)
            .await?;

        Ok(ItemDetailDto {
            item: ItemDto::from(item),
            comments: comments.into_iter().map(CommentDto::from).collect(),
            last_booking: last.map(|booking| *booking.period().end()),
            next_booking: next.map(|booking| *booking.period().start()),
        })
    }

    async fn list_items(&self, owner_id: Uuid) -> error_stack::Result<Vec<ItemDto>, KernelError> {
        debug!("listing items of user {owner_id}");
        let mut connection = self.database_connection().transact().await?;

        let owner = UserId::new(owner_id);
        self.user_query()
            .find_by_id(&mut connection, &owner)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {owner_id} not found"))
            })?;
        let items = self
            .item_query()
            .find_by_owner_id(&mut connection, &owner)
            .await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }

    async fn search_items(&self, text: &str) -> error_stack::Result<Vec<ItemDto>, KernelError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        debug!("searching items matching {text:?}");
        let mut connection = self.database_connection().transact().await?;

        let items = self.item_query().search(&mut connection, text).await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetItemService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnCommentQuery<Connection>
        + DependOnBookingQuery<Connection>
{
}
