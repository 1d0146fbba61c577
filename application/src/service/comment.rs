use error_stack::Report;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnItemQuery, DependOnUserQuery, ItemQuery, UserQuery,
};
use kernel::interface::update::{CommentModifier, DependOnCommentModifier};
use kernel::prelude::entity::{Comment, CommentId, CommentText, CreatedAt, ItemId, UserId};
use kernel::KernelError;

use crate::transfer::{CommentDto, CreateCommentDto};

/// Comment creation is open only to users who have completed an approved
/// booking of the item.
#[async_trait::async_trait]
pub trait CreateCommentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnCommentModifier<Connection>
{
    async fn create_comment(
        &self,
        dto: CreateCommentDto,
    ) -> error_stack::Result<CommentDto, KernelError> {
        let now = OffsetDateTime::now_utc();
        let mut connection = self.database_connection().transact().await?;

        let author_id = UserId::new(dto.author_id);
        let author = self
            .user_query()
            .find_by_id(&mut connection, &author_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.author_id))
            })?;
        let item_id = ItemId::new(dto.item_id);
        self.item_query()
            .find_by_id(&mut connection, &item_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item {} not found", dto.item_id))
            })?;

        let finished = self
            .booking_query()
            .find_finished_by_booker(&mut connection, &author_id, &item_id, now)
            .await?;
        if finished.is_none() {
            return Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "user {} has no finished approved booking of item {}",
                dto.author_id, dto.item_id
            )));
        }

        let comment = Comment::new(
            CommentId::new(Uuid::new_v4()),
            item_id,
            author_id,
            author.name().clone(),
            CommentText::new(dto.text),
            CreatedAt::new(now),
        );
        self.comment_modifier()
            .create(&mut connection, &comment)
            .await?;
        connection.commit().await?;

        info!(
            "user {} commented on item {}",
            dto.author_id, dto.item_id
        );
        Ok(CommentDto::from(comment))
    }
}

impl<Connection: Transaction + Send, T> CreateCommentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnCommentModifier<Connection>
{
}
