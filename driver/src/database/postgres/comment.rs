use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{CommentQuery, DependOnCommentQuery};
use kernel::interface::update::{CommentModifier, DependOnCommentModifier};
use kernel::prelude::entity::{
    Comment, CommentId, CommentText, CreatedAt, ItemId, UserId, UserName,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::database::PostgresDatabase;
use crate::error::ConvertError;

pub struct PostgresCommentRepository;

#[async_trait::async_trait]
impl CommentQuery<PgTransaction> for PostgresCommentRepository {
    async fn find_by_item_id(
        &self,
        con: &mut PgTransaction,
        item_id: &ItemId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        PgCommentInternal::find_by_item_id(con, item_id).await
    }
}

impl DependOnCommentQuery<PgTransaction> for PostgresDatabase {
    type CommentQuery = PostgresCommentRepository;
    fn comment_query(&self) -> &Self::CommentQuery {
        &PostgresCommentRepository
    }
}

#[async_trait::async_trait]
impl CommentModifier<PgTransaction> for PostgresCommentRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        comment: &Comment,
    ) -> error_stack::Result<(), KernelError> {
        PgCommentInternal::create(con, comment).await
    }
}

impl DependOnCommentModifier<PgTransaction> for PostgresDatabase {
    type CommentModifier = PostgresCommentRepository;
    fn comment_modifier(&self) -> &Self::CommentModifier {
        &PostgresCommentRepository
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    item_id: Uuid,
    author_id: Uuid,
    author_name: String,
    text: String,
    created_at: OffsetDateTime,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::new(
            CommentId::new(row.id),
            ItemId::new(row.item_id),
            UserId::new(row.author_id),
            UserName::new(row.author_name),
            CommentText::new(row.text),
            CreatedAt::new(row.created_at),
        )
    }
}

pub(in crate::database) struct PgCommentInternal;

impl PgCommentInternal {
    async fn find_by_item_id(
        con: &mut PgConnection,
        item_id: &ItemId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            // language=postgresql
            r#"
            SELECT
                c.id,
                c.item_id,
                c.author_id,
                u.name AS author_name,
                c.text,
                c.created_at
            FROM
                comments c
                JOIN users u ON u.id = c.author_id
            WHERE
                c.item_id = $1
            ORDER BY
                c.created_at
            "#,
        )
        .bind(item_id.as_ref())
        .fetch_all(&mut *con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        comment: &Comment,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO comments (id, item_id, author_id, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id().as_ref())
        .bind(comment.item_id().as_ref())
        .bind(comment.author_id().as_ref())
        .bind(comment.text().as_ref())
        .bind(comment.created_at().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }
}
