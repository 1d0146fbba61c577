use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::Comment;

#[derive(Debug, Clone)]
pub struct CreateCommentDto {
    pub author_id: Uuid,
    pub item_id: Uuid,
    pub text: String,
}

impl CreateCommentDto {
    pub fn new(author_id: Uuid, item_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            author_id,
            item_id,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommentDto {
    pub id: Uuid,
    pub item_id: Uuid,
    pub author_name: String,
    pub text: String,
    pub created_at: OffsetDateTime,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: (*comment.id()).into(),
            item_id: (*comment.item_id()).into(),
            author_name: comment.author_name().as_ref().to_string(),
            text: comment.text().as_ref().to_string(),
            created_at: *comment.created_at().as_ref(),
        }
    }
}
