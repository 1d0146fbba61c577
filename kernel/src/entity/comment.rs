mod id;
mod text;

pub use self::{id::*, text::*};
use crate::entity::{CreatedAt, ItemId, UserId, UserName};
use serde::{Deserialize, Serialize};

/// Feedback left on an item by a user who has finished an approved booking
/// of it. `author_name` is denormalized at read time for presentation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    item_id: ItemId,
    author_id: UserId,
    author_name: UserName,
    text: CommentText,
    created_at: CreatedAt<Comment>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        item_id: ItemId,
        author_id: UserId,
        author_name: UserName,
        text: CommentText,
        created_at: CreatedAt<Comment>,
    ) -> Self {
        Self {
            id,
            item_id,
            author_id,
            author_name,
            text,
            created_at,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn author_name(&self) -> &UserName {
        &self.author_name
    }

    pub fn text(&self) -> &CommentText {
        &self.text
    }

    pub fn created_at(&self) -> &CreatedAt<Comment> {
        &self.created_at
    }
}
