use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommentId(Uuid);

impl CommentId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for CommentId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<CommentId> for Uuid {
    fn from(id: CommentId) -> Self {
        id.0
    }
}
