use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ItemRequestId(Uuid);

impl ItemRequestId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for ItemRequestId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<ItemRequestId> for Uuid {
    fn from(id: ItemRequestId) -> Self {
        id.0
    }
}
