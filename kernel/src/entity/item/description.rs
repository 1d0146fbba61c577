use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemDescription(String);

impl ItemDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl AsRef<str> for ItemDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ItemDescription> for String {
    fn from(description: ItemDescription) -> Self {
        description.0
    }
}
