use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestDescription(String);

impl RequestDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl AsRef<str> for RequestDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RequestDescription> for String {
    fn from(description: RequestDescription) -> Self {
        description.0
    }
}
