use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

use time::OffsetDateTime;

#[derive(Debug, Clone, Hash)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> PartialEq for CreatedAt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for CreatedAt<T> {}

impl<T> PartialOrd for CreatedAt<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CreatedAt<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }
}

impl<T> AsRef<OffsetDateTime> for CreatedAt<T> {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl<T> Serialize for CreatedAt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CreatedAt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <OffsetDateTime>::deserialize(deserializer).map(|time| Self(time, PhantomData))
    }
}
