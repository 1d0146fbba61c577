use crate::database::Transaction;
use crate::entity::{Item, ItemId, ItemRequestId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ItemQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ItemId,
    ) -> error_stack::Result<Option<Item>, KernelError>;

    async fn find_by_owner_id(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Item>, KernelError>;

    /// Case-insensitive name/description search over available items.
    async fn search(
        &self,
        con: &mut Connection,
        text: &str,
    ) -> error_stack::Result<Vec<Item>, KernelError>;

    /// Items listed in answer to the given request.
    async fn find_by_request_id(
        &self,
        con: &mut Connection,
        request_id: &ItemRequestId,
    ) -> error_stack::Result<Vec<Item>, KernelError>;
}

pub trait DependOnItemQuery<Connection: Transaction>: Sync + Send + 'static {
    type ItemQuery: ItemQuery<Connection>;
    fn item_query(&self) -> &Self::ItemQuery;
}
