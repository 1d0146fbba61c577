use crate::database::Transaction;
use crate::entity::{ItemRequest, ItemRequestId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ItemRequestQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ItemRequestId,
    ) -> error_stack::Result<Option<ItemRequest>, KernelError>;

    /// Requests raised by `requester_id`, newest first.
    async fn find_by_requester_id(
        &self,
        con: &mut Connection,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError>;

    /// Requests raised by everyone except `requester_id`, newest first.
    async fn find_all_except_requester(
        &self,
        con: &mut Connection,
        requester_id: &UserId,
    ) -> error_stack::Result<Vec<ItemRequest>, KernelError>;
}

pub trait DependOnItemRequestQuery<Connection: Transaction>: Sync + Send + 'static {
    type ItemRequestQuery: ItemRequestQuery<Connection>;
    fn item_request_query(&self) -> &Self::ItemRequestQuery;
}
