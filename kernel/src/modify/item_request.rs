use crate::database::Transaction;
use crate::entity::ItemRequest;
use crate::KernelError;

#[async_trait::async_trait]
pub trait ItemRequestModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        request: &ItemRequest,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnItemRequestModifier<Connection: Transaction>: Sync + Send + 'static {
    type ItemRequestModifier: ItemRequestModifier<Connection>;
    fn item_request_modifier(&self) -> &Self::ItemRequestModifier;
}
