use crate::database::Transaction;
use crate::entity::{Item, ItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ItemModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        item: &Item,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        item: &Item,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &ItemId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnItemModifier<Connection: Transaction>: Sync + Send + 'static {
    type ItemModifier: ItemModifier<Connection>;
    fn item_modifier(&self) -> &Self::ItemModifier;
}
