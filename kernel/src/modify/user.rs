use crate::database::Transaction;
use crate::entity::{User, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        user: &User,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        user: &User,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &UserId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier<Connection: Transaction>: Sync + Send + 'static {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
