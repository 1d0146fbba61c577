use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    async fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T, Connection: Transaction> DependOnDatabaseConnection<Connection> for T
where
    T: DatabaseConnection<Connection>,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

#[async_trait::async_trait]
pub trait Transaction: 'static + Sync + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
