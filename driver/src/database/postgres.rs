use std::ops::{Deref, DerefMut};

use error_stack::Report;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{booking::*, comment::*, item::*, item_request::*, user::*};

mod booking;
mod comment;
mod item;
mod item_request;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("../migrations")
            .run(&pool)
            .await
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PgTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PgTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PgTransaction(transaction))
    }
}

/// Unit of work over a pooled connection. Dropping it without `commit` rolls
/// the transaction back, which keeps failed operations free of partial
/// writes.
pub struct PgTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PgTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PgTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PgTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::RowNotFound => KernelError::NotFound,
                Error::Database(db) if db.is_unique_violation() => KernelError::Concurrency,
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
