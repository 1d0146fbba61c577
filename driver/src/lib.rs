use error_stack::{Report, ResultExt};
use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .map_err(Report::from)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("environment variable {key} is not set"))
}
