use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    NotFound,
    Forbidden,
    Invalid,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Referenced entity does not exist"),
            KernelError::Forbidden => write!(f, "Acting user lacks the required relation"),
            KernelError::Invalid => write!(f, "Structural or state precondition failed"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
