use kernel::KernelError;

/// Folds a driver-level error into the kernel context, keeping the original
/// error in the report stack.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
