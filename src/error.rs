/// Terminal failures.
///
/// Defines every error that ends a read and is returned to the caller:
/// invalid descriptors, an exhausted or broken input source, and values that
/// could not be converted into the target kind even after truncation.
pub mod read_error;
/// Recoverable rejections.
///
/// Describes why a single token was refused inside the read loop. A rejection
/// never leaves the loop; it only triggers another prompt.
pub mod rejection;

pub use read_error::{DescriptorError, ReadError, ReadResult, SourceError};
pub use rejection::Rejection;
