use thiserror::Error;

/// Errors surfaced by the codec's constructors and by the hold's fallible
/// growth path. There are no recoverable errors inside the decode loop itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FountainError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("block size must be at least 1 byte")]
    ZeroBlockSize,

    #[error("message requires more blocks than fit in a u32 index")]
    BlockCountOverflow,

    #[error("failed to reserve memory for the decoder hold")]
    Allocation,
}
