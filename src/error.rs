use thiserror::Error;

/// The closed set of failure kinds a ring buffer operation can report.
///
/// Both are expected, recoverable conditions. The failing operation is a
/// no-op on buffer state; retrying is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingBufferError {
    #[error("ring buffer is full and cannot accept more elements")]
    Full,

    #[error("ring buffer is empty and no element can be popped")]
    Empty,
}
