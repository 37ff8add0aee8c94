mod iter;
mod position;
mod ring;

pub mod error;

pub use error::RingBufferError;
pub use iter::{Cursor, Iter, Sentinel};
pub use ring::RingBuffer;
