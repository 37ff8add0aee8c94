use crate::error::RingBufferError;
use crate::iter::{Cursor, Iter, Sentinel};
use crate::position::RingPosition;

/// A fixed-capacity circular buffer backed by an inline array.
///
/// No allocation occurs after construction and the capacity never
/// changes. Elements come out in the order they were pushed. `write`
/// names the slot the next push lands in, `read` the slot holding the
/// oldest unread element; `is_full` disambiguates the `write == read`
/// state, which otherwise means either empty or full.
#[derive(Clone, Debug)]
pub struct RingBuffer<T, const CAPACITY: usize> {
    buffer: [T; CAPACITY],
    write: usize,
    read: usize,
    is_full: bool,
}

impl<T, const CAPACITY: usize> RingBuffer<T, CAPACITY>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        assert!(CAPACITY > 0);

        Self {
            buffer: [T::default(); CAPACITY],
            write: 0,
            read: 0,
            is_full: false,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    #[inline]
    pub const fn empty(&self) -> bool {
        self.write == self.read && !self.is_full
    }

    #[inline]
    pub const fn full(&self) -> bool {
        self.is_full
    }

    pub const fn size(&self) -> usize {
        if self.is_full {
            return CAPACITY;
        }

        if self.write >= self.read {
            self.write - self.read
        } else {
            self.write + (CAPACITY - self.read)
        }
    }

    pub const fn free(&self) -> usize {
        if self.is_full {
            return 0;
        }

        if self.write >= self.read {
            (CAPACITY - self.write) + self.read
        } else {
            self.read - self.write
        }
    }

    /// Append a single element, failing if no slot is free.
    pub fn push(&mut self, value: T) -> Result<(), RingBufferError> {
        if self.is_full {
            return Err(RingBufferError::Full);
        }

        self.push_unchecked(value);
        Ok(())
    }

    /// Append without the capacity check.
    ///
    /// The caller must guarantee a free slot exists; pushing into a full
    /// buffer silently overwrites the oldest unread element and corrupts
    /// the cursors' notion of occupancy.
    pub fn push_unchecked(&mut self, value: T) {
        self.buffer[self.write] = value;
        self.write = (self.write + 1) % CAPACITY;

        if self.write == self.read {
            self.is_full = true;
        }
    }

    /// Bulk append, all-or-nothing.
    ///
    /// Fails if `values` is longer than [`free()`](Self::free), writing
    /// nothing. Otherwise copies in at most two contiguous runs split at
    /// the physical end of storage.
    pub fn push_buffer(&mut self, values: &[T]) -> Result<(), RingBufferError> {
        if values.len() > self.free() {
            return Err(RingBufferError::Full);
        }

        if values.is_empty() {
            return Ok(());
        }

        let until_wrap = CAPACITY - self.write;

        if values.len() > until_wrap {
            let (head, tail) = values.split_at(until_wrap);
            self.buffer[self.write..].copy_from_slice(head);
            self.buffer[..tail.len()].copy_from_slice(tail);
        } else {
            self.buffer[self.write..self.write + values.len()].copy_from_slice(values);
        }

        self.write = (self.write + values.len()) % CAPACITY;

        if self.write == self.read {
            self.is_full = true;
        }

        Ok(())
    }

    /// Remove and return the oldest element, failing if none is held.
    pub fn pop(&mut self) -> Result<T, RingBufferError> {
        if self.empty() {
            return Err(RingBufferError::Empty);
        }

        Ok(self.pop_unchecked())
    }

    /// Remove without the emptiness check.
    ///
    /// The caller must guarantee an element is held; popping an empty
    /// buffer yields a stale value and corrupts the cursors' notion of
    /// occupancy.
    pub fn pop_unchecked(&mut self) -> T {
        let value = self.buffer[self.read];
        self.read = (self.read + 1) % CAPACITY;
        self.is_full = false;

        value
    }

    /// Bulk dequeue into `dest`, all-or-nothing.
    ///
    /// Fails if `dest` is longer than [`size()`](Self::size), reading
    /// nothing. Otherwise copies out at most two contiguous runs split
    /// at the physical end of storage.
    pub fn pop_buffer(&mut self, dest: &mut [T]) -> Result<(), RingBufferError> {
        if dest.len() > self.size() {
            return Err(RingBufferError::Empty);
        }

        if dest.is_empty() {
            return Ok(());
        }

        let len = dest.len();
        let until_wrap = CAPACITY - self.read;

        if len > until_wrap {
            let (head, tail) = dest.split_at_mut(until_wrap);
            head.copy_from_slice(&self.buffer[self.read..]);
            tail.copy_from_slice(&self.buffer[..len - until_wrap]);
        } else {
            dest.copy_from_slice(&self.buffer[self.read..self.read + len]);
        }

        self.read = (self.read + len) % CAPACITY;
        self.is_full = false;

        Ok(())
    }

    /// Reset both cursors and the full flag.
    ///
    /// Stored values are not erased; stale elements remain in the
    /// backing array until overwritten.
    pub fn clear(&mut self) {
        self.write = 0;
        self.read = 0;
        self.is_full = false;
    }

    /// Cursor anchored at the oldest unread element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.buffer, RingPosition::new(self.read, 0))
    }

    /// Snapshot of one past the newest element.
    ///
    /// The wrap count is 1 whenever the occupied range crosses the
    /// physical end of storage, which keeps the sentinel's linearized
    /// position at or past every cursor reachable from
    /// [`begin()`](Self::begin) and equal to it when the buffer is empty.
    pub fn end(&self) -> Sentinel {
        let cycle = if self.write < self.read || self.is_full {
            1
        } else {
            0
        };

        Sentinel::new(RingPosition::new(self.write, cycle))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.size())
    }
}

impl<T, const CAPACITY: usize> Default for RingBuffer<T, CAPACITY>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const CAPACITY: usize> IntoIterator for &'a RingBuffer<T, CAPACITY>
where
    T: Copy + Default,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
