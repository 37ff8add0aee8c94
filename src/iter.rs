use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use crate::position::RingPosition;

/// A randomly-accessible cursor over a ring buffer's backing storage.
///
/// All arithmetic is valid: the cursor can be moved outside the buffer's
/// currently occupied range, and only dereferencing such a position yields
/// an unspecified (though still initialized) element. Comparing cursors
/// obtained from different buffers is meaningless and not guarded against.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    pos: RingPosition,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(data: &'a [T], pos: RingPosition) -> Self {
        Self { data, pos }
    }

    /// Reference to the element at the cursor's physical slot.
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.data[self.pos.ptr()]
    }

    /// Reference to the element `index` slots ahead, modulo capacity.
    ///
    /// A pure modular offset from the current slot; the wrap count is
    /// ignored. The index is reduced before the addition, so any `usize`
    /// is accepted without overflow.
    #[inline]
    pub fn peek(&self, index: usize) -> &'a T {
        let index = index % self.data.len();
        &self.data[(self.pos.ptr() + index) % self.data.len()]
    }

    /// Advance by one slot, wrapping at the physical end of storage.
    #[inline]
    pub fn step_forward(&mut self) {
        self.pos.forward(self.data.len());
    }

    /// Retreat by one slot, wrapping at physical index 0.
    #[inline]
    pub fn step_back(&mut self) {
        self.pos.backward(self.data.len());
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.order(&other.pos)
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, rhs: isize) {
        self.pos.offset(rhs, self.data.len());
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.pos.offset(-rhs, self.data.len());
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn add(mut self, rhs: isize) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn sub(mut self, rhs: isize) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        self.pos.distance(&other.pos, self.data.len())
    }
}

impl<T> Index<usize> for Cursor<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.peek(index)
    }
}

/// Snapshot of "one past the last occupied element".
///
/// Produced only by [`RingBuffer::end`](crate::RingBuffer::end) and
/// recomputed on each request; it goes stale if the buffer mutates
/// afterwards. It carries no storage reference and cannot be stepped,
/// only compared with and subtracted from a [`Cursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentinel {
    pos: RingPosition,
}

impl Sentinel {
    pub(crate) const fn new(pos: RingPosition) -> Self {
        Self { pos }
    }
}

impl<T> PartialEq<Sentinel> for Cursor<'_, T> {
    fn eq(&self, other: &Sentinel) -> bool {
        self.pos == other.pos
    }
}

impl<'a, T> PartialEq<Cursor<'a, T>> for Sentinel {
    fn eq(&self, other: &Cursor<'a, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialOrd<Sentinel> for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Sentinel) -> Option<Ordering> {
        Some(self.pos.order(&other.pos))
    }
}

impl<'a, T> PartialOrd<Cursor<'a, T>> for Sentinel {
    fn partial_cmp(&self, other: &Cursor<'a, T>) -> Option<Ordering> {
        Some(self.pos.order(&other.pos))
    }
}

impl<T> Sub<Sentinel> for Cursor<'_, T> {
    type Output = isize;

    fn sub(self, rhs: Sentinel) -> isize {
        self.pos.distance(&rhs.pos, self.data.len())
    }
}

// The sentinel carries no storage of its own, so the cursor's storage
// length scales both linearized positions.
impl<'a, T> Sub<Cursor<'a, T>> for Sentinel {
    type Output = isize;

    fn sub(self, rhs: Cursor<'a, T>) -> isize {
        self.pos.distance(&rhs.pos, rhs.data.len())
    }
}

/// Iterator over a ring buffer's occupied range, oldest element first.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(cursor: Cursor<'a, T>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.cursor.get();
        self.cursor.step_forward();
        self.remaining -= 1;

        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.cursor.peek(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
