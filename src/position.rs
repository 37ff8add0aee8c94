use std::cmp::Ordering;

/// Physical slot index plus a signed count of completed wraps.
///
/// Ordering and distance are computed over the linearized position
/// `ptr + cycle * capacity`, which keeps positions comparable after the
/// underlying cursor has crossed the physical end of storage any number
/// of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RingPosition {
    ptr: usize,
    cycle: isize,
}

impl RingPosition {
    pub const fn new(ptr: usize, cycle: isize) -> Self {
        Self { ptr, cycle }
    }

    #[inline(always)]
    pub const fn ptr(&self) -> usize {
        self.ptr
    }

    #[inline(always)]
    pub const fn linearize(&self, capacity: usize) -> isize {
        self.ptr as isize + self.cycle * capacity as isize
    }

    #[inline]
    pub fn forward(&mut self, capacity: usize) {
        if self.ptr >= capacity - 1 {
            self.ptr = 0;
            self.cycle += 1;
        } else {
            self.ptr += 1;
        }
    }

    #[inline]
    pub fn backward(&mut self, capacity: usize) {
        if self.ptr == 0 {
            self.ptr = capacity - 1;
            self.cycle -= 1;
        } else {
            self.ptr -= 1;
        }
    }

    /// Move by an arbitrary signed offset.
    ///
    /// Floor division, so a negative offset crossing physical index 0
    /// borrows from the cycle count: one slot before `(0, c)` is
    /// `(capacity - 1, c - 1)`.
    pub fn offset(&mut self, delta: isize, capacity: usize) {
        let capacity = capacity as isize;
        let linear = self.ptr as isize + delta;

        self.cycle += linear.div_euclid(capacity);
        self.ptr = linear.rem_euclid(capacity) as usize;
    }

    #[inline(always)]
    pub const fn distance(&self, other: &Self, capacity: usize) -> isize {
        self.linearize(capacity) - other.linearize(capacity)
    }

    /// Strict total order: by cycle first, then by physical slot.
    #[inline]
    pub fn order(&self, other: &Self) -> Ordering {
        self.cycle.cmp(&other.cycle).then(self.ptr.cmp(&other.ptr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_wraps_at_capacity() {
        let mut pos = RingPosition::new(2, 0);

        pos.forward(4);
        assert_eq!(pos, RingPosition::new(3, 0));

        pos.forward(4);
        assert_eq!(pos, RingPosition::new(0, 1));

        pos.forward(4);
        assert_eq!(pos, RingPosition::new(1, 1));
    }

    #[test]
    fn backward_borrows_at_zero() {
        let mut pos = RingPosition::new(1, 1);

        pos.backward(4);
        assert_eq!(pos, RingPosition::new(0, 1));

        pos.backward(4);
        assert_eq!(pos, RingPosition::new(3, 0));
    }

    #[test]
    fn offset_positive_multiple_wraps() {
        let mut pos = RingPosition::new(3, 0);

        pos.offset(9, 4);
        assert_eq!(pos, RingPosition::new(0, 3));
    }

    #[test]
    fn offset_negative_borrows_cycle() {
        let mut pos = RingPosition::new(0, 0);

        pos.offset(-1, 4);
        assert_eq!(pos, RingPosition::new(3, -1));

        pos.offset(-7, 4);
        assert_eq!(pos, RingPosition::new(0, -2));
    }

    #[test]
    fn offset_matches_unit_steps() {
        let mut stepped = RingPosition::new(1, 0);
        for _ in 0..11 {
            stepped.forward(3);
        }

        let mut jumped = RingPosition::new(1, 0);
        jumped.offset(11, 3);

        assert_eq!(stepped, jumped);
    }

    #[test]
    fn linearize_and_distance() {
        let a = RingPosition::new(1, 2);
        let b = RingPosition::new(3, 0);

        assert_eq!(a.linearize(4), 9);
        assert_eq!(b.linearize(4), 3);
        assert_eq!(a.distance(&b, 4), 6);
        assert_eq!(b.distance(&a, 4), -6);
    }

    #[test]
    fn order_is_cycle_major() {
        let a = RingPosition::new(3, 0);
        let b = RingPosition::new(0, 1);
        let c = RingPosition::new(1, 1);

        assert_eq!(a.order(&b), Ordering::Less);
        assert_eq!(b.order(&c), Ordering::Less);
        assert_eq!(c.order(&a), Ordering::Greater);
        assert_eq!(b.order(&b), Ordering::Equal);
    }
}
