use crate::core::Field;

/// Two acceleration buffers addressed by parity.
///
/// `rotate` flips which slot is "current"; the old "previous" slot becomes the
/// new current and is overwritten by the next solve. Nothing is reallocated.
#[derive(Clone, Debug)]
pub struct AccelerationHistory {
    slots: [Field; 2],
    current: usize,
}

impl AccelerationHistory {
    pub fn new(len: usize) -> Self {
        Self {
            slots: [Field::zeros(len), Field::zeros(len)],
            current: 0,
        }
    }

    #[inline]
    pub fn rotate(&mut self) {
        self.current ^= 1;
    }

    #[inline]
    pub fn current(&self) -> &Field {
        &self.slots[self.current]
    }

    #[inline]
    pub fn previous(&self) -> &Field {
        &self.slots[self.current ^ 1]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Field {
        &mut self.slots[self.current]
    }

    /// (current, previous) with the current slot writable
    #[inline]
    pub fn split_mut(&mut self) -> (&mut Field, &Field) {
        let (first, second) = self.slots.split_at_mut(1);
        if self.current == 0 {
            (&mut first[0], &second[0])
        } else {
            (&mut second[0], &first[0])
        }
    }

    pub fn reset(&mut self) {
        self.slots[0].reset();
        self.slots[1].reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_swaps_roles_without_reallocating() {
        let mut history = AccelerationHistory::new(4);
        history.current_mut()[0] = 1.0;
        let ptrs = (history.current().as_ptr(), history.previous().as_ptr());

        history.rotate();

        assert_eq!(history.previous()[0], 1.0);
        assert_eq!(history.current()[0], 0.0);
        assert_eq!((history.previous().as_ptr(), history.current().as_ptr()), ptrs);

        history.rotate();
        assert_eq!(history.current()[0], 1.0);
    }

    #[test]
    fn split_mut_writes_current_slot() {
        let mut history = AccelerationHistory::new(2);
        history.rotate();
        {
            let (current, previous) = history.split_mut();
            current[1] = 3.0;
            assert_eq!(previous[1], 0.0);
        }
        assert_eq!(history.current()[1], 3.0);
        assert_eq!(history.previous()[1], 0.0);
    }
}
