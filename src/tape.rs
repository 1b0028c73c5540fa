//! The VM's linear memory: a sequence of cells under a movable head.

use std::num::NonZeroUsize;

use crate::cell::Cell;

/// Marker error for a head move that would leave the valid index range.
///
/// The tape knows nothing about instructions; the VM attaches the source
/// position of the move that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds;

/// A tape of cells plus a head index.
///
/// The bounds policy is fixed at construction: a *fixed* tape fails when
/// the head would pass its last cell, an *extensible* tape grows to the
/// right on demand. Moving left of cell 0 is an error in both modes.
/// After any successful operation the head is a valid index.
#[derive(Debug)]
pub struct Tape<C> {
    cells: Vec<C>,
    head: usize,
    extensible: bool,
}

impl<C: Cell> Tape<C> {
    /// Create a tape of `length` zeroed cells with the head at index 0.
    pub fn new(length: NonZeroUsize, extensible: bool) -> Self {
        Self {
            cells: vec![C::default(); length.get()],
            head: 0,
            extensible,
        }
    }

    /// Current head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Number of cells currently on the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell under the head.
    pub fn cell(&self) -> &C {
        &self.cells[self.head]
    }

    /// Mutable access to the cell under the head.
    pub fn cell_mut(&mut self) -> &mut C {
        &mut self.cells[self.head]
    }

    /// Move the head one cell to the left. Fails at cell 0 in both modes;
    /// Brainfuck tapes are unbounded only to the right.
    pub fn move_left(&mut self) -> Result<(), OutOfBounds> {
        if self.head == 0 {
            return Err(OutOfBounds);
        }
        self.head -= 1;
        Ok(())
    }

    /// Move the head one cell to the right. At the last cell a fixed tape
    /// fails; an extensible tape grows first, so the move always succeeds.
    pub fn move_right(&mut self) -> Result<(), OutOfBounds> {
        if self.head == self.cells.len() - 1 {
            if !self.extensible {
                return Err(OutOfBounds);
            }
            // Doubling keeps appends amortized O(1); the new length always
            // strictly exceeds the new head position.
            let new_length = (self.cells.len() * 2).max(self.head + 2);
            self.cells.resize(new_length, C::default());
        }
        self.head += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn new_tape_is_zeroed_with_head_at_origin() {
        let tape: Tape<u8> = Tape::new(cells(4), false);
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.len(), 4);
        assert_eq!(*tape.cell(), 0);
    }

    #[test]
    fn move_left_at_origin_fails_in_both_modes() {
        for extensible in [false, true] {
            let mut tape: Tape<u8> = Tape::new(cells(4), extensible);
            assert_eq!(tape.move_left(), Err(OutOfBounds));
            assert_eq!(tape.head(), 0);
        }
    }

    #[test]
    fn move_right_at_end_fails_on_fixed_tape() {
        let mut tape: Tape<u8> = Tape::new(cells(2), false);
        tape.move_right().unwrap();
        assert_eq!(tape.move_right(), Err(OutOfBounds));
        assert_eq!(tape.head(), 1);
    }

    #[test]
    fn move_right_at_end_grows_extensible_tape() {
        let mut tape: Tape<u8> = Tape::new(cells(1), true);
        let before = tape.len();
        tape.move_right().unwrap();
        assert!(tape.len() > before);
        assert_eq!(tape.head(), 1);
        assert!(tape.head() < tape.len());
        assert_eq!(*tape.cell(), 0);
    }

    #[test]
    fn repeated_growth_keeps_head_valid() {
        let mut tape: Tape<u8> = Tape::new(cells(1), true);
        for _ in 0..100 {
            tape.move_right().unwrap();
            assert!(tape.head() < tape.len());
        }
        assert_eq!(tape.head(), 100);
    }

    #[test]
    fn moves_round_trip() {
        let mut tape: Tape<u8> = Tape::new(cells(3), false);
        tape.move_right().unwrap();
        tape.move_right().unwrap();
        tape.move_left().unwrap();
        assert_eq!(tape.head(), 1);
    }

    #[test]
    fn cell_mut_writes_through() {
        let mut tape: Tape<u8> = Tape::new(cells(2), false);
        tape.cell_mut().increment();
        assert_eq!(*tape.cell(), 1);
        tape.move_right().unwrap();
        assert_eq!(*tape.cell(), 0);
    }
}
