//! Probes for asserting ownership transfer in tests.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out [`Token`]s and counts how many of them have been dropped.
#[derive(Debug, Default)]
pub struct DropTally(Rc<Cell<u32>>);

impl DropTally {
    pub fn new() -> Self {
        DropTally(Rc::new(Cell::new(0)))
    }

    /// Creates a token that reports back to this tally when dropped.
    pub fn token(&self, value: i32) -> Token {
        Token {
            value,
            tally: Rc::clone(&self.0),
        }
    }

    /// Number of tokens dropped so far.
    pub fn drops(&self) -> u32 {
        self.0.get()
    }
}

/// Payload that counts its own drop.
///
/// Not `Clone`, so a payload can only be moved, never duplicated.
#[derive(Debug)]
pub struct Token {
    pub value: i32,
    tally: Rc<Cell<u32>>,
}

impl Drop for Token {
    fn drop(&mut self) {
        self.tally.set(self.tally.get() + 1);
    }
}
