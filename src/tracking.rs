//! Position tracking strategies.
//!
//! Both strategies answer the same questions; they differ only in when the
//! line/column cost is paid. The state of either is `Copy`, which is what a
//! [`Marker`](crate::Marker) saves and restores.

use std::fmt;

use crate::cursor::Cursor;
use crate::position::Position;

pub trait PositionTracking: Copy + fmt::Debug {
    /// State for a buffer whose first byte is at `Position::START`.
    fn start() -> Self;

    /// Index of the next unread byte within the buffer.
    fn offset(&self) -> usize;

    /// Absolute byte offset.
    fn byte(&self) -> usize;

    fn bump(&mut self, buf: &[u8], count: usize, eol: u8);
    fn bump_in_this_line(&mut self, count: usize);
    fn bump_to_next_line(&mut self, count: usize);

    fn position(&self, buf: &[u8], eol: u8) -> Position;
}

/// Line and column are maintained on every bump; `position()` is O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Immediate {
    cursor: Cursor,
}

impl Immediate {
    #[inline]
    pub const fn at(position: Position) -> Self {
        Self {
            cursor: Cursor::at(position),
        }
    }
}

impl PositionTracking for Immediate {
    #[inline]
    fn start() -> Self {
        Self::at(Position::START)
    }
    #[inline]
    fn offset(&self) -> usize {
        self.cursor.data
    }
    #[inline]
    fn byte(&self) -> usize {
        self.cursor.byte()
    }
    #[inline]
    fn bump(&mut self, buf: &[u8], count: usize, eol: u8) {
        self.cursor.bump(buf, count, eol);
    }
    #[inline]
    fn bump_in_this_line(&mut self, count: usize) {
        self.cursor.bump_in_this_line(count);
    }
    #[inline]
    fn bump_to_next_line(&mut self, count: usize) {
        self.cursor.bump_to_next_line(count);
    }
    #[inline]
    fn position(&self, _buf: &[u8], _eol: u8) -> Position {
        self.cursor.position
    }
}

/// Only the read offset is kept; `position()` rescans from the buffer start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lazy {
    run: usize,
}

impl PositionTracking for Lazy {
    #[inline]
    fn start() -> Self {
        Self { run: 0 }
    }
    #[inline]
    fn offset(&self) -> usize {
        self.run
    }
    #[inline]
    fn byte(&self) -> usize {
        self.run
    }
    #[inline]
    fn bump(&mut self, buf: &[u8], count: usize, _eol: u8) {
        let end = self.run + count;
        assert!(end <= buf.len(), "bump past end: {} > {}", end, buf.len());
        self.run = end;
    }
    #[inline]
    fn bump_in_this_line(&mut self, count: usize) {
        self.run += count;
    }
    #[inline]
    fn bump_to_next_line(&mut self, count: usize) {
        self.run += count;
    }

    fn position(&self, buf: &[u8], eol: u8) -> Position {
        log::trace!("recomputing line and column for byte {}", self.run);
        let mut c = Cursor::new();
        c.bump(buf, self.run, eol);
        c.position
    }
}
