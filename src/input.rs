use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;

use crate::eol::{Eol, LfCrlf};
use crate::error::InputError;
use crate::marker::{Marker, RewindMode};
use crate::position::Position;
use crate::tracking::{Immediate, Lazy, PositionTracking};

/// The contract every rule reads from and advances.
///
/// Offsets returned by `begin()` and `end()` index the buffer the input was
/// built over; `byte()` is the absolute offset used for diagnostics.
///
/// `peek_byte` and `peek_char` do not check that the requested bytes exist.
/// Rules establish that with `size()` first; a violation panics on the slice
/// index instead of reading out of bounds. `bump` past the end panics with
/// either strategy. The specialized bumps only check in debug builds. Use
/// `get_byte` and `try_bump` where nothing has been checked yet.
pub trait ParseInput {
    type Eol: Eol;
    type State: Copy + fmt::Debug;

    fn begin(&self) -> usize;
    fn end(&self) -> usize;
    fn byte(&self) -> usize;
    fn position(&self) -> Position;
    fn source(&self) -> &str;

    /// The unread bytes.
    fn current(&self) -> &[u8];

    fn bump(&mut self, count: usize);
    /// `count` bytes contain no line terminator.
    fn bump_in_this_line(&mut self, count: usize);
    /// `count` bytes end exactly at a line boundary.
    fn bump_to_next_line(&mut self, count: usize);

    fn state(&self) -> Self::State;
    fn restore(&mut self, state: Self::State);

    fn peek_byte(&self, offset: usize) -> u8;

    #[inline]
    fn peek_char(&self, offset: usize) -> char {
        char::from(self.peek_byte(offset))
    }

    #[inline]
    fn empty(&self) -> bool {
        self.begin() == self.end()
    }

    #[inline]
    fn size(&self) -> usize {
        self.end() - self.begin()
    }

    // No-ops for fully materialized input.
    #[inline]
    fn discard(&mut self) {}
    #[inline]
    fn require(&mut self, _amount: usize) {}

    #[inline]
    fn get_byte(&self, offset: usize) -> Option<u8> {
        self.current().get(offset).copied()
    }

    fn try_bump(&mut self, count: usize) -> Result<(), InputError> {
        let available = self.size();
        if count > available {
            log::warn!(
                "{}: refusing to advance {} bytes with {} remaining",
                self.source(),
                count,
                available
            );
            return Err(InputError::PastEnd {
                label: self.source().to_owned(),
                position: self.position(),
                requested: count,
                available,
            });
        }
        self.bump(count);
        Ok(())
    }

    #[inline]
    fn mark(&mut self, mode: RewindMode) -> Marker<'_, Self>
    where
        Self: Sized,
    {
        Marker::new(self, mode)
    }
}

/// An input over a borrowed, fully resident byte buffer.
///
/// Neither the bytes nor the source label are owned; both must outlive the
/// input.
pub struct Input<'a, E: Eol = LfCrlf, T: PositionTracking = Immediate> {
    buf: &'a [u8],
    source: &'a str,
    state: T,
    _eol: PhantomData<E>,
}

pub type MemoryInput<'a> = Input<'a, LfCrlf, Immediate>;
pub type LazyMemoryInput<'a> = Input<'a, LfCrlf, Lazy>;

impl<'a, E: Eol, T: PositionTracking> Input<'a, E, T> {
    pub fn new(bytes: &'a [u8], source: &'a str) -> Self {
        Self::with_state(bytes, source, T::start())
    }

    #[inline]
    pub fn from_text(text: &'a str, source: &'a str) -> Self {
        Self::new(text.as_bytes(), source)
    }

    /// Uses the bytes up to the first NUL.
    pub fn from_nul_terminated(bytes: &'a [u8], source: &'a str) -> Result<Self, InputError> {
        match bytes.iter().position(|&b| b == 0) {
            Some(end) => Ok(Self::new(&bytes[..end], source)),
            None => Err(InputError::MissingSentinel {
                label: source.to_owned(),
            }),
        }
    }

    fn with_state(bytes: &'a [u8], source: &'a str, state: T) -> Self {
        log::debug!("input `{}` over {} bytes", source, bytes.len());
        Self {
            buf: bytes,
            source,
            state,
            _eol: PhantomData,
        }
    }

    /// Reads without any bounds check.
    ///
    /// # Safety
    ///
    /// `offset` must be less than `size()`.
    #[inline]
    pub unsafe fn peek_byte_unchecked(&self, offset: usize) -> u8 {
        debug_assert!(offset < self.size());
        // SAFETY: offset < size() keeps the index inside `buf`.
        unsafe { *self.buf.get_unchecked(self.state.offset() + offset) }
    }
}

impl<'a, E: Eol> Input<'a, E, Immediate> {
    /// An input over a sub-range whose first byte is already at `start`.
    pub fn with_start(bytes: &'a [u8], source: &'a str, start: Position) -> Self {
        Self::with_state(bytes, source, Immediate::at(start))
    }
}

impl<E: Eol, T: PositionTracking> ParseInput for Input<'_, E, T> {
    type Eol = E;
    type State = T;

    #[inline]
    fn begin(&self) -> usize {
        self.state.offset()
    }
    #[inline]
    fn end(&self) -> usize {
        self.buf.len()
    }
    #[inline]
    fn byte(&self) -> usize {
        self.state.byte()
    }
    #[inline]
    fn position(&self) -> Position {
        self.state.position(self.buf, E::CH)
    }
    #[inline]
    fn source(&self) -> &str {
        self.source
    }
    #[inline]
    fn current(&self) -> &[u8] {
        &self.buf[self.state.offset()..]
    }

    #[inline]
    fn bump(&mut self, count: usize) {
        debug_assert!(count <= self.size());
        self.state.bump(self.buf, count, E::CH);
    }
    #[inline]
    fn bump_in_this_line(&mut self, count: usize) {
        debug_assert!(count <= self.size());
        self.state.bump_in_this_line(count);
    }
    #[inline]
    fn bump_to_next_line(&mut self, count: usize) {
        debug_assert!(count <= self.size());
        self.state.bump_to_next_line(count);
    }

    #[inline]
    fn state(&self) -> T {
        self.state
    }
    #[inline]
    fn restore(&mut self, state: T) {
        self.state = state;
    }

    #[inline]
    fn peek_byte(&self, offset: usize) -> u8 {
        self.buf[self.state.offset() + offset]
    }
}

impl<E: Eol, T: PositionTracking> fmt::Debug for Input<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("source", &self.source)
            .field("len", &self.buf.len())
            .field("state", &self.state)
            .finish()
    }
}

impl<'a, E: Eol, T: PositionTracking> From<&'a [u8]> for Input<'a, E, T> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes, "&[u8]")
    }
}

impl<'a, E: Eol, T: PositionTracking> From<&'a str> for Input<'a, E, T> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text, "&str")
    }
}

impl<'a, E: Eol, T: PositionTracking> From<&'a String> for Input<'a, E, T> {
    fn from(text: &'a String) -> Self {
        Self::from_text(text, "String")
    }
}

impl<'a, E: Eol, T: PositionTracking> From<&'a CStr> for Input<'a, E, T> {
    fn from(text: &'a CStr) -> Self {
        Self::new(text.to_bytes(), "&CStr")
    }
}
