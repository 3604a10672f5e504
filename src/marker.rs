use std::ops::{Deref, DerefMut};

use crate::input::ParseInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewindMode {
    /// Releasing the marker keeps whatever the rule consumed; rewind explicitly
    /// on failure.
    Commit,
    /// Releasing the marker always restores the saved state, even on success.
    /// For lookahead that must never consume.
    Required,
}

/// A checkpoint over an input's cursor.
///
/// The marker holds the input's exclusive borrow and dereferences to it, so
/// the rule under attempt reads and advances through the marker. A nested
/// attempt marks the marker itself, which forces inner markers to be released
/// before the outer one. Rewinding copies the saved state back; it costs the
/// same no matter how far the input advanced.
///
/// ```
/// use peg_input::{MemoryInput, ParseInput, RewindMode};
///
/// let mut input = MemoryInput::new(b"abc", "doc");
/// let mut m = input.mark(RewindMode::Commit);
/// m.bump_in_this_line(2);
/// m.rewind();
/// assert_eq!(input.byte(), 0);
/// ```
#[derive(Debug)]
pub struct Marker<'m, I: ParseInput> {
    input: &'m mut I,
    saved: I::State,
    mode: RewindMode,
}

impl<'m, I: ParseInput> Marker<'m, I> {
    #[inline]
    pub fn new(input: &'m mut I, mode: RewindMode) -> Self {
        let saved = input.state();
        Self { input, saved, mode }
    }

    #[inline]
    pub fn saved(&self) -> I::State {
        self.saved
    }

    #[inline]
    pub fn mode(&self) -> RewindMode {
        self.mode
    }

    /// Restores the saved state and releases the marker.
    #[inline]
    pub fn rewind(mut self) {
        self.restore();
        self.mode = RewindMode::Commit;
    }

    /// Releases the marker. A `Required` marker still rewinds.
    #[inline]
    pub fn commit(self) {}

    /// Commits when `matched`, rewinds otherwise. Returns `matched`.
    #[inline]
    pub fn finish(self, matched: bool) -> bool {
        if matched {
            self.commit();
        } else {
            self.rewind();
        }
        matched
    }

    fn restore(&mut self) {
        log::trace!(
            "{}: rewinding from byte {}",
            self.input.source(),
            self.input.byte()
        );
        self.input.restore(self.saved);
    }
}

impl<I: ParseInput> Drop for Marker<'_, I> {
    fn drop(&mut self) {
        if self.mode == RewindMode::Required {
            self.restore();
        }
    }
}

impl<I: ParseInput> Deref for Marker<'_, I> {
    type Target = I;

    #[inline]
    fn deref(&self) -> &I {
        self.input
    }
}

impl<I: ParseInput> DerefMut for Marker<'_, I> {
    #[inline]
    fn deref_mut(&mut self) -> &mut I {
        self.input
    }
}
