use crate::position::Position;

/// Cursor core: an index into the borrowed buffer plus the position it maps to.
///
/// `data` indexes the buffer the cursor was created for; `position.byte` is the
/// absolute offset reported to diagnostics and may start past zero for
/// sub-ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub data: usize,
    pub position: Position,
}

impl Cursor {
    #[inline]
    pub const fn new() -> Self {
        Self::at(Position::START)
    }

    #[inline]
    pub const fn at(position: Position) -> Self {
        Self { data: 0, position }
    }

    // Basic queries
    #[inline]
    pub fn byte(&self) -> usize {
        self.position.byte
    }
    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }
    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }

    // Bumping
    /// Advances over `buf[data..data + count]`, counting every `eol` byte as a
    /// line break.
    ///
    /// Panics if the range runs past the end of `buf`.
    #[inline]
    pub fn bump(&mut self, buf: &[u8], count: usize, eol: u8) {
        let end = self.data + count;
        for &b in &buf[self.data..end] {
            if b == eol {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.data = end;
        self.position.byte += count;
    }

    // Caller guarantees no line terminator in the advanced range.
    #[inline]
    pub fn bump_in_this_line(&mut self, count: usize) {
        self.data += count;
        self.position.byte += count;
        self.position.column += count;
    }

    // Caller guarantees the advanced range ends exactly at a line boundary.
    #[inline]
    pub fn bump_to_next_line(&mut self, count: usize) {
        self.data += count;
        self.position.byte += count;
        self.position.line += 1;
        self.position.column = 1;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
