use std::fmt;

/// A detached `{byte, line, column}` snapshot.
///
/// `line` and `column` are 1-based; `column` counts bytes within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub byte: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        byte: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Renders as `source:line:column`.
    pub fn in_source<'s>(&self, source: &'s str) -> SourcePosition<'s> {
        SourcePosition {
            source,
            position: *self,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition<'s> {
    pub source: &'s str,
    pub position: Position,
}

impl fmt::Display for SourcePosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.position)
    }
}
