//! Input cursor and position tracking for a backtracking PEG matcher.
//!
//! An [`Input`] borrows a fully materialized byte buffer and advances over it
//! while tracking byte offset, line and column. Line/column bookkeeping is
//! either paid on every bump ([`Immediate`]) or recomputed on demand
//! ([`Lazy`]). A [`Marker`] checkpoints the cursor so a failed rule can be
//! rewound in constant time.

pub mod cursor;
pub mod eol;
pub mod error;
pub mod input;
pub mod marker;
pub mod position;
pub mod rules;
pub mod tracking;

pub use cursor::Cursor;
pub use eol::{Cr, Crlf, Eol, EolMatch, Lf, LfCrlf};
pub use error::InputError;
pub use input::{Input, LazyMemoryInput, MemoryInput, ParseInput};
pub use marker::{Marker, RewindMode};
pub use position::{Position, SourcePosition};
pub use tracking::{Immediate, Lazy, PositionTracking};
