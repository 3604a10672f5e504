//! End-of-line conventions.
//!
//! `CH` is the byte a position scan counts as a line break. Every multi-byte
//! terminator here ends in `CH`, so a terminator consumed with
//! `bump_to_next_line` lands on the same position a full scan computes.

use crate::input::ParseInput;

/// Outcome of trying to match a line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EolMatch {
    /// A terminator was matched and consumed.
    pub matched: bool,
    /// There was input left to examine.
    pub more: bool,
}

impl EolMatch {
    pub const MATCHED: EolMatch = EolMatch {
        matched: true,
        more: true,
    };
    pub const MISMATCH: EolMatch = EolMatch {
        matched: false,
        more: true,
    };
    pub const AT_END: EolMatch = EolMatch {
        matched: false,
        more: false,
    };
}

pub trait Eol {
    const CH: u8;

    fn match_eol<I: ParseInput + ?Sized>(input: &mut I) -> EolMatch;
}

/// `\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct Lf;

/// `\r`
#[derive(Debug, Clone, Copy, Default)]
pub struct Cr;

/// `\r\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct Crlf;

/// `\n` or `\r\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct LfCrlf;

#[inline]
fn single<I: ParseInput + ?Sized>(input: &mut I, ch: u8) -> EolMatch {
    input.require(1);
    if input.empty() {
        return EolMatch::AT_END;
    }
    if input.peek_byte(0) == ch {
        input.bump_to_next_line(1);
        EolMatch::MATCHED
    } else {
        EolMatch::MISMATCH
    }
}

#[inline]
fn crlf<I: ParseInput + ?Sized>(input: &mut I) -> bool {
    if input.size() > 1 && input.peek_byte(0) == b'\r' && input.peek_byte(1) == b'\n' {
        input.bump_to_next_line(2);
        true
    } else {
        false
    }
}

impl Eol for Lf {
    const CH: u8 = b'\n';

    fn match_eol<I: ParseInput + ?Sized>(input: &mut I) -> EolMatch {
        single(input, b'\n')
    }
}

impl Eol for Cr {
    const CH: u8 = b'\r';

    fn match_eol<I: ParseInput + ?Sized>(input: &mut I) -> EolMatch {
        single(input, b'\r')
    }
}

impl Eol for Crlf {
    const CH: u8 = b'\n';

    fn match_eol<I: ParseInput + ?Sized>(input: &mut I) -> EolMatch {
        input.require(2);
        if input.empty() {
            EolMatch::AT_END
        } else if crlf(input) {
            EolMatch::MATCHED
        } else {
            EolMatch::MISMATCH
        }
    }
}

impl Eol for LfCrlf {
    const CH: u8 = b'\n';

    fn match_eol<I: ParseInput + ?Sized>(input: &mut I) -> EolMatch {
        input.require(2);
        if input.empty() {
            return EolMatch::AT_END;
        }
        if input.peek_byte(0) == b'\n' {
            input.bump_to_next_line(1);
            EolMatch::MATCHED
        } else if crlf(input) {
            EolMatch::MATCHED
        } else {
            EolMatch::MISMATCH
        }
    }
}
