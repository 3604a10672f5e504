//! Line and input boundary rules.
//!
//! Each rule is a stateless predicate over a [`ParseInput`]: it returns whether
//! it matched and leaves the cursor after whatever it consumed.

use crate::eol::Eol;
use crate::input::ParseInput;

/// A line terminator of the input's convention. Consumes it on success.
#[inline]
pub fn eol<I: ParseInput + ?Sized>(input: &mut I) -> bool {
    I::Eol::match_eol(input).matched
}

/// A line terminator, or the end of input.
///
/// At the end of input this succeeds without consuming anything, so a grammar
/// can accept a last line with or without its terminator.
#[inline]
pub fn eolf<I: ParseInput + ?Sized>(input: &mut I) -> bool {
    let m = I::Eol::match_eol(input);
    m.matched || !m.more
}

/// The end of input. Never consumes.
#[inline]
pub fn eof<I: ParseInput + ?Sized>(input: &mut I) -> bool {
    input.require(1);
    input.empty()
}
