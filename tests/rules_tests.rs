use peg_input::rules::{eof, eol, eolf};
use peg_input::{
    Cr, Crlf, Eol, EolMatch, Immediate, Input, Lazy, Lf, LfCrlf, MemoryInput, ParseInput,
    Position, PositionTracking, RewindMode,
};
use rstest::rstest;

fn at<E: Eol, T: PositionTracking>(buf: &[u8], offset: usize) -> Input<'_, E, T> {
    let mut input = Input::new(buf, "t");
    input.bump(offset);
    input
}

#[rstest]
#[case(b"abc", 3, true, 3)]
#[case(b"a\nb", 1, true, 2)]
#[case(b"", 0, true, 0)]
#[case(b"a\nb", 0, false, 0)]
#[case(b"a\r\nb", 1, true, 3)]
#[case(b"a\rb", 1, false, 1)]
#[case(b"\r", 0, false, 0)]
fn eolf_under_lf_crlf(
    #[case] buf: &[u8],
    #[case] offset: usize,
    #[case] matched: bool,
    #[case] after: usize,
) {
    let mut input = at::<LfCrlf, Immediate>(buf, offset);
    assert_eq!(eolf(&mut input), matched);
    assert_eq!(input.byte(), after);

    let mut lazy = at::<LfCrlf, Lazy>(buf, offset);
    assert_eq!(eolf(&mut lazy), matched);
    assert_eq!(lazy.byte(), after);
    assert_eq!(lazy.position(), input.position());
}

#[test]
fn consumed_terminator_starts_next_line() {
    let mut input = at::<LfCrlf, Immediate>(b"a\nb", 1);
    assert!(eolf(&mut input));
    assert_eq!(input.position(), Position::new(2, 2, 1));
}

fn run<E: Eol>(buf: &[u8]) -> (EolMatch, usize) {
    let mut input = Input::<E, Immediate>::new(buf, "t");
    let m = E::match_eol(&mut input);
    (m, input.byte())
}

#[rstest]
#[case(b"\n", "lf", EolMatch::MATCHED, 1)]
#[case(b"\r\n", "lf", EolMatch::MISMATCH, 0)]
#[case(b"\r", "cr", EolMatch::MATCHED, 1)]
#[case(b"\n", "cr", EolMatch::MISMATCH, 0)]
#[case(b"\r\n", "crlf", EolMatch::MATCHED, 2)]
#[case(b"\n", "crlf", EolMatch::MISMATCH, 0)]
#[case(b"\r", "crlf", EolMatch::MISMATCH, 0)]
#[case(b"\n", "lf_crlf", EolMatch::MATCHED, 1)]
#[case(b"\r\n", "lf_crlf", EolMatch::MATCHED, 2)]
#[case(b"", "lf_crlf", EolMatch::AT_END, 0)]
#[case(b"", "crlf", EolMatch::AT_END, 0)]
fn conventions(
    #[case] buf: &[u8],
    #[case] convention: &str,
    #[case] expected: EolMatch,
    #[case] consumed: usize,
) {
    let result = match convention {
        "lf" => run::<Lf>(buf),
        "cr" => run::<Cr>(buf),
        "crlf" => run::<Crlf>(buf),
        _ => run::<LfCrlf>(buf),
    };
    assert_eq!(result, (expected, consumed));
}

#[test]
fn eol_needs_a_terminator() {
    let mut input = at::<Crlf, Immediate>(b"ab", 2);
    assert!(!eol(&mut input));
    assert!(eolf(&mut input));
    assert!(eof(&mut input));
}

#[test]
fn eof_never_consumes() {
    let mut input = at::<LfCrlf, Lazy>(b"x\n", 1);
    assert!(!eof(&mut input));
    assert!(eol(&mut input));
    assert!(eof(&mut input));
    assert_eq!(input.byte(), 2);
}

#[test]
fn lookahead_through_required_marker() {
    let mut input = at::<LfCrlf, Immediate>(b"a\r\nb", 1);
    {
        let mut m = input.mark(RewindMode::Required);
        assert!(eolf(&mut *m));
        assert_eq!(m.byte(), 3);
    }
    assert_eq!(input.byte(), 1);
}

#[test]
fn lines_until_end() {
    let mut input = MemoryInput::new(b"k=v\nx=y", "t");
    let mut lines = 0;
    loop {
        while input.get_byte(0).is_some_and(|b| b != b'\n') {
            input.bump_in_this_line(1);
        }
        lines += 1;
        let was_end = input.empty();
        assert!(eolf(&mut input));
        if was_end {
            break;
        }
    }
    assert_eq!(lines, 2);
    assert_eq!(input.position(), Position::new(7, 2, 4));
}
