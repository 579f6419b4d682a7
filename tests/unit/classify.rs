//! Character classification: kind and role lookups over the six brackets.

use nestcheck::{Bracket, BracketKind, BracketRole};

#[test]
fn test_kind_from_char() {
    let cases = [
        ('{', BracketKind::Curly),
        ('}', BracketKind::Curly),
        ('[', BracketKind::Square),
        (']', BracketKind::Square),
        ('(', BracketKind::Round),
        (')', BracketKind::Round),
    ];
    for (c, expected) in cases {
        assert_eq!(BracketKind::from_char(c), Some(expected), "kind of {:?}", c);
    }
}

#[test]
fn test_role_from_char() {
    let cases = [
        ('{', BracketRole::Open),
        ('}', BracketRole::Closed),
        ('[', BracketRole::Open),
        (']', BracketRole::Closed),
        ('(', BracketRole::Open),
        (')', BracketRole::Closed),
    ];
    for (c, expected) in cases {
        assert_eq!(BracketRole::from_char(c), Some(expected), "role of {:?}", c);
    }
}

#[test]
fn test_everything_else_is_unknown() {
    for byte in 0u8..=127 {
        let c = char::from(byte);
        if "()[]{}".contains(c) {
            continue;
        }
        assert_eq!(Bracket::classify(c), None, "{:?} should be unknown", c);
        assert_eq!(BracketKind::from_char(c), None);
        assert_eq!(BracketRole::from_char(c), None);
    }
    for c in ['«', '»', '⟨', '⟩', '（', '）', '【', '】'] {
        assert_eq!(Bracket::classify(c), None, "{:?} should be unknown", c);
    }
}

#[test]
fn test_open_and_close_chars_round_trip() {
    for kind in BracketKind::ALL {
        assert_eq!(BracketKind::from_char(kind.open_char()), Some(kind));
        assert_eq!(BracketKind::from_char(kind.close_char()), Some(kind));
        assert_eq!(BracketRole::from_char(kind.open_char()), Some(BracketRole::Open));
        assert_eq!(BracketRole::from_char(kind.close_char()), Some(BracketRole::Closed));
    }
}

#[test]
fn test_role_flip() {
    assert_eq!(BracketRole::Open.flip(), BracketRole::Closed);
    assert_eq!(BracketRole::Closed.flip(), BracketRole::Open);
}
