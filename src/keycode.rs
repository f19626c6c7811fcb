//! Built-in key code to symbol table.
//!
//! Covers the usage page 0x07 codes a standard keyboard produces in boot
//! protocol reports. Codes missing from the table decode to nothing; that is
//! expected for modifier-only reports and keys without a useful glyph.

/// Usage code of the open bracket key, the only key whose glyph depends on
/// the shift state of the report it appears in.
pub const LEFT_BRACKET: u8 = 0x2f;

/// Glyph of the open bracket key while shift is held.
pub const SHIFTED_BRACKET: &str = "{";

pub(crate) static SYMBOLS: &[(u8, &str)] = &[
    (0x04, "a"),
    (0x05, "b"),
    (0x06, "c"),
    (0x07, "d"),
    (0x08, "e"),
    (0x09, "f"),
    (0x0a, "g"),
    (0x0b, "h"),
    (0x0c, "i"),
    (0x0d, "j"),
    (0x0e, "k"),
    (0x0f, "l"),
    (0x10, "m"),
    (0x11, "n"),
    (0x12, "o"),
    (0x13, "p"),
    (0x14, "q"),
    (0x15, "r"),
    (0x16, "s"),
    (0x17, "t"),
    (0x18, "u"),
    (0x19, "v"),
    (0x1a, "w"),
    (0x1b, "x"),
    (0x1c, "y"),
    (0x1d, "z"),
    (0x1e, "1"),
    (0x1f, "2"),
    (0x20, "3"),
    (0x21, "4"),
    (0x22, "5"),
    (0x23, "6"),
    (0x24, "7"),
    (0x25, "8"),
    (0x26, "9"),
    (0x27, "0"),
    (0x28, "\n"),
    (0x29, "[ESC]"),
    (0x2a, "[BACKSPACE]"),
    (0x2b, "\t"),
    (0x2c, " "),
    (0x2d, "-"),
    (0x2e, "="),
    (0x2f, "["),
    (0x30, "]"),
    (0x32, "#"),
    (0x33, ";"),
    (0x34, "'"),
    (0x36, ","),
    (0x37, "."),
    (0x38, "/"),
    (0x39, "[CAPSLOCK]"),
    (0x4c, "[NUMLOCK]"),
    (0x4f, "→"),
    (0x50, "←"),
    (0x51, "↓"),
    (0x52, "↑"),
    (0x7b, "{"),
    (0x7c, "|"),
    (0x7d, "}"),
    (0x7e, "~"),
    (0x7f, "[DEL]"),
];

/// Look up the symbol for a usage code in the built-in table.
pub fn symbol(code: u8) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
}

#[test]
fn test_symbol() {
    assert_eq!(symbol(0x04), Some("a"));
    assert_eq!(symbol(0x2f), Some("["));
    assert_eq!(symbol(0x7f), Some("[DEL]"));
    assert_eq!(symbol(0x00), None);
    assert_eq!(symbol(0x31), None);
}
