//! Decode HID keyboard reports from capture payloads.
//!
//! A boot protocol keyboard report is 8 bytes: a modifier bitmask, a
//! reserved byte and six key code slots. A capture payload may carry several
//! reports back to back; every complete report in the payload is decoded
//! against its own modifier byte.

use crate::keymap::Keymap;
use bitflags::bitflags;
use num_integer::Integer;

/// Size of a boot protocol keyboard report in bytes.
pub const REPORT_SIZE: usize = 8;

bitflags! {
    /// Modifier bitmask, byte 0 of a keyboard report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const LEFT_CTRL = 0x01;
        const LEFT_SHIFT = 0x02;
        const LEFT_ALT = 0x04;
        const LEFT_GUI = 0x08;
        const RIGHT_CTRL = 0x10;
        const RIGHT_SHIFT = 0x20;
        const RIGHT_ALT = 0x40;
        const RIGHT_GUI = 0x80;
    }
}

impl Modifiers {
    /// True if either shift key is held.
    pub fn shifted(self) -> bool {
        self.intersects(Self::LEFT_SHIFT | Self::RIGHT_SHIFT)
    }
}

/// One parsed 8-byte keyboard report.
pub struct KeyboardReport {
    pub modifiers: Modifiers,
    keycodes: [u8; 6],
}

impl KeyboardReport {
    pub fn parse(data: &[u8; REPORT_SIZE]) -> Self {
        KeyboardReport {
            modifiers: Modifiers::from_bits_truncate(data[0]),
            keycodes: data[2..].try_into().unwrap(),
        }
    }

    /// Key codes of the slots which hold a key, in slot order. An all-zero
    /// report yields nothing; it means every key was released.
    pub fn keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.keycodes.iter().copied().filter(|&code| code != 0)
    }
}

/// Parse a payload string into bytes, two hex digits per byte.
pub fn parse_hex(payload: &str) -> Result<Vec<u8>, String> {
    let digits = payload.as_bytes();

    if digits.len().is_odd() {
        return Err("odd number of hex digits".to_string());
    }

    let mut res = Vec::with_capacity(digits.len() / 2);

    for pair in digits.chunks_exact(2) {
        let hi = hex_digit(pair[0])?;
        let lo = hex_digit(pair[1])?;

        res.push(hi << 4 | lo);
    }

    Ok(res)
}

fn hex_digit(digit: u8) -> Result<u8, String> {
    match (digit as char).to_digit(16) {
        Some(v) => Ok(v as u8),
        None => Err(format!("invalid hex digit ‘{}’", digit as char)),
    }
}

/// Decode every complete report in a payload against the given keymap,
/// concatenating the symbols in byte order. Trailing bytes which do not make
/// up a whole report are dropped. The modifier and reserved bytes of each
/// report are never looked up as key codes.
pub fn decode_payload(payload: &str, keymap: &Keymap) -> Result<String, String> {
    let data = parse_hex(payload)?;

    let mut decoded = String::new();

    for chunk in data.chunks_exact(REPORT_SIZE) {
        let report = KeyboardReport::parse(chunk.try_into().unwrap());
        let shift = report.modifiers.shifted();

        for code in report.keys() {
            if let Some(symbol) = keymap.symbol(code, shift) {
                decoded.push_str(symbol);
            }
        }
    }

    Ok(decoded)
}

#[test]
fn test_parse_hex() {
    assert_eq!(parse_hex(""), Ok(vec![]));
    assert_eq!(parse_hex("0000"), Ok(vec![0, 0]));
    assert_eq!(parse_hex("2F1a"), Ok(vec![0x2f, 0x1a]));
    assert_eq!(
        parse_hex("04050"),
        Err("odd number of hex digits".to_string())
    );
    assert_eq!(parse_hex("04xx"), Err("invalid hex digit ‘x’".to_string()));
}

#[test]
fn test_decode() {
    let keymap = Keymap::new();

    // all keys released
    assert_eq!(
        decode_payload("0000000000000000", &keymap),
        Ok(String::new())
    );

    // slots decode in order, codes missing from the table are skipped
    assert_eq!(
        decode_payload("0000040531000000", &keymap),
        Ok("ab".to_string())
    );
    assert_eq!(
        decode_payload("0000040506070809", &keymap),
        Ok("abcdef".to_string())
    );

    // shift picks the shifted bracket glyph, either shift bit counts
    assert_eq!(
        decode_payload("02002f0000000000", &keymap),
        Ok("{".to_string())
    );
    assert_eq!(
        decode_payload("20002f0000000000", &keymap),
        Ok("{".to_string())
    );
    assert_eq!(
        decode_payload("00002f0000000000", &keymap),
        Ok("[".to_string())
    );

    // each report in a payload evaluates its own modifier byte
    assert_eq!(
        decode_payload("02002f000000000000002f0000000000", &keymap),
        Ok("{[".to_string())
    );

    // a modifier with no key down produces nothing
    assert_eq!(
        decode_payload("0200000000000000", &keymap),
        Ok(String::new())
    );

    // trailing bytes short of a whole report are dropped
    assert_eq!(
        decode_payload("00000400000000000000", &keymap),
        Ok("a".to_string())
    );

    // malformed payloads are errors, not output
    assert_eq!(
        decode_payload("04050", &keymap),
        Err("odd number of hex digits".to_string())
    );
}

#[test]
fn test_modifiers() {
    assert!(Modifiers::from_bits_truncate(0x02).shifted());
    assert!(Modifiers::from_bits_truncate(0x20).shifted());
    assert!(!Modifiers::from_bits_truncate(0x01).shifted());
    assert!(!Modifiers::from_bits_truncate(0x00).shifted());
}
