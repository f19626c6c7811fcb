//! Loadable key symbol maps.
//!
//! Decoding uses the built-in table by default. A toml keymap file can
//! replace or add entries, which helps when the typist leaned on a key the
//! built-in table renders awkwardly:
//!
//! ```toml
//! [keys]
//! 0x52 = "[CAPSLOCK]"
//! 0x2d = "_"
//! ```
//!
//! Key codes are written as ‘0x..’ hex or decimal and must fit in 8 bits.

use crate::keycode;
use itertools::Itertools;
use serde_derive::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct KeymapFile {
    keys: HashMap<String, String>,
}

/// Key code to symbol map used for decoding. Lookups never mutate the map;
/// the shift state travels with each call instead.
#[derive(Debug)]
pub struct Keymap {
    map: HashMap<u8, String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    /// The built-in symbol table.
    pub fn new() -> Self {
        let map = keycode::SYMBOLS
            .iter()
            .map(|(code, symbol)| (*code, symbol.to_string()))
            .collect();

        Keymap { map }
    }

    /// The built-in table with the entries of a keymap file merged over it.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;

        let file: KeymapFile =
            toml::from_str(&contents).map_err(|e| format!("{}: {}", path.display(), e))?;

        let mut keymap = Keymap::new();

        for (code, symbol) in file.keys {
            let code = string_to_keycode(&code)
                .map_err(|_| format!("{}: invalid key code ‘{}’", path.display(), code))?;

            keymap.map.insert(code, symbol);
        }

        Ok(keymap)
    }

    /// Resolve a usage code to its symbol. The open bracket key follows the
    /// shift state of the report being decoded.
    pub fn symbol(&self, code: u8, shift: bool) -> Option<&str> {
        if shift && code == keycode::LEFT_BRACKET {
            return Some(keycode::SHIFTED_BRACKET);
        }

        self.map.get(&code).map(String::as_str)
    }

    /// All entries in key code order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.map
            .iter()
            .map(|(code, symbol)| (*code, symbol.as_str()))
            .sorted_by_key(|(code, _)| *code)
    }
}

fn string_to_keycode(s: &str) -> Result<u8, std::num::ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else {
        str::parse(s)
    }
}

#[test]
fn builtin_test() {
    let keymap = Keymap::new();

    assert_eq!(keymap.symbol(0x04, false), Some("a"));
    assert_eq!(keymap.symbol(0x2f, false), Some("["));
    assert_eq!(keymap.symbol(0x2f, true), Some("{"));
    assert_eq!(keymap.symbol(0x00, false), None);

    // shift only changes the bracket key
    assert_eq!(keymap.symbol(0x04, true), Some("a"));
}

#[test]
fn load_test() {
    let keymap = Keymap::load(Path::new("testdata/keymaps/readable.toml")).unwrap();

    assert_eq!(keymap.symbol(0x2d, false), Some("_"));
    assert_eq!(keymap.symbol(0x52, false), Some("[CAPSLOCK]"));

    // untouched entries fall through to the built-in table
    assert_eq!(keymap.symbol(0x04, false), Some("a"));

    let e = Keymap::load(Path::new("testdata/keymaps/bad.toml")).unwrap_err();

    assert_eq!(e, "testdata/keymaps/bad.toml: invalid key code ‘0x1ff’");
}
