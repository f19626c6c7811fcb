use hidkb::keymap::Keymap;
use std::path::Path;

pub mod decode;

/// Build the symbol map for a subcommand, merging the keymap file given on
/// the command line over the built-in table.
pub fn load_keymap(matches: &clap::ArgMatches) -> Keymap {
    match matches.value_of_os("KEYMAP") {
        Some(path) => match Keymap::load(Path::new(path)) {
            Ok(keymap) => keymap,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        None => Keymap::new(),
    }
}
