use clap::{Arg, Command};
use hidkb::{capture, log::Log};

mod commands;

fn main() {
    let matches = Command::new("hidkb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("USB HID Keyboard Capture Decoding")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .global(true)
                .multiple_occurrences(true)
                .help("Increase message verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .help("Silence all warnings"),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode the typed text from a capture export")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("EXPORT")
                        .help("Capture export in CSV format")
                        .allow_invalid_utf8(true)
                        .required(true),
                )
                .arg(
                    Arg::new("TRANSFER")
                        .help("Transfer label of the rows to decode")
                        .long("transfer")
                        .short('t')
                        .takes_value(true)
                        .default_value(capture::INTERRUPT_IN),
                )
                .arg(
                    Arg::new("KEYMAP")
                        .help("Load keymap with key symbol overrides")
                        .long("keymap")
                        .short('k')
                        .takes_value(true)
                        .allow_invalid_utf8(true),
                ),
        )
        .subcommand(
            Command::new("keycodes")
                .about("List the key code to symbol table")
                .arg(
                    Arg::new("KEYMAP")
                        .help("Load keymap with key symbol overrides")
                        .long("keymap")
                        .short('k')
                        .takes_value(true)
                        .allow_invalid_utf8(true),
                ),
        )
        .get_matches();

    let mut log = Log::new();

    log.verbose(matches.occurrences_of("verbosity"));

    if matches.is_present("quiet") {
        log.quiet();
    }

    match matches.subcommand() {
        Some(("decode", matches)) => commands::decode::decode(matches, &log),
        Some(("keycodes", matches)) => print_keycodes(matches),
        _ => unreachable!(),
    }
}

fn print_keycodes(matches: &clap::ArgMatches) {
    let keymap = commands::load_keymap(matches);

    for (code, symbol) in keymap.entries() {
        println!("0x{:02x} => {:?}", code, symbol);
    }
}
