use super::load_keymap;
use hidkb::{capture, log::Log, report};
use itertools::Itertools;
use std::path::Path;

pub fn decode(matches: &clap::ArgMatches, log: &Log) {
    let path = Path::new(matches.value_of_os("EXPORT").unwrap());
    let transfer = matches.value_of("TRANSFER").unwrap();
    let keymap = load_keymap(matches);

    let payloads = match capture::extract_payloads(path, transfer) {
        Ok(payloads) => payloads,
        Err(e) => {
            log.error(&e.to_string());
            std::process::exit(2);
        }
    };

    log.info(&format!(
        "{}: {} ‘{}’ transfers",
        path.display(),
        payloads.len(),
        transfer
    ));

    let mut decoded = Vec::new();

    for payload in &payloads {
        match report::decode_payload(payload, &keymap) {
            Ok(text) => {
                if !text.is_empty() {
                    decoded.push(text);
                }
            }
            Err(e) => {
                log.warning(&format!("skipping payload ‘{}’: {}", payload, e));
            }
        }
    }

    print!("final data: {}", decoded.iter().join(""));
}
