//! Pull keyboard report payloads out of a packet capture export.
//!
//! The export is the comma separated packet dissection produced by the
//! capture tool: one row per captured transfer, every field wrapped in
//! double quotes, embedded quotes doubled. Column 6 holds the transfer
//! payload as a run of hex digit pairs, column 7 the transfer type and
//! direction label. What the payload means is none of this module's
//! business; it only selects rows and hands the hex strings on.

use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;

/// Transfer label of inbound interrupt transfers, the rows which carry
/// keyboard reports.
pub const INTERRUPT_IN: &str = "URB_INTERRUPT in";

/// An export row must have at least this many fields.
pub const MIN_FIELDS: usize = 8;

const PAYLOAD_FIELD: usize = 6;
const TRANSFER_FIELD: usize = 7;

/// Read an export file and return the payload of every row whose transfer
/// label matches exactly, in file order. A row with too few fields aborts
/// the whole extraction: one corrupt row means the export cannot be
/// trusted.
pub fn extract_payloads(path: &Path, transfer: &str) -> Result<Vec<String>, Error> {
    let file =
        File::open(path).map_err(|e| Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let mut res = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;

        if line.is_empty() {
            continue;
        }

        let fields = split_fields(&line);

        if fields.len() < MIN_FIELDS {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "{}:{}: expected at least {} fields, found {}",
                    path.display(),
                    line_no + 1,
                    MIN_FIELDS,
                    fields.len()
                ),
            ));
        }

        if fields[TRANSFER_FIELD] == transfer {
            res.push(fields[PAYLOAD_FIELD].clone());
        }
    }

    Ok(res)
}

/// Split one export line into fields. Inside a quoted field ‘""’ is a
/// literal quote and commas do not separate.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' => quoted = true,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }

    fields.push(field);

    fields
}
