use std::io::{stdout, Write};

use serde::Serialize;

pub fn print_json(data: &impl Serialize) {
    let mut stdout = stdout();
    let written = serde_json::to_string_pretty(data)
        .map_err(std::io::Error::from)
        .and_then(|json| writeln!(&mut stdout, "{json}"));

    if let Err(err) = written {
        log::error!("failed to write output: {err}");
    }
}
