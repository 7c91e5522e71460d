//! ics2invoice main entrypoint.

use ics2invoice::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
