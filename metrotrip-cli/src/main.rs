//! Entry point for the `metrotrip` binary.
#![forbid(unsafe_code)]

use metrotrip_cli::{CliError, init_logging, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports start-up and command failures on stderr"
)]
fn main() {
    if let Err(err) = init_logging() {
        eprintln!("metrotrip: logging unavailable: {err}");
    }
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("metrotrip: {err}");
            std::process::exit(1);
        }
    }
}
