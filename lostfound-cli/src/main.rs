//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use clap::error::ErrorKind;
use lostfound_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match lostfound_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err))
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit();
        }
        Err(err) => {
            eprintln!("lostfound: {err}");
            std::process::exit(1);
        }
    }
}
