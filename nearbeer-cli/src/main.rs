//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::io::Write;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
    if let Err(err) = nearbeer_cli::run() {
        eprintln!("nearbeer: {err}");
        std::process::exit(1);
    }
}
