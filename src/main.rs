mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_tracing();
    cli::run()
}
