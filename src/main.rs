use std::process::ExitCode;
use tap_harness::{cli, infra::logging};

fn main() -> ExitCode {
    logging::init_logging();

    // Process the command
    match cli::run() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
