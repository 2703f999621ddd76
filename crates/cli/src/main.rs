use clap::Parser;
use log::{debug, info};
use pick_a_number_core::error::Result;
use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;

mod cli_args;
pub mod prompt;

fn execute() -> Result<()> {
    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();
    let mut errors = stderr();

    let number = prompt::run_session(&mut input, &mut output, &mut errors)?;
    info!("Session finished with {number}.");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let _args = cli_args::Args::parse();
    debug!("Arguments parsed, starting the prompt session.");

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
