use asterism::cli::{self, Cli};
use asterism::observability::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli: Cli = cli::parse_args();
    init_tracing(cli.verbosity);

    match cli::run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(cli::exit_code(&err))
        }
    }
}
