use archival_walker_lib::{args::Args, walker};
use clap::Parser;
use kaspa_archival_core::{error, log::init_logger, panic::configure_panic};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logger(args.log_dir.as_deref(), &args.log_level) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    configure_panic();

    match walker::run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
