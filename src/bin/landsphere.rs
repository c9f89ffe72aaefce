use clap::Parser;
use colored::Colorize;
use landsphere_core::cli::dispatch::{self, RunOptions};
use landsphere_core::cli::Cli;
use landsphere_core::exit::LandsphereExit;

fn main() -> LandsphereExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = RunOptions::from(&cli);

    let result = if let Some(cmd) = cli.command {
        dispatch::execute(cmd, &options)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(LandsphereExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            LandsphereExit::for_error(&e)
        }
    }
}

/// Logs go to stderr so stdout carries only query output.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("landsphere_core=debug,landsphere=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("landsphere_core=warn,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
