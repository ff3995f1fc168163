//! `fortnox` - one Fortnox API call from the command line.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortnox_cli::{run, CliError, Command};
use fortnox_client::Configuration;

#[tokio::main]
async fn main() -> ExitCode {
    let command = match Command::try_from_args(std::env::args_os()) {
        Ok(command) => command,
        // --help and --version are printed by clap itself
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return fail(&CliError::Usage(err)),
    };

    let config = Configuration::from_env();
    let verbose = config.as_ref().is_ok_and(|config| config.verbose);

    let default_filter = if verbose {
        "info,fortnox_client=debug,fortnox_cli=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match config {
        Ok(config) => config,
        Err(err) => return fail(&err.into()),
    };

    tracing::debug!(?config, verb = ?command.verb, path = %command.path, "running command");

    let mut stdout = std::io::stdout().lock();
    match run(config, command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &CliError) -> ExitCode {
    match err {
        CliError::Usage(usage) => {
            // Rendered with the usage line; tracing is not set up yet
            let _ = usage.print();
        }
        _ => tracing::error!(error = %err, "command failed"),
    }
    ExitCode::from(err.exit_code())
}
