//! volley - forward text from stdin to an Alertmanager-style webhook.

mod cli;

use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.print().is_err() {
                return ExitCode::FAILURE;
            }
            // --help and --version come through here as well
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match volley::forward(stdin().lock(), &settings).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                sent = !err.is_before_send(),
                timed_out = err.is_timeout(),
                "{err}"
            );
            ExitCode::FAILURE
        }
    }
}
