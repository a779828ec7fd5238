use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use intake_cli::cli::{Cli, Command, LogFormatArg};
use intake_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormatArg::Pretty => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }

    match &cli.command {
        Command::Run(args) => commands::run(args),
        Command::Summary(args) => commands::summary(args),
        Command::Schema(args) => commands::schema(args),
        Command::Questions => commands::questions(),
        Command::Config(command) => commands::config(command),
    }
}
