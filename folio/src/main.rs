use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands::{contact::ContactCommand, email::EmailCommand, serve::serve};
use folio_utils::folio_version;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug, Parser)]
#[command(version = folio_version(), about = "Portfolio contact form backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the contact form endpoint
    #[command(aliases(["run", "start", "s"]))]
    Serve,
    /// Check that the configured email provider delivers mail
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Submit the contact form from the command line
    #[command(aliases(["c"]))]
    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },
    /// Load the configuration and report errors
    CheckConfig {
        /// Also print the loaded configuration (secrets are redacted)
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print shell completions to stdout
    Completion {
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = match Cli::parse().command {
        Command::Completion { shell } => {
            let mut cli = Cli::command();
            let name = env!("CARGO_BIN_NAME");
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
            return Ok(());
        }
        command => command,
    };

    init_tracing();

    match command {
        Command::Contact { command } => command.invoke().await,
        command => {
            let config = folio_config::load().context("Failed to load config")?;
            match command {
                Command::Serve => serve(config).await,
                Command::Email { command } => command.invoke(config).await,
                Command::CheckConfig { verbose } => {
                    if verbose {
                        println!("{config:#?}");
                    }
                    Ok(())
                }
                Command::Contact { .. } | Command::Completion { .. } => unreachable!(),
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
