use std::net::IpAddr;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::sendgrid;

/// Fake third party services for local development and tests
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a fake SendGrid v3 API that accepts and logs mail
    #[command(name = "sendgrid")]
    SendGrid(SendGridArgs),
    /// Print shell completions to stdout
    Completion {
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
struct SendGridArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, default_value_t = 8003)]
    port: u16,
    /// Bearer token that requests must present
    #[arg(long, env = "SENDGRID_API_KEY", default_value = "test-api-key")]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::SendGrid(SendGridArgs {
            host,
            port,
            api_key,
        }) => sendgrid::start_server(host, port, api_key).await,
        Command::Completion { shell } => {
            let name = env!("CARGO_BIN_NAME");
            clap_complete::generate(shell, &mut Cli::command(), name, &mut std::io::stdout());
            Ok(())
        }
    }
}
