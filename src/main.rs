#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;

use agentspace::api::{AgentspaceClient, HttpTransport};
use agentspace::auth::CommandTokenSource;
use agentspace::cli::Cli;
use agentspace::config::{self, Config};
use agentspace::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.env_file {
        Some(path) => config::load_env_file(path)?,
        None => {
            if let Some(path) = config::load_dotenv()? {
                tracing::debug!(path = %path.display(), "loaded .env");
            }
        }
    }

    let config = Config::from_env();
    let tokens = CommandTokenSource::gcloud();
    let client = AgentspaceClient::new(HttpTransport::new()?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &tokens, &client, &mut out)?;
    out.flush()?;

    Ok(())
}
