pub mod list_apps;
pub mod list_engines;
pub mod output;
pub mod register;
pub mod unregister;
pub mod view;

use crate::api::RemoteClient;
use crate::auth::TokenSource;
use crate::cli::Command;
use crate::config::{Config, Operation};
use crate::error::Result;
use std::io::Write;

/// Run one subcommand to completion.
///
/// Configuration is validated before the token is fetched, so a missing
/// variable never reaches the authentication command or the network.
pub fn run(
    command: Command,
    config: &Config,
    tokens: &dyn TokenSource,
    client: &dyn RemoteClient,
    out: &mut dyn Write,
) -> Result<()> {
    let (project_id, operation) = config.resolve(command)?;
    let token = tokens.token()?;

    tracing::debug!(command = command.name(), project = %project_id, "running command");

    match &operation {
        Operation::ListEngines { location } => {
            list_engines::execute(client, &token, &project_id, location, out)
        }
        Operation::ListApps => list_apps::execute(client, &token, &project_id, out),
        Operation::Register(registration) => {
            register::execute(client, &token, &project_id, registration, out)
        }
        Operation::View { app_id } => view::execute(client, &token, &project_id, app_id, out),
        Operation::Unregister { agent_name } => {
            unregister::execute(client, &token, &project_id, agent_name, out)
        }
    }
}
