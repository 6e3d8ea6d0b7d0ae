use super::output;
use crate::api::{RemoteClient, UnregisterOutcome};
use crate::error::Result;
use std::io::Write;

pub const UNREGISTERED: &str = "Agent unregistered successfully.";

pub fn execute(
    client: &dyn RemoteClient,
    token: &str,
    project_id: &str,
    agent_name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    match client.unregister_agent(token, project_id, agent_name)? {
        UnregisterOutcome::Unregistered => writeln!(out, "{}", UNREGISTERED)?,
        UnregisterOutcome::Rejected(body) => output::print_value(out, &body)?,
    }
    Ok(())
}
