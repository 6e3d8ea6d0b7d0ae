use super::output;
use crate::api::RemoteClient;
use crate::error::Result;
use std::io::Write;

/// Print the agent collection of an app exactly as the service returns it
pub fn execute(
    client: &dyn RemoteClient,
    token: &str,
    project_id: &str,
    app_id: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let body = client.view_agents(token, project_id, app_id)?;
    output::print_value(out, &body)
}
