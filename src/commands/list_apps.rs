use super::output;
use crate::api::RemoteClient;
use crate::error::Result;
use std::io::Write;

pub fn execute(
    client: &dyn RemoteClient,
    token: &str,
    project_id: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let listing = client.list_apps(token, project_id)?;
    output::print_listing(out, &listing)
}
