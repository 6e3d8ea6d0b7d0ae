use super::output;
use crate::api::RemoteClient;
use crate::error::Result;
use std::io::Write;

pub fn execute(
    client: &dyn RemoteClient,
    token: &str,
    project_id: &str,
    location: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let listing = client.list_engines(token, project_id, location)?;
    output::print_listing(out, &listing)
}
