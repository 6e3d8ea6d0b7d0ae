use super::output;
use crate::api::{RegisterOutcome, RemoteClient};
use crate::config::Registration;
use crate::error::Result;
use std::io::Write;

pub const REGISTERED_WITHOUT_BODY: &str =
    "Agent registered successfully, but no JSON response was returned.";

pub fn execute(
    client: &dyn RemoteClient,
    token: &str,
    project_id: &str,
    registration: &Registration,
    out: &mut dyn Write,
) -> Result<()> {
    match client.register_agent(token, project_id, registration)? {
        RegisterOutcome::Registered(body) => output::print_value(out, &body)?,
        RegisterOutcome::RegisteredWithoutBody => writeln!(out, "{}", REGISTERED_WITHOUT_BODY)?,
        RegisterOutcome::Rejected { status, body } => {
            writeln!(out, "Error: {}", status)?;
            writeln!(out, "{}", body)?;
        }
    }
    Ok(())
}
