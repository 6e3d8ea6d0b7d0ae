use crate::error::{AgentspaceError, Result};
use std::process::Command;

/// Source of the bearer token sent with every API call
pub trait TokenSource {
    fn token(&self) -> Result<String>;
}

/// Runs an external command and uses its trimmed stdout as the token.
#[derive(Debug, Clone)]
pub struct CommandTokenSource {
    program: String,
    args: Vec<String>,
}

impl CommandTokenSource {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `gcloud auth print-access-token`
    pub fn gcloud() -> Self {
        Self::new("gcloud", ["auth", "print-access-token"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TokenSource for CommandTokenSource {
    fn token(&self) -> Result<String> {
        if which::which(&self.program).is_err() {
            return Err(AgentspaceError::TokenCommandNotFound(self.program.clone()));
        }

        tracing::debug!(program = %self.program, "fetching access token");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                AgentspaceError::TokenCommandFailed(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let status = output
                .status
                .code()
                .map(|code| format!("exit status {}", code))
                .unwrap_or_else(|| "terminated by signal".to_string());

            return Err(AgentspaceError::TokenCommandFailed(if stderr.is_empty() {
                format!("{} failed ({})", self.program, status)
            } else {
                format!("{} failed ({}): {}", self.program, status, stderr)
            }));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(AgentspaceError::EmptyToken);
        }

        Ok(token)
    }
}

/// A fixed token, for tests and pre-fetched credentials
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
