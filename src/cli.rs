use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agentspace")]
#[command(about = "Manage ADK agents in Agentspace", long_about = None)]
#[command(version = env!("AGENTSPACE_VERSION"))]
#[command(after_help = "\
CONFIGURATION:
  Settings are read from the environment. A .env file in the current
  directory is loaded first; variables already set take precedence.

  PROJECT_ID            Google Cloud project (all commands)
  LOCATION              Reasoning engine region (list-engines)
  APP_ID                Agentspace app id (register, view)
  DISPLAY_NAME          Agent display name (register)
  DESCRIPTION           Agent description (register)
  AGENT_RESOURCE_PATH   Reasoning engine resource path (register)
  AGENT_NAME            Fully-qualified agent resource name (unregister)

Authentication uses 'gcloud auth print-access-token'.")]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Load variables from this file instead of searching for .env
    #[arg(long = "env-file", global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List available reasoning engines.
    ListEngines,

    /// List Agentspace apps.
    ListApps,

    /// Register an agent in Agentspace.
    Register,

    /// View registered agents.
    View,

    /// Unregister an agent.
    Unregister,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListEngines => "list-engines",
            Command::ListApps => "list-apps",
            Command::Register => "register",
            Command::View => "view",
            Command::Unregister => "unregister",
        }
    }
}
