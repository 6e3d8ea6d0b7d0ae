use crate::cli::Command;
use crate::error::{AgentspaceError, Result};
use std::path::Path;

pub const PROJECT_ID: &str = "PROJECT_ID";
pub const LOCATION: &str = "LOCATION";
pub const APP_ID: &str = "APP_ID";
pub const DISPLAY_NAME: &str = "DISPLAY_NAME";
pub const DESCRIPTION: &str = "DESCRIPTION";
pub const AGENT_RESOURCE_PATH: &str = "AGENT_RESOURCE_PATH";
pub const AGENT_NAME: &str = "AGENT_NAME";

/// Settings read once from the environment at startup.
///
/// Empty values are treated the same as unset ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub project_id: Option<String>,
    pub location: Option<String>,
    pub app_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub agent_resource_path: Option<String>,
    pub agent_name: Option<String>,
}

/// Everything needed to register one agent under an app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub app_id: String,
    pub display_name: String,
    pub description: String,
    pub agent_resource_path: String,
}

/// A subcommand paired with the validated settings it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListEngines { location: String },
    ListApps,
    Register(Registration),
    View { app_id: String },
    Unregister { agent_name: String },
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            project_id: get(PROJECT_ID),
            location: get(LOCATION),
            app_id: get(APP_ID),
            display_name: get(DISPLAY_NAME),
            description: get(DESCRIPTION),
            agent_resource_path: get(AGENT_RESOURCE_PATH),
            agent_name: get(AGENT_NAME),
        }
    }

    /// Validate the settings a command requires and return its project id
    /// along with the typed operation.
    pub fn resolve(&self, command: Command) -> Result<(String, Operation)> {
        let project_id = require(&self.project_id, PROJECT_ID)?;

        let operation = match command {
            Command::ListEngines => Operation::ListEngines {
                location: require(&self.location, LOCATION)?,
            },
            Command::ListApps => Operation::ListApps,
            Command::Register => Operation::Register(self.registration()?),
            Command::View => Operation::View {
                app_id: require(&self.app_id, APP_ID)?,
            },
            Command::Unregister => Operation::Unregister {
                agent_name: require(&self.agent_name, AGENT_NAME)?,
            },
        };

        Ok((project_id, operation))
    }

    fn registration(&self) -> Result<Registration> {
        match (
            &self.app_id,
            &self.display_name,
            &self.description,
            &self.agent_resource_path,
        ) {
            (Some(app_id), Some(display_name), Some(description), Some(agent_resource_path)) => {
                Ok(Registration {
                    app_id: app_id.clone(),
                    display_name: display_name.clone(),
                    description: description.clone(),
                    agent_resource_path: agent_resource_path.clone(),
                })
            }
            (app_id, display_name, description, agent_resource_path) => {
                let missing = [
                    (APP_ID, app_id.is_none()),
                    (DISPLAY_NAME, display_name.is_none()),
                    (DESCRIPTION, description.is_none()),
                    (AGENT_RESOURCE_PATH, agent_resource_path.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| name)
                .collect();
                Err(AgentspaceError::MissingRegistrationEnv(missing))
            }
        }
    }
}

fn require(value: &Option<String>, name: &'static str) -> Result<String> {
    value.clone().ok_or(AgentspaceError::MissingEnv(name))
}

/// Load a `.env` file from the working directory or one of its parents.
///
/// Variables already present in the environment are not overridden. A
/// missing file is not an error.
pub fn load_dotenv() -> Result<Option<std::path::PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Load a specific env file, without overriding existing variables
pub fn load_env_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_project_id_required_for_every_command() {
        let config = config_from(&[
            (LOCATION, "us-central1"),
            (APP_ID, "app"),
            (AGENT_NAME, "projects/p/agents/a"),
        ]);

        for command in [
            Command::ListEngines,
            Command::ListApps,
            Command::Register,
            Command::View,
            Command::Unregister,
        ] {
            let err = config.resolve(command).unwrap_err();
            assert!(matches!(err, AgentspaceError::MissingEnv(PROJECT_ID)));
        }
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let config = config_from(&[(PROJECT_ID, "p1"), (LOCATION, "")]);
        assert_eq!(config.location, None);

        let err = config.resolve(Command::ListEngines).unwrap_err();
        assert_eq!(err.to_string(), "LOCATION environment variable not set.");
    }

    #[test]
    fn test_resolve_list_engines() {
        let config = config_from(&[(PROJECT_ID, "p1"), (LOCATION, "us-central1")]);
        let (project, op) = config.resolve(Command::ListEngines).unwrap();
        assert_eq!(project, "p1");
        assert_eq!(
            op,
            Operation::ListEngines {
                location: "us-central1".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_list_apps_needs_only_project() {
        let config = config_from(&[(PROJECT_ID, "p1")]);
        let (_, op) = config.resolve(Command::ListApps).unwrap();
        assert_eq!(op, Operation::ListApps);
    }

    #[test]
    fn test_resolve_view_requires_app_id() {
        let config = config_from(&[(PROJECT_ID, "p1")]);
        let err = config.resolve(Command::View).unwrap_err();
        assert!(matches!(err, AgentspaceError::MissingEnv(APP_ID)));
    }

    #[test]
    fn test_resolve_unregister_requires_agent_name() {
        let config = config_from(&[(PROJECT_ID, "p1"), (APP_ID, "app")]);
        let err = config.resolve(Command::Unregister).unwrap_err();
        assert!(matches!(err, AgentspaceError::MissingEnv(AGENT_NAME)));
    }

    #[test]
    fn test_resolve_register_reports_all_missing() {
        let config = config_from(&[(PROJECT_ID, "p1"), (DISPLAY_NAME, "Agent")]);
        match config.resolve(Command::Register).unwrap_err() {
            AgentspaceError::MissingRegistrationEnv(missing) => {
                assert_eq!(missing, vec![APP_ID, DESCRIPTION, AGENT_RESOURCE_PATH]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_register_single_missing_field() {
        let config = config_from(&[
            (PROJECT_ID, "p1"),
            (APP_ID, "app-1"),
            (DISPLAY_NAME, "Helper"),
            (DESCRIPTION, ""),
            (AGENT_RESOURCE_PATH, "projects/p1/locations/us-central1/reasoningEngines/42"),
        ]);
        match config.resolve(Command::Register).unwrap_err() {
            AgentspaceError::MissingRegistrationEnv(missing) => {
                assert_eq!(missing, vec![DESCRIPTION]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_register() {
        let config = config_from(&[
            (PROJECT_ID, "p1"),
            (APP_ID, "app-1"),
            (DISPLAY_NAME, "Helper"),
            (DESCRIPTION, "Answers questions"),
            (AGENT_RESOURCE_PATH, "projects/p1/locations/us-central1/reasoningEngines/42"),
        ]);

        let (_, op) = config.resolve(Command::Register).unwrap();
        assert_eq!(
            op,
            Operation::Register(Registration {
                app_id: "app-1".to_string(),
                display_name: "Helper".to_string(),
                description: "Answers questions".to_string(),
                agent_resource_path: "projects/p1/locations/us-central1/reasoningEngines/42"
                    .to_string(),
            })
        );
    }

    #[test]
    #[serial]
    fn test_load_env_file_does_not_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AGENTSPACE_TEST_FROM_FILE=file").unwrap();
        writeln!(file, "AGENTSPACE_TEST_PRESET=file").unwrap();

        std::env::set_var("AGENTSPACE_TEST_PRESET", "process");
        std::env::remove_var("AGENTSPACE_TEST_FROM_FILE");

        load_env_file(file.path()).unwrap();

        assert_eq!(std::env::var("AGENTSPACE_TEST_FROM_FILE").unwrap(), "file");
        assert_eq!(std::env::var("AGENTSPACE_TEST_PRESET").unwrap(), "process");

        std::env::remove_var("AGENTSPACE_TEST_FROM_FILE");
        std::env::remove_var("AGENTSPACE_TEST_PRESET");
    }
}
