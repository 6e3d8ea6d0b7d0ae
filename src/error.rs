use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentspaceError {
    #[error("{0} environment variable not set.")]
    MissingEnv(&'static str),

    #[error(
        "One or more required environment variables for registering an agent are not set ({}).\n\
         Please check APP_ID, DISPLAY_NAME, DESCRIPTION, and AGENT_RESOURCE_PATH.",
        .0.join(", ")
    )]
    MissingRegistrationEnv(Vec<&'static str>),

    #[error("Failed to get access token: {0} not found.\nPlease make sure you have the gcloud CLI installed and are authenticated.")]
    TokenCommandNotFound(String),

    #[error("Failed to get access token: {0}\nPlease make sure you have the gcloud CLI installed and are authenticated.")]
    TokenCommandFailed(String),

    #[error("Failed to get access token: the authentication command printed an empty token.")]
    EmptyToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load env file: {0}")]
    EnvFile(String),
}

impl From<dotenvy::Error> for AgentspaceError {
    fn from(err: dotenvy::Error) -> Self {
        AgentspaceError::EnvFile(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgentspaceError>;
