use super::endpoints;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::config::Registration;
use crate::error::Result;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Placeholder sent as the agent's tool description on registration
pub const TOOL_DESCRIPTION: &str = "Tool Description";

/// Display name and resource name of one listed resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSummary {
    pub display_name: Option<String>,
    pub name: Option<String>,
}

impl ResourceSummary {
    /// Each field is read on its own; non-string values keep their JSON text
    fn from_value(value: &Value) -> Self {
        Self {
            display_name: field_text(value, "displayName"),
            name: field_text(value, "name"),
        }
    }
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Result of a list call
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// The expected list field was present
    Items(Vec<ResourceSummary>),
    /// Anything else, usually an error body
    Raw(Value),
}

impl Listing {
    pub fn from_body(body: Value, field: &str) -> Self {
        match body.get(field).and_then(Value::as_array) {
            Some(items) => Listing::Items(items.iter().map(ResourceSummary::from_value).collect()),
            None => Listing::Raw(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Registered(Value),
    /// 200 with an empty or non-JSON body
    RegisteredWithoutBody,
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnregisterOutcome {
    Unregistered,
    Rejected(Value),
}

/// The remote operations this tool performs, one call each.
///
/// Remote failures are reported through the returned outcome; `Err` is
/// reserved for transport failures.
pub trait RemoteClient {
    fn list_engines(&self, token: &str, project_id: &str, location: &str) -> Result<Listing>;

    fn list_apps(&self, token: &str, project_id: &str) -> Result<Listing>;

    fn register_agent(
        &self,
        token: &str,
        project_id: &str,
        registration: &Registration,
    ) -> Result<RegisterOutcome>;

    fn view_agents(&self, token: &str, project_id: &str, app_id: &str) -> Result<Value>;

    fn unregister_agent(
        &self,
        token: &str,
        project_id: &str,
        agent_name: &str,
    ) -> Result<UnregisterOutcome>;
}

/// Request body for registering an ADK agent backed by a reasoning engine
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload<'a> {
    pub display_name: &'a str,
    pub description: &'a str,
    #[serde(rename = "adk_agent_definition")]
    pub adk_agent_definition: AdkAgentDefinition<'a>,
}

#[derive(Debug, Serialize)]
pub struct AdkAgentDefinition<'a> {
    pub tool_settings: ToolSettings<'a>,
    pub provisioned_reasoning_engine: ProvisionedReasoningEngine<'a>,
}

#[derive(Debug, Serialize)]
pub struct ToolSettings<'a> {
    pub tool_description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ProvisionedReasoningEngine<'a> {
    pub reasoning_engine: &'a str,
}

impl<'a> RegistrationPayload<'a> {
    pub fn new(registration: &'a Registration) -> Self {
        Self {
            display_name: &registration.display_name,
            description: &registration.description,
            adk_agent_definition: AdkAgentDefinition {
                // TODO: take the tool description from configuration instead of the placeholder
                tool_settings: ToolSettings {
                    tool_description: TOOL_DESCRIPTION,
                },
                provisioned_reasoning_engine: ProvisionedReasoningEngine {
                    reasoning_engine: &registration.agent_resource_path,
                },
            },
        }
    }
}

pub struct AgentspaceClient<T> {
    transport: T,
}

impl<T: Transport> AgentspaceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.send(&request)?;
        if !response.is_ok() {
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "request was not successful"
            );
        }
        Ok(response)
    }
}

impl<T: Transport> RemoteClient for AgentspaceClient<T> {
    fn list_engines(&self, token: &str, project_id: &str, location: &str) -> Result<Listing> {
        let url = endpoints::reasoning_engines(project_id, location);
        let response = self.send(ApiRequest::new(Method::GET, url, token))?;
        Ok(Listing::from_body(response.json_or_text(), "reasoningEngines"))
    }

    fn list_apps(&self, token: &str, project_id: &str) -> Result<Listing> {
        let request = ApiRequest::new(Method::GET, endpoints::agentspace_apps(project_id), token)
            .user_project(project_id);
        let response = self.send(request)?;
        Ok(Listing::from_body(response.json_or_text(), "engines"))
    }

    fn register_agent(
        &self,
        token: &str,
        project_id: &str,
        registration: &Registration,
    ) -> Result<RegisterOutcome> {
        let url = endpoints::agents(project_id, &registration.app_id);
        let request = ApiRequest::new(Method::POST, url, token)
            .json_content()
            .user_project(project_id)
            .body(serde_json::to_value(RegistrationPayload::new(registration))?);

        let response = self.send(request)?;
        if !response.is_ok() {
            return Ok(RegisterOutcome::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        Ok(match response.json() {
            Some(body) => RegisterOutcome::Registered(body),
            None => RegisterOutcome::RegisteredWithoutBody,
        })
    }

    fn view_agents(&self, token: &str, project_id: &str, app_id: &str) -> Result<Value> {
        let request = ApiRequest::new(Method::GET, endpoints::agents(project_id, app_id), token)
            .json_content()
            .user_project(project_id);
        Ok(self.send(request)?.json_or_text())
    }

    fn unregister_agent(
        &self,
        token: &str,
        project_id: &str,
        agent_name: &str,
    ) -> Result<UnregisterOutcome> {
        let request = ApiRequest::new(Method::DELETE, endpoints::agent(agent_name), token)
            .json_content()
            .user_project(project_id);

        let response = self.send(request)?;
        if response.is_ok() {
            Ok(UnregisterOutcome::Unregistered)
        } else {
            Ok(UnregisterOutcome::Rejected(response.json_or_text()))
        }
    }
}
