//! URL templates for the Vertex AI and Discovery Engine REST APIs.

pub const DISCOVERY_ENGINE_BASE: &str = "https://discoveryengine.googleapis.com/v1alpha";

const DEFAULT_COLLECTION: &str = "locations/global/collections/default_collection";

pub fn reasoning_engines(project_id: &str, location: &str) -> String {
    format!(
        "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{location}/reasoningEngines"
    )
}

/// Agentspace apps are "engines" in the default collection
pub fn agentspace_apps(project_id: &str) -> String {
    format!("{DISCOVERY_ENGINE_BASE}/projects/{project_id}/{DEFAULT_COLLECTION}/engines")
}

pub fn agents(project_id: &str, app_id: &str) -> String {
    format!(
        "{}/engines/{app_id}/assistants/default_assistant/agents",
        project_collection(project_id)
    )
}

/// `agent_name` is a full resource name such as
/// `projects/p/locations/global/collections/default_collection/engines/e/assistants/default_assistant/agents/a`
pub fn agent(agent_name: &str) -> String {
    format!("{DISCOVERY_ENGINE_BASE}/{}", agent_name.trim_start_matches('/'))
}

fn project_collection(project_id: &str) -> String {
    format!("{DISCOVERY_ENGINE_BASE}/projects/{project_id}/{DEFAULT_COLLECTION}")
}
