use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Handle returned by the platform for a document library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(pub String);

/// Handle returned by the platform for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRequest {
    pub name: String,
    pub description: String,
}

/// A capability attached to an agent at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolDescriptor {
    DocumentLibrary { library_ids: Vec<LibraryId> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRequest {
    pub model: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tools: Vec<ToolDescriptor>,
}

/// Client for the remote agent service. Implementations own transport and
/// credentials; callers only see opaque handles.
pub trait AgentPlatform {
    fn create_library(&self, request: &LibraryRequest) -> Result<LibraryId, PlatformError>;

    fn create_agent(&self, request: &AgentRequest) -> Result<AgentId, PlatformError>;
}
