use log::info;

use crate::{
    config::{AgentConfig, LibraryConfig},
    error::PlatformError,
    platform::{AgentId, AgentPlatform, AgentRequest, LibraryId, LibraryRequest, ToolDescriptor},
};

/// Handles of the two document libraries the agent consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Libraries {
    pub rules: LibraryId,
    pub knowledge: LibraryId,
}

fn create_library(
    platform: &impl AgentPlatform,
    library: &LibraryConfig,
) -> Result<LibraryId, PlatformError> {
    let request = LibraryRequest {
        name: library.name.clone(),
        description: library.description.clone(),
    };
    let id = platform.create_library(&request)?;
    info!("created library {} ({})", library.name, id.0);
    Ok(id)
}

/// Creates the rule library, then the knowledge library. Stops at the first
/// failure.
pub fn provision_libraries(
    platform: &impl AgentPlatform,
    config: &AgentConfig,
) -> Result<Libraries, PlatformError> {
    let rules = create_library(platform, &config.rule_library)?;
    let knowledge = create_library(platform, &config.knowledge_library)?;
    Ok(Libraries { rules, knowledge })
}

pub fn agent_request(config: &AgentConfig, libraries: &Libraries) -> AgentRequest {
    AgentRequest {
        model: config.model.clone(),
        name: config.name.clone(),
        description: config.description.clone(),
        instructions: config.instructions.clone(),
        tools: vec![ToolDescriptor::DocumentLibrary {
            library_ids: vec![libraries.rules.clone(), libraries.knowledge.clone()],
        }],
    }
}

pub fn create_chess_agent(
    platform: &impl AgentPlatform,
    config: &AgentConfig,
    libraries: &Libraries,
) -> Result<AgentId, PlatformError> {
    let id = platform.create_agent(&agent_request(config, libraries))?;
    info!("created agent {} ({}) on {}", config.name, id.0, config.model);
    Ok(id)
}
