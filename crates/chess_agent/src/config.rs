use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryConfig {
    pub name: String,
    pub description: String,
}

impl LibraryConfig {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Everything needed to provision the chess-playing agent.
///
/// Fields missing from a JSON document fall back to [`AgentConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub model: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub rule_library: LibraryConfig,
    pub knowledge_library: LibraryConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "mistral-medium-latest".to_owned(),
            name: "chess_player".to_owned(),
            description: "this agent plays chess".to_owned(),
            instructions:
                "Use the libraries to understand the rules before playing and define your strategie"
                    .to_owned(),
            rule_library: LibraryConfig::new(
                "rule_library",
                "This library contains all the rules about chess",
            ),
            knowledge_library: LibraryConfig::new(
                "knowledge_library",
                "this library give knowledge on techniques for chess",
            ),
        }
    }
}

impl AgentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
