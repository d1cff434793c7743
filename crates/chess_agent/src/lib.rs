// Typed boundary to the remote agent platform and the chess-player setup built on it
pub mod config;
pub mod error;
pub mod platform;
pub mod provision;

pub use config::{AgentConfig, LibraryConfig};
pub use error::{ConfigError, PlatformError};
pub use platform::{AgentId, AgentPlatform, AgentRequest, LibraryId, LibraryRequest, ToolDescriptor};
pub use provision::{agent_request, create_chess_agent, provision_libraries, Libraries};
