//! Service ports: traits + data contracts.

pub mod assistant;
pub mod config;
pub mod settings;

pub use assistant::{
    reply_or_fallback, AssistantError, AssistantProvider, ReplyFuture, FALLBACK_REPLY,
};
pub use config::{AssistantConfig, WorkspaceConfig};
pub use settings::{Settings, SettingsError};
