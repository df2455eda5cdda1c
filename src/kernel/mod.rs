//! Headless application core (state/action/effect).

pub mod action;
pub mod chat;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;
pub mod tabs;

pub use action::Action;
pub use chat::{ChatMessage, ChatRole, ChatState};
pub use effect::Effect;
pub use language::LanguageId;
pub use state::{AppState, ExplorerState};
pub use store::{DispatchResult, Store};
pub use tabs::OpenTabs;
