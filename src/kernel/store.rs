use super::{Action, AppState, Effect};

mod chat;
mod explorer;
mod tabs;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            action @ (Action::CreateNode { .. }
            | Action::RenameNode { .. }
            | Action::DeleteNode { .. }
            | Action::ToggleFolder { .. }
            | Action::UpdateContent { .. }) => self.reduce_explorer_action(action),
            action @ (Action::SelectNode { .. }
            | Action::ActivateTab { .. }
            | Action::CloseTab { .. }) => self.reduce_tabs_action(action),
            action @ (Action::ChatSubmit { .. } | Action::AssistantReplied { .. }) => {
                self.reduce_chat_action(action)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
