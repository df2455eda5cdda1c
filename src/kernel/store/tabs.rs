use crate::kernel::Action;
use crate::models::NodeKind;

impl super::Store {
    pub(super) fn reduce_tabs_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SelectNode { id } => {
                let state_changed = match self.state.explorer.tree().kind(id) {
                    Some(NodeKind::File) => self.state.tabs.open(id),
                    Some(NodeKind::Folder) => self.state.explorer.toggle_folder(id),
                    None => {
                        tracing::debug!(?id, "select ignored: unknown node");
                        false
                    }
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::ActivateTab { id } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.tabs.activate(id),
            },
            Action::CloseTab { id } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.tabs.close(id),
            },
            _ => unreachable!("non-tab action passed to reduce_tabs_action"),
        }
    }
}
