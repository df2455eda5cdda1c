use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::CreateNode {
                name,
                kind,
                parent_path,
            } => {
                let result = self
                    .state
                    .explorer
                    .create(&name, kind, parent_path.as_deref());
                let state_changed = match result {
                    Ok(id) => {
                        tracing::debug!(?id, %name, ?kind, ?parent_path, "node created");
                        true
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, %name, ?parent_path, "create ignored");
                        false
                    }
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::RenameNode { id, name } => {
                let state_changed = match self.state.explorer.rename(id, &name) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, ?id, %name, "rename ignored");
                        false
                    }
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::DeleteNode { id } => {
                let state_changed = match self.state.explorer.delete(id) {
                    Ok(removed) => {
                        let tabs_closed = self.state.tabs.close_many(&removed);
                        tracing::debug!(?id, removed = removed.len(), tabs_closed, "node deleted");
                        true
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, ?id, "delete ignored");
                        false
                    }
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::ToggleFolder { id } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.toggle_folder(id),
            },
            Action::UpdateContent { id, content } => {
                let state_changed = match self.state.explorer.set_content(id, content) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, ?id, "content update ignored");
                        false
                    }
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }
}
