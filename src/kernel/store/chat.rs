use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_chat_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ChatSubmit { prompt } => {
                let Some(request_id) = self.state.chat.submit(&prompt) else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                super::DispatchResult {
                    effects: vec![Effect::SendPrompt { request_id, prompt }],
                    state_changed: true,
                }
            }
            Action::AssistantReplied { request_id, reply } => {
                let state_changed = self.state.chat.apply_reply(request_id, reply);
                if !state_changed {
                    tracing::debug!(request_id, "stale assistant reply dropped");
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            _ => unreachable!("non-chat action passed to reduce_chat_action"),
        }
    }
}
