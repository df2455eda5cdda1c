use crate::kernel::Action;

pub enum AppMessage {
    AssistantReplied { request_id: u64, reply: String },
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::AssistantReplied { request_id, reply } => {
                Action::AssistantReplied { request_id, reply }
            }
        }
    }
}
