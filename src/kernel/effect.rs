#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendPrompt { request_id: u64, prompt: String },
}
