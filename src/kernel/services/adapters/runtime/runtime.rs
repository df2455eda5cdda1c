use super::message::AppMessage;
use crate::kernel::services::ports::{reply_or_fallback, AssistantProvider};
use crate::kernel::Effect;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    assistant: Arc<dyn AssistantProvider>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, assistant: Arc<dyn AssistantProvider>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            assistant,
        })
    }

    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::SendPrompt { request_id, prompt } => self.send_prompt(request_id, prompt),
        }
    }

    pub fn send_prompt(&self, request_id: u64, prompt: String) {
        let tx = self.tx.clone();
        let assistant = Arc::clone(&self.assistant);
        self.runtime.spawn(async move {
            tracing::debug!(request_id, "assistant request started");
            let reply = reply_or_fallback(assistant.complete(prompt).await);
            let _ = tx.send(AppMessage::AssistantReplied { request_id, reply });
        });
    }
}
