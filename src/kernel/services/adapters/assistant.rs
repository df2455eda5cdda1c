use std::time::Duration;

use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::{AssistantConfig, AssistantProvider, ReplyFuture};

/// Offline assistant for the coder view: waits a moment, then answers with
/// fixed secure-coding advice for the current editor language.
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    delay: Duration,
    language: LanguageId,
}

impl CannedAssistant {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            delay: config.reply_delay(),
            language: LanguageId::JavaScript,
        }
    }

    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    pub fn reply_text(&self) -> String {
        format!(
            "I can help you with your {} code! Based on your current editor content, \
             I notice you're working on security-related functions. Here are some suggestions:\n\n\
             1. Add proper error handling\n\
             2. Consider input validation\n\
             3. Use secure coding practices\n\n\
             Would you like me to help optimize your code or explain any security concepts?",
            self.language.language_id()
        )
    }
}

impl AssistantProvider for CannedAssistant {
    fn complete(&self, _prompt: String) -> ReplyFuture {
        let delay = self.delay;
        let reply = self.reply_text();
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(reply)
        })
    }
}
