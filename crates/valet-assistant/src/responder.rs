//! Mock responder
//!
//! There is no model behind the assistant panel: replies come from a
//! small canned pool, picked uniformly, delivered after a fixed delay
//! that the typing indicator covers. The delay is configurable so
//! tests do not have to wait.

use rand::seq::SliceRandom;
use std::time::Duration;

use crate::message::{Message, Role};

const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

const CANNED_REPLIES: &[&str] = &[
    "Я помогу вам с этим. Давайте проверю текущий статус и вернусь к вам с деталями.",
    "На основе предпочтений гостя, я рекомендую назначить этому запросу высокий приоритет.",
    "Я проанализировал текущую загрузку. Вот что я предлагаю: сначала сосредоточьтесь на срочных запросах, затем займитесь подготовкой к заезду.",
    "Отличный вопрос! Для VIP-гостей мы обычно готовим приветственные удобства за 2 часа до заезда.",
    "Я могу создать задачу для этого. Хотите, чтобы я добавил её в ваш список задач с высоким приоритетом?",
    "У гостя в номере 501 есть предпочтения по гипоаллергенному постельному белью. Я отмечу это для housekeeping.",
];

pub struct Responder {
    replies: Vec<String>,
    delay: Duration,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            replies: CANNED_REPLIES.iter().map(|r| r.to_string()).collect(),
            delay: DEFAULT_REPLY_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pick a canned assistant reply immediately.
    pub fn reply(&self) -> Message {
        let content = self
            .replies
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or("...");
        Message::new(Role::Assistant, content)
    }

    /// Reply after the simulated typing delay.
    pub async fn reply_after_delay(&self) -> Message {
        tokio::time::sleep(self.delay).await;
        self.reply()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_comes_from_pool() {
        let responder = Responder::new();
        let message = responder.reply();
        assert_eq!(message.role, Role::Assistant);
        assert!(CANNED_REPLIES.contains(&message.content.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_reply_waits_out_the_delay() {
        let responder = Responder::new();
        let before = tokio::time::Instant::now();
        let message = responder.reply_after_delay().await;
        assert!(before.elapsed() >= DEFAULT_REPLY_DELAY);
        assert_eq!(message.role, Role::Assistant);
    }
}
