//! Application state
//!
//! One shared state object aggregating the seeded stores, the chat
//! conversation and the butler's profile settings. Mutations that the
//! profile view surfaces as "activity" go through here so the action
//! history stays consistent.

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use valet_assistant::{Conversation, Message, Responder, SuggestionBoard};
use valet_core::{
    seed, ActionCategory, ActionLog, Guest, GuestStatus, GuestStore, Priority, RoomMove, Task,
    TaskStatus, TaskStore, Transportation,
};
use valet_i18n::Language;

use crate::Result;

/// Butler profile toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Ru,
            dark_mode: false,
            notifications: true,
        }
    }
}

pub struct AppState {
    guests: GuestStore,
    tasks: TaskStore,
    history: ActionLog,
    responder: Responder,
    conversation: Arc<RwLock<Conversation>>,
    suggestions: Arc<RwLock<SuggestionBoard>>,
    settings: Arc<RwLock<Settings>>,
}

impl AppState {
    /// Fresh state with the demo data set loaded.
    pub fn seeded() -> Self {
        Self {
            guests: GuestStore::seeded(seed::demo_guests()),
            tasks: TaskStore::seeded(seed::demo_tasks()),
            history: ActionLog::seeded(seed::demo_history(Utc::now())),
            responder: Responder::new(),
            conversation: Arc::new(RwLock::new(Conversation::new())),
            suggestions: Arc::new(RwLock::new(SuggestionBoard::seeded())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    pub fn guests(&self) -> &GuestStore {
        &self.guests
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn history(&self) -> &ActionLog {
        &self.history
    }

    pub fn settings(&self) -> Settings {
        *self.settings.read()
    }

    pub fn language(&self) -> Language {
        self.settings.read().language
    }

    pub fn set_language(&self, language: Language) {
        self.settings.write().language = language;
    }

    pub fn toggle_dark_mode(&self) -> bool {
        let mut settings = self.settings.write();
        settings.dark_mode = !settings.dark_mode;
        settings.dark_mode
    }

    // Task handlers, each one recorded in the action history the way
    // the profile view expects to replay it.

    pub fn add_task(&self, task: Task) {
        self.history.record(
            "Task Added",
            format!("Added task \"{}\" for {}", task.request, task.guest_name),
            ActionCategory::Task,
        );
        self.tasks.add(task);
    }

    pub fn set_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task> {
        let task = self.tasks.set_status(task_id, status)?;
        if status == TaskStatus::Completed {
            self.history.record(
                "Task Completed",
                format!("Completed task \"{}\" for {}", task.request, task.guest_name),
                ActionCategory::Task,
            );
        } else {
            self.history.record(
                "Task Status Updated",
                format!("Updated task \"{}\" to {}", task.request, status),
                ActionCategory::Task,
            );
        }
        Ok(task)
    }

    pub fn set_task_priority(&self, task_id: &str, priority: Priority) -> Result<Task> {
        let task = self.tasks.set_priority(task_id, priority)?;
        self.history.record(
            "Task Priority Changed",
            format!("Changed priority of \"{}\" to {}", task.request, priority),
            ActionCategory::Task,
        );
        Ok(task)
    }

    pub fn delete_task(&self, task_id: &str) -> Result<()> {
        let task = self.tasks.delete(task_id)?;
        self.history.record(
            "Task Deleted",
            format!("Deleted task \"{}\"", task.request),
            ActionCategory::Task,
        );
        Ok(())
    }

    // Guest handlers

    pub fn add_guest(&self, guest: Guest) {
        self.history.record(
            "Guest Added",
            format!("Added new guest \"{}\" in room {}", guest.name, guest.room),
            ActionCategory::Guest,
        );
        self.guests.add(guest);
    }

    pub fn set_guest_status(&self, guest_id: &str, status: GuestStatus) -> Result<Guest> {
        let guest = self.guests.set_status(guest_id, status)?;
        self.history.record(
            "Guest Status Updated",
            format!("Changed {} status to \"{}\"", guest.name, status),
            ActionCategory::Guest,
        );
        Ok(guest)
    }

    pub fn set_guest_transportation(
        &self,
        guest_id: &str,
        transportation: Transportation,
    ) -> Result<Guest> {
        let guest = self.guests.set_transportation(guest_id, transportation)?;
        self.history.record(
            "Transportation Updated",
            format!(
                "Updated transportation for {} to \"{}\"",
                guest.name,
                transportation.as_str()
            ),
            ActionCategory::Guest,
        );
        Ok(guest)
    }

    pub fn schedule_guest_move(&self, guest_id: &str, room_move: RoomMove) -> Result<Guest> {
        let guest = self.guests.schedule_move(guest_id, room_move)?;
        self.history.record(
            "Move Scheduled",
            format!("Scheduled a room move for {}", guest.name),
            ActionCategory::Guest,
        );
        Ok(guest)
    }

    // Assistant

    pub fn conversation_messages(&self) -> Vec<Message> {
        self.conversation.read().messages().to_vec()
    }

    pub fn pending_suggestions(&self) -> Vec<valet_assistant::Suggestion> {
        self.suggestions
            .read()
            .pending()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn accept_suggestion(&self, id: &str) -> Result<()> {
        self.suggestions.write().accept(id)?;
        Ok(())
    }

    pub fn dismiss_suggestion(&self, id: &str) -> Result<()> {
        self.suggestions.write().dismiss(id)?;
        Ok(())
    }

    /// Send a chat message and wait for the simulated reply. The
    /// conversation lock is not held across the delay.
    pub async fn send_chat(&self, text: &str) -> Result<Message> {
        self.conversation.write().push_user(text)?;

        let reply = self.responder.reply_after_delay().await;
        self.conversation.write().push_assistant(reply.clone());
        Ok(reply)
    }

    // Profile stats

    pub fn tasks_done(&self) -> usize {
        self.tasks.count_by_status(TaskStatus::Completed)
    }

    pub fn active_guests(&self) -> usize {
        self.guests.count_by_status(GuestStatus::CheckedIn)
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            guests: self.guests.clone(),
            tasks: self.tasks.clone(),
            history: self.history.clone(),
            responder: Responder::new(),
            conversation: Arc::clone(&self.conversation),
            suggestions: Arc::clone(&self.suggestions),
            settings: Arc::clone(&self.settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_counts() {
        let state = AppState::seeded();
        assert_eq!(state.guests().len(), 16);
        assert_eq!(state.tasks().len(), 10);
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.active_guests(), 7);
        assert_eq!(state.tasks_done(), 3);
    }

    #[test]
    fn test_completing_task_records_history() {
        let state = AppState::seeded();
        let task_id = state.tasks().all()[0].id.clone();

        state
            .set_task_status(&task_id, TaskStatus::Completed)
            .unwrap();

        let recent = state.history().recent(1);
        assert_eq!(recent[0].action, "Task Completed");
    }

    #[test]
    fn test_guest_status_change_records_history() {
        let state = AppState::seeded();
        let guest_id = state.guests().all()[0].id.clone();

        state
            .set_guest_status(&guest_id, GuestStatus::Departed)
            .unwrap();

        let recent = state.history().recent(1);
        assert_eq!(recent[0].action, "Guest Status Updated");
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_chat_round_trip() {
        let state = AppState::seeded();
        let reply = state.send_chat("Какие задачи срочные?").await.unwrap();
        assert_eq!(reply.role, valet_assistant::Role::Assistant);

        // greeting + user + assistant
        assert_eq!(state.conversation_messages().len(), 3);
    }

    #[test]
    fn test_suggestion_accept() {
        let state = AppState::seeded();
        let pending = state.pending_suggestions();
        assert_eq!(pending.len(), 4);

        state.accept_suggestion(&pending[0].id).unwrap();
        assert_eq!(state.pending_suggestions().len(), 3);
    }

    #[test]
    fn test_language_toggle() {
        let state = AppState::seeded();
        assert_eq!(state.language(), Language::Ru);
        state.set_language(Language::En);
        assert_eq!(state.language(), Language::En);
        assert!(state.toggle_dark_mode());
    }
}
