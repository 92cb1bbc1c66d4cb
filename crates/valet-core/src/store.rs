//! In-memory stores
//!
//! All data lives in process memory, seeded at startup. Stores keep
//! insertion order (newest first) because the views render them as
//! lists; lookups are id-keyed linear scans over small collections.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::StoreError;
use crate::guest::{Guest, GuestStatus, RoomMove, Transportation};
use crate::task::{Task, TaskCategory, TaskStatus};
use crate::Result;

pub struct GuestStore {
    guests: Arc<RwLock<Vec<Guest>>>,
}

impl GuestStore {
    pub fn new() -> Self {
        Self {
            guests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded(guests: Vec<Guest>) -> Self {
        Self {
            guests: Arc::new(RwLock::new(guests)),
        }
    }

    /// Add a guest at the top of the list.
    pub fn add(&self, guest: Guest) {
        tracing::info!(guest_id = %guest.id, room = %guest.room, "Added guest");
        self.guests.write().insert(0, guest);
    }

    pub fn get(&self, guest_id: &str) -> Result<Guest> {
        self.guests
            .read()
            .iter()
            .find(|g| g.id == guest_id)
            .cloned()
            .ok_or_else(|| StoreError::GuestNotFound(guest_id.to_string()))
    }

    /// Replace the stored record with the same id.
    pub fn update(&self, guest: &Guest) -> Result<()> {
        let mut guests = self.guests.write();
        let slot = guests
            .iter_mut()
            .find(|g| g.id == guest.id)
            .ok_or_else(|| StoreError::GuestNotFound(guest.id.clone()))?;
        *slot = guest.clone();
        Ok(())
    }

    pub fn set_status(&self, guest_id: &str, status: GuestStatus) -> Result<Guest> {
        let mut guest = self.get(guest_id)?;
        tracing::debug!(guest_id = %guest_id, status = %status, "Guest status change");
        guest.status = status;
        self.update(&guest)?;
        Ok(guest)
    }

    pub fn set_transportation(&self, guest_id: &str, transportation: Transportation) -> Result<Guest> {
        let mut guest = self.get(guest_id)?;
        guest.transportation = transportation;
        self.update(&guest)?;
        Ok(guest)
    }

    pub fn schedule_move(&self, guest_id: &str, room_move: RoomMove) -> Result<Guest> {
        let mut guest = self.get(guest_id)?;
        guest.schedule_move(room_move);
        self.update(&guest)?;
        Ok(guest)
    }

    pub fn all(&self) -> Vec<Guest> {
        self.guests.read().clone()
    }

    pub fn by_status(&self, status: GuestStatus) -> Vec<Guest> {
        self.guests
            .read()
            .iter()
            .filter(|g| g.status == status)
            .cloned()
            .collect()
    }

    pub fn count_by_status(&self, status: GuestStatus) -> usize {
        self.guests
            .read()
            .iter()
            .filter(|g| g.status == status)
            .count()
    }

    /// Case-insensitive match on guest name or room number.
    pub fn search(&self, query: &str) -> Vec<Guest> {
        let query = query.to_lowercase();
        self.guests
            .read()
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&query) || g.room.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.guests.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.read().is_empty()
    }
}

impl Default for GuestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GuestStore {
    fn clone(&self) -> Self {
        Self {
            guests: Arc::clone(&self.guests),
        }
    }
}

pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    pub fn add(&self, task: Task) {
        tracing::info!(task_id = %task.id, room = %task.room, request = %task.request, "Added task");
        self.tasks.write().insert(0, task);
    }

    pub fn get(&self, task_id: &str) -> Result<Task> {
        self.tasks
            .read()
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))
    }

    pub fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| StoreError::TaskNotFound(task.id.clone()))?;
        *slot = task.clone();
        Ok(())
    }

    pub fn set_status(&self, task_id: &str, status: TaskStatus) -> Result<Task> {
        let mut task = self.get(task_id)?;
        tracing::debug!(task_id = %task_id, status = %status, "Task status change");
        task.status = status;
        self.update(&task)?;
        Ok(task)
    }

    pub fn set_priority(&self, task_id: &str, priority: crate::task::Priority) -> Result<Task> {
        let mut task = self.get(task_id)?;
        task.priority = priority;
        self.update(&task)?;
        Ok(task)
    }

    pub fn delete(&self, task_id: &str) -> Result<Task> {
        let mut tasks = self.tasks.write();
        let index = tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;
        let task = tasks.remove(index);
        tracing::info!(task_id = %task_id, "Deleted task");
        Ok(task)
    }

    pub fn all(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .read()
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    pub fn by_category(&self, category: TaskCategory) -> Vec<Task> {
        self.tasks
            .read()
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .read()
            .iter()
            .filter(|t| t.status == status)
            .count()
    }

    pub fn open_count(&self) -> usize {
        self.tasks.read().iter().filter(|t| t.is_open()).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TaskStore {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::RoomCategory;
    use crate::task::Priority;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_guest(name: &str, room: &str) -> Guest {
        Guest::new(
            name,
            room,
            RoomCategory::Dts,
            date(2025, 11, 1),
            date(2025, 11, 5),
        )
        .unwrap()
    }

    fn sample_task(request: &str) -> Task {
        Task::new(
            "501",
            "Anna Sokolova",
            request,
            Priority::Normal,
            TaskCategory::Main,
            "10:30 AM",
        )
        .unwrap()
    }

    #[test]
    fn test_guest_store_round_trip() {
        let store = GuestStore::new();
        let guest = sample_guest("Anna Sokolova", "103");
        let id = guest.id.clone();
        store.add(guest);

        let fetched = store.get(&id).unwrap();
        assert_eq!(fetched.room, "103");

        let updated = store.set_status(&id, GuestStatus::CheckedIn).unwrap();
        assert_eq!(updated.status, GuestStatus::CheckedIn);
        assert_eq!(store.count_by_status(GuestStatus::CheckedIn), 1);

        assert!(store.get("missing").is_err());
    }

    #[test]
    fn test_add_prepends() {
        let store = GuestStore::new();
        store.add(sample_guest("First Guest", "101"));
        store.add(sample_guest("Second Guest", "102"));

        let all = store.all();
        assert_eq!(all[0].room, "102");
        assert_eq!(all[1].room, "101");
    }

    #[test]
    fn test_guest_search_matches_name_and_room() {
        let store = GuestStore::new();
        store.add(sample_guest("Anna Sokolova", "103"));
        store.add(sample_guest("Viktor Morozov", "217"));

        assert_eq!(store.search("sokol").len(), 1);
        assert_eq!(store.search("217").len(), 1);
        assert_eq!(store.search("nobody").len(), 0);
    }

    #[test]
    fn test_schedule_move_through_store() {
        let store = GuestStore::new();
        let guest = sample_guest("Anna Sokolova", "103");
        let id = guest.id.clone();
        store.add(guest);

        store
            .schedule_move(&id, RoomMove::new(date(2025, 11, 3), "601", RoomCategory::Dks))
            .unwrap();

        let guest = store.get(&id).unwrap();
        assert!(guest.is_moving_tomorrow(date(2025, 11, 2)));
    }

    #[test]
    fn test_task_store_lifecycle() {
        let store = TaskStore::new();
        let task = sample_task("Extra towels");
        let id = task.id.clone();
        store.add(task);

        store.set_status(&id, TaskStatus::InProgress).unwrap();
        assert_eq!(store.count_by_status(TaskStatus::InProgress), 1);
        assert_eq!(store.open_count(), 1);

        store.set_status(&id, TaskStatus::Completed).unwrap();
        assert_eq!(store.open_count(), 0);

        store.delete(&id).unwrap();
        assert!(store.get(&id).is_err());
        assert!(store.delete(&id).is_err());
    }

    #[test]
    fn test_task_filters() {
        let store = TaskStore::new();
        store.add(sample_task("Extra towels"));
        let mut office = Task::new(
            "Office",
            "Front Desk",
            "Monthly report",
            Priority::High,
            TaskCategory::Office,
            "10:00 AM",
        )
        .unwrap();
        office.status = TaskStatus::InProgress;
        store.add(office);

        assert_eq!(store.by_category(TaskCategory::Office).len(), 1);
        assert_eq!(store.by_status(TaskStatus::Pending).len(), 1);
    }
}
