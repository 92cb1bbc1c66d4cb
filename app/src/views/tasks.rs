//! Tasks view
//!
//! Three swipeable tabs: open guest-room work, open office work, and
//! everything completed.

use valet_core::{Task, TaskCategory, TaskStatus};
use valet_i18n::t;
use valet_tabs::Tab;

use crate::state::AppState;
use crate::views::PaneContent;

pub fn tabs(state: &AppState) -> Vec<Tab<PaneContent>> {
    let lang = state.language();
    let all = state.tasks().all();

    let open_in = |category: TaskCategory| -> Vec<Task> {
        all.iter()
            .filter(|t| t.category == category && t.status != TaskStatus::Completed)
            .cloned()
            .collect()
    };

    let main: Vec<Task> = open_in(TaskCategory::Main);
    let office: Vec<Task> = open_in(TaskCategory::Office);
    let completed: Vec<Task> = all
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .cloned()
        .collect();

    vec![
        Tab::new("main", t(lang, "mainTasks"), PaneContent::Tasks(main.clone()))
            .with_badge(main.len() as u32),
        Tab::new("office", t(lang, "officeTasks"), PaneContent::Tasks(office.clone()))
            .with_badge(office.len() as u32),
        Tab::new(
            "completed",
            t(lang, "completed"),
            PaneContent::Tasks(completed.clone()),
        )
        .with_badge(completed.len() as u32),
    ]
}
