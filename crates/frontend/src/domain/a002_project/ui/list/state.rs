use contracts::domain::a002_project::Project;
use contracts::shared::list_pipeline::{ListState, SortSpec};
use leptos::prelude::*;

use crate::shared::config::ListsConfig;

pub const PROJECT_FIELD: &str = "projectName";

pub fn create_state(lists: &ListsConfig) -> RwSignal<ListState<Project>> {
    RwSignal::new(ListState::new(
        SortSpec::ascending(PROJECT_FIELD),
        lists.default_page_size,
    ))
}
