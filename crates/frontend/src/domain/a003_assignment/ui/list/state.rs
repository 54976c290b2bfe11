use contracts::domain::a003_assignment::Assignment;
use contracts::shared::list_pipeline::{ListState, SortSpec};
use leptos::prelude::*;

use crate::shared::config::ListsConfig;

pub const PROJECT_FIELD: &str = "projectName";
pub const USER_FIELD: &str = "userName";

pub fn create_state(lists: &ListsConfig) -> RwSignal<ListState<Assignment>> {
    RwSignal::new(ListState::new(
        SortSpec::ascending(PROJECT_FIELD),
        lists.default_page_size,
    ))
}
