use contracts::shared::list_pipeline::{ListState, SortSpec};
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::config::ListsConfig;

pub const USER_NAME_FIELD: &str = "userName";

pub fn create_state(lists: &ListsConfig) -> RwSignal<ListState<User>> {
    RwSignal::new(ListState::new(
        SortSpec::ascending(USER_NAME_FIELD),
        lists.default_page_size,
    ))
}
