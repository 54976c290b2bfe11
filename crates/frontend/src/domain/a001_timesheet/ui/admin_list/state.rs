use contracts::domain::a001_timesheet::Timesheet;
use contracts::shared::dates::DateRange;
use contracts::shared::list_pipeline::{FilterCriteria, ListState, SortSpec};
use leptos::prelude::*;

use crate::shared::config::ListsConfig;
use crate::shared::date_utils::today;

pub const PROJECT_FIELD: &str = "projectName";
pub const USER_FIELD: &str = "userName";

pub fn create_state(lists: &ListsConfig) -> RwSignal<ListState<Timesheet>> {
    let criteria = FilterCriteria::new().with_date_range(DateRange::default_for(today()));
    RwSignal::new(
        ListState::new(SortSpec::ascending(PROJECT_FIELD), lists.default_page_size)
            .with_criteria(criteria),
    )
}
