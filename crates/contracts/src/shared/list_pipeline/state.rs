use super::filter::FilterCriteria;
use super::pagination::PageWindow;
use super::record::ListRecord;
use super::sort::SortSpec;
use super::view_model::{build_view_model, ListViewModel};

/// Client-side state of one list view.
///
/// The collection is fetched once when the view mounts and afterwards only
/// changes in response to a server acknowledgement (delete, validate, ...).
#[derive(Debug, Clone)]
pub struct ListState<R> {
    records: Vec<R>,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub window: PageWindow,
    pub is_loaded: bool,
}

impl<R: ListRecord + Clone> ListState<R> {
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::new(),
            sort,
            window: PageWindow::new(page_size),
            is_loaded: false,
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Fresh fetch result
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.is_loaded = true;
        self.window.page_index = 0;
    }

    /// Drop a record the server confirmed as deleted; the page index is
    /// re-clamped so the view never lands on an empty trailing page.
    pub fn remove_record(&mut self, id: &R::Id) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        let removed = self.records.len() != before;
        if removed {
            let total = self.filtered_count();
            self.window.clamp(total);
        }
        removed
    }

    /// Apply a confirmed server-side change to one record
    pub fn update_record(&mut self, id: &R::Id, apply: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(record) => {
                apply(record);
                let total = self.filtered_count();
                self.window.clamp(total);
                true
            }
            None => false,
        }
    }

    /// Any filter change returns to the first page
    pub fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        change(&mut self.criteria);
        self.window.page_index = 0;
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.update_criteria(|c| *c = criteria);
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        let total = self.filtered_count();
        self.window.go_to(page_index, total);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.window.set_page_size(page_size);
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.criteria.matches(*r)).count()
    }

    pub fn view_model(&self) -> ListViewModel<R> {
        build_view_model(&self.records, &self.criteria, &self.sort, self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ValidationStatus::*;
    use crate::shared::list_pipeline::fixtures::{row, Row};
    use crate::shared::list_pipeline::predicate::MatchMode;

    fn timesheets() -> Vec<Row> {
        let projects = ["Alpha", "Beta", "Gamma"];
        (0..26u32)
            .map(|i| row(i + 1, projects[(i % 3) as usize], i % 28 + 1, Pending))
            .collect()
    }

    #[test]
    fn test_delete_on_last_page_reclamps() {
        let mut state = ListState::new(SortSpec::ascending("projectName"), 25);
        state.replace_records(timesheets());

        let vm = state.view_model();
        assert_eq!(vm.rows.len(), 25);
        assert_eq!(vm.page_count, 2);

        state.go_to_page(1);
        let last = state.view_model();
        assert_eq!(last.window.page_index, 1);
        assert_eq!(last.rows.len(), 1);

        let only_id = last.rows[0].id;
        assert!(state.remove_record(&only_id));
        assert_eq!(state.window.page_index, 0);

        let vm = state.view_model();
        assert_eq!(vm.window.page_index, 0);
        assert_eq!(vm.page_count, 1);
        assert_eq!(vm.rows.len(), 25);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut state = ListState::new(SortSpec::ascending("projectName"), 10);
        state.replace_records(timesheets());
        state.go_to_page(2);
        assert_eq!(state.window.page_index, 2);
        state.set_page_size(25);
        assert_eq!(state.window.page_index, 0);
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let mut state = ListState::new(SortSpec::ascending("projectName"), 10);
        state.replace_records(timesheets());
        state.go_to_page(2);
        state.update_criteria(|c| c.set_field("projectName", MatchMode::Exact, "beta"));
        assert_eq!(state.window.page_index, 0);
        assert_eq!(state.view_model().total_count, 9);
    }

    #[test]
    fn test_update_record_keeps_window_valid() {
        let mut state = ListState::new(SortSpec::ascending("projectName"), 5)
            .with_criteria(crate::shared::list_pipeline::FilterCriteria::new().with_status(Some(Pending)));
        state.replace_records(timesheets().into_iter().take(6).collect());
        state.go_to_page(1);
        assert!(state.update_record(&6, |r| r.status = Validated));
        assert_eq!(state.window.page_index, 0);
        assert!(!state.update_record(&99, |r: &mut Row| r.status = Validated));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state: ListState<Row> = ListState::new(SortSpec::ascending("projectName"), 25);
        state.replace_records(timesheets());
        assert!(!state.remove_record(&1000));
        assert_eq!(state.records().len(), 26);
    }
}
