use super::filter::{filter_records, FilterCriteria};
use super::pagination::PageWindow;
use super::record::ListRecord;
use super::sort::{sort_records, SortSpec};

/// What a list page renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<R> {
    /// Rows of the current page only
    pub rows: Vec<R>,
    /// Filtered count before pagination
    pub total_count: usize,
    pub page_count: usize,
    /// Window after clamping against `total_count`
    pub window: PageWindow,
}

impl<R> ListViewModel<R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based number of the first row on the page (0 when empty)
    pub fn first_row_number(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.window.range(self.total_count).start + 1
        }
    }
}

/// Filter, then sort, then paginate.
pub fn build_view_model<R: ListRecord + Clone>(
    records: &[R],
    criteria: &FilterCriteria,
    sort: &SortSpec,
    window: PageWindow,
) -> ListViewModel<R> {
    let mut filtered = filter_records(records, criteria);
    sort_records(&mut filtered, sort);

    let total_count = filtered.len();
    let window = window.clamped(total_count);
    let range = window.range(total_count);
    let rows = filtered.drain(range).collect();

    ListViewModel {
        rows,
        total_count,
        page_count: window.page_count(total_count),
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ValidationStatus::{self, *};
    use crate::shared::list_pipeline::fixtures::{row, Row};
    use crate::shared::list_pipeline::pagination::paginate;

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn mixed() -> Vec<Row> {
        vec![
            row(1, "Gamma", 1, Pending),
            row(2, "Alpha", 8, Pending),
            row(3, "Beta", 2, Validated),
            row(4, "Alpha", 3, Pending),
            row(5, "Alpha", 1, Rejected),
            row(6, "Beta", 5, Pending),
        ]
    }

    #[test]
    fn test_full_page_equals_sorted_filtered() {
        let records = mixed();
        let criteria = FilterCriteria::new().with_status(Some(Pending));
        let sort = SortSpec::ascending("projectName");

        let mut expected = filter_records(&records, &criteria);
        sort_records(&mut expected, &sort);
        assert_eq!(paginate(&expected, 0, records.len()), expected);

        let vm = build_view_model(&records, &criteria, &sort, PageWindow::new(records.len()));
        assert_eq!(vm.rows, expected);
        assert_eq!(ids(&vm.rows), vec![4, 2, 6, 1]);
    }

    #[test]
    fn test_sorts_before_paginating() {
        // Paginating first would yield rows 1 and 2 (Gamma, Alpha)
        let vm = build_view_model(
            &mixed(),
            &FilterCriteria::new(),
            &SortSpec::ascending("projectName"),
            PageWindow::new(2),
        );
        assert_eq!(ids(&vm.rows), vec![5, 4]);
        assert_eq!(vm.total_count, 6);
        assert_eq!(vm.page_count, 3);
    }

    #[test]
    fn test_filters_before_paginating() {
        // Filtering the first page only would find a single Alpha row
        let criteria = FilterCriteria::new().with_exact("projectName", "alpha");
        let vm = build_view_model(&mixed(), &criteria, &SortSpec::ascending("projectName"), PageWindow::new(3));
        assert_eq!(ids(&vm.rows), vec![5, 4, 2]);
        assert_eq!(vm.total_count, 3);
        assert_eq!(vm.page_count, 1);
    }

    #[test]
    fn test_total_count_is_pre_pagination() {
        let window = PageWindow { page_index: 1, page_size: 4 };
        let vm = build_view_model(&mixed(), &FilterCriteria::new(), &SortSpec::ascending("projectName"), window);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.total_count, 6);
        assert_eq!(vm.first_row_number(), 5);
    }

    #[test]
    fn test_out_of_range_window_is_clamped() {
        let window = PageWindow { page_index: 9, page_size: 4 };
        let vm = build_view_model(&mixed(), &FilterCriteria::new(), &SortSpec::ascending("projectName"), window);
        assert_eq!(vm.window.page_index, 1);
        assert_eq!(vm.rows.len(), 2);

        let criteria = FilterCriteria::new().with_status(ValidationStatus::from_code("validé"));
        let vm = build_view_model(&mixed(), &criteria, &SortSpec::ascending("projectName"), window);
        assert_eq!(vm.window.page_index, 0);
        assert_eq!(ids(&vm.rows), vec![3]);
    }
}
