//! List page helpers: sortable headers, filter inputs and tags, pagination wiring
use contracts::enums::ValidationStatus;
use contracts::shared::list_pipeline::{ListRecord, ListState, ListViewModel, MatchMode, SortSpec};
use leptos::prelude::*;

use crate::shared::components::filter_panel::FilterTag;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_options;
use crate::shared::date_utils::format_naive_date;

/// CSS class of the sort indicator span
pub fn get_sort_class(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Clickable header cell content bound to a list state
#[component]
pub fn SortableHeader<R>(
    state: RwSignal<ListState<R>>,
    field: &'static str,
    label: &'static str,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    view! {
        <div
            class="table__sortable-header"
            style="cursor:pointer;"
            on:click=move |_| state.update(|s| s.toggle_sort(field))
        >
            {label}
            <span class=move || sort.with(|s| get_sort_class(s, field))>
                {move || sort.with(|s| s.indicator(field))}
            </span>
        </div>
    }
}

/// Current page, recomputed whenever the state changes
pub fn view_model_memo<R>(state: RwSignal<ListState<R>>) -> Memo<ListViewModel<R>>
where
    R: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| s.view_model()))
}

/// Pagination controls wired to a list state
#[component]
pub fn ListPagination<R>(
    state: RwSignal<ListState<R>>,
    view_model: Memo<ListViewModel<R>>,
    page_size_options: Vec<usize>,
) -> impl IntoView
where
    R: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <PaginationControls
            current_page=Signal::derive(move || view_model.with(|vm| vm.window.page_index))
            total_pages=Signal::derive(move || view_model.with(|vm| vm.page_count))
            total_count=Signal::derive(move || view_model.with(|vm| vm.total_count))
            page_size=Signal::derive(move || view_model.with(|vm| vm.window.page_size))
            on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
            on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
            page_size_options=page_size_options
        />
    }
}

/// One chip per active criterion; removing a chip clears that criterion.
///
/// `labels` maps field selectors to their display names.
#[component]
pub fn CriteriaTags<R>(
    state: RwSignal<ListState<R>>,
    labels: &'static [(&'static str, &'static str)],
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    move || {
        let criteria = state.with(|s| s.criteria.clone());
        let mut tags: Vec<AnyView> = Vec::new();

        for filter in criteria.fields().iter().filter(|f| f.is_active()) {
            let field = filter.field().to_string();
            let label = labels
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, label)| *label)
                .unwrap_or("Filtre");
            tags.push(
                view! {
                    <FilterTag
                        label=format!("{} : {}", label, filter.value())
                        on_remove=Callback::new(move |_| {
                            state.update(|s| s.update_criteria(|c| c.clear_field(&field)))
                        })
                    />
                }
                .into_any(),
            );
        }

        if let Some(status) = criteria.status {
            tags.push(
                view! {
                    <FilterTag
                        label=format!("Statut : {}", status.display_name())
                        on_remove=Callback::new(move |_| {
                            state.update(|s| s.update_criteria(|c| c.status = None))
                        })
                    />
                }
                .into_any(),
            );
        }

        if let Some(range) = criteria.date_range.filter(|r| r.is_bounded()) {
            let label = format!(
                "Période : {} – {}",
                range.start.map(format_naive_date).unwrap_or_default(),
                range.end.map(format_naive_date).unwrap_or_default()
            );
            tags.push(
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| {
                            state.update(|s| s.update_criteria(|c| c.date_range = None))
                        })
                    />
                }
                .into_any(),
            );
        }

        tags
    }
}

/// Text box bound to one field filter of a list state
#[component]
pub fn CriterionInput<R>(
    state: RwSignal<ListState<R>>,
    field: &'static str,
    mode: MatchMode,
    #[prop(into)]
    placeholder: String,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    view! {
        <input
            type="text"
            class="form-input"
            placeholder=placeholder
            prop:value=move || state.with(|s| s.criteria.field_value(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.update_criteria(|c| c.set_field(field, mode, value)));
            }
        />
    }
}

/// Dropdown bound to an exact-match field filter; the empty option clears it
#[component]
pub fn CriterionSelect<R>(
    state: RwSignal<ListState<R>>,
    field: &'static str,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    all_label: String,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    view! {
        <select
            class="form-select"
            prop:value=move || state.with(|s| s.criteria.field_value(field).to_string())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.update_criteria(|c| c.set_field(field, MatchMode::Exact, value)));
            }
        >
            <option value="">{all_label}</option>
            {move || options.get().into_iter().map(|option| {
                let selected = state.with(|s| s.criteria.field_value(field) == option);
                view! { <option value=option.clone() selected=selected>{option.clone()}</option> }
            }).collect_view()}
        </select>
    }
}

/// Validation status dropdown
#[component]
pub fn StatusSelect<R>(state: RwSignal<ListState<R>>) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    view! {
        <select
            class="form-select"
            prop:value=move || state.with(|s| s.criteria.status.map(|st| st.code()).unwrap_or("").to_string())
            on:change=move |ev| {
                let status = ValidationStatus::from_code(&event_target_value(&ev));
                state.update(|s| s.update_criteria(|c| c.status = status));
            }
        >
            {status_options().into_iter().map(|(code, label)| {
                let selected = move || state.with(|s| s.criteria.status.map(|st| st.code()).unwrap_or("") == code);
                view! { <option value=code selected=selected>{label}</option> }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_class() {
        let sort = SortSpec::ascending("projectName");
        assert_eq!(get_sort_class(&sort, "projectName"), "table__sort-indicator table__sort-indicator--active");
        assert_eq!(get_sort_class(&sort, "date"), "table__sort-indicator");
    }
}
