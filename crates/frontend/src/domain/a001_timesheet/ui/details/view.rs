use std::rc::Rc;

use contracts::domain::a001_timesheet::dto::MISSING_PROJECT_LABEL;
use contracts::domain::a001_timesheet::form::MAX_HOURS_PER_DAY;
use contracts::domain::a002_project::Project;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use super::view_model::TimesheetDetailsViewModel;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn TimesheetCreatePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <TimesheetDetails id=None />
        </RequireAuth>
    }
}

#[component]
pub fn TimesheetEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    view! {
        <RequireAuth>
            {match id {
                Some(id) => view! { <TimesheetDetails id=Some(id) /> }.into_any(),
                None => view! { <div class="alert alert--error">"Timesheet introuvable"</div> }.into_any(),
            }}
        </RequireAuth>
    }
}

#[component]
fn TimesheetDetails(id: Option<i64>) -> impl IntoView {
    let config = use_config();
    let vm = TimesheetDetailsViewModel::new(config.api.clone());
    vm.load(id);

    let navigate = use_navigate();
    let back_to_list: Rc<dyn Fn(())> =
        Rc::new(move |_| navigate("/timesheets", NavigateOptions::default()));
    let on_saved = back_to_list.clone();
    let back_to_list = StoredValue::new_local(back_to_list);
    let on_saved = StoredValue::new_local(on_saved);

    view! {
        <PageFrame page_id="a001_timesheet--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container timesheet-details">
                <div class="details-header">
                    {icon("timesheets")}
                    <h3>
                        {move || if vm.is_edit_mode() { "Modifier le timesheet" } else { "Nouveau timesheet" }}
                    </h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="project">"Projet"</label>
                        <select
                            id="project"
                            on:change=move |ev| vm.select_project(event_target_value(&ev).parse::<i64>().ok())
                            disabled=move || vm.saving.get()
                        >
                            <option value="" selected=move || vm.form.with(|f| f.project_id.is_none())>
                                "Sélectionner un projet"
                            </option>
                            <For
                                each=move || vm.projects.get()
                                key=|p: &Project| p.id
                                children=move |project| {
                                    let project_id = project.id;
                                    let label = project
                                        .project_name
                                        .clone()
                                        .unwrap_or_else(|| MISSING_PROJECT_LABEL.to_string());
                                    view! {
                                        <option
                                            value=project_id.to_string()
                                            selected=move || vm.form.with(|f| f.project_id == Some(project_id))
                                        >
                                            {label}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="date">"Date"</label>
                        <input
                            type="date"
                            id="date"
                            prop:value=move || vm.form.with(|f| f.date.clone())
                            on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                            disabled=move || vm.saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="hours_worked">"Heures travaillées"</label>
                        <input
                            type="number"
                            id="hours_worked"
                            min="0"
                            max=MAX_HOURS_PER_DAY.to_string()
                            step="0.25"
                            prop:value=move || vm.form.with(|f| f.hours_worked.clone())
                            on:input=move |ev| vm.form.update(|f| f.hours_worked = event_target_value(&ev))
                            disabled=move || vm.saving.get()
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved.get_value())
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || match (vm.saving.get(), vm.is_edit_mode()) {
                            (true, _) => " Enregistrement...",
                            (false, true) => " Enregistrer les modifications",
                            (false, false) => " Soumettre",
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| (back_to_list.get_value())(())>
                        {icon("x")}
                        " Retour à la liste"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
