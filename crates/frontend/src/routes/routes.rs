use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_timesheet::ui::admin_list::AdminTimesheetsPage;
use crate::domain::a001_timesheet::ui::details::{TimesheetCreatePage, TimesheetEditPage};
use crate::domain::a001_timesheet::ui::list::MyTimesheetsPage;
use crate::domain::a002_project::ui::list::ProjectsListPage;
use crate::domain::a003_assignment::ui::list::AssignmentsListPage;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;
use crate::usecases::u501_timesheet_download::TimesheetDownloadPage;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page__content">"Page introuvable"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/timesheets") view=MyTimesheetsPage />
                    <Route path=path!("/timesheets/new") view=TimesheetCreatePage />
                    <Route path=path!("/timesheets/edit/:id") view=TimesheetEditPage />
                    <Route path=path!("/admin/users") view=UsersListPage />
                    <Route path=path!("/admin/timesheets") view=AdminTimesheetsPage />
                    <Route path=path!("/admin/projects") view=ProjectsListPage />
                    <Route path=path!("/admin/assignments") view=AssignmentsListPage />
                    <Route path=path!("/admin/download") view=TimesheetDownloadPage />
                </Routes>
            </Shell>
        </Router>
    }
}
