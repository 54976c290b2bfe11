use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Read once at startup; pages pick it up with `use_config`
    provide_context(load_config());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
