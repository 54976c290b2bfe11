use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children only for a signed-in user, otherwise goes to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.session.is_some())
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the Admin role
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=move || {
                if auth_state.with(|s| s.session.is_some()) {
                    view! { <div class="alert alert--error">"Accès refusé : droits administrateur requis."</div> }.into_any()
                } else {
                    view! { <Redirect path="/login" /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
