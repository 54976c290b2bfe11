//! Top bar: role navigation, notification bell and logout.

use contracts::enums::Role;
use contracts::system::notifications::NotificationScope;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::navbar::Navbar;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::notifications::ui::NotificationBell;

fn bell_scope(role: Role) -> NotificationScope {
    match role {
        Role::Admin => NotificationScope::Admin,
        Role::User => NotificationScope::User,
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Only changes on login/logout, so the bell is not rebuilt on every auth update
    let role = Memo::new(move |_| auth_state.with(|s| s.session.as_ref().map(|s| s.role)));

    let logout = move |_: leptos::ev::MouseEvent| {
        log::info!("Signing out");
        sign_out(set_auth_state);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Timesheets"</span>
            </div>

            {move || role.get().map(|role| {
                let logout = logout.clone();
                view! {
                    <Navbar role=role />
                    <div class="top-header__actions">
                        <NotificationBell scope=bell_scope(role) />
                        <div class="top-header__user">
                            {icon("users")}
                            <span>{role.code()}</span>
                        </div>
                        <button class="top-header__icon-btn" on:click=logout title="Déconnexion">
                            {icon("logout")}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_scope_follows_role() {
        assert_eq!(bell_scope(Role::Admin), NotificationScope::Admin);
        assert_eq!(bell_scope(Role::User), NotificationScope::User);
    }
}
