use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{sign_in, use_auth};
use crate::system::auth::session::Session;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let (user_name, set_user_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Already signed in: go straight to the role's home page
    Effect::new(move |_| {
        if let Some(session) = auth_state.with(|s| s.session.clone()) {
            navigate(session.role.home_path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            user_name: user_name.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        let api_config = config.api.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = api::login(&api_config, &request)
                .await
                .map_err(|e| e.to_string())
                .and_then(|response| {
                    let role = response.validate()?;
                    Ok(Session::new(response.token, role))
                });

            match result {
                Ok(session) => {
                    log::info!("Signed in as {}", session.role.code());
                    // The effect above navigates once the state changes
                    sign_in(set_auth_state, session);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Échec de la connexion : {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Timesheets"</h1>
                    <h2>"Connexion"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="user_name">"Nom d'utilisateur"</label>
                            <input
                                type="text"
                                id="user_name"
                                value=move || user_name.get()
                                on:input=move |ev| set_user_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Mot de passe"</label>
                            <input
                                type="password"
                                id="password"
                                value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group form-group--inline">
                            <input
                                type="checkbox"
                                id="remember_me"
                                prop:checked=move || remember_me.get()
                                on:change=move |_| set_remember_me.update(|v| *v = !*v)
                            />
                            <label for="remember_me">"Se souvenir de moi"</label>
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Connexion..." } else { "Se connecter" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
