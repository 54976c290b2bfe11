use contracts::system::notifications::{
    format_day_heading, format_relative, DayGroup, MarkReadTicket, Notification,
    NotificationFeed, NotificationScope,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;
use crate::shared::date_utils::now;
use crate::shared::deferred::DeferredTask;
use crate::shared::icons::icon;
use crate::system::auth::context::{handle_api_error, use_auth};
use crate::system::notifications::api;

/// Navbar bell with unread badge and a per-day dropdown.
///
/// Opening the menu starts the mark-read countdown; closing it first, or
/// leaving the page, cancels it.
#[component]
pub fn NotificationBell(scope: NotificationScope) -> impl IntoView {
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();
    let api_config = StoredValue::new(config.api.clone());
    let delay_ms = config.notifications.mark_read_delay_ms(scope);

    let feed = RwSignal::new(NotificationFeed::new());
    let countdown: StoredValue<Option<DeferredTask>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(session) = auth_state.with(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_notifications(&api_config.get_value(), &session, scope).await {
                Ok(items) => {
                    log::debug!("Loaded {} notifications", items.len());
                    feed.try_update(|f| f.replace(items));
                }
                Err(e) => {
                    log::warn!("Failed to fetch notifications: {}", e);
                    handle_api_error(set_auth_state, &e);
                }
            }
        });
    });

    let report_read = move |ids: Vec<i64>| {
        let Some(session) = auth_state.with_untracked(|s| s.session.clone()) else {
            return;
        };
        spawn_local(async move {
            let api_config = api_config.get_value();
            let mut acked = Vec::with_capacity(ids.len());
            for &id in &ids {
                match api::mark_notification_read(&api_config, &session, scope, id).await {
                    Ok(()) => acked.push(id),
                    Err(e) => {
                        log::warn!("Failed to mark notification {} as read: {}", id, e);
                        handle_api_error(set_auth_state, &e);
                    }
                }
            }
            if let Some(failed) = feed.try_update(|f| f.confirm_partial(&ids, &acked)) {
                if !failed.is_empty() {
                    log::debug!("{} notification(s) left unread: {:?}", failed.len(), failed);
                }
            }
        });
    };

    let start_countdown = move |ticket: MarkReadTicket| {
        let task = DeferredTask::schedule(delay_ms, move || {
            if let Some(ids) = feed.try_update(|f| f.fire(ticket)).flatten() {
                report_read(ids);
            }
        });
        // Replacing drops, and so cancels, any earlier countdown
        countdown.set_value(Some(task));
    };

    let toggle_menu = move |_: leptos::ev::MouseEvent| {
        if feed.with_untracked(|f| f.is_menu_open()) {
            countdown.set_value(None);
            feed.update(|f| f.close_menu());
        } else if let Some(ticket) = feed.try_update(|f| f.open_menu()).flatten() {
            start_countdown(ticket);
        }
    };

    on_cleanup(move || {
        countdown.try_update_value(|task| {
            if let Some(task) = task.as_mut() {
                task.cancel();
            }
        });
        feed.try_update_untracked(|f| f.dispose());
    });

    view! {
        <div class="notification-bell">
            <button
                class="notification-bell__button"
                title="Notifications"
                on:click=toggle_menu
            >
                {icon("bell")}
                <Show when=move || feed.with(|f| f.unread_count() > 0)>
                    <span class="notification-bell__count">
                        {move || feed.with(|f| f.unread_count()).to_string()}
                    </span>
                </Show>
            </button>
            <Show when=move || feed.with(|f| f.is_menu_open())>
                <div class="notification-bell__menu">
                    {move || {
                        let groups = feed.with(|f| f.groups());
                        if groups.is_empty() {
                            view! {
                                <div class="notification-bell__empty">"Aucune notification"</div>
                            }
                            .into_any()
                        } else {
                            groups.into_iter().map(day_group_view).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

fn day_group_view(group: DayGroup) -> impl IntoView {
    let heading = group
        .day
        .map(format_day_heading)
        .unwrap_or_else(|| "Date inconnue".to_string());
    let current = now();

    view! {
        <div class="notification-bell__group">
            <div class="notification-bell__day">{heading}</div>
            {group
                .items
                .into_iter()
                .map(|n| notification_view(n, current))
                .collect_view()}
        </div>
    }
}

fn notification_view(notification: Notification, current: chrono::NaiveDateTime) -> impl IntoView {
    let class = if notification.is_read {
        "notification-bell__item"
    } else {
        "notification-bell__item notification-bell__item--unread"
    };
    let when = notification
        .created_at()
        .map(|ts| format_relative(ts, current))
        .unwrap_or_default();

    view! {
        <div class=class>
            <div class="notification-bell__message">{notification.message}</div>
            <div class="notification-bell__time">{when}</div>
        </div>
    }
}
