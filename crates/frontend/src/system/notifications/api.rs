use contracts::system::notifications::{Notification, NotificationScope};

use crate::shared::api_utils::{get_json, post_empty, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

pub async fn fetch_notifications(
    api: &ApiConfig,
    session: &Session,
    scope: NotificationScope,
) -> Result<Vec<Notification>, ApiError> {
    get_json(api, session, &scope.list_path()).await
}

pub async fn mark_notification_read(
    api: &ApiConfig,
    session: &Session,
    scope: NotificationScope,
    id: i64,
) -> Result<(), ApiError> {
    post_empty(api, session, &scope.mark_read_path(id)).await
}
