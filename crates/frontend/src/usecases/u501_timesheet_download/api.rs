use anyhow::anyhow;
use contracts::domain::a002_project::UserProject;
use contracts::usecases::u501_timesheet_download::{
    attachment_file_name, projects_for_user_path, DownloadOutcome, DownloadTimesheetsQuery,
    DOWNLOAD_PATH,
};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;

use crate::shared::api_utils::{api_url, decode_json, ensure_ok, get_json, path_segment, ApiError};
use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Projects the selected user is assigned to
pub async fn fetch_projects_for_user(
    api: &ApiConfig,
    session: &Session,
    user_id: &str,
) -> Result<Vec<UserProject>, ApiError> {
    get_json(api, session, &projects_for_user_path(&path_segment(user_id))).await
}

/// Request the workbook.
///
/// The server answers with JSON instead of a file when the period still has
/// timesheets awaiting validation; repeat with [`DownloadTimesheetsQuery::confirmed`]
/// to export anyway.
pub async fn download_timesheets(
    api: &ApiConfig,
    session: &Session,
    query: &DownloadTimesheetsQuery,
) -> Result<DownloadOutcome, ApiError> {
    let query_string = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    let url = format!("{}?{}", api_url(api, DOWNLOAD_PATH), query_string);

    let response = Request::get(&url)
        .header("Authorization", &session.bearer())
        .send()
        .await?;
    let response = ensure_ok(response).await?;

    let headers = response.headers();
    let is_json = headers
        .get("content-type")
        .map_or(false, |ct| ct.contains("application/json"));
    if is_json {
        return decode_json(response)
            .await
            .map(DownloadOutcome::PendingValidation);
    }

    let file_name = attachment_file_name(headers.get("content-disposition").as_deref());
    let bytes = response.binary().await?;
    log::debug!("Downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(DownloadOutcome::File { file_name, bytes })
}

/// Hand the bytes to the browser as a file download
pub fn save_file(file_name: &str, bytes: &[u8]) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow!("blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("object url: {:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("anchor: not an <a> element"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| anyhow!("revoke: {:?}", e))?;
    Ok(())
}
