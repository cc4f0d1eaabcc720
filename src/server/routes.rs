//! Request handlers. Each handler runs one blocking filesystem operation and
//! turns the outcome into a JSON or HTML response.

use super::page::{render_error_page, render_page, render_tree_view};
use super::AppState;
use crate::error::ApiError;
use crate::tree::TreeSnapshot;
use crate::workspace::{
    CreateRequest, DeleteRequest, EditRequest, FileCommandService, ListResponse, MessageResponse,
    RenameRequest, RenameResponse, UploadRequest, UploadResponse,
};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

/// Run `op` against the service on the blocking pool.
async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&FileCommandService) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let service = state.service.clone();
    tokio::task::spawn_blocking(move || op(service.as_ref())).await?
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

fn form(payload: Result<Multipart, MultipartRejection>) -> Result<Multipart, ApiError> {
    payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

/// Body-limit overflows keep their 413; every other form error is a 400.
fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::Validation(err.body_text())
    }
}

fn log_failure(operation: &str, err: &ApiError) {
    if err.status().is_server_error() {
        error!(operation, error = %err, "Request failed");
    } else {
        warn!(operation, error = %err, "Request rejected");
    }
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
        .into_response()
}

pub async fn list_contents(State(state): State<AppState>) -> Response {
    match run_blocking(&state, |svc| svc.list()).await {
        Ok(items) => Json(ListResponse { items }).into_response(),
        Err(err) => {
            log_failure("list", &err);
            (
                err.status(),
                Json(json!({ "message": err.to_string(), "items": [] })),
            )
                .into_response()
        }
    }
}

pub async fn tree(State(state): State<AppState>) -> Result<Json<TreeSnapshot>, ApiError> {
    run_blocking(&state, |svc| svc.snapshot())
        .await
        .map(Json)
        .inspect_err(|err| log_failure("tree", err))
}

pub async fn tree_view(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    run_blocking(&state, |svc| svc.snapshot())
        .await
        .map(|snapshot| Html(render_tree_view(&snapshot)))
        .inspect_err(|err| log_failure("tree-view", err))
}

pub async fn index(State(state): State<AppState>) -> Response {
    match run_blocking(&state, |svc| svc.snapshot()).await {
        Ok(snapshot) => Html(render_page(&snapshot, &state.config)).into_response(),
        Err(err) => {
            log_failure("index", &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error_page(&err.to_string())),
            )
                .into_response()
        }
    }
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = body(payload)?;
    run_blocking(&state, move |svc| svc.create(&req))
        .await
        .map(Json)
        .inspect_err(|err| log_failure("create", err))
}

pub async fn delete_item(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = body(payload)?;
    run_blocking(&state, move |svc| svc.delete(&req))
        .await
        .map(Json)
        .inspect_err(|err| log_failure("delete", err))
}

pub async fn edit_file(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = body(payload)?;
    run_blocking(&state, move |svc| svc.edit(&req))
        .await
        .map(Json)
        .inspect_err(|err| log_failure("edit", err))
}

pub async fn rename_item(
    State(state): State<AppState>,
    payload: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<RenameResponse>, ApiError> {
    let req = body(payload)?;
    run_blocking(&state, move |svc| svc.rename(&req))
        .await
        .map(Json)
        .inspect_err(|err| log_failure("rename", err))
}

pub async fn upload_file(
    State(state): State<AppState>,
    payload: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let multipart = form(payload).inspect_err(|err| log_failure("upload", err))?;
    let req = read_upload(multipart)
        .await
        .inspect_err(|err| log_failure("upload", err))?;
    run_blocking(&state, move |svc| svc.upload(&req))
        .await
        .map(Json)
        .inspect_err(|err| log_failure("upload", err))
}

/// Buffer the `path` and `file` parts of an upload form.
async fn read_upload(mut multipart: Multipart) -> Result<UploadRequest, ApiError> {
    let mut path = "/".to_string();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("path") => {
                path = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
            }
            Some("file") => {
                let Some(file_name) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                file = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    match file {
        Some((file_name, bytes)) if !file_name.is_empty() => Ok(UploadRequest {
            path,
            file_name,
            bytes,
        }),
        _ => Err(ApiError::Validation(
            "No valid file data provided".to_string(),
        )),
    }
}
