//! Receipt upload route.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::{AppState, ApiError, extractors::RecordId};
use sitebook_core::receipt::ReceiptService;
use sitebook_db::ExpenseRepository;

/// Multipart field carrying the receipt file.
const FILE_FIELD: &str = "file";

/// Creates the receipt routes.
///
/// Uploads are streamed, so axum's default request body limit is lifted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload-receipt/{expense_id}", post(upload_receipt))
        .layer(DefaultBodyLimit::disable())
}

/// Response for a completed upload.
#[derive(Debug, Serialize)]
pub struct UploadReceiptResponse {
    /// Always `"Upload successful"`.
    pub message: &'static str,
    /// Public URL of the stored receipt.
    pub url: String,
    /// Storage key.
    pub key: String,
    /// Bytes stored.
    pub size: u64,
    /// Expense rows that now point at the receipt.
    pub expense_updated: u64,
}

/// POST `/upload-receipt/{expense_id}` - Stream the `file` field into storage
/// and record its URL on the expense.
async fn upload_receipt(
    State(state): State<AppState>,
    RecordId(expense_id): RecordId,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut field = loop {
        match multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            Some(field) if field.name() == Some(FILE_FIELD) => break field,
            Some(_) => {}
            None => return Err(ApiError::bad_request("No file uploaded")),
        }
    };

    let repo = ExpenseRepository::new(state.db.clone());
    let service = ReceiptService::new(state.storage.clone(), Arc::new(repo));

    let mut upload = service.begin(expense_id, Utc::now()).await?;
    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                if let Err(e) = upload.write(chunk).await {
                    warn!(key = upload.key(), "Receipt write failed, aborting upload");
                    upload.abort().await;
                    return Err(e.into());
                }
            }
            Ok(None) => break,
            Err(e) => {
                upload.abort().await;
                return Err(ApiError::bad_request(e.body_text()));
            }
        }
    }
    let receipt = service.finish(upload).await?;

    info!(
        expense_id,
        key = %receipt.key,
        size = receipt.size,
        expense_updated = receipt.expense_updated,
        provider = state.storage.provider_name(),
        "Receipt uploaded"
    );

    Ok((
        StatusCode::OK,
        Json(UploadReceiptResponse {
            message: "Upload successful",
            url: receipt.url,
            key: receipt.key,
            size: receipt.size,
            expense_updated: receipt.expense_updated,
        }),
    ))
}
