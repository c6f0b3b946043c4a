//! Expense routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use tracing::info;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, RecordId},
};
use sitebook_core::expense::{Expense, ExpenseInput};
use sitebook_db::ExpenseRepository;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-expense", post(create_expense))
        .route("/get-expense/{expense_id}", get(get_expense))
        .route(
            "/get-project-expenses/{project_id}",
            get(list_project_expenses),
        )
        .route("/update-expense/{expense_id}", put(update_expense))
        .route("/delete-expense/{expense_id}", delete(delete_expense))
}

/// POST /create-expense - Create an expense with a server-assigned id.
///
/// The referenced project is not checked here; the schema decides.
async fn create_expense(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ExpenseInput>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ExpenseRepository::new(state.db.clone());
    let expense = repo
        .create(payload.into_expense(state.ids.next_id()))
        .await?;

    info!(
        expense_id = expense.expense_id,
        project_id = expense.project_id,
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET `/get-expense/{expense_id}` - Zero or one expense, always as an array.
async fn get_expense(
    State(state): State<AppState>,
    RecordId(expense_id): RecordId,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let repo = ExpenseRepository::new(state.db.clone());
    let expense = repo.find_by_id(expense_id).await?;
    Ok(Json(expense.into_iter().collect()))
}

/// GET `/get-project-expenses/{project_id}` - Every expense of a project.
async fn list_project_expenses(
    State(state): State<AppState>,
    RecordId(project_id): RecordId,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let repo = ExpenseRepository::new(state.db.clone());
    Ok(Json(repo.list_by_project(project_id).await?))
}

/// PUT `/update-expense/{expense_id}` - Overwrite every mutable field.
///
/// Answers 201 with the affected row count.
async fn update_expense(
    State(state): State<AppState>,
    RecordId(expense_id): RecordId,
    JsonBody(payload): JsonBody<ExpenseInput>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ExpenseRepository::new(state.db.clone());
    let rows = repo.update(expense_id, payload).await?;

    info!(expense_id, rows, "Expense updated");

    Ok((StatusCode::CREATED, Json(rows)))
}

/// DELETE `/delete-expense/{expense_id}` - Answers 201 with the affected row count.
async fn delete_expense(
    State(state): State<AppState>,
    RecordId(expense_id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ExpenseRepository::new(state.db.clone());
    let rows = repo.delete(expense_id).await?;

    info!(expense_id, rows, "Expense deleted");

    Ok((StatusCode::CREATED, Json(rows)))
}
