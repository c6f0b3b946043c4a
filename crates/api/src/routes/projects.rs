//! Project routes.

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
use sitebook_core::project::{Project, ProjectInput};
use sitebook_db::ProjectRepository;

/// Creates the project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get-projects", get(list_projects))
        .route("/get-project/{project_id}", get(get_project))
        .route("/create-project", post(create_project))
        .route("/update-project/{project_id}", put(update_project))
        .route("/delete-project/{project_id}", delete(delete_project))
}

/// GET /get-projects - List every project.
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let repo = ProjectRepository::new(state.db.clone());
    Ok(Json(repo.list().await?))
}

/// GET `/get-project/{project_id}` - Zero or one project, always as an array.
async fn get_project(
    State(state): State<AppState>,
    RecordId(project_id): RecordId,
) -> Result<Json<Vec<Project>>, ApiError> {
    let repo = ProjectRepository::new(state.db.clone());
    let project = repo.find_by_id(project_id).await?;
    Ok(Json(project.into_iter().collect()))
}

/// POST /create-project - Create a project with a server-assigned id.
async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProjectInput>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.db.clone());
    let project = repo
        .create(payload.into_project(state.ids.next_id()))
        .await?;

    info!(project_id = project.project_id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT `/update-project/{project_id}` - Overwrite the project name.
///
/// Answers 201 with the affected row count.
async fn update_project(
    State(state): State<AppState>,
    RecordId(project_id): RecordId,
    JsonBody(payload): JsonBody<ProjectInput>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.db.clone());
    let rows = repo.update(project_id, payload).await?;

    info!(project_id, rows, "Project updated");

    Ok((StatusCode::CREATED, Json(rows)))
}

/// DELETE `/delete-project/{project_id}` - Answers 201 with the affected row count.
async fn delete_project(
    State(state): State<AppState>,
    RecordId(project_id): RecordId,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.db.clone());
    let rows = repo.delete(project_id).await?;

    info!(project_id, rows, "Project deleted");

    Ok((StatusCode::CREATED, Json(rows)))
}
