//! Project repository for database operations.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, sea_query::Expr,
};

use crate::entities::projects;
use sitebook_core::project::{Project, ProjectInput};

/// Project repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists every project, oldest identifier first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Project>, DbErr> {
        let models = projects::Entity::find()
            .order_by_asc(projects::Column::ProjectId)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    /// Finds a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, project_id: i64) -> Result<Option<Project>, DbErr> {
        let model = projects::Entity::find_by_id(project_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(to_domain))
    }

    /// Finds the first project with exactly this name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(&self, project_name: &str) -> Result<Option<Project>, DbErr> {
        let model = projects::Entity::find()
            .filter(projects::Column::ProjectName.eq(project_name))
            .order_by_asc(projects::Column::ProjectId)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }

    /// Inserts a project whose identifier has already been assigned and
    /// returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails, including a primary key
    /// collision.
    pub async fn create(&self, project: Project) -> Result<Project, DbErr> {
        let active_model = projects::ActiveModel {
            project_id: Set(project.project_id),
            project_name: Set(project.project_name),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(to_domain(model))
    }

    /// Overwrites the mutable fields of a project, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, project_id: i64, input: ProjectInput) -> Result<u64, DbErr> {
        let result = projects::Entity::update_many()
            .col_expr(
                projects::Column::ProjectName,
                Expr::value(input.project_name),
            )
            .filter(projects::Column::ProjectId.eq(project_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a project, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails, e.g. when expenses still
    /// reference the project.
    pub async fn delete(&self, project_id: i64) -> Result<u64, DbErr> {
        let result = projects::Entity::delete_by_id(project_id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

/// Convert database model to domain project.
fn to_domain(model: projects::Model) -> Project {
    Project {
        project_id: model.project_id,
        project_name: model.project_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(project_id: i64, project_name: &str) -> projects::Model {
        projects::Model {
            project_id,
            project_name: project_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Dock"), model(2, "Barn")]])
            .into_connection();
        let repo = ProjectRepository::new(Arc::new(db));

        let projects = repo.list().await.expect("list");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].project_name, "Barn");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();
        let repo = ProjectRepository::new(Arc::new(db));

        assert_eq!(repo.find_by_id(5).await.expect("query"), None);
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1_700_000_000, "Riverside Remodel")]])
            .into_connection();
        let repo = ProjectRepository::new(Arc::new(db));

        let created = repo
            .create(Project {
                project_id: 1_700_000_000,
                project_name: "Riverside Remodel".to_string(),
            })
            .await
            .expect("create");

        assert_eq!(created.project_id, 1_700_000_000);
        assert_eq!(created.project_name, "Riverside Remodel");
    }

    #[tokio::test]
    async fn test_update_and_delete_report_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = ProjectRepository::new(Arc::new(db));

        let updated = repo
            .update(
                3,
                ProjectInput {
                    project_name: "Renamed".to_string(),
                },
            )
            .await
            .expect("update");
        assert_eq!(updated, 1);

        let deleted = repo.delete(99).await.expect("delete");
        assert_eq!(deleted, 0);
    }
}
