//! Expense repository for database operations.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, sea_query::Expr,
};

use crate::entities::expenses;
use sitebook_core::expense::{Expense, ExpenseInput};
use sitebook_core::receipt::{ReceiptError, ReceiptRepository};

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: Arc<DatabaseConnection>,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, expense_id: i64) -> Result<Option<Expense>, DbErr> {
        let model = expenses::Entity::find_by_id(expense_id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(to_domain))
    }

    /// Lists the expenses of a project, oldest identifier first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(&self, project_id: i64) -> Result<Vec<Expense>, DbErr> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::ProjectId.eq(project_id))
            .order_by_asc(expenses::Column::ExpenseId)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    /// Inserts an expense whose identifier has already been assigned and
    /// returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails (key collision, unknown
    /// project when the schema enforces the reference).
    pub async fn create(&self, expense: Expense) -> Result<Expense, DbErr> {
        let active_model = expenses::ActiveModel {
            expense_id: Set(expense.expense_id),
            expense_name: Set(expense.expense_name),
            expense_cost: Set(expense.expense_cost),
            expense_receipt_url: Set(expense.expense_receipt_url),
            project_id: Set(expense.project_id),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(to_domain(model))
    }

    /// Overwrites every mutable field of an expense, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(&self, expense_id: i64, input: ExpenseInput) -> Result<u64, DbErr> {
        let result = expenses::Entity::update_many()
            .col_expr(expenses::Column::ExpenseName, Expr::value(input.expense_name))
            .col_expr(expenses::Column::ExpenseCost, Expr::value(input.expense_cost))
            .col_expr(
                expenses::Column::ExpenseReceiptUrl,
                Expr::value(input.expense_receipt_url),
            )
            .col_expr(expenses::Column::ProjectId, Expr::value(input.project_id))
            .filter(expenses::Column::ExpenseId.eq(expense_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets only the receipt URL of an expense, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_receipt_url(&self, expense_id: i64, url: &str) -> Result<u64, DbErr> {
        let result = expenses::Entity::update_many()
            .col_expr(expenses::Column::ExpenseReceiptUrl, Expr::value(url))
            .filter(expenses::Column::ExpenseId.eq(expense_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an expense, returning the rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, expense_id: i64) -> Result<u64, DbErr> {
        let result = expenses::Entity::delete_by_id(expense_id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

impl ReceiptRepository for ExpenseRepository {
    async fn attach_receipt(&self, expense_id: i64, url: String) -> Result<u64, ReceiptError> {
        self.set_receipt_url(expense_id, &url)
            .await
            .map_err(|e| ReceiptError::repository(e.to_string()))
    }
}

/// Convert database model to domain expense.
fn to_domain(model: expenses::Model) -> Expense {
    Expense {
        expense_id: model.expense_id,
        expense_name: model.expense_name,
        expense_cost: model.expense_cost,
        expense_receipt_url: model.expense_receipt_url,
        project_id: model.project_id,
    }
}
