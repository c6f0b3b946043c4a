//! Expense types.

use serde::{Deserialize, Serialize};

/// A single cost booked against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier.
    pub expense_id: i64,
    /// Display name.
    pub expense_name: String,
    /// Cost in the smallest currency unit.
    pub expense_cost: i64,
    /// Public URL of the uploaded receipt, empty until one is uploaded.
    pub expense_receipt_url: String,
    /// Owning project.
    pub project_id: i64,
}

/// Body accepted by expense create and update.
///
/// Every field is written unconditionally on update, so omitted fields reset
/// to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpenseInput {
    /// Display name.
    pub expense_name: String,
    /// Cost in the smallest currency unit.
    pub expense_cost: i64,
    /// Receipt URL.
    pub expense_receipt_url: String,
    /// Owning project.
    pub project_id: i64,
}

impl ExpenseInput {
    /// Builds the expense that a create with `expense_id` should store.
    #[must_use]
    pub fn into_expense(self, expense_id: i64) -> Expense {
        Expense {
            expense_id,
            expense_name: self.expense_name,
            expense_cost: self.expense_cost,
            expense_receipt_url: self.expense_receipt_url,
            project_id: self.project_id,
        }
    }
}
