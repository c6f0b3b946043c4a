//! Project expenses.

mod types;

pub use types::{Expense, ExpenseInput};
