//! `SeaORM` Entity for expenses table.

use sea_orm::entity::prelude::*;

/// A row of `expenses`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    /// Server-assigned identifier.
    pub expense_id: i64,
    /// Display name.
    pub expense_name: String,
    /// Cost in the smallest currency unit.
    pub expense_cost: i64,
    /// Receipt URL, empty until a receipt is uploaded.
    pub expense_receipt_url: String,
    /// Owning project.
    pub project_id: i64,
}

/// Relations of `expenses`.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::ProjectId"
    )]
    /// The owning project.
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
