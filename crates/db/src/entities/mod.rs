//! `SeaORM` entities for the pre-existing schema (see `sql/schema.sql`).

pub mod expenses;
pub mod projects;
