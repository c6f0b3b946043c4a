//! Core domain logic for Sitebook.
//!
//! This crate contains domain types and receipt storage with ZERO web or
//! database dependencies.
//!
//! # Modules
//!
//! - `project` - Construction projects
//! - `expense` - Costs booked against a project
//! - `storage` - Object storage for receipt files
//! - `receipt` - Streaming receipt upload and linking to expenses

pub mod expense;
pub mod project;
pub mod receipt;
pub mod storage;
