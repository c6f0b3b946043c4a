//! Construction projects.

mod types;

pub use types::{Project, ProjectInput};
