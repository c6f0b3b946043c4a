//! Database seeder for Sitebook development and testing.
//!
//! Inserts a couple of demo projects with their expenses. Projects that
//! already exist by name are left untouched, so the seeder can be re-run.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use sea_orm::DatabaseConnection;
use sitebook_core::expense::ExpenseInput;
use sitebook_core::project::ProjectInput;
use sitebook_db::{ExpenseRepository, ProjectRepository};
use sitebook_shared::{AppConfig, IdGenerator};

/// Demo projects and their expenses as `(name, cost in cents)`.
const DEMO_PROJECTS: [(&str, &[(&str, i64)]); 2] = [
    (
        "Riverside Remodel",
        &[
            ("Framing lumber", 482_500),
            ("Drywall", 129_900),
            ("Electrical permit", 35_000),
        ],
    ),
    (
        "Maple Street Garage",
        &[("Concrete pour", 610_000), ("Roof trusses", 254_075)],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().context("Failed to load .env file")?;

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = Arc::new(
        sitebook_db::connect(&config.database)
            .await
            .context("Failed to connect to database")?,
    );

    let ids = IdGenerator::new(config.ids.strategy);

    println!("Seeding demo projects...");
    let mut inserted = 0;
    for (name, expenses) in DEMO_PROJECTS {
        if seed_project(&db, &ids, name, expenses).await? {
            inserted += 1;
        }
    }

    println!("Seeding complete! ({inserted} new projects)");
    Ok(())
}

/// Seeds one project with its expenses. Returns `false` if it already existed.
async fn seed_project(
    db: &Arc<DatabaseConnection>,
    ids: &IdGenerator,
    name: &str,
    expenses: &[(&str, i64)],
) -> anyhow::Result<bool> {
    let projects = ProjectRepository::new(Arc::clone(db));
    if projects.find_by_name(name).await?.is_some() {
        println!("  Project '{name}' already exists, skipping...");
        return Ok(false);
    }

    let project = ProjectInput {
        project_name: name.to_string(),
    }
    .into_project(ids.next_id());
    let project = projects
        .create(project)
        .await
        .with_context(|| format!("Failed to insert project {name}"))?;
    println!("  Created project: {} ({})", project.project_name, project.project_id);

    let repo = ExpenseRepository::new(Arc::clone(db));
    for (expense_name, expense_cost) in expenses {
        let expense = ExpenseInput {
            expense_name: (*expense_name).to_string(),
            expense_cost: *expense_cost,
            expense_receipt_url: String::new(),
            project_id: project.project_id,
        }
        .into_expense(ids.next_id());

        if let Err(e) = repo.create(expense).await {
            eprintln!("Failed to insert expense {expense_name}: {e}");
            continue;
        }
        println!("    Added expense: {expense_name}");
    }

    Ok(true)
}
