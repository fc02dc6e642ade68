//! `lexi learner` subcommands.

use anyhow::Result;

use crate::cli::LearnerAction;
use crate::output;

pub async fn handle(action: LearnerAction) -> Result<()> {
    match action {
        LearnerAction::Add { name } => add(&name).await,
        LearnerAction::List => list().await,
    }
}

async fn add(name: &str) -> Result<()> {
    let root = std::env::current_dir()?;

    if lexi_core::db::learner_exists(&root, name)? {
        output::dim(&format!("Learner '{name}' is already registered"));
        return Ok(());
    }

    let id = lexi_core::db::add_learner(&root, name)?;
    output::success(&format!("Registered learner '{name}' (id {id})"));
    Ok(())
}

async fn list() -> Result<()> {
    let root = std::env::current_dir()?;
    let learners = lexi_core::db::list_learners(&root)?;

    output::header("Registered learners");

    if learners.is_empty() {
        output::dim("No learners registered");
        return Ok(());
    }

    let mut table = output::table();
    output::table_header(&mut table, "Name", "Registered");

    let registered: Vec<String> = learners
        .iter()
        .map(|l| l.created_at.format("%Y-%m-%d %H:%M").to_string())
        .collect();
    let items: Vec<(&str, &str)> = learners
        .iter()
        .zip(registered.iter())
        .map(|(l, ts)| {
            output::table_row(&mut table, &l.name, ts);
            (l.name.as_str(), ts.as_str())
        })
        .collect();

    output::table_print(&table, &items);
    Ok(())
}
