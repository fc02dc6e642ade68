//! Command dispatch.

pub mod greeting;
pub mod learner;
pub mod parse;
pub mod prompt;

use crate::cli::{Cli, Command};
use anyhow::Result;

/// Parse `KEY=VALUE` answer flags into a learner profile.
pub fn parse_answers(pairs: &[String]) -> Result<lexi_core::LearnerProfile> {
    let mut profile = lexi_core::LearnerProfile::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid answer '{pair}', expected KEY=VALUE"))?;
        profile = profile.with_answer(key.trim(), value.trim());
    }
    Ok(profile)
}

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse { file } => parse::handle(file.as_deref()).await,
        Command::Prompt {
            answer,
            plan,
            fingerprint,
        } => prompt::handle(&answer, plan.as_deref(), fingerprint).await,
        Command::Greeting { name, answer } => greeting::handle(&name, &answer).await,
        Command::Learner { action } => learner::handle(action).await,
    }
}
