//! `lexi greeting` — preview the welcome message for a learner.

use anyhow::Result;
use lexi_runtime::build_greeting;

use crate::commands::parse_answers;
use crate::output;

pub async fn handle(name: &str, answers: &[String]) -> Result<()> {
    let profile = parse_answers(answers)?;
    output::text_block(&build_greeting(name, &profile));
    Ok(())
}
